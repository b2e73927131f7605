//! 命令行定义。

use clap::{Args, Parser, Subcommand};
use domain::{EntityId, ObjectType, ResourceType, TcType, UserRole};
use tc_filter::StatusFilter;
use tc_normalize::PowerUnit;

#[derive(Debug, Parser)]
#[command(
    name = "tc-console",
    about = "Консоль учёта технических условий",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Вход в систему
    Login(LoginArgs),
    /// Выход из системы
    Logout,
    /// Текущий пользователь
    Whoami,
    /// Загрузка объектов
    Dashboard,
    /// Статистика администратора
    Stats,
    /// Технические условия
    #[command(subcommand)]
    Permits(PermitsCommand),
    /// Пользователи
    #[command(subcommand)]
    Users(UsersCommand),
    /// Организации
    #[command(subcommand)]
    Organizations(OrganizationsCommand),
    /// Объекты
    #[command(subcommand)]
    Objects(ObjectsCommand),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Subcommand)]
pub enum PermitsCommand {
    List(PermitListArgs),
    Export(PermitExportArgs),
    Search(PermitSearchArgs),
    Create(PermitCreateArgs),
    Update(PermitUpdateArgs),
    Delete(DeleteArgs),
}

#[derive(Debug, Clone, Args)]
pub struct PermitListArgs {
    #[arg(long, default_value = "electricity")]
    pub resource: ResourceType,
    #[arg(long, default_value = "permanent")]
    pub kind: TcType,
    #[arg(long, default_value = "all")]
    pub status: StatusFilter,
    #[arg(long)]
    pub organization: Option<String>,
    #[arg(long)]
    pub object: Option<String>,
    /// Дата выдачи с (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Дата выдачи по (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct PermitExportArgs {
    #[command(flatten)]
    pub list: PermitListArgs,
    /// Выгрузить все ТУ ресурса без фильтров
    #[arg(long)]
    pub all: bool,
}

#[derive(Debug, Clone, Args)]
pub struct PermitSearchArgs {
    #[arg(long, default_value = "")]
    pub term: String,
    #[arg(long)]
    pub resource: Option<ResourceType>,
    #[arg(long)]
    pub kind: Option<TcType>,
}

#[derive(Debug, Clone, Args)]
pub struct PermitCreateArgs {
    #[arg(long)]
    pub organization_id: EntityId,
    #[arg(long)]
    pub object_id: EntityId,
    #[arg(long, default_value = "permanent")]
    pub kind: TcType,
    #[arg(long, default_value = "electricity")]
    pub resource: ResourceType,
    #[arg(long)]
    pub number: String,
    #[arg(long)]
    pub amount: f64,
    #[arg(long)]
    pub issue_date: String,
    #[arg(long)]
    pub expiry_date: Option<String>,
    #[arg(long)]
    pub document_link: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct PermitUpdateArgs {
    pub id: EntityId,
    #[arg(long)]
    pub organization_id: Option<EntityId>,
    #[arg(long)]
    pub object_id: Option<EntityId>,
    #[arg(long)]
    pub kind: Option<TcType>,
    #[arg(long)]
    pub resource: Option<ResourceType>,
    #[arg(long)]
    pub number: Option<String>,
    #[arg(long)]
    pub amount: Option<f64>,
    #[arg(long)]
    pub issue_date: Option<String>,
    #[arg(long)]
    pub expiry_date: Option<String>,
    #[arg(long)]
    pub document_link: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    pub id: EntityId,
}

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    #[arg(long, default_value = "")]
    pub search: String,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    List(SearchArgs),
    Create(UserCreateArgs),
    Update(UserUpdateArgs),
    Delete(DeleteArgs),
}

#[derive(Debug, Clone, Args)]
pub struct UserCreateArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long, default_value = "user")]
    pub role: UserRole,
    #[arg(long)]
    pub organization: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct UserUpdateArgs {
    pub id: EntityId,
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Пустое значение оставляет пароль без изменений
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub role: Option<UserRole>,
    #[arg(long)]
    pub organization: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum OrganizationsCommand {
    List(SearchArgs),
    Create(OrganizationArgs),
    Update(OrganizationUpdateArgs),
    Delete(DeleteArgs),
}

#[derive(Debug, Clone, Args)]
pub struct OrganizationArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub bin: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub contact_person: Option<String>,
    #[arg(long)]
    pub contact_phone: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct OrganizationUpdateArgs {
    pub id: EntityId,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub bin: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub contact_person: Option<String>,
    #[arg(long)]
    pub contact_phone: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ObjectsCommand {
    List(SearchArgs),
    Create(ObjectCreateArgs),
    Update(ObjectUpdateArgs),
    Delete(DeleteArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ObjectCreateArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long = "type", default_value = "substation")]
    pub object_type: ObjectType,
    #[arg(long, default_value = "mw")]
    pub unit: PowerUnit,
    #[arg(long)]
    pub value: f64,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ObjectUpdateArgs {
    pub id: EntityId,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long = "type")]
    pub object_type: Option<ObjectType>,
    /// Без значения единица определяется по сохранённой мощности
    #[arg(long)]
    pub unit: Option<PowerUnit>,
    #[arg(long)]
    pub value: Option<f64>,
    #[arg(long)]
    pub description: Option<String>,
}
