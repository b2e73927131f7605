use crate::cli::{
    DeleteArgs, PermitCreateArgs, PermitExportArgs, PermitListArgs, PermitSearchArgs,
    PermitUpdateArgs, PermitsCommand,
};
use crate::console::Console;
use crate::error::ConsoleError;
use crate::messages::{
    CREATE_PERMIT_FAILED, DELETE_PERMIT_FAILED, NO_DATA, PERMIT_CREATED, PERMIT_DELETED,
    PERMIT_UPDATED, UPDATE_PERMIT_FAILED,
};
use crate::render::{optional, table};
use api_contract::TcListQuery;
use domain::{Capability, ResourceType, TcType, TechnicalCondition};
use std::io::Write;
use tc_export::{ExportScope, export_file_name};
use tc_filter::{PermitFilter, filter_permits, search_permits};
use tc_forms::TechnicalConditionForm;
use tc_normalize::{format_date, format_power, resource_label, status_label, tc_type_label};

const MANAGEMENT_PATH: &str = "/admin/tc-management";

pub async fn run(
    command: PermitsCommand,
    console: &mut Console,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    match command {
        PermitsCommand::List(args) => list(console, args, out).await,
        PermitsCommand::Export(args) => export(console, args, out).await,
        PermitsCommand::Search(args) => search(console, args, out).await,
        PermitsCommand::Create(args) => create(console, args, out).await,
        PermitsCommand::Update(args) => update(console, args, out).await,
        PermitsCommand::Delete(args) => delete(console, args, out).await,
    }
}

fn resource_path(resource: ResourceType) -> &'static str {
    match resource {
        ResourceType::Electricity => "/electricity",
        ResourceType::Water => "/water",
    }
}

impl PermitListArgs {
    fn filter(&self) -> PermitFilter {
        PermitFilter {
            status: self.status,
            organization: self.organization.clone().unwrap_or_default(),
            object: self.object.clone().unwrap_or_default(),
            issue_date_from: self.from.clone().unwrap_or_default(),
            issue_date_to: self.to.clone().unwrap_or_default(),
        }
    }
}

async fn load(
    console: &Console,
    resource_type: Option<ResourceType>,
    tc_type: Option<TcType>,
) -> Result<Vec<TechnicalCondition>, ConsoleError> {
    console
        .resources()
        .technical_conditions(TcListQuery::new(resource_type, tc_type))
        .await
        .map_err(ConsoleError::Load)
}

/// 资源页列表：服务端按资源与类型过滤，客户端再按状态、组织、对象、日期过滤。
async fn list(
    console: &Console,
    args: PermitListArgs,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    console.enter(resource_path(args.resource))?;
    let permits = load(console, Some(args.resource), Some(args.kind)).await?;
    let filtered = filter_permits(&permits, &args.filter());

    writeln!(
        out,
        "{} / {}",
        resource_label(args.resource),
        tc_type_label(args.kind)
    )?;
    if filtered.is_empty() {
        writeln!(out, "{NO_DATA}")?;
    } else {
        let last_column = match args.kind {
            TcType::Temporary => "Дата окончания",
            TcType::Permanent => "Статус",
        };
        let headers = [
            "Наименование организации",
            "Выданая мощность",
            "Объект",
            "Номер ТУ",
            "Дата выдачи",
            last_column,
        ];
        let rows = filtered.iter().map(|permit| {
            vec![
                optional(permit.organization_name.as_deref()),
                format_power(permit.power_amount, args.resource),
                optional(permit.object_name.as_deref()),
                permit.tc_number.clone(),
                format_date(permit.issue_date.as_deref()),
                match args.kind {
                    TcType::Temporary => format_date(permit.expiry_date.as_deref()),
                    TcType::Permanent => status_label(permit.status).to_string(),
                },
            ]
        });
        writeln!(out, "{}", table(&headers, rows))?;
    }
    writeln!(out, "Найдено: {}", filtered.len())?;
    Ok(())
}

async fn export(
    console: &Console,
    args: PermitExportArgs,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let resource = args.list.resource;
    console.enter(resource_path(resource))?;
    console.require(Capability::ExportPermits)?;

    let today = console.now().date_naive();
    let dir = console.config().export_dir.as_path();
    let path = if args.all {
        let permits = load(console, Some(resource), None).await?;
        let file_name = export_file_name(resource, ExportScope::All, today);
        console.exporter().export_to_dir(dir, &file_name, &permits)?
    } else {
        let permits = load(console, Some(resource), Some(args.list.kind)).await?;
        let filtered = filter_permits(&permits, &args.list.filter());
        let file_name = export_file_name(resource, ExportScope::Kind(args.list.kind), today);
        console
            .exporter()
            .export_to_dir(dir, &file_name, filtered.iter().copied())?
    };
    writeln!(out, "Файл сохранён: {}", path.display())?;
    Ok(())
}

/// 管理页：按组织名称或编号搜索。
async fn search(
    console: &Console,
    args: PermitSearchArgs,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    console.enter(MANAGEMENT_PATH)?;
    let permits = load(console, args.resource, args.kind).await?;
    let found = search_permits(&permits, &args.term);
    if found.is_empty() {
        writeln!(out, "{NO_DATA}")?;
        return Ok(());
    }
    let headers = [
        "ID",
        "Номер ТУ",
        "Организация",
        "Объект",
        "Тип",
        "Ресурс",
        "Мощность",
        "Дата выдачи",
        "Статус",
    ];
    let rows = found.iter().map(|permit| {
        vec![
            permit.id.to_string(),
            permit.tc_number.clone(),
            optional(permit.organization_name.as_deref()),
            optional(permit.object_name.as_deref()),
            tc_type_label(permit.tc_type).to_string(),
            resource_label(permit.resource_type).to_string(),
            format_power(permit.power_amount, permit.resource_type),
            format_date(permit.issue_date.as_deref()),
            status_label(permit.status).to_string(),
        ]
    });
    writeln!(out, "{}", table(&headers, rows))?;
    Ok(())
}

async fn create(
    console: &Console,
    args: PermitCreateArgs,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    console.enter(MANAGEMENT_PATH)?;
    let form = TechnicalConditionForm {
        organization_id: Some(args.organization_id),
        object_id: Some(args.object_id),
        tc_number: args.number,
        power_amount: args.amount,
        issue_date: args.issue_date,
        expiry_date: args.expiry_date.unwrap_or_default(),
        document_link: args.document_link.unwrap_or_default(),
        notes: args.notes.unwrap_or_default(),
        ..TechnicalConditionForm::new(args.kind, args.resource)
    };
    let request = form.validate()?;
    let created = console
        .resources()
        .create_technical_condition(&request)
        .await
        .map_err(ConsoleError::request(CREATE_PERMIT_FAILED))?;
    writeln!(out, "{PERMIT_CREATED} (ID {})", created.id)?;
    Ok(())
}

async fn update(
    console: &Console,
    args: PermitUpdateArgs,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    console.enter(MANAGEMENT_PATH)?;
    let existing = console
        .resources()
        .technical_condition(args.id)
        .await
        .map_err(ConsoleError::Load)?;

    let mut form = TechnicalConditionForm::from_permit(&existing);
    if let Some(organization_id) = args.organization_id {
        form.organization_id = Some(organization_id);
    }
    if let Some(object_id) = args.object_id {
        form.object_id = Some(object_id);
    }
    if let Some(kind) = args.kind {
        form.tc_type = kind;
    }
    if let Some(resource) = args.resource {
        form.resource_type = resource;
    }
    if let Some(number) = args.number {
        form.tc_number = number;
    }
    if let Some(amount) = args.amount {
        form.power_amount = amount;
    }
    if let Some(issue_date) = args.issue_date {
        form.issue_date = issue_date;
    }
    if let Some(expiry_date) = args.expiry_date {
        form.expiry_date = expiry_date;
    }
    if let Some(document_link) = args.document_link {
        form.document_link = document_link;
    }
    if let Some(notes) = args.notes {
        form.notes = notes;
    }

    let request = form.validate()?;
    console
        .resources()
        .update_technical_condition(args.id, &request)
        .await
        .map_err(ConsoleError::request(UPDATE_PERMIT_FAILED))?;
    writeln!(out, "{PERMIT_UPDATED}")?;
    Ok(())
}

async fn delete(
    console: &Console,
    args: DeleteArgs,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    console.enter(MANAGEMENT_PATH)?;
    console
        .resources()
        .delete_technical_condition(args.id)
        .await
        .map_err(ConsoleError::request(DELETE_PERMIT_FAILED))?;
    writeln!(out, "{PERMIT_DELETED}")?;
    Ok(())
}
