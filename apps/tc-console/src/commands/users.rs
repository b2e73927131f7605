use crate::cli::{DeleteArgs, SearchArgs, UserCreateArgs, UserUpdateArgs, UsersCommand};
use crate::console::Console;
use crate::error::ConsoleError;
use crate::messages::{CREATE_USER_FAILED, GENERIC_ERROR, NO_DATA, UPDATE_USER_FAILED};
use crate::render::{optional, table};
use std::io::Write;
use tc_filter::search_users;
use tc_forms::{UserEditForm, UserForm};
use tc_normalize::{format_date, role_label};

const USERS_PATH: &str = "/admin/users";

pub async fn run(
    command: UsersCommand,
    console: &mut Console,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    console.enter(USERS_PATH)?;
    match command {
        UsersCommand::List(args) => list(console, args, out).await,
        UsersCommand::Create(args) => create(console, args, out).await,
        UsersCommand::Update(args) => update(console, args, out).await,
        UsersCommand::Delete(args) => delete(console, args, out).await,
    }
}

async fn list(console: &Console, args: SearchArgs, out: &mut dyn Write) -> Result<(), ConsoleError> {
    let users = console.resources().users().await.map_err(ConsoleError::Load)?;
    let found = search_users(&users, &args.search);
    if found.is_empty() {
        writeln!(out, "{NO_DATA}")?;
        return Ok(());
    }
    let headers = ["ID", "Имя пользователя", "Email", "Роль", "Организация", "Создан"];
    let rows = found.iter().map(|user| {
        vec![
            user.id.to_string(),
            user.username.clone(),
            user.email.clone(),
            role_label(user.role).to_string(),
            optional(user.organization_name.as_deref()),
            format_date(user.created_at.as_deref()),
        ]
    });
    writeln!(out, "{}", table(&headers, rows))?;
    Ok(())
}

async fn create(
    console: &Console,
    args: UserCreateArgs,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let form = UserForm {
        username: args.username,
        email: args.email,
        password: args.password,
        role: args.role,
        organization_name: args.organization.unwrap_or_default(),
    };
    let request = form.validate()?;
    let user = console
        .resources()
        .create_user(&request)
        .await
        .map_err(ConsoleError::request(CREATE_USER_FAILED))?;
    writeln!(out, "Пользователь создан (ID {})", user.id)?;
    Ok(())
}

async fn update(
    console: &Console,
    args: UserUpdateArgs,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let existing = console
        .resources()
        .user(args.id)
        .await
        .map_err(ConsoleError::Load)?;
    let mut form = UserEditForm::from_user(&existing);
    if let Some(username) = args.username {
        form.username = username;
    }
    if let Some(email) = args.email {
        form.email = email;
    }
    if let Some(password) = args.password {
        form.password = password;
    }
    if let Some(role) = args.role {
        form.role = role;
    }
    if let Some(organization) = args.organization {
        form.organization_name = organization;
    }
    let request = form.validate()?;
    console
        .resources()
        .update_user(args.id, &request)
        .await
        .map_err(ConsoleError::request(UPDATE_USER_FAILED))?;
    writeln!(out, "Пользователь обновлён")?;
    Ok(())
}

async fn delete(console: &Console, args: DeleteArgs, out: &mut dyn Write) -> Result<(), ConsoleError> {
    console
        .resources()
        .delete_user(args.id)
        .await
        .map_err(ConsoleError::request(GENERIC_ERROR))?;
    writeln!(out, "Пользователь удалён")?;
    Ok(())
}
