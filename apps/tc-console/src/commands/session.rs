use crate::cli::LoginArgs;
use crate::console::Console;
use crate::error::ConsoleError;
use std::io::Write;
use tc_auth::LOGIN_PATH;
use tc_normalize::{format_date_time, role_label};

pub async fn login(
    console: &mut Console,
    args: LoginArgs,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    console.enter(LOGIN_PATH)?;
    console.login(&args.username, &args.password).await?;
    if let Some(user) = console.session().user() {
        writeln!(
            out,
            "Вход выполнен: {} ({})",
            user.username,
            role_label(user.role)
        )?;
    }
    Ok(())
}

pub fn logout(console: &mut Console, out: &mut dyn Write) -> Result<(), ConsoleError> {
    console.logout()?;
    writeln!(out, "Выход выполнен")?;
    Ok(())
}

pub fn whoami(console: &Console, out: &mut dyn Write) -> Result<(), ConsoleError> {
    let session = console.session();
    let Some(user) = session.user() else {
        writeln!(out, "Вход не выполнен")?;
        return Ok(());
    };
    writeln!(out, "{} <{}>", user.username, user.email)?;
    writeln!(out, "Роль: {}", role_label(user.role))?;
    if let Some(organization) = user.organization_name.as_deref() {
        writeln!(out, "Организация: {organization}")?;
    }
    let expires_at = session.cookie_expires_at().map(|at| at.to_rfc3339());
    writeln!(
        out,
        "Сессия до: {}",
        format_date_time(expires_at.as_deref())
    )?;
    Ok(())
}
