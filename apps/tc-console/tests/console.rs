use chrono::{DateTime, Duration, TimeZone, Utc};
use clap::Parser;
use domain::{
    EntityId, ObjectType, Organization, PowerObject, ResourceType, TcStatus, TcType,
    TechnicalCondition, User, UserRole,
};
use std::path::Path;
use std::sync::Arc;
use tc_auth::{InMemorySessionStore, Session};
use tc_client::{InMemoryBackend, ObjectApi};
use tc_config::AppConfig;
use tc_console::{Cli, Console, ConsoleError, commands};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0)
        .single()
        .expect("valid time")
}

fn config(export_dir: &Path) -> AppConfig {
    AppConfig {
        api_base_url: "http://localhost:8080/api".to_string(),
        session_file: export_dir.join("session.json"),
        session_ttl_hours: 24,
        export_dir: export_dir.to_path_buf(),
    }
}

fn permit(
    id: EntityId,
    organization: &str,
    tc_type: TcType,
    amount: f64,
    issue_date: &str,
) -> TechnicalCondition {
    TechnicalCondition {
        id,
        organization_id: 2,
        organization_name: Some(organization.to_string()),
        object_id: Some(3),
        object_name: Some("ПС Северная".to_string()),
        tc_type,
        resource_type: ResourceType::Electricity,
        tc_number: format!("ТУ-{id}"),
        power_amount: amount,
        issue_date: Some(issue_date.to_string()),
        expiry_date: None,
        status: TcStatus::Active,
        document_link: None,
        notes: None,
        created_by: None,
        created_at: None,
        updated_at: None,
    }
}

fn seeded_backend() -> Arc<InMemoryBackend> {
    let backend = InMemoryBackend::with_default_admin();
    backend.seed_user(
        User {
            id: 0,
            username: "operator".to_string(),
            email: "operator@example.com".to_string(),
            role: UserRole::User,
            organization_name: None,
            created_at: None,
            updated_at: None,
        },
        "Operator1",
    );
    backend.seed_organization(Organization {
        id: 2,
        name: "ТОО Альфа".to_string(),
        bin: None,
        address: None,
        contact_person: None,
        contact_phone: None,
        created_at: None,
        updated_at: None,
    });
    backend.seed_object(PowerObject {
        id: 3,
        name: "ПС Северная".to_string(),
        object_type: ObjectType::Substation,
        max_power_mw: 10.0,
        max_power_kw: 10_000.0,
        description: None,
        created_at: None,
        updated_at: None,
    });
    backend.seed_permit(permit(10, "ТОО Альфа", TcType::Permanent, 2500.0, "2024-03-05"));
    backend.seed_permit(permit(11, "ИП Бета", TcType::Permanent, 500.0, "2024-06-01"));
    backend.seed_permit(permit(12, "ТОО Альфа", TcType::Temporary, 100.0, "2024-07-01"));
    Arc::new(backend)
}

fn console(backend: Arc<InMemoryBackend>, export_dir: &Path) -> Console {
    let session = Session::init(Arc::new(InMemorySessionStore::new()), Duration::hours(24))
        .expect("session");
    Console::new(config(export_dir), session, backend, now())
}

async fn run(console: &mut Console, args: &[&str]) -> Result<String, ConsoleError> {
    let cli = Cli::try_parse_from(std::iter::once("tc-console").chain(args.iter().copied()))
        .expect("valid command line");
    let mut out = Vec::new();
    commands::run(cli.command, console, &mut out).await?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

async fn logged_in(backend: Arc<InMemoryBackend>, export_dir: &Path, user: &str) -> Console {
    let mut console = console(backend, export_dir);
    let password = if user == "admin" { "admin123" } else { "Operator1" };
    run(
        &mut console,
        &["login", "--username", user, "--password", password],
    )
    .await
    .expect("login");
    console
}

#[tokio::test]
async fn login_then_whoami_and_logout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut console = console(seeded_backend(), dir.path());

    let output = run(
        &mut console,
        &["login", "--username", "admin", "--password", "admin123"],
    )
    .await
    .expect("login");
    assert!(output.contains("Вход выполнен: admin (Админ)"));

    let output = run(&mut console, &["whoami"]).await.expect("whoami");
    assert!(output.contains("admin <admin@example.com>"));
    assert!(output.contains("Сессия до: 17.10.2026 09:00"));

    run(&mut console, &["logout"]).await.expect("logout");
    let err = run(&mut console, &["dashboard"]).await.expect_err("logged out");
    assert!(matches!(err, ConsoleError::Redirected("/login")));
}

#[tokio::test]
async fn wrong_password_reports_backend_message() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut console = console(seeded_backend(), dir.path());
    let err = run(
        &mut console,
        &["login", "--username", "admin", "--password", "nope"],
    )
    .await
    .expect_err("rejected");
    assert_eq!(err.user_message(), "Неверное имя пользователя или пароль");
    assert_eq!(err.exit_code(), 1);
    assert!(!console.session().is_authenticated());
}

#[tokio::test]
async fn unauthenticated_dashboard_redirects_to_login() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut console = console(seeded_backend(), dir.path());
    let err = run(&mut console, &["dashboard"]).await.expect_err("redirect");
    assert!(matches!(err, ConsoleError::Redirected("/login")));
    assert_eq!(err.exit_code(), 2);
}

#[tokio::test]
async fn logged_in_user_is_sent_away_from_login() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut console = logged_in(seeded_backend(), dir.path(), "operator").await;
    let err = run(
        &mut console,
        &["login", "--username", "admin", "--password", "admin123"],
    )
    .await
    .expect_err("redirect");
    assert!(matches!(err, ConsoleError::Redirected("/dashboard")));
}

#[tokio::test]
async fn regular_user_cannot_open_admin_screens() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut console = logged_in(seeded_backend(), dir.path(), "operator").await;
    for args in [
        &["users", "list"][..],
        &["organizations", "list"][..],
        &["objects", "list"][..],
        &["stats"][..],
        &["permits", "search"][..],
    ] {
        let err = run(&mut console, args).await.expect_err("redirect");
        assert!(matches!(err, ConsoleError::Redirected("/dashboard")), "{args:?}");
    }
    let output = run(&mut console, &["permits", "list"]).await.expect("list");
    assert!(output.contains("Найдено: 2"));
}

#[tokio::test]
async fn dashboard_shows_capacity_in_megawatts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut console = logged_in(seeded_backend(), dir.path(), "operator").await;
    let output = run(&mut console, &["dashboard"]).await.expect("dashboard");
    assert!(output.contains("⚡ ПС Северная"));
    assert!(output.contains("10 МВт"));
    assert!(output.contains("6.90 МВт"));
    assert!(output.contains("3.10 МВт"));
    assert!(output.contains("3 шт"));
}

#[tokio::test]
async fn permit_list_applies_client_filters() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut console = logged_in(seeded_backend(), dir.path(), "admin").await;
    let output = run(
        &mut console,
        &["permits", "list", "--organization", "альфа", "--from", "2024-03-05"],
    )
    .await
    .expect("list");
    assert!(output.contains("ТУ-10"));
    assert!(!output.contains("ТУ-11"));
    assert!(!output.contains("ТУ-12"));
    assert!(output.contains("2500 кВт"));
    assert!(output.contains("05.03.2024"));
    assert!(output.contains("Найдено: 1"));

    let output = run(&mut console, &["permits", "list", "--organization", "гамма"])
        .await
        .expect("empty list");
    assert!(output.contains("Нет данных для отображения"));
    assert!(output.contains("Найдено: 0"));
}

#[tokio::test]
async fn export_writes_dated_workbook() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut console = logged_in(seeded_backend(), dir.path(), "admin").await;

    let output = run(&mut console, &["permits", "export"]).await.expect("export");
    let expected = dir.path().join("tc_electricity_permanent_16-10-2026.xlsx");
    assert!(output.contains("Файл сохранён"));
    assert!(expected.exists());

    run(&mut console, &["permits", "export", "--all"])
        .await
        .expect("export all");
    assert!(dir.path().join("tc_electricity_all_16-10-2026.xlsx").exists());
    assert!(!console.exporter().is_exporting());
}

#[tokio::test]
async fn invalid_object_is_rejected_before_request() {
    let dir = tempfile::tempdir().expect("tempdir");
    let backend = seeded_backend();
    let mut console = logged_in(backend.clone(), dir.path(), "admin").await;

    let err = run(
        &mut console,
        &["objects", "create", "--name", "Т", "--value", "0"],
    )
    .await
    .expect_err("invalid");
    assert!(matches!(err, ConsoleError::Validation(_)));
    let message = err.user_message();
    assert!(message.contains("Название должно содержать минимум 2 символа"));
    assert!(message.contains("Мощность должна быть больше 0"));
    assert_eq!(backend.list_objects().await.expect("objects").len(), 1);
}

#[tokio::test]
async fn object_update_converts_chosen_unit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let backend = seeded_backend();
    let mut console = logged_in(backend.clone(), dir.path(), "admin").await;

    let output = run(
        &mut console,
        &["objects", "update", "3", "--unit", "kw", "--value", "630"],
    )
    .await
    .expect("update");
    assert!(output.contains("630 кВт = 0.630 МВт"));
    let object = backend.get_object(3).await.expect("object");
    assert_eq!(object.max_power_kw, 630.0);
    assert!((object.max_power_mw - 0.63).abs() < 1e-12);
    assert_eq!(object.name, "ПС Северная");
}

#[tokio::test]
async fn switching_object_unit_alone_keeps_capacity() {
    let dir = tempfile::tempdir().expect("tempdir");
    let backend = seeded_backend();
    let mut console = logged_in(backend.clone(), dir.path(), "admin").await;

    let output = run(&mut console, &["objects", "update", "3", "--unit", "kw"])
        .await
        .expect("update");
    assert!(output.contains("10000 кВт = 10.000 МВт"));
    let object = backend.get_object(3).await.expect("object");
    assert_eq!(object.max_power_kw, 10_000.0);
    assert_eq!(object.max_power_mw, 10.0);
}

#[tokio::test]
async fn duplicate_user_surfaces_backend_message() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut console = logged_in(seeded_backend(), dir.path(), "admin").await;
    let err = run(
        &mut console,
        &[
            "users",
            "create",
            "--username",
            "operator",
            "--email",
            "op2@example.com",
            "--password",
            "Secret123",
        ],
    )
    .await
    .expect_err("duplicate");
    assert_eq!(err.user_message(), "Пользователь уже существует");

    let output = run(&mut console, &["users", "list", "--search", "OPER"])
        .await
        .expect("list");
    assert!(output.contains("operator@example.com"));
    assert!(!output.contains("admin@example.com"));
}
