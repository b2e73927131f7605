use crate::console::Console;
use crate::error::ConsoleError;
use crate::messages::NO_DATA;
use crate::render::{key_values, table};
use api_contract::TcListQuery;
use std::io::Write;
use tc_auth::DASHBOARD_PATH;
use tc_capacity::{AdminStats, aggregate, dashboard_cards};
use tc_normalize::format_stat_value;

/// 每个电力对象一张容量卡片。
pub async fn dashboard(console: &Console, out: &mut dyn Write) -> Result<(), ConsoleError> {
    console.enter(DASHBOARD_PATH)?;
    let resources = console.resources();
    let objects = resources.objects().await.map_err(ConsoleError::Load)?;
    let permits = resources
        .technical_conditions(TcListQuery::default())
        .await
        .map_err(ConsoleError::Load)?;

    let cards = dashboard_cards(&aggregate(&objects, &permits));
    if cards.is_empty() {
        writeln!(out, "{NO_DATA}")?;
        return Ok(());
    }
    let rows = cards.iter().map(|card| {
        let unit = card.unit.label();
        vec![
            card.title.clone(),
            format!("{} {unit}", format_stat_value(card.total)),
            format!("{} шт", card.total_tc),
            format!("{} {unit}", format_stat_value(card.free)),
            format!("{} {unit}", format_stat_value(card.issued)),
            format!("{}%", format_stat_value(card.usage_percent)),
        ]
    });
    let headers = [
        "Объект",
        "Общая мощность",
        "Всего ТУ",
        "Свободная мощность",
        "Выданная мощность",
        "Загрузка",
    ];
    writeln!(out, "{}", table(&headers, rows))?;
    Ok(())
}

/// 管理员概览。
pub async fn stats(console: &Console, out: &mut dyn Write) -> Result<(), ConsoleError> {
    console.enter("/admin")?;
    let resources = console.resources();
    let users = resources.users().await.map_err(ConsoleError::Load)?;
    let organizations = resources.organizations().await.map_err(ConsoleError::Load)?;
    let objects = resources.objects().await.map_err(ConsoleError::Load)?;
    let permits = resources
        .technical_conditions(TcListQuery::default())
        .await
        .map_err(ConsoleError::Load)?;

    let stats = AdminStats::compute(&users, &organizations, &objects, &permits);
    let rows = [
        (
            "Всего пользователей",
            format!(
                "{} (админы: {}, пользователи: {})",
                stats.total_users, stats.admin_users, stats.regular_users
            ),
        ),
        ("Организации", stats.total_organizations.to_string()),
        (
            "Объекты",
            format!(
                "{} ({} ПС • {} ТП • {} КРУ)",
                stats.total_objects, stats.substations, stats.tp, stats.kru
            ),
        ),
        ("Постоянные ТУ", stats.permanent_tc.to_string()),
        ("Временные ТУ", stats.temporary_tc.to_string()),
        ("Активные ТУ", stats.active_tc.to_string()),
        ("Истекшие ТУ", stats.expired_tc.to_string()),
        (
            "Выдано мощности",
            format!(
                "{:.2} МВт ({:.0} кВт)",
                stats.total_power_issued_mw, stats.total_power_issued_kw
            ),
        ),
    ];
    writeln!(out, "{}", key_values(&rows))?;
    Ok(())
}
