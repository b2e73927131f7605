//! 仪表盘卡片。

use crate::aggregate::ObjectCapacity;
use domain::ObjectType;
use tc_normalize::PowerUnit;

/// 对象类型的展示配置。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDisplay {
    pub icon: &'static str,
    pub unit: PowerUnit,
}

/// 已知类型的展示配置；未知类型返回 `None`，不渲染。
pub fn type_display(object_type: ObjectType) -> Option<TypeDisplay> {
    match object_type {
        ObjectType::Substation => Some(TypeDisplay {
            icon: "⚡",
            unit: PowerUnit::Mw,
        }),
        ObjectType::Tp => Some(TypeDisplay {
            icon: "🔧",
            unit: PowerUnit::Kw,
        }),
        ObjectType::Kru => Some(TypeDisplay {
            icon: "⚙️",
            unit: PowerUnit::Kw,
        }),
        ObjectType::Unknown => None,
    }
}

/// 一张对象卡片的数值，单位由对象类型决定。
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCard {
    pub object_id: domain::EntityId,
    pub title: String,
    pub unit: PowerUnit,
    pub total: f64,
    pub free: f64,
    pub issued: f64,
    pub total_tc: usize,
    pub usage_percent: f64,
}

pub fn dashboard_cards(stats: &[ObjectCapacity]) -> Vec<DashboardCard> {
    stats
        .iter()
        .filter_map(|entry| {
            let Some(display) = type_display(entry.object.object_type) else {
                tracing::debug!(object_id = entry.object.id, "skipping object of unknown type");
                return None;
            };
            let (total, free, issued) = match display.unit {
                PowerUnit::Mw => (
                    entry.object.max_power_mw,
                    entry.free_power_mw,
                    entry.issued_power_mw,
                ),
                PowerUnit::Kw => (
                    entry.object.max_power_kw,
                    entry.free_power_kw,
                    entry.issued_power_kw,
                ),
            };
            Some(DashboardCard {
                object_id: entry.object.id,
                title: format!("{} {}", display.icon, entry.object.name),
                unit: display.unit,
                total,
                free,
                issued,
                total_tc: entry.total_tc,
                usage_percent: entry.usage_percent,
            })
        })
        .collect()
}
