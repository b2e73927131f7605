//! 展示格式化。
//!
//! 后端日期为 ISO 8601 字符串（可能带时间与时区，也可能只有日期），
//! 展示统一为 `dd.MM.yyyy`，缺失或无法解析时显示 `-`。

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use domain::{ObjectType, ResourceType, TcStatus, TcType, UserRole};

/// 缺失值占位符。
pub const MISSING: &str = "-";

/// 解析后端日期，取其日历日（按字符串自身的时区）。
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    parse_date_time(value).map(|date_time| date_time.date())
}

/// 解析后端日期时间；只有日期时取当天零点。
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.naive_local());
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(date_time);
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(date_time);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// `dd.MM.yyyy`，缺失或无法解析时为 `-`。
pub fn format_date(value: Option<&str>) -> String {
    value
        .and_then(parse_day)
        .map(|date| date.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// `dd.MM.yyyy HH:mm`，缺失或无法解析时为 `-`。
pub fn format_date_time(value: Option<&str>) -> String {
    value
        .and_then(parse_date_time)
        .map(|date_time| date_time.format("%d.%m.%Y %H:%M").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

/// 资源数量的单位：电力 kW，供水 m³/h。
pub fn resource_unit_label(resource_type: ResourceType) -> &'static str {
    match resource_type {
        ResourceType::Electricity => "кВт",
        ResourceType::Water => "м³/ч",
    }
}

/// 数量加单位，单位只由资源类型决定。
pub fn format_power(amount: f64, resource_type: ResourceType) -> String {
    format!("{amount} {}", resource_unit_label(resource_type))
}

pub fn status_label(status: TcStatus) -> &'static str {
    match status {
        TcStatus::Active => "Действует",
        TcStatus::Expired => "Истекло",
        TcStatus::Cancelled => "Отменено",
    }
}

pub fn tc_type_label(tc_type: TcType) -> &'static str {
    match tc_type {
        TcType::Permanent => "Постоянное",
        TcType::Temporary => "Временное",
    }
}

pub fn resource_label(resource_type: ResourceType) -> &'static str {
    match resource_type {
        ResourceType::Electricity => "Электроснабжение",
        ResourceType::Water => "Водоснабжение",
    }
}

pub fn role_label(role: UserRole) -> &'static str {
    match role {
        UserRole::Admin => "Админ",
        UserRole::User => "Пользователь",
    }
}

pub fn object_type_label(object_type: ObjectType) -> &'static str {
    match object_type {
        ObjectType::Substation => "Подстанция",
        ObjectType::Tp => "ТП",
        ObjectType::Kru => "КРУ",
        ObjectType::Unknown => MISSING,
    }
}

/// 仪表盘数值：整数原样输出，否则保留两位小数。
pub fn format_stat_value(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value}")
    } else {
        format!("{value:.2}")
    }
}
