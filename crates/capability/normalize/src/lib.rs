//! 单位换算与展示格式化。
//!
//! - [`units`]：MW ⇄ kW 换算、编辑表单的单位推断
//! - [`format`]：日期、功率、状态等展示文本

pub mod format;
pub mod units;

pub use format::{
    MISSING, format_date, format_date_time, format_power, format_stat_value, object_type_label,
    parse_date_time, parse_day, resource_label, resource_unit_label, role_label, status_label,
    tc_type_label,
};
pub use units::{
    CapacityPair, KW_PER_MW, PowerUnit, conversion_hint, infer_display_unit, kw_from_mw, mw_from_kw,
};
