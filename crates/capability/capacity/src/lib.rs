//! 容量聚合能力
//!
//! - `aggregate`：每个电力对象的已发放容量、剩余容量、使用率与技术条件数量
//! - `dashboard_cards`：按对象类型的展示单位生成仪表盘卡片
//! - `AdminStats`：管理员概览统计
//!
//! 全部是输入集合的纯函数，每次调用完整重算。

mod aggregate;
mod dashboard;
mod stats;

pub use aggregate::{ObjectCapacity, aggregate};
pub use dashboard::{DashboardCard, TypeDisplay, dashboard_cards, type_display};
pub use stats::AdminStats;
