//! 控制台能力定义与角色映射。
//!
//! 所有“仅管理员”的界面与操作在执行前都通过能力校验，而不是直接比较角色字符串。

use crate::data::UserRole;

/// 控制台能力。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ViewDashboard,
    ViewPermits,
    ExportPermits,
    ViewAdminStats,
    ManageUsers,
    ManageOrganizations,
    ManageObjects,
    ManagePermits,
}

/// 全部能力（管理员持有）。
pub const ALL_CAPABILITIES: &[Capability] = &[
    Capability::ViewDashboard,
    Capability::ViewPermits,
    Capability::ExportPermits,
    Capability::ViewAdminStats,
    Capability::ManageUsers,
    Capability::ManageOrganizations,
    Capability::ManageObjects,
    Capability::ManagePermits,
];

/// 普通用户持有的能力。
pub const USER_CAPABILITIES: &[Capability] = &[
    Capability::ViewDashboard,
    Capability::ViewPermits,
    Capability::ExportPermits,
];

/// 角色对应的能力集合。
pub fn capabilities_for(role: UserRole) -> &'static [Capability] {
    match role {
        UserRole::Admin => ALL_CAPABILITIES,
        UserRole::User => USER_CAPABILITIES,
    }
}

/// 判断角色是否持有某项能力。
pub fn role_has_capability(role: UserRole, capability: Capability) -> bool {
    capabilities_for(role).contains(&capability)
}
