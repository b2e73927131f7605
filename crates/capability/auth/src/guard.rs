//! 路由守卫。
//!
//! 先按 cookie 决定能否进入受保护路径，再按路径所需能力做二次校验。
//! 权限不足时静默跳转，不报错。

use crate::session::{Session, has_capability};
use chrono::{DateTime, Utc};
use domain::Capability;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

const PUBLIC_PATHS: &[&str] = &[LOGIN_PATH];
const PASS_THROUGH_PREFIXES: &[&str] = &["/api", "/_next"];

/// 路径前缀与所需能力，按前缀长度从长到短匹配。
const ROUTE_CAPABILITIES: &[(&str, Capability)] = &[
    ("/admin/users", Capability::ManageUsers),
    ("/admin/organizations", Capability::ManageOrganizations),
    ("/admin/objects", Capability::ManageObjects),
    ("/admin/tc-management", Capability::ManagePermits),
    ("/admin", Capability::ViewAdminStats),
    ("/dashboard", Capability::ViewDashboard),
    ("/electricity", Capability::ViewPermits),
    ("/water", Capability::ViewPermits),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Proceed,
    Redirect(&'static str),
}

/// 只看 cookie 的前置守卫。
pub fn guard(path: &str, has_cookie: bool) -> RouteDecision {
    if PASS_THROUGH_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
        || path == "/favicon.ico"
    {
        return RouteDecision::Proceed;
    }
    let is_public = PUBLIC_PATHS.contains(&path);
    match (has_cookie, is_public) {
        (false, false) => RouteDecision::Redirect(LOGIN_PATH),
        (true, true) => RouteDecision::Redirect(DASHBOARD_PATH),
        _ => RouteDecision::Proceed,
    }
}

/// 路径所需能力；公开路径与未登记路径返回 `None`。
pub fn required_capability(path: &str) -> Option<Capability> {
    ROUTE_CAPABILITIES
        .iter()
        .find(|(prefix, _)| matches_prefix(path, prefix))
        .map(|(_, capability)| *capability)
}

fn matches_prefix(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// 完整守卫：cookie 校验后再做能力校验。
pub fn authorize(path: &str, session: &Session, now: DateTime<Utc>) -> RouteDecision {
    let decision = guard(path, session.has_cookie(now));
    if decision != RouteDecision::Proceed {
        return decision;
    }
    match required_capability(path) {
        Some(capability) if !has_capability(session, capability) => {
            tracing::debug!(path, ?capability, "capability missing, redirecting");
            if path == DASHBOARD_PATH {
                RouteDecision::Redirect(LOGIN_PATH)
            } else {
                RouteDecision::Redirect(DASHBOARD_PATH)
            }
        }
        _ => RouteDecision::Proceed,
    }
}
