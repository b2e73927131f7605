use chrono::{Duration, TimeZone, Utc};
use domain::{Capability, User, UserRole};
use std::sync::Arc;
use tc_auth::{
    DASHBOARD_PATH, InMemorySessionStore, LOGIN_PATH, PersistedSession, RouteDecision, Session,
    authorize, guard, required_capability,
};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0)
        .single()
        .expect("valid time")
}

fn session_for(role: UserRole) -> Session {
    let user = User {
        id: 7,
        username: "operator".to_string(),
        email: "operator@example.com".to_string(),
        role,
        organization_name: None,
        created_at: None,
        updated_at: None,
    };
    let store = InMemorySessionStore::with_session(PersistedSession {
        token: "token-7".to_string(),
        user: serde_json::to_value(user).expect("user json"),
        cookie_expires_at: Some(now() + Duration::hours(12)),
    });
    Session::init(Arc::new(store), Duration::hours(24)).expect("init")
}

#[test]
fn cookie_guard_redirects() {
    assert_eq!(guard("/dashboard", false), RouteDecision::Redirect(LOGIN_PATH));
    assert_eq!(guard("/login", false), RouteDecision::Proceed);
    assert_eq!(guard("/login", true), RouteDecision::Redirect(DASHBOARD_PATH));
    assert_eq!(guard("/admin/users", true), RouteDecision::Proceed);
}

#[test]
fn static_and_proxy_paths_pass_through() {
    assert_eq!(guard("/api/users", false), RouteDecision::Proceed);
    assert_eq!(guard("/_next/static/app.js", false), RouteDecision::Proceed);
    assert_eq!(guard("/favicon.ico", false), RouteDecision::Proceed);
}

#[test]
fn route_capabilities_use_longest_prefix() {
    assert_eq!(
        required_capability("/admin/users/3/edit"),
        Some(Capability::ManageUsers)
    );
    assert_eq!(required_capability("/admin"), Some(Capability::ViewAdminStats));
    assert_eq!(required_capability("/administrator"), None);
    assert_eq!(required_capability("/login"), None);
}

#[test]
fn regular_user_is_sent_back_to_dashboard() {
    let session = session_for(UserRole::User);
    assert_eq!(authorize("/dashboard", &session, now()), RouteDecision::Proceed);
    assert_eq!(authorize("/electricity", &session, now()), RouteDecision::Proceed);
    assert_eq!(
        authorize("/admin/objects", &session, now()),
        RouteDecision::Redirect(DASHBOARD_PATH)
    );
}

#[test]
fn admin_reaches_admin_screens() {
    let session = session_for(UserRole::Admin);
    assert_eq!(authorize("/admin/tc-management", &session, now()), RouteDecision::Proceed);
}

#[test]
fn expired_cookie_forces_login() {
    let session = session_for(UserRole::Admin);
    let later = now() + Duration::hours(13);
    assert_eq!(
        authorize("/dashboard", &session, later),
        RouteDecision::Redirect(LOGIN_PATH)
    );
    assert_eq!(authorize(LOGIN_PATH, &session, later), RouteDecision::Proceed);
}
