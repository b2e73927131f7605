use api_contract::{
    BackendErrorBody, LoginResponse, PowerObjectRequest, TcListQuery, TechnicalConditionRequest,
    UpdateUserRequest, paths,
};
use domain::{ObjectType, ResourceType, TcType, UserRole};

#[test]
fn login_response_parses_backend_shape() {
    let payload = r#"{"token":"t-1","user":{"id":1,"username":"admin","email":"a@b.kz","role":"admin"}}"#;
    let response: LoginResponse = serde_json::from_str(payload).expect("parse");
    assert_eq!(response.token, "t-1");
    assert_eq!(response.user.role, UserRole::Admin);
    assert!(response.user.organization_name.is_none());
}

#[test]
fn backend_error_body_tolerates_missing_error() {
    let body: BackendErrorBody = serde_json::from_str("{}").expect("parse");
    assert!(body.error.is_none());
    let body: BackendErrorBody =
        serde_json::from_str(r#"{"error":"ТУ уже существует"}"#).expect("parse");
    assert_eq!(body.error.as_deref(), Some("ТУ уже существует"));
}

#[test]
fn update_user_omits_empty_password() {
    let request = UpdateUserRequest {
        username: "operator".to_string(),
        email: "op@example.com".to_string(),
        role: UserRole::User,
        organization_name: None,
        password: None,
    };
    let value = serde_json::to_value(request).expect("serialize");
    assert!(value.get("password").is_none());
    assert!(value.get("organization_name").is_none());
    assert_eq!(value.get("role").and_then(|v| v.as_str()), Some("user"));
}

#[test]
fn object_request_carries_both_units() {
    let request = PowerObjectRequest {
        name: "ТП-12".to_string(),
        object_type: ObjectType::Tp,
        max_power_mw: 0.63,
        max_power_kw: 630.0,
        description: None,
    };
    let value = serde_json::to_value(request).expect("serialize");
    assert_eq!(value.get("type").and_then(|v| v.as_str()), Some("tp"));
    assert!(value.get("max_power_mw").is_some());
    assert!(value.get("max_power_kw").is_some());
}

#[test]
fn permanent_permit_sends_null_expiry() {
    let request = TechnicalConditionRequest {
        organization_id: 1,
        object_id: 2,
        tc_type: TcType::Permanent,
        resource_type: ResourceType::Electricity,
        tc_number: "01-15".to_string(),
        power_amount: 150.0,
        issue_date: "2024-03-01T00:00:00Z".to_string(),
        expiry_date: None,
        document_link: None,
        notes: None,
    };
    let value = serde_json::to_value(request).expect("serialize");
    assert!(value.get("expiry_date").expect("present").is_null());
    assert!(value.get("notes").is_none());
}

#[test]
fn list_query_only_sets_given_filters() {
    assert!(TcListQuery::default().query_pairs().is_empty());
    let query = TcListQuery::new(Some(ResourceType::Water), None);
    assert_eq!(query.query_pairs(), vec![("resource_type", "water")]);
    let query = TcListQuery::new(Some(ResourceType::Electricity), Some(TcType::Temporary));
    assert_eq!(
        query.query_pairs(),
        vec![("resource_type", "electricity"), ("tc_type", "temporary")]
    );
}

#[test]
fn item_path_appends_id() {
    assert_eq!(paths::item(paths::OBJECTS, 12), "/objects/12");
}
