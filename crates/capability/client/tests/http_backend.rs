//! reqwest 后端对接进程内 axum 模拟后端。

use api_contract::{LoginRequest, TcListQuery};
use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use domain::{ResourceType, TcType};
use serde_json::{Value, json};
use std::collections::HashMap;
use tc_client::{
    AuthApi, ClientError, HttpBackend, ObjectApi, TechnicalConditionApi, UserApi,
};

const TOKEN: &str = "t-1";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        == Some("Bearer t-1")
}

fn has_request_id(headers: &HeaderMap) -> bool {
    headers
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| !value.is_empty())
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["username"] == "admin" && body["password"] == "admin123" {
        (
            StatusCode::OK,
            Json(json!({
                "token": TOKEN,
                "user": {"id": 1, "username": "admin", "email": "admin@example.com", "role": "admin"}
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Неверные учетные данные"})),
        )
    }
}

async fn list_permits(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) || !has_request_id(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "unauthorized"})));
    }
    let resource = params.get("resource_type").cloned().unwrap_or_default();
    let kind = params.get("tc_type").cloned().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!([{
            "id": 10,
            "organization_id": 2,
            "organization_name": format!("{resource}/{kind}"),
            "object_id": 3,
            "object_name": "ПС-1",
            "tc_type": "permanent",
            "resource_type": "electricity",
            "tc_number": "A-1",
            "power_amount": 120.0,
            "issue_date": "2024-01-10T00:00:00Z",
            "status": "active"
        }])),
    )
}

async fn get_object(Path(id): Path<i64>) -> (StatusCode, String) {
    // 非 JSON 错误体。
    (StatusCode::INTERNAL_SERVER_ERROR, format!("object {id} exploded"))
}

async fn delete_user(headers: HeaderMap, Path(_id): Path<i64>) -> StatusCode {
    if authorized(&headers) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::UNAUTHORIZED
    }
}

async fn list_users() -> &'static str {
    "not json"
}

async fn spawn_backend() -> String {
    let router = Router::new()
        .route("/auth/login", post(login))
        .route("/technical-conditions", get(list_permits))
        .route("/objects/:id", get(get_object))
        .route("/users", get(list_users))
        .route("/users/:id", delete(delete_user));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn login_returns_token_and_user() {
    let base = spawn_backend().await;
    let backend = HttpBackend::new(base).expect("client");
    let response = backend
        .login(&LoginRequest {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        })
        .await
        .expect("login");
    assert_eq!(response.token, TOKEN);
    assert!(response.user.is_admin());
}

#[tokio::test]
async fn backend_error_message_is_kept_verbatim() {
    let base = spawn_backend().await;
    let backend = HttpBackend::new(base).expect("client");
    let err = backend
        .login(&LoginRequest {
            username: "admin".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .expect_err("rejected");
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message("fallback"), "Неверные учетные данные");
}

#[tokio::test]
async fn list_sends_token_request_id_and_filters() {
    let base = spawn_backend().await;
    let backend = HttpBackend::new(base)
        .expect("client")
        .with_token(Some(TOKEN.to_string()));
    let permits = backend
        .list_technical_conditions(TcListQuery::new(
            Some(ResourceType::Electricity),
            Some(TcType::Temporary),
        ))
        .await
        .expect("list");
    assert_eq!(permits.len(), 1);
    assert_eq!(
        permits[0].organization_name.as_deref(),
        Some("electricity/temporary")
    );
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let base = spawn_backend().await;
    let backend = HttpBackend::new(base).expect("client");
    let err = backend
        .list_technical_conditions(TcListQuery::default())
        .await
        .expect_err("unauthorized");
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn non_json_error_body_falls_back() {
    let base = spawn_backend().await;
    let backend = HttpBackend::new(base).expect("client");
    let err = backend.get_object(5).await.expect_err("500");
    assert_eq!(
        err,
        ClientError::Backend {
            status: 500,
            message: None
        }
    );
    assert_eq!(err.user_message("Произошла ошибка"), "Произошла ошибка");
}

#[tokio::test]
async fn delete_accepts_empty_body() {
    let base = spawn_backend().await;
    let backend = HttpBackend::new(base)
        .expect("client")
        .with_token(Some(TOKEN.to_string()));
    backend.delete_user(4).await.expect("deleted");
}

#[tokio::test]
async fn undecodable_body_is_decode_error() {
    let base = spawn_backend().await;
    let backend = HttpBackend::new(base).expect("client");
    let err = backend.list_users().await.expect_err("decode");
    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let backend = HttpBackend::new("http://127.0.0.1:9").expect("client");
    let err = backend.list_objects().await.expect_err("transport");
    assert!(matches!(err, ClientError::Transport(_)));
}
