//! 基于 reqwest 的后端实现
//!
//! - 所有请求携带 `x-request-id` / `x-trace-id`
//! - 已登录时携带 `Authorization: Bearer <token>`
//! - 非 2xx 响应解析 `{"error": "..."}` 并转换为 `ClientError::Backend`
//! - 不做重试，不覆盖传输层默认超时

use crate::error::ClientError;
use crate::traits::{AuthApi, ObjectApi, OrganizationApi, TechnicalConditionApi, UserApi};
use api_contract::{
    BackendErrorBody, CreateUserRequest, LoginRequest, LoginResponse, OrganizationRequest,
    PowerObjectRequest, TcListQuery, TechnicalConditionRequest, UpdateUserRequest, paths,
};
use async_trait::async_trait;
use domain::{EntityId, Organization, PowerObject, TechnicalCondition, User};
use reqwest::{Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tc_telemetry::{new_request_ids, record_request_failure, record_request_sent};
use tracing::Instrument;

/// reqwest 后端客户端。
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    /// 创建未登录的客户端。
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// 附带访问令牌。
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<serde_json::Value>,
    ) -> Result<Response, ClientError> {
        let ids = new_request_ids();
        let span = tracing::info_span!(
            "backend_request",
            request_id = %ids.request_id,
            trace_id = %ids.trace_id,
            method = %method,
            path = %path
        );

        async move {
            let mut request = self
                .client
                .request(method, format!("{}{}", self.base_url, path))
                .header("x-request-id", &ids.request_id)
                .header("x-trace-id", &ids.trace_id);
            if !query.is_empty() {
                request = request.query(query);
            }
            if let Some(token) = self.token.as_deref() {
                request = request.bearer_auth(token);
            }
            if let Some(body) = body {
                request = request.json(&body);
            }

            record_request_sent();
            let response = match request.send().await {
                Ok(response) => response,
                Err(err) => {
                    record_request_failure();
                    tracing::warn!(error = %err, "backend request failed");
                    return Err(ClientError::from(err));
                }
            };

            let status = response.status();
            if status.is_success() {
                tracing::debug!(status = status.as_u16(), "backend request completed");
                return Ok(response);
            }

            record_request_failure();
            // 错误体可能不是 JSON，解析失败时只保留状态码。
            let message = response
                .json::<BackendErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            tracing::warn!(status = status.as_u16(), message = ?message, "backend rejected request");
            Err(ClientError::Backend {
                status: status.as_u16(),
                message,
            })
        }
        .instrument(span)
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let response = self.execute(Method::GET, path, query, None).await?;
        decode(response).await
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let body =
            serde_json::to_value(body).map_err(|err| ClientError::Decode(err.to_string()))?;
        let response = self.execute(method, path, &[], Some(body)).await?;
        decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        self.execute(Method::DELETE, path, &[], None).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ClientError::Decode(err.to_string()))
}

#[async_trait]
impl AuthApi for HttpBackend {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        self.send_json(Method::POST, paths::LOGIN, request).await
    }
}

#[async_trait]
impl UserApi for HttpBackend {
    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.get_json(paths::USERS, &[]).await
    }

    async fn get_user(&self, id: EntityId) -> Result<User, ClientError> {
        self.get_json(&paths::item(paths::USERS, id), &[]).await
    }

    async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ClientError> {
        self.send_json(Method::POST, paths::USERS, request).await
    }

    async fn update_user(
        &self,
        id: EntityId,
        request: &UpdateUserRequest,
    ) -> Result<User, ClientError> {
        self.send_json(Method::PUT, &paths::item(paths::USERS, id), request)
            .await
    }

    async fn delete_user(&self, id: EntityId) -> Result<(), ClientError> {
        self.delete(&paths::item(paths::USERS, id)).await
    }
}

#[async_trait]
impl OrganizationApi for HttpBackend {
    async fn list_organizations(&self) -> Result<Vec<Organization>, ClientError> {
        self.get_json(paths::ORGANIZATIONS, &[]).await
    }

    async fn get_organization(&self, id: EntityId) -> Result<Organization, ClientError> {
        self.get_json(&paths::item(paths::ORGANIZATIONS, id), &[])
            .await
    }

    async fn create_organization(
        &self,
        request: &OrganizationRequest,
    ) -> Result<Organization, ClientError> {
        self.send_json(Method::POST, paths::ORGANIZATIONS, request)
            .await
    }

    async fn update_organization(
        &self,
        id: EntityId,
        request: &OrganizationRequest,
    ) -> Result<Organization, ClientError> {
        self.send_json(
            Method::PUT,
            &paths::item(paths::ORGANIZATIONS, id),
            request,
        )
        .await
    }

    async fn delete_organization(&self, id: EntityId) -> Result<(), ClientError> {
        self.delete(&paths::item(paths::ORGANIZATIONS, id)).await
    }
}

#[async_trait]
impl ObjectApi for HttpBackend {
    async fn list_objects(&self) -> Result<Vec<PowerObject>, ClientError> {
        self.get_json(paths::OBJECTS, &[]).await
    }

    async fn get_object(&self, id: EntityId) -> Result<PowerObject, ClientError> {
        self.get_json(&paths::item(paths::OBJECTS, id), &[]).await
    }

    async fn create_object(
        &self,
        request: &PowerObjectRequest,
    ) -> Result<PowerObject, ClientError> {
        self.send_json(Method::POST, paths::OBJECTS, request).await
    }

    async fn update_object(
        &self,
        id: EntityId,
        request: &PowerObjectRequest,
    ) -> Result<PowerObject, ClientError> {
        self.send_json(Method::PUT, &paths::item(paths::OBJECTS, id), request)
            .await
    }

    async fn delete_object(&self, id: EntityId) -> Result<(), ClientError> {
        self.delete(&paths::item(paths::OBJECTS, id)).await
    }
}

#[async_trait]
impl TechnicalConditionApi for HttpBackend {
    async fn list_technical_conditions(
        &self,
        query: TcListQuery,
    ) -> Result<Vec<TechnicalCondition>, ClientError> {
        self.get_json(paths::TECHNICAL_CONDITIONS, &query.query_pairs())
            .await
    }

    async fn get_technical_condition(
        &self,
        id: EntityId,
    ) -> Result<TechnicalCondition, ClientError> {
        self.get_json(&paths::item(paths::TECHNICAL_CONDITIONS, id), &[])
            .await
    }

    async fn create_technical_condition(
        &self,
        request: &TechnicalConditionRequest,
    ) -> Result<TechnicalCondition, ClientError> {
        self.send_json(Method::POST, paths::TECHNICAL_CONDITIONS, request)
            .await
    }

    async fn update_technical_condition(
        &self,
        id: EntityId,
        request: &TechnicalConditionRequest,
    ) -> Result<TechnicalCondition, ClientError> {
        self.send_json(
            Method::PUT,
            &paths::item(paths::TECHNICAL_CONDITIONS, id),
            request,
        )
        .await
    }

    async fn delete_technical_condition(&self, id: EntityId) -> Result<(), ClientError> {
        self.delete(&paths::item(paths::TECHNICAL_CONDITIONS, id))
            .await
    }
}
