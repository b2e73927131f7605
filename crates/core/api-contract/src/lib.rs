//! 后端 REST 接口的请求/响应契约。
//!
//! 后端不做统一响应封装：成功时直接返回实体 JSON，失败时返回 `{"error": "..."}`。

use domain::{EntityId, ObjectType, ResourceType, TcType, User, UserRole};
use serde::{Deserialize, Serialize};

/// 后端接口路径。
pub mod paths {
    use domain::EntityId;

    pub const LOGIN: &str = "/auth/login";
    pub const USERS: &str = "/users";
    pub const ORGANIZATIONS: &str = "/organizations";
    pub const OBJECTS: &str = "/objects";
    pub const TECHNICAL_CONDITIONS: &str = "/technical-conditions";

    /// 单个资源路径，例如 `/users/7`。
    pub fn item(collection: &str, id: EntityId) -> String {
        format!("{collection}/{id}")
    }
}

/// 后端错误体。
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl BackendErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}

/// 登录请求体。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 登录响应体。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// 用户创建请求体。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
}

/// 用户更新请求体。`password` 缺省表示不修改口令。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub username: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// 组织创建/更新请求体。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

/// 电力对象创建/更新请求体，MW 与 kW 两个字段都必须携带。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerObjectRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub max_power_mw: f64,
    pub max_power_kw: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 技术条件创建/更新请求体。
///
/// 永久 ТУ 的 `expiry_date` 以 `null` 发送。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalConditionRequest {
    pub organization_id: EntityId,
    pub object_id: EntityId,
    pub tc_type: TcType,
    pub resource_type: ResourceType,
    pub tc_number: String,
    pub power_amount: f64,
    pub issue_date: String,
    pub expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// 技术条件列表的服务端过滤参数。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TcListQuery {
    pub resource_type: Option<ResourceType>,
    pub tc_type: Option<TcType>,
}

impl TcListQuery {
    pub fn new(resource_type: Option<ResourceType>, tc_type: Option<TcType>) -> Self {
        Self {
            resource_type,
            tc_type,
        }
    }

    /// 查询串参数，只包含已设置的字段。
    pub fn query_pairs(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::new();
        if let Some(resource_type) = self.resource_type {
            pairs.push(("resource_type", resource_type.as_str()));
        }
        if let Some(tc_type) = self.tc_type {
            pairs.push(("tc_type", tc_type.as_str()));
        }
        pairs
    }
}
