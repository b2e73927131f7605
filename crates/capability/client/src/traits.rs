//! 资源客户端 Trait 定义
//!
//! 定义后端各资源的异步接口：
//! - AuthApi：登录
//! - UserApi：用户
//! - OrganizationApi：组织
//! - ObjectApi：电力对象
//! - TechnicalConditionApi：技术条件
//!
//! 设计原则：
//! - 纯请求/响应，不做缓存（缓存在 `Resources` 一层）
//! - 所有接口返回 ClientError
//! - 使用 async_trait 支持动态分发

use crate::error::ClientError;
use api_contract::{
    CreateUserRequest, LoginRequest, LoginResponse, OrganizationRequest, PowerObjectRequest,
    TcListQuery, TechnicalConditionRequest, UpdateUserRequest,
};
use async_trait::async_trait;
use domain::{EntityId, Organization, PowerObject, TechnicalCondition, User};

/// 登录接口
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/login`
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError>;
}

/// 用户接口
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, ClientError>;
    async fn get_user(&self, id: EntityId) -> Result<User, ClientError>;
    async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ClientError>;
    async fn update_user(
        &self,
        id: EntityId,
        request: &UpdateUserRequest,
    ) -> Result<User, ClientError>;
    async fn delete_user(&self, id: EntityId) -> Result<(), ClientError>;
}

/// 组织接口
#[async_trait]
pub trait OrganizationApi: Send + Sync {
    async fn list_organizations(&self) -> Result<Vec<Organization>, ClientError>;
    async fn get_organization(&self, id: EntityId) -> Result<Organization, ClientError>;
    async fn create_organization(
        &self,
        request: &OrganizationRequest,
    ) -> Result<Organization, ClientError>;
    async fn update_organization(
        &self,
        id: EntityId,
        request: &OrganizationRequest,
    ) -> Result<Organization, ClientError>;
    async fn delete_organization(&self, id: EntityId) -> Result<(), ClientError>;
}

/// 电力对象接口
#[async_trait]
pub trait ObjectApi: Send + Sync {
    async fn list_objects(&self) -> Result<Vec<PowerObject>, ClientError>;
    async fn get_object(&self, id: EntityId) -> Result<PowerObject, ClientError>;
    async fn create_object(&self, request: &PowerObjectRequest)
    -> Result<PowerObject, ClientError>;
    async fn update_object(
        &self,
        id: EntityId,
        request: &PowerObjectRequest,
    ) -> Result<PowerObject, ClientError>;
    async fn delete_object(&self, id: EntityId) -> Result<(), ClientError>;
}

/// 技术条件接口
///
/// 列表接口的 `resource_type` / `tc_type` 由服务端过滤。
#[async_trait]
pub trait TechnicalConditionApi: Send + Sync {
    async fn list_technical_conditions(
        &self,
        query: TcListQuery,
    ) -> Result<Vec<TechnicalCondition>, ClientError>;
    async fn get_technical_condition(
        &self,
        id: EntityId,
    ) -> Result<TechnicalCondition, ClientError>;
    async fn create_technical_condition(
        &self,
        request: &TechnicalConditionRequest,
    ) -> Result<TechnicalCondition, ClientError>;
    async fn update_technical_condition(
        &self,
        id: EntityId,
        request: &TechnicalConditionRequest,
    ) -> Result<TechnicalCondition, ClientError>;
    async fn delete_technical_condition(&self, id: EntityId) -> Result<(), ClientError>;
}

/// 完整的后端接口集合。
pub trait Backend:
    AuthApi + UserApi + OrganizationApi + ObjectApi + TechnicalConditionApi
{
}

impl<T> Backend for T where
    T: AuthApi + UserApi + OrganizationApi + ObjectApi + TechnicalConditionApi
{
}
