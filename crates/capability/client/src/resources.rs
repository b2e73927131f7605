//! 带查询缓存的资源访问层
//!
//! 读操作先查缓存，未命中时调用后端并写入缓存；写操作成功后失效对应实体，
//! 失败时不做任何重试，错误原样返回给调用方显示。写操作之间没有事务：
//! 例如新建技术条件后，对象容量统计要等两个集合都重新拉取后才是最新的。

use crate::cache::{QueryCache, QueryKey};
use crate::error::ClientError;
use crate::traits::Backend;
use api_contract::{
    CreateUserRequest, OrganizationRequest, PowerObjectRequest, TcListQuery,
    TechnicalConditionRequest, UpdateUserRequest,
};
use domain::{EntityId, Organization, PowerObject, TechnicalCondition, User};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;

pub const USERS: &str = "users";
pub const ORGANIZATIONS: &str = "organizations";
pub const OBJECTS: &str = "objects";
pub const TECHNICAL_CONDITIONS: &str = "technical-conditions";

/// 资源访问入口。
pub struct Resources {
    backend: Arc<dyn Backend>,
    cache: QueryCache,
}

impl Resources {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            cache: QueryCache::new(),
        }
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    async fn cached<T, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<T, ClientError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }
        let value = fetch().await?;
        self.cache.put(key, &value);
        Ok(value)
    }

    fn invalidate_on_success<T>(
        &self,
        entity: &'static str,
        result: Result<T, ClientError>,
    ) -> Result<T, ClientError> {
        if result.is_ok() {
            let removed = self.cache.invalidate(entity);
            tracing::debug!(entity, removed, "query cache invalidated");
        }
        result
    }

    pub async fn users(&self) -> Result<Vec<User>, ClientError> {
        self.cached(QueryKey::new(USERS), || self.backend.list_users())
            .await
    }

    pub async fn user(&self, id: EntityId) -> Result<User, ClientError> {
        self.cached(QueryKey::new(USERS).with("id", id), || {
            self.backend.get_user(id)
        })
        .await
    }

    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ClientError> {
        let result = self.backend.create_user(request).await;
        self.invalidate_on_success(USERS, result)
    }

    pub async fn update_user(
        &self,
        id: EntityId,
        request: &UpdateUserRequest,
    ) -> Result<User, ClientError> {
        let result = self.backend.update_user(id, request).await;
        self.invalidate_on_success(USERS, result)
    }

    pub async fn delete_user(&self, id: EntityId) -> Result<(), ClientError> {
        let result = self.backend.delete_user(id).await;
        self.invalidate_on_success(USERS, result)
    }

    pub async fn organizations(&self) -> Result<Vec<Organization>, ClientError> {
        self.cached(QueryKey::new(ORGANIZATIONS), || {
            self.backend.list_organizations()
        })
        .await
    }

    pub async fn organization(&self, id: EntityId) -> Result<Organization, ClientError> {
        self.cached(QueryKey::new(ORGANIZATIONS).with("id", id), || {
            self.backend.get_organization(id)
        })
        .await
    }

    pub async fn create_organization(
        &self,
        request: &OrganizationRequest,
    ) -> Result<Organization, ClientError> {
        let result = self.backend.create_organization(request).await;
        self.invalidate_on_success(ORGANIZATIONS, result)
    }

    pub async fn update_organization(
        &self,
        id: EntityId,
        request: &OrganizationRequest,
    ) -> Result<Organization, ClientError> {
        let result = self.backend.update_organization(id, request).await;
        self.invalidate_on_success(ORGANIZATIONS, result)
    }

    pub async fn delete_organization(&self, id: EntityId) -> Result<(), ClientError> {
        let result = self.backend.delete_organization(id).await;
        self.invalidate_on_success(ORGANIZATIONS, result)
    }

    pub async fn objects(&self) -> Result<Vec<PowerObject>, ClientError> {
        self.cached(QueryKey::new(OBJECTS), || self.backend.list_objects())
            .await
    }

    pub async fn object(&self, id: EntityId) -> Result<PowerObject, ClientError> {
        self.cached(QueryKey::new(OBJECTS).with("id", id), || {
            self.backend.get_object(id)
        })
        .await
    }

    pub async fn create_object(
        &self,
        request: &PowerObjectRequest,
    ) -> Result<PowerObject, ClientError> {
        let result = self.backend.create_object(request).await;
        self.invalidate_on_success(OBJECTS, result)
    }

    pub async fn update_object(
        &self,
        id: EntityId,
        request: &PowerObjectRequest,
    ) -> Result<PowerObject, ClientError> {
        let result = self.backend.update_object(id, request).await;
        self.invalidate_on_success(OBJECTS, result)
    }

    pub async fn delete_object(&self, id: EntityId) -> Result<(), ClientError> {
        let result = self.backend.delete_object(id).await;
        self.invalidate_on_success(OBJECTS, result)
    }

    /// 技术条件列表，缓存键包含服务端过滤参数。
    pub async fn technical_conditions(
        &self,
        query: TcListQuery,
    ) -> Result<Vec<TechnicalCondition>, ClientError> {
        self.cached(tc_query_key(query), || {
            self.backend.list_technical_conditions(query)
        })
        .await
    }

    pub async fn technical_condition(
        &self,
        id: EntityId,
    ) -> Result<TechnicalCondition, ClientError> {
        self.cached(QueryKey::new(TECHNICAL_CONDITIONS).with("id", id), || {
            self.backend.get_technical_condition(id)
        })
        .await
    }

    pub async fn create_technical_condition(
        &self,
        request: &TechnicalConditionRequest,
    ) -> Result<TechnicalCondition, ClientError> {
        let result = self.backend.create_technical_condition(request).await;
        self.invalidate_on_success(TECHNICAL_CONDITIONS, result)
    }

    pub async fn update_technical_condition(
        &self,
        id: EntityId,
        request: &TechnicalConditionRequest,
    ) -> Result<TechnicalCondition, ClientError> {
        let result = self.backend.update_technical_condition(id, request).await;
        self.invalidate_on_success(TECHNICAL_CONDITIONS, result)
    }

    pub async fn delete_technical_condition(&self, id: EntityId) -> Result<(), ClientError> {
        let result = self.backend.delete_technical_condition(id).await;
        self.invalidate_on_success(TECHNICAL_CONDITIONS, result)
    }
}

fn tc_query_key(query: TcListQuery) -> QueryKey {
    let mut key = QueryKey::new(TECHNICAL_CONDITIONS);
    for (name, value) in query.query_pairs() {
        key = key.with(name, value);
    }
    key
}
