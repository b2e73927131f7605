//! 内存后端实现模块
//!
//! 仅用于本地演示和测试，行为对齐真实后端：
//! - 自增数字 id
//! - 技术条件写入时补全 `organization_name` / `object_name`
//! - 新建技术条件状态为 `active`（状态由后端给出）
//! - 错误以 `ClientError::Backend` 返回，消息与后端格式一致

mod auth;
mod object;
mod organization;
mod technical_condition;
mod user;

use crate::error::ClientError;
use domain::{EntityId, Organization, PowerObject, TechnicalCondition, User, UserRole};
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password: String,
}

#[derive(Debug, Default)]
struct State {
    next_id: EntityId,
    users: BTreeMap<EntityId, StoredUser>,
    organizations: BTreeMap<EntityId, Organization>,
    objects: BTreeMap<EntityId, PowerObject>,
    permits: BTreeMap<EntityId, TechnicalCondition>,
}

impl State {
    fn allocate_id(&mut self) -> EntityId {
        self.next_id += 1;
        self.next_id
    }

    fn organization_name(&self, id: EntityId) -> Result<String, ClientError> {
        self.organizations
            .get(&id)
            .map(|org| org.name.clone())
            .ok_or_else(|| ClientError::backend(400, "Организация не найдена"))
    }

    fn object_name(&self, id: EntityId) -> Result<String, ClientError> {
        self.objects
            .get(&id)
            .map(|object| object.name.clone())
            .ok_or_else(|| ClientError::backend(400, "Объект не найден"))
    }
}

/// 内存后端
///
/// 使用 RwLock + BTreeMap 提供线程安全的内存存储，列表按 id 升序返回。
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    state: RwLock<State>,
}

impl InMemoryBackend {
    /// 创建空后端
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置 admin 账户（用户名：admin，密码：admin123）
    pub fn with_default_admin() -> Self {
        let backend = Self::new();
        backend.seed_user(
            User {
                id: 0,
                username: "admin".to_string(),
                email: "admin@example.com".to_string(),
                role: UserRole::Admin,
                organization_name: None,
                created_at: None,
                updated_at: None,
            },
            "admin123",
        );
        backend
    }

    /// 直接写入用户（id 为 0 时自动分配），返回最终 id。
    pub fn seed_user(&self, mut user: User, password: &str) -> EntityId {
        let Ok(mut state) = self.state.write() else {
            return user.id;
        };
        if user.id == 0 {
            user.id = state.allocate_id();
        } else {
            state.next_id = state.next_id.max(user.id);
        }
        let id = user.id;
        state.users.insert(
            id,
            StoredUser {
                user,
                password: password.to_string(),
            },
        );
        id
    }

    /// 直接写入组织。
    pub fn seed_organization(&self, organization: Organization) {
        if let Ok(mut state) = self.state.write() {
            state.next_id = state.next_id.max(organization.id);
            state.organizations.insert(organization.id, organization);
        }
    }

    /// 直接写入电力对象。
    pub fn seed_object(&self, object: PowerObject) {
        if let Ok(mut state) = self.state.write() {
            state.next_id = state.next_id.max(object.id);
            state.objects.insert(object.id, object);
        }
    }

    /// 直接写入技术条件（保留给定状态与冗余字段）。
    pub fn seed_permit(&self, permit: TechnicalCondition) {
        if let Ok(mut state) = self.state.write() {
            state.next_id = state.next_id.max(permit.id);
            state.permits.insert(permit.id, permit);
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, ClientError> {
        self.state
            .read()
            .map_err(|_| ClientError::Transport("in-memory state poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, State>, ClientError> {
        self.state
            .write()
            .map_err(|_| ClientError::Transport("in-memory state poisoned".to_string()))
    }
}
