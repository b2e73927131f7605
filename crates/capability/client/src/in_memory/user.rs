//! 用户内存实现

use super::{InMemoryBackend, StoredUser};
use crate::error::ClientError;
use crate::traits::UserApi;
use api_contract::{CreateUserRequest, UpdateUserRequest};
use domain::{EntityId, User};

#[async_trait::async_trait]
impl UserApi for InMemoryBackend {
    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        let state = self.read()?;
        Ok(state.users.values().map(|stored| stored.user.clone()).collect())
    }

    async fn get_user(&self, id: EntityId) -> Result<User, ClientError> {
        let state = self.read()?;
        state
            .users
            .get(&id)
            .map(|stored| stored.user.clone())
            .ok_or_else(|| ClientError::not_found("user"))
    }

    /// 用户名唯一。
    async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ClientError> {
        let mut state = self.write()?;
        if state
            .users
            .values()
            .any(|stored| stored.user.username == request.username)
        {
            return Err(ClientError::backend(409, "Пользователь уже существует"));
        }
        let id = state.allocate_id();
        let user = User {
            id,
            username: request.username.clone(),
            email: request.email.clone(),
            role: request.role,
            organization_name: request.organization_name.clone(),
            created_at: None,
            updated_at: None,
        };
        state.users.insert(
            id,
            StoredUser {
                user: user.clone(),
                password: request.password.clone(),
            },
        );
        Ok(user)
    }

    /// 未提供口令时保留原口令。
    async fn update_user(
        &self,
        id: EntityId,
        request: &UpdateUserRequest,
    ) -> Result<User, ClientError> {
        let mut state = self.write()?;
        if state
            .users
            .values()
            .any(|stored| stored.user.id != id && stored.user.username == request.username)
        {
            return Err(ClientError::backend(409, "Пользователь уже существует"));
        }
        let stored = state
            .users
            .get_mut(&id)
            .ok_or_else(|| ClientError::not_found("user"))?;
        stored.user.username = request.username.clone();
        stored.user.email = request.email.clone();
        stored.user.role = request.role;
        stored.user.organization_name = request.organization_name.clone();
        if let Some(password) = request.password.as_ref() {
            stored.password = password.clone();
        }
        Ok(stored.user.clone())
    }

    async fn delete_user(&self, id: EntityId) -> Result<(), ClientError> {
        let mut state = self.write()?;
        state
            .users
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ClientError::not_found("user"))
    }
}
