use super::InMemoryBackend;
use crate::error::ClientError;
use crate::traits::AuthApi;
use api_contract::{LoginRequest, LoginResponse};

#[async_trait::async_trait]
impl AuthApi for InMemoryBackend {
    /// 用户名 + 口令校验，令牌形如 `token-<id>`。
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let state = self.read()?;
        let stored = state
            .users
            .values()
            .find(|stored| stored.user.username == request.username)
            .filter(|stored| stored.password == request.password)
            .ok_or_else(|| ClientError::backend(401, "Неверное имя пользователя или пароль"))?;
        Ok(LoginResponse {
            token: format!("token-{}", stored.user.id),
            user: stored.user.clone(),
        })
    }
}
