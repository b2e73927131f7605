//! 显式会话对象。

use crate::SessionError;
use crate::store::{PersistedSession, SessionStore};
use api_contract::LoginRequest;
use chrono::{DateTime, Duration, Utc};
use domain::{Capability, User, role_has_capability};
use std::sync::Arc;
use tc_client::AuthApi;

/// 登录失败且后端未给出消息时的提示。
pub const LOGIN_FAILED_MESSAGE: &str = "Неверное имя пользователя или пароль";

#[derive(Debug, Clone)]
struct Identity {
    token: String,
    user: User,
    cookie_expires_at: Option<DateTime<Utc>>,
}

/// 当前会话。
pub struct Session {
    store: Arc<dyn SessionStore>,
    ttl: Duration,
    identity: Option<Identity>,
}

impl Session {
    /// 从存储恢复会话；存储的用户记录无法解析时视为未登录。
    pub fn init(store: Arc<dyn SessionStore>, ttl: Duration) -> Result<Self, SessionError> {
        let identity = match store.load()? {
            None => None,
            Some(persisted) => match serde_json::from_value::<User>(persisted.user) {
                Ok(user) => Some(Identity {
                    token: persisted.token,
                    user,
                    cookie_expires_at: persisted.cookie_expires_at,
                }),
                Err(err) => {
                    tracing::warn!(error = %err, "stored user record is corrupt");
                    None
                }
            },
        };
        Ok(Self {
            store,
            ttl,
            identity,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(User::is_admin)
    }

    pub fn user(&self) -> Option<&User> {
        self.identity.as_ref().map(|identity| &identity.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.identity
            .as_ref()
            .map(|identity| identity.token.as_str())
    }

    /// 会话 cookie 在 `now` 时刻是否仍然有效。
    pub fn has_cookie(&self, now: DateTime<Utc>) -> bool {
        self.identity
            .as_ref()
            .and_then(|identity| identity.cookie_expires_at)
            .is_some_and(|expires_at| expires_at > now)
    }

    pub fn cookie_expires_at(&self) -> Option<DateTime<Utc>> {
        self.identity
            .as_ref()
            .and_then(|identity| identity.cookie_expires_at)
    }

    /// 登录并持久化令牌、用户记录与 cookie 过期时间。
    ///
    /// 失败时会话状态不变。
    pub async fn login<A>(
        &mut self,
        api: &A,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<&User, SessionError>
    where
        A: AuthApi + ?Sized,
    {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response = api.login(&request).await.map_err(|err| {
            tracing::info!(username, status = ?err.status(), "login rejected");
            SessionError::Login(err)
        })?;

        let cookie_expires_at = now.checked_add_signed(self.ttl);
        let persisted = PersistedSession {
            token: response.token.clone(),
            user: serde_json::to_value(&response.user)
                .map_err(|err| SessionError::Store(err.to_string()))?,
            cookie_expires_at,
        };
        self.store.save(&persisted)?;
        tracing::info!(username, user_id = response.user.id, "logged in");

        let identity = self.identity.insert(Identity {
            token: response.token,
            user: response.user,
            cookie_expires_at,
        });
        Ok(&identity.user)
    }

    /// 清除本地令牌、用户记录与 cookie。
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.store.clear()?;
        if let Some(identity) = self.identity.take() {
            tracing::info!(username = %identity.user.username, "logged out");
        }
        Ok(())
    }
}

/// 会话是否持有某项能力；未登录时不持有任何能力。
pub fn has_capability(session: &Session, capability: Capability) -> bool {
    session
        .user()
        .is_some_and(|user| role_has_capability(user.role, capability))
}
