//! 会话能力：登录/登出、会话持久化、路由守卫。
//!
//! 会话是一个显式对象，生命周期为
//! `init → authenticated / unauthenticated → login → authenticated → logout → unauthenticated`，
//! 需要身份的模块都通过参数拿到它。

mod guard;
mod session;
mod store;

pub use guard::{
    DASHBOARD_PATH, LOGIN_PATH, RouteDecision, authorize, guard, required_capability,
};
pub use session::{LOGIN_FAILED_MESSAGE, Session, has_capability};
pub use store::{FileSessionStore, InMemorySessionStore, PersistedSession, SessionStore};

use tc_client::ClientError;

/// 会话相关错误。
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("login failed: {0}")]
    Login(#[from] ClientError),
    #[error("session store error: {0}")]
    Store(String),
}

impl SessionError {
    /// 登录界面展示的文本。
    pub fn user_message(&self) -> String {
        match self {
            Self::Login(err) => err.user_message(LOGIN_FAILED_MESSAGE),
            Self::Store(_) => LOGIN_FAILED_MESSAGE.to_string(),
        }
    }
}
