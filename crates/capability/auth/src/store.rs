//! 会话持久化。

use crate::SessionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// 落盘的会话记录。
///
/// `user` 保持原始 JSON，解析失败只让会话失效，不影响读取其余字段。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: String,
    pub user: serde_json::Value,
    /// 会话 cookie 的过期时间，路由守卫只看它。
    pub cookie_expires_at: Option<DateTime<Utc>>,
}

/// 会话存储接口。
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<PersistedSession>, SessionError>;
    fn save(&self, session: &PersistedSession) -> Result<(), SessionError>;
    fn clear(&self) -> Result<(), SessionError>;
}

/// JSON 文件会话存储。
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<PersistedSession>, SessionError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(SessionError::Store(err.to_string())),
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "session file unreadable, ignoring");
                Ok(None)
            }
        }
    }

    fn save(&self, session: &PersistedSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| SessionError::Store(err.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(session)
            .map_err(|err| SessionError::Store(err.to_string()))?;
        fs::write(&self.path, raw).map_err(|err| SessionError::Store(err.to_string()))
    }

    fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionError::Store(err.to_string())),
        }
    }
}

/// 内存会话存储（测试用）。
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    slot: RwLock<Option<PersistedSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: PersistedSession) -> Self {
        Self {
            slot: RwLock::new(Some(session)),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<PersistedSession>, SessionError> {
        self.slot
            .read()
            .map(|slot| slot.clone())
            .map_err(|_| SessionError::Store("session slot poisoned".to_string()))
    }

    fn save(&self, session: &PersistedSession) -> Result<(), SessionError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| SessionError::Store("session slot poisoned".to_string()))?;
        *slot = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|_| SessionError::Store("session slot poisoned".to_string()))?;
        *slot = None;
        Ok(())
    }
}
