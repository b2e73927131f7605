//! 控制台错误。

use crate::messages::{GENERIC_ERROR, LOAD_FAILED};
use tc_auth::SessionError;
use tc_client::ClientError;
use tc_config::ConfigError;
use tc_export::{EXPORT_FAILED_MESSAGE, ExportError};
use tc_forms::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("session error: {0}")]
    Session(#[from] SessionError),
    /// 读取列表失败。
    #[error("load failed: {0}")]
    Load(#[source] ClientError),
    /// 写操作失败，`fallback` 为后端未给出消息时的提示。
    #[error("request failed: {source}")]
    Request {
        #[source]
        source: ClientError,
        fallback: &'static str,
    },
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("export failed: {0}")]
    Export(#[from] ExportError),
    /// 路由守卫拒绝，静默跳转。
    #[error("redirected to {0}")]
    Redirected(&'static str),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    pub fn request(fallback: &'static str) -> impl FnOnce(ClientError) -> Self {
        move |source| Self::Request { source, fallback }
    }

    /// 给用户看的文本。
    pub fn user_message(&self) -> String {
        match self {
            Self::Session(err) => err.user_message(),
            Self::Load(_) => LOAD_FAILED.to_string(),
            Self::Request { source, fallback } => source.user_message(fallback),
            Self::Validation(errors) => errors
                .errors()
                .iter()
                .map(|error| format!("{}: {}", error.field, error.message))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Export(_) => EXPORT_FAILED_MESSAGE.to_string(),
            Self::Redirected(path) => format!("-> {path}"),
            Self::InvalidArgument(message) => message.clone(),
            Self::Config(err) => err.to_string(),
            Self::Io(_) => GENERIC_ERROR.to_string(),
        }
    }

    /// 进程退出码：跳转为 2，其余失败为 1。
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Redirected(_) => 2,
            _ => 1,
        }
    }
}
