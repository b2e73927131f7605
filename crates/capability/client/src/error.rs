//! 客户端错误类型
//!
//! 后端以 `{"error": "..."}` 报告业务错误，原文透传给界面；
//! 传输与解析失败单独归类，界面统一显示本地化兜底文案。

/// 资源客户端错误。
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    #[error("backend returned {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Backend { status: u16, message: Option<String> },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("decode error: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: Some(message.into()),
        }
    }

    pub fn not_found(entity: &str) -> Self {
        Self::backend(404, format!("{entity} not found"))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 给用户看的文本：后端消息原样返回，否则使用兜底文案。
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Backend {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
