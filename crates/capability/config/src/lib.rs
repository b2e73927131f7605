//! 控制台运行配置加载。

use std::env;
use std::path::PathBuf;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

/// 控制台运行配置。
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub session_ttl_hours: u64,
    pub export_dir: PathBuf,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = env::var("TC_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".to_string());
        let api_base_url = api_base_url.trim().trim_end_matches('/').to_string();
        if api_base_url.is_empty() {
            return Err(ConfigError::Invalid(
                "TC_API_BASE_URL".to_string(),
                api_base_url,
            ));
        }
        let session_file = read_optional("TC_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(".tc-console/session.json"));
        let session_ttl_hours = read_u64_with_default("TC_SESSION_TTL_HOURS", 24)?;
        if session_ttl_hours == 0 {
            return Err(ConfigError::Invalid(
                "TC_SESSION_TTL_HOURS".to_string(),
                "0".to_string(),
            ));
        }
        let export_dir = read_optional("TC_EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            api_base_url,
            session_file,
            session_ttl_hours,
            export_dir,
        })
    }
}

fn read_u64_with_default(key: &str, default: u64) -> Result<u64, ConfigError> {
    let value = match env::var(key) {
        Ok(value) => value,
        Err(_) => return Ok(default),
    };
    value
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

fn read_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
