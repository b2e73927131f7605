//! 控制台运行上下文：配置、会话、资源访问层与导出器。
//!
//! 每条命令先经过路由守卫，再访问后端。

use crate::error::ConsoleError;
use chrono::{DateTime, Duration, Utc};
use domain::Capability;
use std::sync::Arc;
use tc_auth::{
    DASHBOARD_PATH, FileSessionStore, RouteDecision, Session, authorize, has_capability,
};
use tc_client::{Backend, HttpBackend, Resources};
use tc_config::AppConfig;
use tc_export::Exporter;

pub struct Console {
    config: AppConfig,
    session: Session,
    resources: Resources,
    exporter: Exporter,
    now: DateTime<Utc>,
}

impl Console {
    /// 按配置连接真实后端，并从会话文件恢复会话。
    pub fn connect(config: AppConfig) -> Result<Self, ConsoleError> {
        let ttl_hours = i64::try_from(config.session_ttl_hours)
            .ok()
            .and_then(Duration::try_hours)
            .ok_or_else(|| {
                ConsoleError::InvalidArgument(format!(
                    "TC_SESSION_TTL_HOURS out of range: {}",
                    config.session_ttl_hours
                ))
            })?;
        let store = Arc::new(FileSessionStore::new(&config.session_file));
        let session = Session::init(store, ttl_hours)?;
        let backend = HttpBackend::new(config.api_base_url.clone())
            .map_err(ConsoleError::Load)?
            .with_token(session.token().map(str::to_string));
        tracing::debug!(
            base_url = %backend.base_url(),
            authenticated = session.is_authenticated(),
            "console connected"
        );
        Ok(Self::new(config, session, Arc::new(backend), Utc::now()))
    }

    pub fn new(
        config: AppConfig,
        session: Session,
        backend: Arc<dyn Backend>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            config,
            session,
            resources: Resources::new(backend),
            exporter: Exporter::default(),
            now,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// 进入某个界面路径前的守卫。
    pub fn enter(&self, path: &str) -> Result<(), ConsoleError> {
        match authorize(path, &self.session, self.now) {
            RouteDecision::Proceed => Ok(()),
            RouteDecision::Redirect(target) => {
                tracing::debug!(path, target, "route guard redirect");
                Err(ConsoleError::Redirected(target))
            }
        }
    }

    /// 界面内的附加能力校验，缺失时静默回到仪表盘。
    pub fn require(&self, capability: Capability) -> Result<(), ConsoleError> {
        if has_capability(&self.session, capability) {
            Ok(())
        } else {
            Err(ConsoleError::Redirected(DASHBOARD_PATH))
        }
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ConsoleError> {
        let backend = Arc::clone(self.resources.backend());
        self.session
            .login(backend.as_ref(), username, password, self.now)
            .await?;
        Ok(())
    }

    pub fn logout(&mut self) -> Result<(), ConsoleError> {
        self.session.logout()?;
        Ok(())
    }
}
