//! 追踪初始化、请求 ID 生成与客户端计数器。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 单次后端请求的追踪标识。
#[derive(Debug, Clone)]
pub struct RequestIds {
    pub request_id: String,
    pub trace_id: String,
}

/// 计数器快照。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub requests_sent: u64,
    pub request_failures: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub exports_succeeded: u64,
    pub exports_failed: u64,
}

/// 进程级计数器。
pub struct ClientMetrics {
    requests_sent: AtomicU64,
    request_failures: AtomicU64,
    cache_hits: AtomicU64,
    cache_misses: AtomicU64,
    exports_succeeded: AtomicU64,
    exports_failed: AtomicU64,
}

impl ClientMetrics {
    pub fn new() -> Self {
        Self {
            requests_sent: AtomicU64::new(0),
            request_failures: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
            cache_misses: AtomicU64::new(0),
            exports_succeeded: AtomicU64::new(0),
            exports_failed: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_sent: self.requests_sent.load(Ordering::Relaxed),
            request_failures: self.request_failures.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            exports_succeeded: self.exports_succeeded.load(Ordering::Relaxed),
            exports_failed: self.exports_failed.load(Ordering::Relaxed),
        }
    }
}

impl Default for ClientMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<ClientMetrics> = OnceLock::new();

/// 获取全局计数器实例。
pub fn metrics() -> &'static ClientMetrics {
    METRICS.get_or_init(ClientMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 生成新的 request_id 与 trace_id。
pub fn new_request_ids() -> RequestIds {
    RequestIds {
        request_id: uuid::Uuid::new_v4().to_string(),
        trace_id: uuid::Uuid::new_v4().to_string(),
    }
}

/// 记录发出的后端请求。
pub fn record_request_sent() {
    metrics().requests_sent.fetch_add(1, Ordering::Relaxed);
}

/// 记录失败的后端请求（传输错误或非 2xx）。
pub fn record_request_failure() {
    metrics().request_failures.fetch_add(1, Ordering::Relaxed);
}

/// 记录查询缓存命中。
pub fn record_cache_hit() {
    metrics().cache_hits.fetch_add(1, Ordering::Relaxed);
}

/// 记录查询缓存未命中。
pub fn record_cache_miss() {
    metrics().cache_misses.fetch_add(1, Ordering::Relaxed);
}

/// 记录导出成功。
pub fn record_export_success() {
    metrics().exports_succeeded.fetch_add(1, Ordering::Relaxed);
}

/// 记录导出失败。
pub fn record_export_failure() {
    metrics().exports_failed.fetch_add(1, Ordering::Relaxed);
}
