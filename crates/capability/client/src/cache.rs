//! 查询缓存
//!
//! 列表数据按“实体名 + 服务端过滤参数”缓存，读多写少：
//! - 命中直接返回缓存副本
//! - 任一写操作成功后失效该实体下的全部条目，下次读取重新拉取
//! - 无过期时间，无淘汰策略

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::RwLock;
use tc_telemetry::{record_cache_hit, record_cache_miss};

/// 缓存键：实体名 + 参数。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    entity: &'static str,
    params: Vec<(&'static str, String)>,
}

impl QueryKey {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            params: Vec::new(),
        }
    }

    pub fn with(mut self, name: &'static str, value: impl ToString) -> Self {
        self.params.push((name, value.to_string()));
        self
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }
}

/// 查询缓存（线程安全）。
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: RwLock<HashMap<QueryKey, serde_json::Value>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取缓存条目；条目无法还原为 `T` 时视为未命中。
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let value = self
            .entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned());
        let hit = value.and_then(|value| serde_json::from_value(value).ok());
        if hit.is_some() {
            record_cache_hit();
        } else {
            record_cache_miss();
        }
        hit
    }

    pub fn put<T: Serialize>(&self, key: QueryKey, value: &T) {
        let Ok(value) = serde_json::to_value(value) else {
            return;
        };
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key, value);
        }
    }

    /// 失效实体下的全部条目，返回失效数量。
    pub fn invalidate(&self, entity: &str) -> usize {
        let Ok(mut entries) = self.entries.write() else {
            return 0;
        };
        let before = entries.len();
        entries.retain(|key, _| key.entity != entity);
        before - entries.len()
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries
            .read()
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
