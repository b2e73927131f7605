//! 列表过滤与搜索能力
//!
//! - `PermitFilter` / `filter_permits`：技术条件列表的多条件过滤（逻辑与）
//! - `search_*`：管理页的单输入框搜索
//!
//! 过滤结果保持原有顺序，只借用输入，不复制记录。

mod permits;
mod search;

pub use permits::{PermitFilter, StatusFilter, filter_permits};
pub use search::{search_objects, search_organizations, search_permits, search_users};

/// 不区分大小写的子串匹配；空关键字匹配一切。
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::contains_ignore_case;

    #[test]
    fn matching_handles_cyrillic_case() {
        assert!(contains_ignore_case("ТОО Альфа", "альф"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Alpha", "beta"));
    }
}
