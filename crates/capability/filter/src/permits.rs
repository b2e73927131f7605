use crate::contains_ignore_case;
use chrono::NaiveDate;
use domain::{ParseEnumError, TcStatus, TechnicalCondition};
use std::str::FromStr;
use tc_normalize::parse_day;

/// 状态过滤，`All` 不做限制。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TcStatus),
}

impl FromStr for StatusFilter {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        TcStatus::from_str(value).map(Self::Only)
    }
}

/// 技术条件列表的过滤条件。
///
/// 空字符串与 `StatusFilter::All` 都是“不过滤”；日期为 `YYYY-MM-DD`
/// （也接受后端的 ISO 时间戳），无法解析时视为不限制。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermitFilter {
    pub status: StatusFilter,
    pub organization: String,
    pub object: String,
    pub issue_date_from: String,
    pub issue_date_to: String,
}

impl PermitFilter {
    /// 所有字段都是默认值。
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }

    pub fn matches(&self, permit: &TechnicalCondition) -> bool {
        CompiledFilter::new(self).matches(permit)
    }
}

struct CompiledFilter<'a> {
    status: StatusFilter,
    organization: &'a str,
    object: &'a str,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
}

impl<'a> CompiledFilter<'a> {
    fn new(filter: &'a PermitFilter) -> Self {
        Self {
            status: filter.status,
            organization: &filter.organization,
            object: &filter.object,
            from: parse_day(&filter.issue_date_from),
            to: parse_day(&filter.issue_date_to),
        }
    }

    fn matches(&self, permit: &TechnicalCondition) -> bool {
        if let StatusFilter::Only(status) = self.status
            && permit.status != status
        {
            return false;
        }
        if !name_matches(permit.organization_name.as_deref(), self.organization) {
            return false;
        }
        if !name_matches(permit.object_name.as_deref(), self.object) {
            return false;
        }
        if self.from.is_none() && self.to.is_none() {
            return true;
        }
        // 有日期限制时，签发日期缺失或无法解析的记录不保留。
        let Some(issued) = permit.issue_date.as_deref().and_then(parse_day) else {
            return false;
        };
        self.from.is_none_or(|from| issued >= from) && self.to.is_none_or(|to| issued <= to)
    }
}

/// 名称缺失的记录永远不匹配非空关键字。
fn name_matches(name: Option<&str>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    name.is_some_and(|name| contains_ignore_case(name, needle))
}

/// 返回满足全部条件的记录，保持原有顺序。
pub fn filter_permits<'a>(
    permits: &'a [TechnicalCondition],
    filter: &PermitFilter,
) -> Vec<&'a TechnicalCondition> {
    let compiled = CompiledFilter::new(filter);
    permits
        .iter()
        .filter(|permit| compiled.matches(permit))
        .collect()
}
