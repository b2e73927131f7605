//! 管理页搜索。

use crate::contains_ignore_case;
use domain::{Organization, PowerObject, TechnicalCondition, User};

/// 按用户名、邮箱、组织名称搜索。
pub fn search_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    users
        .iter()
        .filter(|user| {
            contains_ignore_case(&user.username, term)
                || contains_ignore_case(&user.email, term)
                || user
                    .organization_name
                    .as_deref()
                    .is_some_and(|name| contains_ignore_case(name, term))
        })
        .collect()
}

/// 按名称、联系人（不区分大小写）或 БИН（区分大小写）搜索。
pub fn search_organizations<'a>(
    organizations: &'a [Organization],
    term: &str,
) -> Vec<&'a Organization> {
    organizations
        .iter()
        .filter(|org| {
            contains_ignore_case(&org.name, term)
                || org.bin.as_deref().is_some_and(|bin| bin.contains(term))
                || org
                    .contact_person
                    .as_deref()
                    .is_some_and(|person| contains_ignore_case(person, term))
        })
        .collect()
}

/// 按名称或类型代码搜索。
pub fn search_objects<'a>(objects: &'a [PowerObject], term: &str) -> Vec<&'a PowerObject> {
    objects
        .iter()
        .filter(|object| {
            contains_ignore_case(&object.name, term)
                || contains_ignore_case(object.object_type.as_str(), term)
        })
        .collect()
}

/// 按组织名称或技术条件编号搜索。
pub fn search_permits<'a>(
    permits: &'a [TechnicalCondition],
    term: &str,
) -> Vec<&'a TechnicalCondition> {
    permits
        .iter()
        .filter(|permit| {
            contains_ignore_case(&permit.tc_number, term)
                || permit
                    .organization_name
                    .as_deref()
                    .is_some_and(|name| contains_ignore_case(name, term))
        })
        .collect()
}
