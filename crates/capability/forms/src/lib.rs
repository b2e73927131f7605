//! 表单校验能力
//!
//! 每个表单在提交前做字段级校验，通过后转换为后端请求体；
//! 校验失败的表单不会发出请求。

mod errors;
mod object;
mod organization;
mod permit;
mod user;

pub use errors::{FieldError, ValidationErrors};
pub use object::PowerObjectForm;
pub use organization::OrganizationForm;
pub use permit::{TechnicalConditionForm, to_utc_midnight};
pub use user::{UserEditForm, UserForm};

/// 空白输入视为未填写。
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
