use crate::errors::ValidationErrors;
use crate::non_blank;
use api_contract::TechnicalConditionRequest;
use chrono::SecondsFormat;
use domain::{EntityId, ResourceType, TcType, TechnicalCondition};
use tc_normalize::parse_day;

/// 技术条件表单。日期输入为 `YYYY-MM-DD`。
#[derive(Debug, Clone, PartialEq)]
pub struct TechnicalConditionForm {
    pub organization_id: Option<EntityId>,
    pub object_id: Option<EntityId>,
    pub tc_type: TcType,
    pub resource_type: ResourceType,
    pub tc_number: String,
    pub power_amount: f64,
    pub issue_date: String,
    pub expiry_date: String,
    pub document_link: String,
    pub notes: String,
}

impl TechnicalConditionForm {
    pub fn new(tc_type: TcType, resource_type: ResourceType) -> Self {
        Self {
            organization_id: None,
            object_id: None,
            tc_type,
            resource_type,
            tc_number: String::new(),
            power_amount: 0.0,
            issue_date: String::new(),
            expiry_date: String::new(),
            document_link: String::new(),
            notes: String::new(),
        }
    }

    /// 以现有技术条件预填，日期截取为日历日。
    pub fn from_permit(permit: &TechnicalCondition) -> Self {
        let day = |value: Option<&str>| {
            value
                .and_then(parse_day)
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };
        Self {
            organization_id: Some(permit.organization_id),
            object_id: permit.object_id,
            tc_type: permit.tc_type,
            resource_type: permit.resource_type,
            tc_number: permit.tc_number.clone(),
            power_amount: permit.power_amount,
            issue_date: day(permit.issue_date.as_deref()),
            expiry_date: day(permit.expiry_date.as_deref()),
            document_link: permit.document_link.clone().unwrap_or_default(),
            notes: permit.notes.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<TechnicalConditionRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.organization_id.is_none() {
            errors.add("organization_id", "Выберите организацию");
        }
        if self.object_id.is_none() {
            errors.add("object_id", "Выберите объект выдачи");
        }
        if self.tc_number.is_empty() {
            errors.add("tc_number", "Введите номер ТУ");
        }
        if !self.power_amount.is_finite() || self.power_amount < 0.1 {
            errors.add("power_amount", "Мощность должна быть больше 0");
        }
        let issue_date = to_utc_midnight(&self.issue_date);
        if self.issue_date.trim().is_empty() {
            errors.add("issue_date", "Выберите дату выдачи");
        } else if issue_date.is_none() {
            errors.add("issue_date", "Некорректная дата");
        }
        let expiry_date = match self.tc_type {
            TcType::Permanent => None,
            TcType::Temporary => {
                let parsed = to_utc_midnight(&self.expiry_date);
                if self.expiry_date.trim().is_empty() {
                    errors.add("expiry_date", "Выберите дату окончания");
                } else if parsed.is_none() {
                    errors.add("expiry_date", "Некорректная дата");
                }
                parsed
            }
        };

        let (Some(organization_id), Some(object_id), Some(issue_date)) =
            (self.organization_id, self.object_id, issue_date)
        else {
            return Err(errors);
        };
        errors.finish(|| TechnicalConditionRequest {
            organization_id,
            object_id,
            tc_type: self.tc_type,
            resource_type: self.resource_type,
            tc_number: self.tc_number.clone(),
            power_amount: self.power_amount,
            issue_date,
            expiry_date,
            document_link: non_blank(&self.document_link),
            notes: non_blank(&self.notes),
        })
    }
}

/// 日期 → 当天 UTC 零点的 RFC 3339 时间戳，例如 `2024-03-05T00:00:00.000Z`。
pub fn to_utc_midnight(value: &str) -> Option<String> {
    let date = parse_day(value)?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(
        midnight
            .and_utc()
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}
