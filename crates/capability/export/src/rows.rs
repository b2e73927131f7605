use domain::TechnicalCondition;
use tc_normalize::{MISSING, format_date, status_label};

/// 无到期日的技术条件在“到期日”列显示的文本。
pub const PERMANENT_LABEL: &str = "Постоянный";

/// 列标题与列宽，顺序即导出列顺序。
pub const COLUMNS: [(&str, f64); 8] = [
    ("Организация", 35.0),
    ("Номер ТУ", 15.0),
    ("Объект", 25.0),
    ("Дата выдачи", 14.0),
    ("Дата окончания", 16.0),
    ("Статус", 12.0),
    ("Мощность", 12.0),
    ("Примечания", 40.0),
];

/// 导出表格的一行。
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub organization: String,
    pub tc_number: String,
    pub object: String,
    pub issue_date: String,
    pub expiry_date: String,
    pub status: &'static str,
    pub power_amount: f64,
    pub notes: String,
}

impl ExportRow {
    pub fn from_permit(permit: &TechnicalCondition) -> Self {
        Self {
            organization: text_or_missing(permit.organization_name.as_deref()),
            tc_number: text_or_missing(Some(&permit.tc_number)),
            object: text_or_missing(permit.object_name.as_deref()),
            issue_date: format_date(permit.issue_date.as_deref()),
            expiry_date: match permit.expiry_date.as_deref() {
                Some(expiry) if !expiry.trim().is_empty() => format_date(Some(expiry)),
                _ => PERMANENT_LABEL.to_string(),
            },
            status: status_label(permit.status),
            power_amount: permit.power_amount,
            notes: text_or_missing(permit.notes.as_deref()),
        }
    }
}

fn text_or_missing(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => MISSING.to_string(),
    }
}

/// 每个技术条件一行，顺序不变。
pub fn export_rows<'a, I>(permits: I) -> Vec<ExportRow>
where
    I: IntoIterator<Item = &'a TechnicalCondition>,
{
    permits.into_iter().map(ExportRow::from_permit).collect()
}
