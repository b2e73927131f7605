use chrono::NaiveDate;
use domain::{EntityId, ResourceType, TcStatus, TcType, TechnicalCondition};
use tc_export::{
    ExportError, ExportRow, ExportScope, Exporter, PERMANENT_LABEL, SheetWriter, export_file_name,
    export_rows,
};

fn permit(id: EntityId) -> TechnicalCondition {
    TechnicalCondition {
        id,
        organization_id: 1,
        organization_name: Some("ТОО Альфа".to_string()),
        object_id: Some(2),
        object_name: Some("ПС Северная".to_string()),
        tc_type: TcType::Permanent,
        resource_type: ResourceType::Electricity,
        tc_number: format!("ЭС-{id}"),
        power_amount: 150.5,
        issue_date: Some("2024-03-05T00:00:00Z".to_string()),
        expiry_date: None,
        status: TcStatus::Active,
        document_link: None,
        notes: None,
        created_by: None,
        created_at: None,
        updated_at: None,
    }
}

struct FailingWriter;

impl SheetWriter for FailingWriter {
    fn write(&self, _rows: &[ExportRow]) -> Result<Vec<u8>, ExportError> {
        Err(ExportError::Sheet("disk full".to_string()))
    }
}

#[test]
fn rows_follow_column_conventions() {
    let mut temporary = permit(2);
    temporary.tc_type = TcType::Temporary;
    temporary.expiry_date = Some("2025-12-31".to_string());
    temporary.notes = Some("до ввода ПС".to_string());
    temporary.organization_name = None;
    temporary.issue_date = None;
    temporary.status = TcStatus::Expired;

    let permits = vec![permit(1), temporary];
    let rows = export_rows(&permits);
    assert_eq!(rows.len(), permits.len());

    assert_eq!(rows[0].organization, "ТОО Альфа");
    assert_eq!(rows[0].tc_number, "ЭС-1");
    assert_eq!(rows[0].object, "ПС Северная");
    assert_eq!(rows[0].issue_date, "05.03.2024");
    assert_eq!(rows[0].expiry_date, PERMANENT_LABEL);
    assert_eq!(rows[0].status, "Действует");
    assert_eq!(rows[0].power_amount, 150.5);
    assert_eq!(rows[0].notes, "-");

    assert_eq!(rows[1].organization, "-");
    assert_eq!(rows[1].issue_date, "-");
    assert_eq!(rows[1].expiry_date, "31.12.2025");
    assert_eq!(rows[1].status, "Истекло");
    assert_eq!(rows[1].notes, "до ввода ПС");
}

#[test]
fn file_name_embeds_resource_scope_and_date() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).expect("date");
    assert_eq!(
        export_file_name(
            ResourceType::Electricity,
            ExportScope::Kind(TcType::Permanent),
            today
        ),
        "tc_electricity_permanent_16-10-2026.xlsx"
    );
    assert_eq!(
        export_file_name(ResourceType::Water, ExportScope::All, today),
        "tc_water_all_16-10-2026.xlsx"
    );
}

#[test]
fn xlsx_export_produces_zip_container_and_resets_flag() {
    let exporter = Exporter::default();
    let permits = vec![permit(1), permit(2), permit(3)];
    let bytes = exporter.export(&permits).expect("export");
    assert!(bytes.starts_with(b"PK"));
    assert!(!exporter.is_exporting());
}

#[test]
fn empty_export_still_writes_header_sheet() {
    let exporter = Exporter::default();
    let none: Vec<TechnicalCondition> = Vec::new();
    let bytes = exporter.export(&none).expect("export");
    assert!(!bytes.is_empty());
}

#[test]
fn failing_writer_resets_flag() {
    let exporter = Exporter::new(FailingWriter);
    let err = exporter.export(&[permit(1)]).expect_err("fails");
    assert!(matches!(err, ExportError::Sheet(_)));
    assert!(!exporter.is_exporting());

    // 失败后可以再次导出。
    assert!(exporter.export(&[permit(1)]).is_err());
    assert!(!exporter.is_exporting());
}

#[test]
fn export_to_dir_writes_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let target = dir.path().join("exports");
    let exporter = Exporter::default();
    let path = exporter
        .export_to_dir(&target, "tc_water_all_16-10-2026.xlsx", &[permit(1)])
        .expect("export");
    assert_eq!(path, target.join("tc_water_all_16-10-2026.xlsx"));
    let written = std::fs::read(&path).expect("read");
    assert!(written.starts_with(b"PK"));
    assert!(!exporter.is_exporting());
}
