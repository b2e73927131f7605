use domain::{
    ObjectType, PowerObject, ResourceType, TcStatus, TcType, TechnicalCondition, UserRole,
};
use tc_forms::{
    OrganizationForm, PowerObjectForm, TechnicalConditionForm, UserEditForm, UserForm,
    to_utc_midnight,
};
use tc_normalize::PowerUnit;

fn user_form() -> UserForm {
    UserForm {
        username: "ivan_petrov".to_string(),
        email: "ivan@example.com".to_string(),
        password: "Secret1".to_string(),
        role: UserRole::User,
        organization_name: "  ".to_string(),
    }
}

fn object(max_power_mw: f64, max_power_kw: f64) -> PowerObject {
    PowerObject {
        id: 4,
        name: "ПС Южная".to_string(),
        object_type: ObjectType::Substation,
        max_power_mw,
        max_power_kw,
        description: None,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn valid_user_form_builds_request() {
    let request = user_form().validate().expect("valid");
    assert_eq!(request.username, "ivan_petrov");
    assert_eq!(request.organization_name, None);
}

#[test]
fn user_form_reports_first_error_per_field() {
    let form = UserForm {
        username: "iv".to_string(),
        email: "not-an-email".to_string(),
        password: "secret1".to_string(),
        ..user_form()
    };
    let errors = form.validate().expect_err("invalid");
    assert_eq!(errors.errors().len(), 3);
    assert_eq!(
        errors.field("username").map(|e| e.message),
        Some("Имя пользователя должно содержать минимум 3 символа")
    );
    assert_eq!(
        errors.field("email").map(|e| e.message),
        Some("Введите корректный email адрес")
    );
    assert_eq!(
        errors.field("password").map(|e| e.message),
        Some("Пароль должен содержать хотя бы одну заглавную букву")
    );
}

#[test]
fn username_charset_and_password_digit_rules() {
    let form = UserForm {
        username: "иван".to_string(),
        password: "Secrets".to_string(),
        ..user_form()
    };
    let errors = form.validate().expect_err("invalid");
    assert_eq!(
        errors.field("username").map(|e| e.message),
        Some("Имя пользователя может содержать только буквы, цифры и нижнее подчеркивание")
    );
    assert_eq!(
        errors.field("password").map(|e| e.message),
        Some("Пароль должен содержать хотя бы одну цифру")
    );
}

#[test]
fn edit_form_omits_empty_password() {
    let form = UserEditForm {
        username: "ivan".to_string(),
        email: "ivan@example.com".to_string(),
        password: "   ".to_string(),
        role: UserRole::Admin,
        organization_name: "ТОО Альфа".to_string(),
    };
    let request = form.validate().expect("valid");
    assert_eq!(request.password, None);
    assert_eq!(request.organization_name.as_deref(), Some("ТОО Альфа"));

    let weak = UserEditForm {
        password: "abc".to_string(),
        ..form
    };
    let errors = weak.validate().expect_err("weak password");
    assert_eq!(
        errors.field("password").map(|e| e.message),
        Some("Минимум 6 символов")
    );
}

#[test]
fn organization_blank_fields_become_absent() {
    let form = OrganizationForm {
        name: "ТОО Альфа".to_string(),
        bin: "123456789012".to_string(),
        ..OrganizationForm::default()
    };
    let request = form.validate().expect("valid");
    assert_eq!(request.bin.as_deref(), Some("123456789012"));
    assert_eq!(request.address, None);

    let short = OrganizationForm {
        name: "А".to_string(),
        ..OrganizationForm::default()
    };
    assert!(short.validate().is_err());
}

#[test]
fn object_form_converts_selected_unit() {
    let form = PowerObjectForm {
        name: "ТП-7".to_string(),
        object_type: ObjectType::Tp,
        unit: PowerUnit::Kw,
        value: 630.0,
        description: String::new(),
    };
    let request = form.validate().expect("valid");
    assert_eq!(request.max_power_kw, 630.0);
    assert!((request.max_power_mw - 0.63).abs() < 1e-12);
    assert_eq!(form.preview(), "630 кВт = 0.630 МВт");

    let in_mw = form.with_unit(PowerUnit::Mw);
    assert_eq!(in_mw.unit, PowerUnit::Mw);
    assert!((in_mw.value - 0.63).abs() < 1e-12);
    let request = in_mw.validate().expect("valid");
    assert!((request.max_power_mw - 0.63).abs() < 1e-12);
    assert!((request.max_power_kw - 630.0).abs() < 1e-9);
}

#[test]
fn object_form_rejects_tiny_capacity_and_unknown_type() {
    let form = PowerObjectForm {
        name: "ТП-7".to_string(),
        object_type: ObjectType::Unknown,
        unit: PowerUnit::Mw,
        value: 0.001,
        description: String::new(),
    };
    let errors = form.validate().expect_err("invalid");
    assert!(errors.field("type").is_some());
    assert_eq!(
        errors.field("power_value").map(|e| e.message),
        Some("Мощность должна быть больше 0")
    );
}

#[test]
fn edit_form_infers_display_unit() {
    let large = PowerObjectForm::from_object(&object(2.0, 2000.0));
    assert_eq!((large.unit, large.value), (PowerUnit::Mw, 2.0));

    let exact = PowerObjectForm::from_object(&object(0.5, 500.0));
    assert_eq!((exact.unit, exact.value), (PowerUnit::Mw, 0.5));

    let small = PowerObjectForm::from_object(&object(0.0, 50.0));
    assert_eq!((small.unit, small.value), (PowerUnit::Kw, 50.0));
}

#[test]
fn permanent_permit_sends_null_expiry() {
    let form = TechnicalConditionForm {
        organization_id: Some(1),
        object_id: Some(2),
        tc_number: "ЭС-15".to_string(),
        power_amount: 150.0,
        issue_date: "2024-03-05".to_string(),
        expiry_date: "2025-03-05".to_string(),
        ..TechnicalConditionForm::new(TcType::Permanent, ResourceType::Electricity)
    };
    let request = form.validate().expect("valid");
    assert_eq!(request.issue_date, "2024-03-05T00:00:00.000Z");
    assert_eq!(request.expiry_date, None);
    let body = serde_json::to_value(&request).expect("json");
    assert!(body["expiry_date"].is_null());
}

#[test]
fn temporary_permit_requires_expiry() {
    let mut form = TechnicalConditionForm {
        organization_id: Some(1),
        object_id: Some(2),
        tc_number: "ВС-3".to_string(),
        power_amount: 2.5,
        issue_date: "2024-03-05".to_string(),
        ..TechnicalConditionForm::new(TcType::Temporary, ResourceType::Water)
    };
    let errors = form.validate().expect_err("missing expiry");
    assert_eq!(
        errors.field("expiry_date").map(|e| e.message),
        Some("Выберите дату окончания")
    );

    form.expiry_date = "2024-12-31".to_string();
    let request = form.validate().expect("valid");
    assert_eq!(request.expiry_date.as_deref(), Some("2024-12-31T00:00:00.000Z"));
}

#[test]
fn empty_permit_form_lists_every_required_field() {
    let form = TechnicalConditionForm::new(TcType::Permanent, ResourceType::Electricity);
    let errors = form.validate().expect_err("invalid");
    let fields: Vec<&str> = errors.errors().iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec!["organization_id", "object_id", "tc_number", "power_amount", "issue_date"]
    );
}

#[test]
fn permit_form_prefills_calendar_days() {
    let permit = TechnicalCondition {
        id: 9,
        organization_id: 1,
        organization_name: None,
        object_id: Some(2),
        object_name: None,
        tc_type: TcType::Temporary,
        resource_type: ResourceType::Electricity,
        tc_number: "ЭС-9".to_string(),
        power_amount: 80.0,
        issue_date: Some("2024-01-10T00:00:00Z".to_string()),
        expiry_date: Some("2024-06-30T00:00:00Z".to_string()),
        status: TcStatus::Active,
        document_link: None,
        notes: Some("срочно".to_string()),
        created_by: None,
        created_at: None,
        updated_at: None,
    };
    let form = TechnicalConditionForm::from_permit(&permit);
    assert_eq!(form.issue_date, "2024-01-10");
    assert_eq!(form.expiry_date, "2024-06-30");
    assert_eq!(form.notes, "срочно");
    assert!(form.validate().is_ok());
}

#[test]
fn midnight_conversion_rejects_garbage() {
    assert_eq!(to_utc_midnight("garbage"), None);
    assert_eq!(
        to_utc_midnight("2026-10-16").as_deref(),
        Some("2026-10-16T00:00:00.000Z")
    );
}
