//! 用户表单。

use crate::errors::ValidationErrors;
use crate::non_blank;
use api_contract::{CreateUserRequest, UpdateUserRequest};
use domain::{User, UserRole};

struct PasswordMessages {
    too_short: &'static str,
    uppercase: &'static str,
    lowercase: &'static str,
    digit: &'static str,
}

const CREATE_PASSWORD: PasswordMessages = PasswordMessages {
    too_short: "Пароль должен содержать минимум 6 символов",
    uppercase: "Пароль должен содержать хотя бы одну заглавную букву",
    lowercase: "Пароль должен содержать хотя бы одну строчную букву",
    digit: "Пароль должен содержать хотя бы одну цифру",
};

const EDIT_PASSWORD: PasswordMessages = PasswordMessages {
    too_short: "Минимум 6 символов",
    uppercase: "Нужна заглавная буква",
    lowercase: "Нужна строчная буква",
    digit: "Нужна цифра",
};

/// 新建用户表单。
#[derive(Debug, Clone, PartialEq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub organization_name: String,
}

impl UserForm {
    pub fn validate(&self) -> Result<CreateUserRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_username(
            &mut errors,
            &self.username,
            "Имя пользователя может содержать только буквы, цифры и нижнее подчеркивание",
        );
        if self.email.is_empty() {
            errors.add("email", "Email обязателен");
        } else if !is_email(&self.email) {
            errors.add("email", "Введите корректный email адрес");
        }
        check_password(&mut errors, &self.password, &CREATE_PASSWORD);

        errors.finish(|| CreateUserRequest {
            username: self.username.clone(),
            password: self.password.clone(),
            email: self.email.clone(),
            role: self.role,
            organization_name: non_blank(&self.organization_name),
        })
    }
}

/// 编辑用户表单；口令留空表示不修改。
#[derive(Debug, Clone, PartialEq)]
pub struct UserEditForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub organization_name: String,
}

impl UserEditForm {
    /// 以现有用户预填，口令为空。
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            password: String::new(),
            role: user.role,
            organization_name: user.organization_name.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<UpdateUserRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_username(&mut errors, &self.username, "Только буквы, цифры и _");
        if !is_email(&self.email) {
            errors.add("email", "Введите корректный email");
        }
        let password = non_blank(&self.password).map(|_| self.password.clone());
        if let Some(password) = password.as_deref() {
            check_password(&mut errors, password, &EDIT_PASSWORD);
        }

        errors.finish(|| UpdateUserRequest {
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role,
            organization_name: non_blank(&self.organization_name),
            password,
        })
    }
}

fn check_username(errors: &mut ValidationErrors, username: &str, charset_message: &'static str) {
    let length = username.chars().count();
    if length < 3 {
        errors.add("username", "Имя пользователя должно содержать минимум 3 символа");
    } else if length > 50 {
        errors.add("username", "Имя пользователя не может быть длиннее 50 символов");
    } else if !username
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    {
        errors.add("username", charset_message);
    }
}

fn check_password(errors: &mut ValidationErrors, password: &str, messages: &PasswordMessages) {
    if password.chars().count() < 6 {
        errors.add("password", messages.too_short);
    } else if !password.chars().any(|ch| ch.is_ascii_uppercase()) {
        errors.add("password", messages.uppercase);
    } else if !password.chars().any(|ch| ch.is_ascii_lowercase()) {
        errors.add("password", messages.lowercase);
    } else if !password.chars().any(|ch| ch.is_ascii_digit()) {
        errors.add("password", messages.digit);
    }
}

/// `local@domain.tld`，不含空白，域名至少有一个点且不以点开头或结尾。
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..")
}
