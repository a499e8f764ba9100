use crate::utils::validation::validate_required;
use leptos::*;

pub const MIN_PASSWORD_LENGTH: usize = 6;

pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Confirm Password is required";
pub const PASSWORDS_MUST_MATCH: &str = "Passwords must match";

pub const RESET_SUCCESS_MESSAGE: &str = "Password reset successful, you can now login";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenStatus {
    #[default]
    Validating,
    Valid,
    Invalid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetPasswordErrors {
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl ResetPasswordErrors {
    pub fn is_empty(&self) -> bool {
        self.password.is_none() && self.confirm_password.is_none()
    }
}

pub fn validate_password(password: &str) -> Option<String> {
    validate_required(password, PASSWORD_REQUIRED).or_else(|| {
        (password.chars().count() < MIN_PASSWORD_LENGTH).then(|| PASSWORD_TOO_SHORT.to_string())
    })
}

pub fn validate_confirm_password(password: &str, confirm_password: &str) -> Option<String> {
    validate_required(confirm_password, CONFIRM_PASSWORD_REQUIRED)
        .or_else(|| (confirm_password != password).then(|| PASSWORDS_MUST_MATCH.to_string()))
}

pub fn validate_reset_form(form: &ResetPasswordForm) -> ResetPasswordErrors {
    ResetPasswordErrors {
        password: validate_password(&form.password),
        confirm_password: validate_confirm_password(&form.password, &form.confirm_password),
    }
}

/// Field values plus the touched flags that gate error display.
#[derive(Clone, Copy)]
pub struct ResetPasswordFormState {
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub password_touched: RwSignal<bool>,
    pub confirm_password_touched: RwSignal<bool>,
}

impl Default for ResetPasswordFormState {
    fn default() -> Self {
        Self {
            password: create_rw_signal(String::new()),
            confirm_password: create_rw_signal(String::new()),
            password_touched: create_rw_signal(false),
            confirm_password_touched: create_rw_signal(false),
        }
    }
}

impl ResetPasswordFormState {
    pub fn snapshot(&self) -> ResetPasswordForm {
        ResetPasswordForm {
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
        }
    }

    pub fn touch_all(&self) {
        self.password_touched.set(true);
        self.confirm_password_touched.set(true);
    }
}
