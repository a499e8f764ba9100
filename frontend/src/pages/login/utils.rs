use crate::utils::validation::{validate_email, validate_required};
use leptos::*;

pub const PASSWORD_REQUIRED: &str = "Password is required";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_credentials(email: &str, password: &str) -> LoginErrors {
    LoginErrors {
        email: validate_email(email),
        password: validate_required(password, PASSWORD_REQUIRED),
    }
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub email_touched: RwSignal<bool>,
    pub password_touched: RwSignal<bool>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            email_touched: create_rw_signal(false),
            password_touched: create_rw_signal(false),
        }
    }
}

impl LoginFormState {
    pub fn touch_all(&self) {
        self.email_touched.set(true);
        self.password_touched.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::{EMAIL_INVALID, EMAIL_REQUIRED};

    #[test]
    fn empty_credentials_report_both_fields() {
        let errors = validate_credentials("", "");
        assert_eq!(errors.email.as_deref(), Some(EMAIL_REQUIRED));
        assert_eq!(errors.password.as_deref(), Some(PASSWORD_REQUIRED));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let errors = validate_credentials("alice", "secret");
        assert_eq!(errors.email.as_deref(), Some(EMAIL_INVALID));
        assert!(errors.password.is_none());
    }

    #[test]
    fn valid_credentials_pass() {
        assert!(validate_credentials("alice@example.com", "secret").is_empty());
    }
}
