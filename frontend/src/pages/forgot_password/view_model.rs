use super::repository::ForgotPasswordRepository;
use crate::{
    api::{ApiClient, ApiError},
    state::alert::{use_alert_service, AlertOptions},
    utils::validation::validate_email,
};
use leptos::*;
use std::rc::Rc;

pub const RESET_EMAIL_SENT: &str = "Please check your email for password reset instructions";

#[derive(Clone, Copy)]
pub struct ForgotPasswordViewModel {
    pub email: RwSignal<String>,
    pub email_touched: RwSignal<bool>,
    pub email_error: Memo<Option<String>>,
    pub submit_action: Action<String, Result<(), ApiError>>,
}

impl ForgotPasswordViewModel {
    pub fn submit(&self) -> bool {
        if self.submit_action.pending().get_untracked() {
            return false;
        }
        self.email_touched.set(true);
        let email = self.email.get_untracked();
        if validate_email(&email).is_some() {
            return false;
        }
        self.submit_action.dispatch(email.trim().to_string());
        true
    }
}

pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ForgotPasswordRepository::new_with_client(Rc::new(api));
    let alerts = use_alert_service();

    let email = create_rw_signal(String::new());
    let email_touched = create_rw_signal(false);
    let email_error = create_memo(move |_| validate_email(&email.get()));

    let submit_action = create_action(move |value: &String| {
        let repo = repository.clone();
        let value = value.clone();
        async move {
            alerts.clear();
            match repo.request_reset(value).await {
                Ok(()) => {
                    alerts.success(RESET_EMAIL_SENT, AlertOptions::default());
                    Ok(())
                }
                Err(err) => {
                    log::warn!("forgot-password request failed: {}", err);
                    alerts.error(err.to_string());
                    Err(err)
                }
            }
        }
    });

    ForgotPasswordViewModel {
        email,
        email_touched,
        email_error,
        submit_action,
    }
}
