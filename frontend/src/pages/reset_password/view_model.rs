use super::{
    repository::ResetPasswordRepository,
    utils::{
        validate_reset_form, ResetPasswordErrors, ResetPasswordForm, ResetPasswordFormState,
        TokenStatus, RESET_SUCCESS_MESSAGE,
    },
};
use crate::{
    api::{ApiClient, ApiError},
    router::LOGIN_PATH,
    state::alert::{use_alert_service, AlertOptions},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ResetPasswordViewModel {
    pub token: RwSignal<Option<String>>,
    pub token_status: RwSignal<TokenStatus>,
    pub form: ResetPasswordFormState,
    pub errors: Memo<ResetPasswordErrors>,
    pub validate_action: Action<Option<String>, ()>,
    pub submit_action: Action<ResetPasswordForm, Result<(), ApiError>>,
}

impl ResetPasswordViewModel {
    pub fn validate_token(&self, token: Option<String>) {
        self.validate_action.dispatch(token);
    }

    /// Touches every field and dispatches the reset when the form is valid.
    /// Returns whether a request was sent.
    pub fn submit(&self) -> bool {
        if self.submit_action.pending().get_untracked() {
            return false;
        }
        self.form.touch_all();
        let form = self.form.snapshot();
        if !validate_reset_form(&form).is_empty() {
            return false;
        }
        self.submit_action.dispatch(form);
        true
    }
}

/// `navigate` receives the route to move to once the password is reset.
pub fn use_reset_password_view_model(navigate: Callback<String>) -> ResetPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ResetPasswordRepository::new_with_client(Rc::new(api));
    let alerts = use_alert_service();

    let token = create_rw_signal(None::<String>);
    let token_status = create_rw_signal(TokenStatus::Validating);
    let form = ResetPasswordFormState::default();
    let errors = create_memo(move |_| {
        validate_reset_form(&ResetPasswordForm {
            password: form.password.get(),
            confirm_password: form.confirm_password.get(),
        })
    });

    let repo_for_validate = repository.clone();
    let validate_action = create_action(move |candidate: &Option<String>| {
        let repo = repo_for_validate.clone();
        let candidate = candidate.clone();
        async move {
            match repo.validate_token(candidate.clone()).await {
                Ok(()) => {
                    token.set(candidate);
                    token_status.set(TokenStatus::Valid);
                }
                Err(err) => {
                    log::info!("reset token rejected: {}", err);
                    token_status.set(TokenStatus::Invalid);
                }
            }
        }
    });

    let repo_for_submit = repository;
    let submit_action = create_action(move |value: &ResetPasswordForm| {
        let repo = repo_for_submit.clone();
        let token = token.get_untracked().unwrap_or_default();
        let value = value.clone();
        async move {
            alerts.clear();
            match repo.reset_password(token, value).await {
                Ok(()) => {
                    alerts.success(
                        RESET_SUCCESS_MESSAGE,
                        AlertOptions::keep_after_route_change(),
                    );
                    navigate.call(LOGIN_PATH.to_string());
                    Ok(())
                }
                Err(err) => {
                    log::warn!("password reset failed: {}", err);
                    alerts.error(err.to_string());
                    Err(err)
                }
            }
        }
    });

    ResetPasswordViewModel {
        token,
        token_status,
        form,
        errors,
        validate_action,
        submit_action,
    }
}
