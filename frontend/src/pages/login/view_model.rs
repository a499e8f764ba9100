use super::{
    repository::LoginRepository,
    utils::{validate_credentials, LoginErrors, LoginFormState},
};
use crate::{
    api::{AccountResponse, ApiClient, ApiError, AuthenticateRequest},
    config,
    state::alert::use_alert_service,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub errors: Memo<LoginErrors>,
    pub login_action: Action<AuthenticateRequest, Result<AccountResponse, ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        self.form.touch_all();
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();
        if !validate_credentials(&email, &password).is_empty() {
            return false;
        }
        self.login_action.dispatch(AuthenticateRequest {
            email: email.trim().to_string(),
            password,
        });
        true
    }
}

/// `on_redirect` receives the configured post-login URL.
pub fn use_login_view_model(on_redirect: Callback<String>) -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LoginRepository::new_with_client(Rc::new(api));
    let alerts = use_alert_service();

    let form = LoginFormState::default();
    let errors =
        create_memo(move |_| validate_credentials(&form.email.get(), &form.password.get()));

    let login_action = create_action(move |request: &AuthenticateRequest| {
        let repo = repository.clone();
        let request = request.clone();
        async move {
            alerts.clear();
            match repo.authenticate(request.email, request.password).await {
                Ok(account) => {
                    log::info!("signed in as {}", account.email);
                    on_redirect.call(config::after_login_url());
                    Ok(account)
                }
                Err(err) => {
                    log::warn!("sign-in failed: {}", err);
                    alerts.error(err.to_string());
                    Err(err)
                }
            }
        }
    });

    LoginViewModel {
        form,
        errors,
        login_action,
    }
}
