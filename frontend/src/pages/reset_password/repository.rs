use super::utils::ResetPasswordForm;
use crate::api::{ApiClient, ApiError, ResetPasswordRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct ResetPasswordRepository {
    client: Rc<ApiClient>,
}

impl ResetPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn validate_token(&self, token: Option<String>) -> Result<(), ApiError> {
        self.client.validate_reset_token(token).await
    }

    pub async fn reset_password(
        &self,
        token: String,
        form: ResetPasswordForm,
    ) -> Result<(), ApiError> {
        self.client
            .reset_password(&ResetPasswordRequest {
                token,
                password: form.password,
                confirm_password: form.confirm_password,
            })
            .await
    }
}
