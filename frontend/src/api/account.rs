use super::{
    client::ApiClient,
    types::{
        AccountResponse, ApiError, AuthenticateRequest, ForgotPasswordRequest,
        ResetPasswordRequest, ValidateResetTokenRequest,
    },
};

impl ApiClient {
    pub async fn validate_reset_token(&self, token: Option<String>) -> Result<(), ApiError> {
        self.post(
            "/accounts/validate-reset-token",
            &ValidateResetTokenRequest { token },
        )
        .await
        .map(|_| ())
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.post("/accounts/reset-password", request)
            .await
            .map(|_| ())
    }

    pub async fn forgot_password(&self, email: String) -> Result<(), ApiError> {
        self.post("/accounts/forgot-password", &ForgotPasswordRequest { email })
            .await
            .map(|_| ())
    }

    pub async fn authenticate(
        &self,
        request: &AuthenticateRequest,
    ) -> Result<AccountResponse, ApiError> {
        self.post_json("/accounts/authenticate", request).await
    }
}
