use crate::api::{ApiClient, ApiError};
use std::rc::Rc;

#[derive(Clone)]
pub struct ForgotPasswordRepository {
    client: Rc<ApiClient>,
}

impl ForgotPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn request_reset(&self, email: String) -> Result<(), ApiError> {
        self.client.forgot_password(email).await
    }
}
