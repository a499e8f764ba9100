use crate::api::{AccountResponse, ApiClient, ApiError, AuthenticateRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn authenticate(
        &self,
        email: String,
        password: String,
    ) -> Result<AccountResponse, ApiError> {
        self.client
            .authenticate(&AuthenticateRequest { email, password })
            .await
    }
}
