use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    api::types::{ApiError, ErrorBody},
    config,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn post<B>(&self, path: &str, body: &B) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.resolved_base_url().await, path);
        log::debug!("POST {}", url);
        let request = self.client.post(&url).json(body);
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.post(path, body)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
    }

    async fn error_from_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let error = match response.json::<ErrorBody>().await {
            Ok(body) => body.into_api_error(status),
            Err(_) => ApiError::http_status(status),
        };
        log::warn!("request failed ({}): {}", status, error);
        error
    }
}
