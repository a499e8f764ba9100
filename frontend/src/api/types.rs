use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateResetTokenRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticateRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub jwt_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    /// Non-2xx response whose body carried no usable message.
    pub fn http_status(status: u16) -> Self {
        Self::with_code(
            format!("Request failed with status {}", status),
            format!("HTTP_{}", status),
        )
    }

    fn with_code(msg: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: code.into(),
            details: None,
        }
    }
}

/// Error payload as sent by the account service. Older endpoints answer with
/// `{ "message": .. }`, newer ones with `{ "error": .., "code": .. }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(alias = "message")]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
}

impl ErrorBody {
    pub(crate) fn into_api_error(self, status: u16) -> ApiError {
        match self.error.filter(|msg| !msg.trim().is_empty()) {
            Some(error) => ApiError {
                error,
                code: self.code.unwrap_or_else(|| format!("HTTP_{}", status)),
                details: self.details,
            },
            None => ApiError::http_status(status),
        }
    }
}
