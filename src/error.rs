//! Error Types
//!
//! Request failures and form validation failures.

use serde_json::Value;
use thiserror::Error;

/// Failure of a REST call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed (fetch rejected)
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// The body could not be decoded
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from the raw response body.
    /// JSON bodies contribute their `error` or `message` field.
    pub fn from_status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| {
                ["error", "message"]
                    .iter()
                    .find_map(|key| json.get(*key).and_then(Value::as_str).map(str::to_string))
            })
            .unwrap_or_else(|| body.to_string());
        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided message, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Client-side form validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter both username and password")]
    MissingCredentials,
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Title and content cannot be empty")]
    MissingPostFields,
}
