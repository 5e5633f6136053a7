//! # Common Error Types
//!
//! Normalized error handling for the social API client.
//!
//! Backend error payloads come in several shapes: a bare string, an object
//! with a `detail` or `error` key, or an object of field errors such as
//! `{"username": ["already taken"]}`. They are normalized into [`ApiError`]
//! right after a response is received, so callers match on one enum instead of
//! inspecting JSON.
//!
//! ## Error Categories
//!
//! - **Network**: no response received (connection refused, DNS, TLS)
//! - **Validation**: 4xx other than 401, with field-level messages
//! - **AuthExpired**: 401 on a request that was already retried once
//! - **AuthFailed**: the session could not be renewed, so it was terminated
//! - **Server**: 5xx or any other unexpected status
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use social_client::core::error::ApiError;
//!
//! fn field_message(err: &ApiError, field: &str) -> Option<String> {
//!     match err {
//!         ApiError::Validation { fields, .. } => fields.get(field)?.first().cloned(),
//!         _ => None,
//!     }
//! }
//! ```

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Field name → messages, as reported by the backend.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Error type for every call made through the social API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend rejected the request (4xx other than 401).
    #[error("Validation error ({status}): {}", describe_validation(.detail, .fields))]
    Validation {
        status: StatusCode,
        detail: Option<String>,
        fields: FieldErrors,
    },

    /// 401 on a request that had already been retried with a fresh token.
    #[error("Authentication expired")]
    AuthExpired,

    /// The session could not be renewed and has been cleared.
    #[error("Authentication failed: {0}")]
    AuthFailed(AuthFailure),

    /// 5xx, or a status the client does not otherwise classify.
    #[error("Server error ({status}): {body}")]
    Server { status: StatusCode, body: String },

    /// A success response whose body did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Input rejected locally before anything was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The session store could not be read or written.
    #[error("Session storage error: {0}")]
    Storage(String),

    /// The HTTP transport could not be built.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Why a session was terminated.
#[derive(Debug, Error)]
pub enum AuthFailure {
    #[error("no refresh token available")]
    MissingRefreshToken,

    #[error("token refresh failed: {0}")]
    Refresh(#[source] Box<ApiError>),
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Classify a non-success response.
    ///
    /// A 401 only reaches this point once the refresh-and-retry path is
    /// exhausted, so it maps to `AuthExpired`.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            return ApiError::AuthExpired;
        }

        if status.is_client_error() {
            let (detail, fields) = normalize_payload(body);
            return ApiError::Validation {
                status,
                detail,
                fields,
            };
        }

        ApiError::Server {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        }
    }

    /// HTTP status behind this error, if there was a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Validation { status, .. } | ApiError::Server { status, .. } => Some(*status),
            ApiError::AuthExpired => Some(StatusCode::UNAUTHORIZED),
            _ => None,
        }
    }

    /// True when the session was terminated and the user has to log in again.
    pub fn is_session_terminated(&self) -> bool {
        matches!(self, ApiError::AuthFailed(_))
    }

    /// Messages reported for one form field.
    pub fn field_errors(&self, field: &str) -> &[String] {
        match self {
            ApiError::Validation { fields, .. } => {
                fields.get(field).map(Vec::as_slice).unwrap_or_default()
            }
            _ => &[],
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if err.is_builder() {
            ApiError::Config(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Split an error body into a general message and per-field messages.
fn normalize_payload(body: &[u8]) -> (Option<String>, FieldErrors) {
    let mut fields = FieldErrors::new();

    let value = match serde_json::from_slice::<Value>(body) {
        Ok(value) => value,
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            return ((!text.is_empty()).then_some(text), fields);
        }
    };

    match value {
        Value::String(text) => (Some(text), fields),
        Value::Object(map) => {
            let mut detail = None;
            for (key, value) in map {
                match key.as_str() {
                    "detail" | "error" | "message" if detail.is_none() => {
                        detail = messages(&value).into_iter().next();
                    }
                    _ => {
                        fields.insert(key, messages(&value));
                    }
                }
            }
            (detail, fields)
        }
        Value::Array(_) => (messages(&value).into_iter().next(), fields),
        Value::Null => (None, fields),
        other => (Some(other.to_string()), fields),
    }
}

fn messages(value: &Value) -> Vec<String> {
    match value {
        Value::String(text) => vec![text.clone()],
        Value::Array(items) => items.iter().flat_map(messages).collect(),
        Value::Null => Vec::new(),
        other => vec![other.to_string()],
    }
}

fn describe_validation(detail: &Option<String>, fields: &FieldErrors) -> String {
    if let Some(detail) = detail {
        return detail.clone();
    }

    fields
        .iter()
        .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
