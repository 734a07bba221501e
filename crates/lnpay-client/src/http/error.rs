/*
[INPUT]:  Error sources (transport, LNPay error bodies, serialization, config)
[OUTPUT]: Structured error type whose API variant displays the server message
[POS]:    Error handling layer - unified error type for the entire crate
[UPDATE]: When adding new error sources or changing error body parsing
*/

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

/// Main error type for the LNPay client
#[derive(Error, Debug)]
pub enum LnpayError {
    /// No HTTP response was obtained (DNS, refused connection, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// LNPay answered with a non-2xx status.
    ///
    /// Displays as the server-provided message, verbatim.
    #[error("{message}")]
    Api {
        status: StatusCode,
        name: Option<String>,
        code: Option<i64>,
        message: String,
    },

    /// Success body did not match the expected response shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Client is missing something an operation needs
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error payload LNPay returns alongside a non-2xx status.
///
/// Each field is read on its own; a field of an unexpected type becomes
/// `None` without hiding the others.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub code: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<u16>,
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl LnpayError {
    /// Build an API error from a rejected response body.
    ///
    /// Falls back to the raw body, then the status reason phrase, when the
    /// body carries no `message`.
    pub fn from_response_body(status: StatusCode, body: &str) -> Self {
        let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();
        let (name, code, message) = match parsed {
            Some(ApiErrorBody {
                name,
                code,
                message: Some(message),
                ..
            }) => (name, code, message),
            Some(ApiErrorBody { name, code, .. }) => (name, code, fallback_message(status, body)),
            None => (None, None, fallback_message(status, body)),
        };

        LnpayError::Api {
            status,
            name,
            code,
            message,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        LnpayError::Api {
            status,
            name: None,
            code: None,
            message: message.into(),
        }
    }

    /// Check if the server rejected the request
    pub fn is_api_error(&self) -> bool {
        matches!(self, LnpayError::Api { .. })
    }

    /// HTTP status of the failed call, when one was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            LnpayError::Api { status, .. } => Some(*status),
            LnpayError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Check if repeating the same call could succeed.
    ///
    /// The client never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            LnpayError::Http(_) => true,
            LnpayError::Api { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

/// Result type alias for LNPay operations
pub type Result<T> = std::result::Result<T, LnpayError>;
