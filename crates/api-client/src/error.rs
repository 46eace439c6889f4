//! Client error type and HTTP error normalization.

use quakelog_protocol::ErrorResponse;
use serde_json::Value;

/// Errors from the game-log API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never completed (connection refused, reset, DNS...).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response carrying an `{"error": ...}` body.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Non-2xx response without a usable `error` field.
    #[error("HTTP error! Status: {status}")]
    Status { status: u16 },

    /// 2xx response whose body could not be decoded.
    #[error("invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::Status { status } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            Error::Json(_) | Error::Io(_) => None,
        }
    }
}

/// Builds the error for a non-2xx response from its status and raw body.
///
/// A JSON body with a truthy `error` field wins: strings are used as-is,
/// other values by their JSON text. `null`, `false`, `0`, `""` and bodies
/// that are not JSON collapse to the generic status message.
pub fn normalize_error(status: u16, body: &[u8]) -> Error {
    let error = serde_json::from_slice::<ErrorResponse>(body)
        .ok()
        .and_then(|resp| resp.error);
    match error.and_then(error_message) {
        Some(message) => Error::Api { status, message },
        None => Error::Status { status },
    }
}

fn error_message(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        v @ (Value::Array(_) | Value::Object(_)) => Some(v.to_string()),
        _ => None,
    }
}
