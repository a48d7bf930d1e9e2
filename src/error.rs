//! Error types for the `optlab-rs` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, OptLabError>`.
//!
//! [`OptLabError`] covers:
//! - **API errors** — Structured error responses from the OptLab backend
//! - **HTTP status errors** — Unexpected status codes with response body
//! - **HTTP transport errors** — Network, TLS, timeout failures
//! - **JSON errors** — Deserialization failures
//! - **URL errors** — Malformed URL construction
//! - **Task errors** — Background report tasks that fail or time out
//! - **Invalid arguments** — Client-side validation errors
//!
//! The payoff engine itself is infallible: an uncomputable input yields an
//! empty curve, never an error (see [`crate::payoff`]).

use std::fmt;

/// Error response returned by the OptLab API.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    /// Category of the error (e.g. "Invalid Symbol").
    #[serde(default)]
    pub error_type: Option<String>,
    /// OptLab error code (e.g. "OL-404").
    #[serde(default)]
    pub error_code: Option<String>,
    /// Human-readable description of the error.
    #[serde(default)]
    pub error_message: Option<String>,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.error_code.as_deref().unwrap_or("UNKNOWN"),
            self.error_type.as_deref().unwrap_or("Unknown Error"),
            self.error_message.as_deref().unwrap_or("No message"),
        )
    }
}

/// All possible errors produced by the `optlab-rs` client.
#[derive(Debug, thiserror::Error)]
pub enum OptLabError {
    /// An error response returned by the OptLab REST API.
    #[error("API error: {0}")]
    Api(ApiErrorBody),

    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: reqwest::StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error building or parsing a URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// A background report task ended in the `failed` state.
    #[error("report task {task_id} failed: {reason}")]
    TaskFailed {
        /// Server-assigned task identifier.
        task_id: String,
        /// Failure reason reported by the task, if any.
        reason: String,
    },

    /// A background report task did not finish within the polling budget.
    #[error("report task {task_id} still pending after {attempts} polls")]
    TaskTimeout {
        /// Server-assigned task identifier.
        task_id: String,
        /// Number of polls performed before giving up.
        attempts: u32,
    },

    /// The caller provided an invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OptLabError>;
