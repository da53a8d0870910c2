//! Error response types for the timecard engine API.
//!
//! Success responses are plain `Json` bodies built in the handlers; only
//! the error shape is shared, so it lives here.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Stable code for programmatic handling.
    pub code: String,
    /// Human-readable summary.
    pub message: String,
    /// Optional extra context, omitted from the body when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error body with a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Attaches a details string to the error body.
    pub fn detail(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Shorthand for the `MALFORMED_JSON` code used by the body-parsing
    /// rejections.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// An [`ApiError`] paired with the HTTP status it is served under.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        // Config and store failures are all server-side faults; nothing a
        // caller sends can trigger them, so every variant maps to 500.
        let (code, message, details) = match error {
            EngineError::ConfigNotFound { path } => (
                "CONFIG_ERROR",
                "Configuration error".to_string(),
                format!("Configuration file not found: {}", path),
            ),
            EngineError::ConfigParseError { path, message } => (
                "CONFIG_ERROR",
                "Configuration parse error".to_string(),
                format!("Failed to parse {}: {}", path, message),
            ),
            EngineError::StoreReadError { user_id, message } => (
                "STORE_ERROR",
                format!("Failed to read timesheet for user '{}'", user_id),
                message,
            ),
            EngineError::StoreWriteError { user_id, message } => (
                "STORE_ERROR",
                format!("Failed to write timesheet for user '{}'", user_id),
                message,
            ),
            EngineError::StoreCorrupt { user_id, message } => (
                "STORE_CORRUPT",
                format!("Stored timesheet for user '{}' is corrupt", user_id),
                message,
            ),
        };
        ApiErrorResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError::new(code, message).detail(details),
        }
    }
}
