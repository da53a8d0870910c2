//! Error types for the timecard engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Only configuration loading and persistence can fail; the calculation
//! functions are total and never return an error.

use thiserror::Error;

/// The main error type for the timecard engine.
///
/// # Example
///
/// ```
/// use timecard_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No rates file exists at the configured path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The missing path.
        path: String,
    },

    /// The rates file exists but is not valid YAML for [`RateConfig`].
    ///
    /// [`RateConfig`]: crate::config::RateConfig
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The stored timesheet for a user could not be read.
    #[error("Failed to read timesheet for user '{user_id}': {message}")]
    StoreReadError {
        /// The user whose timesheet was requested.
        user_id: String,
        /// A description of the I/O error.
        message: String,
    },

    /// The stored timesheet for a user could not be written.
    #[error("Failed to write timesheet for user '{user_id}': {message}")]
    StoreWriteError {
        /// The user whose timesheet was being saved.
        user_id: String,
        /// A description of the I/O error.
        message: String,
    },

    /// The stored timesheet for a user contained invalid JSON.
    #[error("Stored timesheet for user '{user_id}' is corrupt: {message}")]
    StoreCorrupt {
        /// The user whose timesheet failed to parse.
        user_id: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
