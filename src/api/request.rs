//! Request types for the timecard engine API.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::ToggleField;

/// Request body for `POST /toggle`.
///
/// # Example
///
/// ```
/// use timecard_engine::api::ToggleRequest;
///
/// let request: ToggleRequest = serde_json::from_str(
///     r#"{"user_id": "user_001", "date": "2026-01-12", "field": "overtime"}"#,
/// ).unwrap();
/// assert_eq!(request.user_id, "user_001");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleRequest {
    /// Opaque user identifier from the authentication collaborator.
    pub user_id: String,
    /// The calendar day being toggled, as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Which boolean flag to toggle.
    pub field: ToggleField,
}

/// Request body for `PUT /notes`.
#[derive(Debug, Clone, Deserialize)]
pub struct NotesRequest {
    /// Opaque user identifier from the authentication collaborator.
    pub user_id: String,
    /// The calendar day whose notes are being edited.
    pub date: NaiveDate,
    /// The full replacement note text.
    pub notes: String,
}
