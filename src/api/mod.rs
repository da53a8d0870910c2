//! HTTP API module for the timecard engine.
//!
//! This module exposes the toggle, note-edit, and monthly-summary
//! operations over a small axum router.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{NotesRequest, ToggleRequest};
pub use response::ApiError;
pub use state::AppState;
