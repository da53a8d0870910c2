//! HTTP request handlers for the timecard engine API.
//!
//! This module contains the handler functions for all API endpoints.
//!
//! Toggle and note-edit handlers mutate the in-memory document first and
//! then hand the merge partial to the store on a background task without
//! awaiting it: a failed or delayed save never blocks a response and
//! never touches the in-memory state, which stays authoritative for all
//! subsequent calculations.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{apply_toggle, summarize_month};
use crate::models::TimesheetDocument;
use crate::store::TimesheetStore;

use super::request::{NotesRequest, ToggleRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/toggle", post(toggle_handler))
        .route("/notes", put(notes_handler))
        .route("/summary/:user_id/:year/:month", get(summary_handler))
        .with_state(state)
}

/// Handler for POST /toggle.
///
/// Applies the toggle transition to the requested day and returns the
/// resulting entry. Weekend-blocked toggles return the entry unchanged.
async fn toggle_handler(
    State(state): State<AppState>,
    payload: Result<Json<ToggleRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        user_id = %request.user_id,
        date = %request.date,
        field = ?request.field,
        "Processing toggle request"
    );

    let result = state.with_document(&request.user_id, |document| {
        let current = document.entry_or_default(request.date);
        let next = apply_toggle(request.date, &current, request.field);
        // Weekend-blocked toggles change nothing; skip the write and the
        // save entirely.
        if next == current {
            return (next, None);
        }
        document.set_entry(request.date, next.clone());
        let partial = document.partial_for(request.date);
        (next, Some(partial))
    });

    match result {
        Ok((entry, Some(partial))) => {
            spawn_save(correlation_id, state.store(), request.user_id, partial);
            json_ok(entry)
        }
        Ok((entry, None)) => json_ok(entry),
        Err(err) => store_error_response(correlation_id, err),
    }
}

/// Handler for PUT /notes.
///
/// Sets the free-text notes for a day directly, bypassing the toggle
/// transition rules, and returns the resulting entry.
async fn notes_handler(
    State(state): State<AppState>,
    payload: Result<Json<NotesRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    info!(
        correlation_id = %correlation_id,
        user_id = %request.user_id,
        date = %request.date,
        "Processing note edit"
    );

    let result = state.with_document(&request.user_id, |document| {
        let entry = document.set_notes(request.date, &request.notes).clone();
        // Note edits save the full current document; any valid merge
        // input works under the store contract.
        (entry, document.clone())
    });

    match result {
        Ok((entry, full_document)) => {
            spawn_save(correlation_id, state.store(), request.user_id, full_document);
            json_ok(entry)
        }
        Err(err) => store_error_response(correlation_id, err),
    }
}

/// Handler for GET /summary/{user_id}/{year}/{month}.
///
/// Recomputes the aggregate for the requested month from the current
/// in-memory document. `month` is 0-based, consistent with the calendar
/// generator.
async fn summary_handler(
    State(state): State<AppState>,
    Path((user_id, year, month0)): Path<(String, i32, i32)>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        user_id = %user_id,
        year,
        month0,
        "Computing monthly summary"
    );

    let result = state.with_document(&user_id, |document| {
        summarize_month(year, month0, document, state.config())
    });

    match result {
        Ok(summary) => json_ok(summary),
        Err(err) => store_error_response(correlation_id, err),
    }
}

/// Hands a merge partial to the store without awaiting the outcome.
fn spawn_save(
    correlation_id: Uuid,
    store: Arc<dyn TimesheetStore>,
    user_id: String,
    partial: TimesheetDocument,
) {
    tokio::task::spawn_blocking(move || {
        if let Err(err) = store.save(&user_id, &partial) {
            warn!(
                correlation_id = %correlation_id,
                user_id = %user_id,
                error = %err,
                "Save failed; in-memory document remains authoritative"
            );
        }
    });
}

fn json_ok(body: impl serde::Serialize) -> axum::response::Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn store_error_response(
    correlation_id: Uuid,
    err: crate::error::EngineError,
) -> axum::response::Response {
    warn!(correlation_id = %correlation_id, error = %err, "Store access failed");
    ApiErrorResponse::from(err).into_response()
}

/// Maps a JSON extraction rejection to a consistent error response.
fn rejection_response(
    correlation_id: Uuid,
    rejection: JsonRejection,
) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
