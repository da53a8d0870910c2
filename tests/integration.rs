//! Integration tests for the timecard engine HTTP API.
//!
//! These tests drive the full stack: router, in-memory documents, the
//! toggle transition rules, the monthly aggregation, and the JSON file
//! store behind it.

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use timecard_engine::api::{AppState, create_router};
use timecard_engine::config::RateConfig;
use timecard_engine::store::{JsonFileStore, TimesheetStore};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_router(dir: &std::path::Path) -> Router {
    let state = AppState::new(RateConfig::default(), JsonFileStore::new(dir));
    create_router(state)
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn send_json(router: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    read_response(response).await
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    read_response(response).await
}

async fn read_response(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();
    (status, json)
}

async fn toggle(router: &Router, user_id: &str, date: &str, field: &str) -> (StatusCode, Value) {
    send_json(
        router,
        "POST",
        "/toggle",
        json!({ "user_id": user_id, "date": date, "field": field }),
    )
    .await
}

fn assert_decimal_field(value: &Value, field: &str, expected: &str) {
    let actual = value[field].as_str().unwrap_or_else(|| {
        panic!("Expected string field '{}', got {:?}", field, value[field])
    });
    assert_eq!(
        dec(actual),
        dec(expected),
        "Expected {} = {}, got {}",
        field,
        expected,
        actual
    );
}

// =============================================================================
// Toggle transitions
// =============================================================================

#[tokio::test]
async fn toggle_worked_marks_a_weekday_shift() {
    let dir = tempfile::tempdir().unwrap();
    let router = create_test_router(dir.path());

    // 2026-01-12 is a Monday
    let (status, entry) = toggle(&router, "user_001", "2026-01-12", "worked").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(entry["worked"], true);
    assert_eq!(entry["overtime"], false);
    assert_eq!(entry["weekendWork"], false);
}

#[tokio::test]
async fn toggle_overtime_forces_worked_on() {
    let dir = tempfile::tempdir().unwrap();
    let router = create_test_router(dir.path());

    let (status, entry) = toggle(&router, "user_001", "2026-01-13", "overtime").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(entry["worked"], true);
    assert_eq!(entry["overtime"], true);
}

#[tokio::test]
async fn toggle_worked_off_clears_overtime() {
    let dir = tempfile::tempdir().unwrap();
    let router = create_test_router(dir.path());

    toggle(&router, "user_001", "2026-01-13", "overtime").await;
    let (status, entry) = toggle(&router, "user_001", "2026-01-13", "worked").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(entry["worked"], false);
    assert_eq!(entry["overtime"], false);
}

#[tokio::test]
async fn weekday_toggles_are_noops_on_weekends() {
    let dir = tempfile::tempdir().unwrap();
    let router = create_test_router(dir.path());

    // 2026-01-17 is a Saturday
    let (status, entry) = toggle(&router, "user_001", "2026-01-17", "worked").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(entry["worked"], false);

    let (_, entry) = toggle(&router, "user_001", "2026-01-17", "overtime").await;
    assert_eq!(entry["overtime"], false);

    let (_, entry) = toggle(&router, "user_001", "2026-01-17", "weekendWork").await;
    assert_eq!(entry["weekendWork"], true);
}

// =============================================================================
// Note edits
// =============================================================================

#[tokio::test]
async fn note_edit_bypasses_toggle_rules() {
    let dir = tempfile::tempdir().unwrap();
    let router = create_test_router(dir.path());

    toggle(&router, "user_001", "2026-01-12", "worked").await;

    let (status, entry) = send_json(
        &router,
        "PUT",
        "/notes",
        json!({ "user_id": "user_001", "date": "2026-01-12", "notes": "doctor at 16h" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(entry["notes"], "doctor at 16h");
    // Flags untouched by the note edit.
    assert_eq!(entry["worked"], true);
}

// =============================================================================
// Monthly summaries
// =============================================================================

#[tokio::test]
async fn summary_of_an_untouched_month_is_all_zero() {
    let dir = tempfile::tempdir().unwrap();
    let router = create_test_router(dir.path());

    let (status, summary) = get(&router, "/summary/user_001/2026/0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["worked_days"], 0);
    assert_eq!(summary["overtime_days"], 0);
    assert_eq!(summary["weekend_days"], 0);
    assert_decimal_field(&summary, "total_gross", "0");
    assert_decimal_field(&summary, "net_earnings", "0");
}

#[tokio::test]
async fn summary_aggregates_a_mixed_month() {
    let dir = tempfile::tempdir().unwrap();
    let router = create_test_router(dir.path());

    // Two weekday shifts (one with overtime), both weekend days.
    toggle(&router, "user_001", "2026-01-12", "worked").await;
    toggle(&router, "user_001", "2026-01-13", "overtime").await;
    toggle(&router, "user_001", "2026-01-17", "weekendWork").await;
    toggle(&router, "user_001", "2026-01-18", "weekendWork").await;

    let (status, summary) = get(&router, "/summary/user_001/2026/0").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["worked_days"], 2);
    assert_eq!(summary["overtime_days"], 1);
    assert_eq!(summary["weekend_days"], 2);

    // 78.00 + 110.076 + 111.78 + 126.36
    assert_decimal_field(&summary, "total_gross", "426.216");
    // 2.2 + 7.5 + 7.5
    assert_decimal_field(&summary, "total_extra_hours", "17.2");
    // 32.076 + 111.78 + 126.36
    assert_decimal_field(&summary, "total_extra_value", "270.216");
    // 426.216 * 0.11
    assert_decimal_field(&summary, "total_discount", "46.88376");
    assert_decimal_field(&summary, "net_earnings", "379.33224");
}

#[tokio::test]
async fn shipped_config_file_produces_the_same_rates_as_default() {
    use timecard_engine::config::ConfigLoader;

    let dir = tempfile::tempdir().unwrap();
    let config = ConfigLoader::load("./config/default/rates.yaml")
        .unwrap()
        .into_config();
    let state = AppState::new(config, JsonFileStore::new(dir.path()));
    let router = create_router(state);

    toggle(&router, "user_001", "2026-01-13", "overtime").await;

    let (_, summary) = get(&router, "/summary/user_001/2026/0").await;
    // 78.00 + (2.2 * 8.10 * 1.5 * 1.20)
    assert_decimal_field(&summary, "total_gross", "110.076");
}

#[tokio::test]
async fn summary_normalizes_out_of_range_months() {
    let dir = tempfile::tempdir().unwrap();
    let router = create_test_router(dir.path());

    toggle(&router, "user_001", "2026-01-12", "worked").await;

    let (_, direct) = get(&router, "/summary/user_001/2026/0").await;
    let (_, normalized) = get(&router, "/summary/user_001/2025/12").await;

    assert_eq!(direct, normalized);
}

#[tokio::test]
async fn summary_ignores_entries_from_other_months() {
    let dir = tempfile::tempdir().unwrap();
    let router = create_test_router(dir.path());

    toggle(&router, "user_001", "2026-01-12", "worked").await;
    toggle(&router, "user_001", "2026-02-02", "worked").await;

    let (_, summary) = get(&router, "/summary/user_001/2026/0").await;
    assert_eq!(summary["worked_days"], 1);
    assert_decimal_field(&summary, "total_gross", "78.00");
}

#[tokio::test]
async fn users_are_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let router = create_test_router(dir.path());

    toggle(&router, "user_001", "2026-01-12", "worked").await;

    let (_, summary) = get(&router, "/summary/user_002/2026/0").await;
    assert_eq!(summary["worked_days"], 0);
}

// =============================================================================
// Persistence
// =============================================================================

#[tokio::test]
async fn toggles_reach_the_store_without_blocking_the_response() {
    let dir = tempfile::tempdir().unwrap();
    let router = create_test_router(dir.path());

    toggle(&router, "user_001", "2026-01-12", "worked").await;

    // The save is fire-and-forget, so poll the store briefly.
    let store = JsonFileStore::new(dir.path());
    let date = chrono::NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
    for _ in 0..50 {
        let stored = store.load("user_001").unwrap();
        if stored.entry(date).is_some_and(|entry| entry.worked) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("Toggle was never persisted");
}

#[tokio::test]
async fn a_fresh_router_rehydrates_from_the_store() {
    let dir = tempfile::tempdir().unwrap();

    let mut doc = timecard_engine::models::TimesheetDocument::new();
    doc.set_entry(
        chrono::NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
        timecard_engine::models::DayEntry {
            worked: true,
            ..Default::default()
        },
    );
    JsonFileStore::new(dir.path()).save("user_001", &doc).unwrap();

    let router = create_test_router(dir.path());
    let (_, summary) = get(&router, "/summary/user_001/2026/0").await;

    assert_eq!(summary["worked_days"], 1);
    assert_decimal_field(&summary, "total_gross", "78.00");
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn malformed_json_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let router = create_test_router(dir.path());

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/toggle")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    let (status, body) = read_response(response).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn missing_field_returns_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let router = create_test_router(dir.path());

    let (status, body) = send_json(
        &router,
        "POST",
        "/toggle",
        json!({ "user_id": "user_001", "date": "2026-01-12" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unknown_toggle_field_returns_400() {
    let dir = tempfile::tempdir().unwrap();
    let router = create_test_router(dir.path());

    let (status, _) = toggle(&router, "user_001", "2026-01-12", "holiday").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn corrupt_stored_document_returns_500() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("user_001.json"), "{not json").unwrap();
    let router = create_test_router(dir.path());

    let (status, body) = get(&router, "/summary/user_001/2026/0").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "STORE_CORRUPT");
}
