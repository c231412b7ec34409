//! Integration tests for worker availability over HTTP.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

fn availability_path(worker_id: &str, start: &str, end: &str) -> String {
    format!("/api/workers/{worker_id}/availability?start=2026-03-02T{start}:00Z&end=2026-03-02T{end}:00Z")
}

fn available_path(start: &str, end: &str) -> String {
    format!("/api/workers/available?start=2026-03-02T{start}:00Z&end=2026-03-02T{end}:00Z")
}

fn listed(body: &serde_json::Value, id: &str) -> bool {
    body["data"]
        .as_array()
        .expect("list")
        .iter()
        .any(|w| w["id"] == id)
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_default_hours_scenario() {
    let app = TestApp::new().await;
    let worker = app.create_user("worker", Some("09:00:00"), Some("17:00:00")).await;

    let early = app.request("GET", &availability_path(&worker, "08:00", "10:00"), None).await;
    assert_eq!(early.status, StatusCode::OK);
    assert_eq!(early.data()["available"], false);
    assert_eq!(early.data()["reason"], "outside_default_hours");

    let morning = app.request("GET", &availability_path(&worker, "09:00", "12:00"), None).await;
    assert_eq!(morning.data()["available"], true);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_exception_scenario() {
    let app = TestApp::new().await;
    let worker = app.create_user("worker", None, None).await;

    let exception = app
        .request(
            "POST",
            &format!("/api/workers/{worker}/exceptions"),
            Some(json!({
                "start_time": "2026-03-02T10:00:00Z",
                "end_time": "2026-03-02T12:00:00Z",
                "is_unavailable": true,
                "reason": "Dentist",
            })),
        )
        .await;
    assert_eq!(exception.status, StatusCode::CREATED);

    let inside = app.request("GET", &availability_path(&worker, "11:00", "11:30"), None).await;
    assert_eq!(inside.data()["available"], false);
    assert_eq!(inside.data()["reason"], "blocked");
    assert_eq!(inside.data()["exception_id"], exception.data()["id"]);

    let after = app.request("GET", &availability_path(&worker, "12:00", "13:00"), None).await;
    assert_eq!(after.data()["available"], true);

    let free = app.request("GET", &available_path("12:00", "13:00"), None).await;
    assert!(listed(&free.body, &worker));
    let busy = app.request("GET", &available_path("11:00", "11:30"), None).await;
    assert!(!listed(&busy.body, &worker));

    let list = app
        .request("GET", &format!("/api/workers/{worker}/exceptions"), None)
        .await;
    assert_eq!(list.data().as_array().map(Vec::len), Some(1));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_contractor_is_never_available() {
    let app = TestApp::new().await;
    let contractor = app.create_user("contractor", None, None).await;

    let response = app
        .request("GET", &availability_path(&contractor, "10:00", "11:00"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["available"], false);
    assert_eq!(response.data()["reason"], "not_a_worker");

    let listing = app.request("GET", &available_path("10:00", "11:00"), None).await;
    assert!(!listed(&listing.body, &contractor));

    let exception = app
        .request(
            "POST",
            &format!("/api/workers/{contractor}/exceptions"),
            Some(json!({
                "start_time": "2026-03-02T10:00:00Z",
                "end_time": "2026-03-02T12:00:00Z",
            })),
        )
        .await;
    assert_eq!(exception.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_unknown_worker_is_not_found() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "GET",
            &availability_path(&Uuid::new_v4().to_string(), "10:00", "11:00"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_updating_default_hours_changes_availability() {
    let app = TestApp::new().await;
    let worker = app.create_user("worker", None, None).await;

    let before = app.request("GET", &availability_path(&worker, "06:00", "07:00"), None).await;
    assert_eq!(before.data()["available"], true);

    let updated = app
        .request(
            "PUT",
            &format!("/api/users/{worker}/default-hours"),
            Some(json!({
                "default_start_time": "08:00:00",
                "default_end_time": "16:00:00",
            })),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let after = app.request("GET", &availability_path(&worker, "06:00", "07:00"), None).await;
    assert_eq!(after.data()["available"], false);
}
