//! Integration tests for job creation and the status lifecycle.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_new_job_starts_as_new_request() {
    let app = TestApp::new().await;
    let job_id = app.create_job().await;

    let response = app.request("GET", &format!("/api/jobs/{job_id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["status"], "new_request");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_job_for_unknown_client_is_not_found() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({
                "description": "Orphan job",
                "client_id": Uuid::new_v4(),
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_lifecycle_scenario() {
    let app = TestApp::new().await;
    let job_id = app.create_job().await;

    let approved = app.transition(&job_id, "approved").await;
    assert_eq!(approved.status, StatusCode::OK);
    assert_eq!(approved.data()["status"], "approved");

    let skipped = app.transition(&job_id, "in_progress").await;
    assert_eq!(skipped.status, StatusCode::BAD_REQUEST);
    assert_eq!(skipped.body["error"], "INVALID_TRANSITION");
    assert_eq!(skipped.body["details"]["current"], "approved");
    assert_eq!(skipped.body["details"]["requested"], "in_progress");

    let unchanged = app.request("GET", &format!("/api/jobs/{job_id}"), None).await;
    assert_eq!(unchanged.data()["status"], "approved");
    assert_eq!(unchanged.data()["updated_at"], approved.data()["updated_at"]);

    let scheduled = app.transition(&job_id, "scheduled").await;
    assert_eq!(scheduled.status, StatusCode::OK);
    assert_eq!(scheduled.data()["status"], "scheduled");

    let cancelled = app.transition(&job_id, "cancelled").await;
    assert_eq!(cancelled.status, StatusCode::OK);
    assert_eq!(cancelled.data()["status"], "cancelled");

    let revived = app.transition(&job_id, "approved").await;
    assert_eq!(revived.status, StatusCode::BAD_REQUEST);
    assert_eq!(revived.body["details"]["current"], "cancelled");
    assert_eq!(revived.body["details"]["requested"], "approved");

    let last = app.request("GET", &format!("/api/jobs/{job_id}"), None).await;
    assert_eq!(last.data()["status"], "cancelled");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_job_runs_to_completion() {
    let app = TestApp::new().await;
    let job_id = app.create_job().await;

    for step in ["approved", "scheduled", "in_progress", "completed"] {
        let response = app.transition(&job_id, step).await;
        assert_eq!(response.status, StatusCode::OK, "{step}: {:?}", response.body);
        assert_eq!(response.data()["status"], step);
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_cancelled_job_cannot_be_revived() {
    let app = TestApp::new().await;
    let job_id = app.create_job().await;

    assert_eq!(app.transition(&job_id, "cancelled").await.status, StatusCode::OK);

    for status in ["new_request", "approved", "scheduled", "in_progress", "completed", "cancelled"] {
        let response = app.transition(&job_id, status).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{status}");
    }
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_transition_of_unknown_job_is_not_found() {
    let app = TestApp::new().await;
    let response = app
        .transition(&Uuid::new_v4().to_string(), "approved")
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
