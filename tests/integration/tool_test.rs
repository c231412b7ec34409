//! Integration tests for the tool inventory.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_tool_names_are_unique() {
    let app = TestApp::new().await;
    let name = format!("Pipe wrench {}", Uuid::new_v4());

    let first = app
        .request("POST", "/api/tools", Some(json!({ "name": name })))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.data()["quantity"], 1);

    let second = app
        .request("POST", "/api/tools", Some(json!({ "name": name, "quantity": 3 })))
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}
