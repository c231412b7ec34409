//! Integration tests for client registration.

use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use crate::helpers::{TestApp, unique_email};

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_and_fetch_client() {
    let app = TestApp::new().await;
    let email = unique_email("client");

    let created = app
        .request(
            "POST",
            "/api/clients",
            Some(json!({
                "full_name": "Ada Homeowner",
                "email": email,
                "address": "1 Main Street",
            })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["success"], true);

    let fetched = app
        .request("GET", &format!("/api/clients/{}", created.id()), None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.data()["email"], email.as_str());
    assert_eq!(fetched.data()["address"], "1 Main Street");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_duplicate_client_email_conflicts() {
    let app = TestApp::new().await;
    let body = json!({ "full_name": "Twice", "email": unique_email("dup") });

    let first = app.request("POST", "/api/clients", Some(body.clone())).await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app.request("POST", "/api/clients", Some(body)).await;
    assert_eq!(second.status, StatusCode::CONFLICT);
    assert_eq!(second.body["error"], "CONFLICT");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_unknown_client_is_not_found() {
    let app = TestApp::new().await;
    let response = app
        .request("GET", &format!("/api/clients/{}", Uuid::new_v4()), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_list_clients_includes_new_client() {
    let app = TestApp::new().await;
    let id = app.create_client().await;

    let response = app.request("GET", "/api/clients", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<&str> = response
        .data()
        .as_array()
        .expect("list")
        .iter()
        .filter_map(|c| c["id"].as_str())
        .collect();
    assert!(ids.contains(&id.as_str()));
}
