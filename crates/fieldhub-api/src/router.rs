//! Route definitions for the FieldHub HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the route tree and thread `state` through it.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(client_routes())
        .merge(job_routes())
        .merge(user_routes())
        .merge(tool_routes())
        .merge(worker_routes())
        .merge(health_routes());

    Router::new()
        .route("/", get(handlers::health::banner))
        .nest("/api", api_routes)
        .with_state(state)
}

/// Client registration and lookup
fn client_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/clients",
            post(handlers::clients::create_client).get(handlers::clients::list_clients),
        )
        .route("/clients/{id}", get(handlers::clients::get_client))
}

/// Job CRUD and status transitions
fn job_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/jobs",
            post(handlers::jobs::create_job).get(handlers::jobs::list_jobs),
        )
        .route("/jobs/{id}", get(handlers::jobs::get_job))
        .route("/jobs/{id}/transition", post(handlers::jobs::transition_job))
}

/// Users and their default hours
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::users::create_user))
        .route("/users/{id}", get(handlers::users::get_user))
        .route(
            "/users/{id}/default-hours",
            put(handlers::users::update_default_hours),
        )
}

/// Tool inventory
fn tool_routes() -> Router<AppState> {
    Router::new().route(
        "/tools",
        post(handlers::tools::create_tool).get(handlers::tools::list_tools),
    )
}

/// Availability exceptions and queries
fn worker_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/workers/available",
            get(handlers::workers::available_workers),
        )
        .route(
            "/workers/{id}/exceptions",
            post(handlers::workers::create_exception).get(handlers::workers::list_exceptions),
        )
        .route(
            "/workers/{id}/availability",
            get(handlers::workers::worker_availability),
        )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
