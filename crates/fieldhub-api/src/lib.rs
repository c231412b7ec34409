//! # fieldhub-api
//!
//! HTTP API layer for FieldHub built on Axum.
//!
//! Provides the REST endpoints for clients, jobs, users, tools, and worker
//! availability, plus middleware (CORS, logging, compression, timeouts),
//! extractors (validated bodies and queries, per-request unit of work),
//! DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod telemetry;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
pub use telemetry::init_logging;
