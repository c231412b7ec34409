//! Worker availability and exception handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use fieldhub_core::types::UserId;
use fieldhub_entity::availability::AvailabilityException;
use fieldhub_entity::user::User;

use crate::dto::request::{AvailabilityQuery, CreateExceptionRequest};
use crate::dto::response::{ApiResponse, AvailabilityResponse};
use crate::error::ApiError;
use crate::extractors::{UnitOfWork, ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// POST /api/workers/{id}/exceptions
pub async fn create_exception(
    State(state): State<AppState>,
    Path(worker_id): Path<UserId>,
    ValidatedJson(req): ValidatedJson<CreateExceptionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AvailabilityException>>), ApiError> {
    let exception = state
        .availability_service
        .create_exception(req.into_create(worker_id))
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(exception))))
}

/// GET /api/workers/{id}/exceptions
pub async fn list_exceptions(
    State(state): State<AppState>,
    Path(worker_id): Path<UserId>,
) -> Result<Json<ApiResponse<Vec<AvailabilityException>>>, ApiError> {
    let exceptions = state.availability_service.list_exceptions(worker_id).await?;
    Ok(Json(ApiResponse::ok(exceptions)))
}

/// GET /api/workers/{id}/availability?start=&end=
pub async fn worker_availability(
    State(state): State<AppState>,
    Path(worker_id): Path<UserId>,
    ValidatedQuery(window): ValidatedQuery<AvailabilityQuery>,
    uow: UnitOfWork,
) -> Result<Json<ApiResponse<AvailabilityResponse>>, ApiError> {
    let verdict = state
        .availability_service
        .check_worker(uow.store(), worker_id, window.start, window.end)
        .await?;
    uow.commit().await?;

    Ok(Json(ApiResponse::ok(AvailabilityResponse {
        worker_id,
        start: window.start,
        end: window.end,
        available: verdict.is_available(),
        verdict,
    })))
}

/// GET /api/workers/available?start=&end=
pub async fn available_workers(
    State(state): State<AppState>,
    ValidatedQuery(window): ValidatedQuery<AvailabilityQuery>,
    uow: UnitOfWork,
) -> Result<Json<ApiResponse<Vec<User>>>, ApiError> {
    let workers = state
        .availability_service
        .find_available_workers(uow.store(), window.start, window.end)
        .await?;
    uow.commit().await?;
    Ok(Json(ApiResponse::ok(workers)))
}
