//! Job handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use fieldhub_core::types::JobId;
use fieldhub_entity::job::Job;

use crate::dto::request::{CreateJobRequest, TransitionJobRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{UnitOfWork, ValidatedJson};
use crate::state::AppState;

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Job>>), ApiError> {
    let job = state.job_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(job))))
}

/// GET /api/jobs
pub async fn list_jobs(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Job>>>, ApiError> {
    let jobs = state.job_service.list().await?;
    Ok(Json(ApiResponse::ok(jobs)))
}

/// GET /api/jobs/{id}
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<JobId>,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let job = state.job_service.get(id).await?;
    Ok(Json(ApiResponse::ok(job)))
}

/// POST /api/jobs/{id}/transition
///
/// The body is validated before the transaction opens, so a bad status is
/// a 400 even when the database is unreachable.
pub async fn transition_job(
    State(state): State<AppState>,
    Path(id): Path<JobId>,
    ValidatedJson(req): ValidatedJson<TransitionJobRequest>,
) -> Result<Json<ApiResponse<Job>>, ApiError> {
    let uow = UnitOfWork::begin(&state).await?;
    let job = state
        .job_service
        .transition(uow.store(), id, req.status)
        .await?;
    uow.commit().await?;
    Ok(Json(ApiResponse::ok(job)))
}
