//! User handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use fieldhub_core::types::UserId;
use fieldhub_entity::user::User;

use crate::dto::request::{CreateUserRequest, UpdateDefaultHoursRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<User>>), ApiError> {
    let user = state.user_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.get(id).await?;
    Ok(Json(ApiResponse::ok(user)))
}

/// PUT /api/users/{id}/default-hours
pub async fn update_default_hours(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    ValidatedJson(req): ValidatedJson<UpdateDefaultHoursRequest>,
) -> Result<Json<ApiResponse<User>>, ApiError> {
    let user = state.user_service.update_default_hours(id, req.into()).await?;
    Ok(Json(ApiResponse::ok(user)))
}
