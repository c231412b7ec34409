//! Client handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use fieldhub_core::types::ClientId;
use fieldhub_entity::client::Client;

use crate::dto::request::CreateClientRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/clients
pub async fn create_client(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateClientRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Client>>), ApiError> {
    let client = state.client_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(client))))
}

/// GET /api/clients
pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Client>>>, ApiError> {
    let clients = state.client_service.list().await?;
    Ok(Json(ApiResponse::ok(clients)))
}

/// GET /api/clients/{id}
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
) -> Result<Json<ApiResponse<Client>>, ApiError> {
    let client = state.client_service.get(id).await?;
    Ok(Json(ApiResponse::ok(client)))
}
