//! Tool inventory handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use fieldhub_entity::tool::Tool;

use crate::dto::request::CreateToolRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// POST /api/tools
pub async fn create_tool(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateToolRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Tool>>), ApiError> {
    let tool = state.tool_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(tool))))
}

/// GET /api/tools
pub async fn list_tools(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Tool>>>, ApiError> {
    let tools = state.tool_service.list().await?;
    Ok(Json(ApiResponse::ok(tools)))
}
