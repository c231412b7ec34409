//! Tool inventory operations.

use std::sync::Arc;

use tracing::info;

use fieldhub_core::error::AppError;
use fieldhub_core::result::AppResult;
use fieldhub_database::repositories::ToolRepository;
use fieldhub_entity::tool::{CreateTool, Tool};

/// Handles tool inventory operations.
#[derive(Debug, Clone)]
pub struct ToolService {
    /// Tool repository.
    tool_repo: Arc<ToolRepository>,
}

impl ToolService {
    /// Creates a new tool service.
    pub fn new(tool_repo: Arc<ToolRepository>) -> Self {
        Self { tool_repo }
    }

    /// Adds a tool to the inventory. Names are unique.
    pub async fn create(&self, data: CreateTool) -> AppResult<Tool> {
        if data.quantity < 0 {
            return Err(AppError::validation("Tool quantity cannot be negative"));
        }
        if self.tool_repo.find_by_name(&data.name).await?.is_some() {
            return Err(AppError::conflict(format!(
                "A tool named '{}' already exists",
                data.name
            )));
        }

        let tool = self.tool_repo.create(&data).await?;
        info!(tool_id = %tool.id, name = %tool.name, "Tool added");
        Ok(tool)
    }

    /// Lists the inventory by name.
    pub async fn list(&self) -> AppResult<Vec<Tool>> {
        self.tool_repo.find_all().await
    }
}
