//! Tool repository implementation.

use chrono::Utc;
use sqlx::PgPool;

use fieldhub_core::error::{AppError, ErrorKind};
use fieldhub_core::result::AppResult;
use fieldhub_core::types::ToolId;
use fieldhub_entity::tool::{CreateTool, Tool};

use super::insert_error;

/// Repository for the tool inventory.
#[derive(Debug, Clone)]
pub struct ToolRepository {
    pool: PgPool,
}

impl ToolRepository {
    /// Create a new tool repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a tool by its unique name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Tool>> {
        sqlx::query_as::<_, Tool>("SELECT * FROM tools WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find tool", e))
    }

    /// List every tool, by name.
    pub async fn find_all(&self) -> AppResult<Vec<Tool>> {
        sqlx::query_as::<_, Tool>("SELECT * FROM tools ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tools", e))
    }

    /// Insert a new tool.
    pub async fn create(&self, data: &CreateTool) -> AppResult<Tool> {
        sqlx::query_as::<_, Tool>(
            "INSERT INTO tools (id, name, description, quantity, created_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(ToolId::new())
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.quantity)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error("tool", e))
    }
}
