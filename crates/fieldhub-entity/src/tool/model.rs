//! Tool entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fieldhub_core::types::ToolId;

/// A piece of equipment in the company inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Tool {
    /// Unique tool identifier.
    pub id: ToolId,
    /// Unique tool name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Units on hand.
    pub quantity: i32,
    /// When the tool was added.
    pub created_at: DateTime<Utc>,
}

/// Data required to add a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTool {
    /// Unique name.
    pub name: String,
    /// Description (optional).
    pub description: Option<String>,
    /// Units on hand.
    pub quantity: i32,
}
