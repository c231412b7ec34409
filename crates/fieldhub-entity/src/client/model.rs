//! Client entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fieldhub_core::types::ClientId;

/// A customer that jobs are carried out for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Client {
    /// Unique client identifier.
    pub id: ClientId,
    /// Full name.
    pub full_name: String,
    /// Email address (unique).
    pub email: String,
    /// Phone number (unique, optional).
    pub phone_number: Option<String>,
    /// Postal address where work is done.
    pub address: Option<String>,
    /// When the client was registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClient {
    /// Full name.
    pub full_name: String,
    /// Email address.
    pub email: String,
    /// Phone number (optional).
    pub phone_number: Option<String>,
    /// Address (optional).
    pub address: Option<String>,
}
