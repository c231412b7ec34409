//! Client repository implementation.

use chrono::Utc;
use sqlx::PgPool;

use fieldhub_core::error::{AppError, ErrorKind};
use fieldhub_core::result::AppResult;
use fieldhub_core::types::ClientId;
use fieldhub_entity::client::{Client, CreateClient};

use super::insert_error;

/// Repository for client CRUD operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    /// Create a new client repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a client by primary key.
    pub async fn find_by_id(&self, id: ClientId) -> AppResult<Option<Client>> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find client", e))
    }

    /// Find a client by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Client>> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find client by email", e)
            })
    }

    /// List every client, oldest first.
    pub async fn find_all(&self) -> AppResult<Vec<Client>> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY created_at ASC, id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list clients", e))
    }

    /// Insert a new client.
    pub async fn create(&self, data: &CreateClient) -> AppResult<Client> {
        sqlx::query_as::<_, Client>(
            "INSERT INTO clients (id, full_name, email, phone_number, address, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(ClientId::new())
        .bind(&data.full_name)
        .bind(&data.email)
        .bind(&data.phone_number)
        .bind(&data.address)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error("client", e))
    }
}
