//! Client creation and lookup.

use std::sync::Arc;

use tracing::info;

use fieldhub_core::error::AppError;
use fieldhub_core::result::AppResult;
use fieldhub_core::types::ClientId;
use fieldhub_database::repositories::ClientRepository;
use fieldhub_entity::client::{Client, CreateClient};

/// Handles client operations.
#[derive(Debug, Clone)]
pub struct ClientService {
    /// Client repository.
    client_repo: Arc<ClientRepository>,
}

impl ClientService {
    /// Creates a new client service.
    pub fn new(client_repo: Arc<ClientRepository>) -> Self {
        Self { client_repo }
    }

    /// Registers a client. Emails are unique.
    pub async fn create(&self, data: CreateClient) -> AppResult<Client> {
        if self.client_repo.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let client = self.client_repo.create(&data).await?;
        info!(client_id = %client.id, "Client created");
        Ok(client)
    }

    /// Gets a client by ID.
    pub async fn get(&self, id: ClientId) -> AppResult<Client> {
        self.client_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("client", id))
    }

    /// Lists every client.
    pub async fn list(&self) -> AppResult<Vec<Client>> {
        self.client_repo.find_all().await
    }
}
