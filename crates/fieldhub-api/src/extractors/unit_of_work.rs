//! `UnitOfWork` extractor: one database transaction per request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use fieldhub_core::result::AppResult;
use fieldhub_database::{PgUnitOfWork, RecordStore};

use crate::error::ApiError;
use crate::state::AppState;

/// The request's transaction.
///
/// Handlers call [`UnitOfWork::commit`] once their work succeeded. On any
/// other exit path the transaction is dropped and rolled back.
#[derive(Debug)]
pub struct UnitOfWork(pub PgUnitOfWork);

impl UnitOfWork {
    /// Open a transaction outside the extractor, once the request body has
    /// been validated.
    pub async fn begin(state: &AppState) -> AppResult<Self> {
        Ok(Self(state.db.begin().await?))
    }

    /// The transaction as a record store for the scheduling core.
    pub fn store(&self) -> &dyn RecordStore {
        &self.0
    }

    /// Commit the transaction.
    pub async fn commit(self) -> AppResult<()> {
        self.0.commit().await
    }
}

impl FromRequestParts<AppState> for UnitOfWork {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Self::begin(state).await?)
    }
}
