//! Per-request PostgreSQL transaction implementing [`RecordStore`].

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use tokio::sync::Mutex;
use tracing::debug;

use fieldhub_core::error::{AppError, ErrorKind};
use fieldhub_core::result::AppResult;
use fieldhub_core::types::{JobId, UserId};
use fieldhub_entity::availability::AvailabilityException;
use fieldhub_entity::job::Job;
use fieldhub_entity::user::{User, UserRole};

use crate::repositories::{availability, job, user};
use crate::store::RecordStore;

/// One transaction scoped to a single request.
///
/// Every read and write made through the [`RecordStore`] impl runs inside the
/// same transaction. Nothing is visible to other requests until
/// [`PgUnitOfWork::commit`] is called; dropping the value rolls back.
pub struct PgUnitOfWork {
    tx: Mutex<Transaction<'static, Postgres>>,
}

impl PgUnitOfWork {
    /// Start a new transaction on the pool.
    ///
    /// An exhausted pool surfaces as `ServiceUnavailable` rather than a
    /// database failure.
    pub async fn begin(pool: &PgPool) -> AppResult<Self> {
        let tx = pool.begin().await.map_err(|e| match e {
            sqlx::Error::PoolTimedOut => {
                AppError::service_unavailable("No database connection available")
            }
            e => AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e),
        })?;
        debug!("Unit of work started");
        Ok(Self { tx: Mutex::new(tx) })
    }

    /// Commit every change made through this unit of work.
    pub async fn commit(self) -> AppResult<()> {
        self.tx.into_inner().commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;
        debug!("Unit of work committed");
        Ok(())
    }
}

impl fmt::Debug for PgUnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgUnitOfWork").finish_non_exhaustive()
    }
}

#[async_trait]
impl RecordStore for PgUnitOfWork {
    async fn get_job_by_id(&self, id: JobId) -> AppResult<Option<Job>> {
        let mut tx = self.tx.lock().await;
        job::fetch_by_id(&mut **tx, id).await
    }

    async fn save_job(&self, job: &Job) -> AppResult<Job> {
        let mut tx = self.tx.lock().await;
        job::save_status(&mut **tx, job).await
    }

    async fn get_worker_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let mut tx = self.tx.lock().await;
        user::fetch_by_id(&mut **tx, id).await
    }

    async fn list_workers(&self) -> AppResult<Vec<User>> {
        let mut tx = self.tx.lock().await;
        user::fetch_by_role(&mut **tx, UserRole::Worker).await
    }

    async fn list_availability_exceptions(
        &self,
        worker_id: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<AvailabilityException>> {
        let mut tx = self.tx.lock().await;
        availability::fetch_overlapping(&mut **tx, worker_id, start, end).await
    }
}
