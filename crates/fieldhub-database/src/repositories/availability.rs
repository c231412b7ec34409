//! Availability exception repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{PgExecutor, PgPool};

use fieldhub_core::error::{AppError, ErrorKind};
use fieldhub_core::result::AppResult;
use fieldhub_core::types::UserId;
use fieldhub_entity::availability::{AvailabilityException, CreateAvailabilityException};

use super::insert_error;

/// Repository for worker availability exceptions.
#[derive(Debug, Clone)]
pub struct AvailabilityRepository {
    pool: PgPool,
}

impl AvailabilityRepository {
    /// Create a new availability repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a new exception. The interval is stored as given.
    pub async fn create(
        &self,
        data: &CreateAvailabilityException,
    ) -> AppResult<AvailabilityException> {
        let exception = AvailabilityException::new(data.clone(), Utc::now());
        sqlx::query_as::<_, AvailabilityException>(
            "INSERT INTO availability_exceptions \
             (id, worker_id, start_time, end_time, is_unavailable, reason, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(exception.id)
        .bind(exception.worker_id)
        .bind(exception.start_time)
        .bind(exception.end_time)
        .bind(exception.is_unavailable)
        .bind(&exception.reason)
        .bind(exception.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error("availability exception", e))
    }

    /// List every exception recorded for a worker, by start time.
    pub async fn find_by_worker(&self, worker_id: UserId) -> AppResult<Vec<AvailabilityException>> {
        sqlx::query_as::<_, AvailabilityException>(
            "SELECT * FROM availability_exceptions WHERE worker_id = $1 \
             ORDER BY start_time ASC, id ASC",
        )
        .bind(worker_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list availability exceptions", e)
        })
    }
}

/// Fetch exceptions overlapping `[start, end)` on any executor.
pub(crate) async fn fetch_overlapping<'e, E>(
    executor: E,
    worker_id: UserId,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> AppResult<Vec<AvailabilityException>>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, AvailabilityException>(
        "SELECT * FROM availability_exceptions \
         WHERE worker_id = $1 AND start_time < $3 AND end_time > $2 \
         ORDER BY start_time ASC, id ASC",
    )
    .bind(worker_id)
    .bind(start)
    .bind(end)
    .fetch_all(executor)
    .await
    .map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            "Failed to list overlapping availability exceptions",
            e,
        )
    })
}
