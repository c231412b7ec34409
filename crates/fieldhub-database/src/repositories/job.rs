//! Job repository implementation.

use sqlx::{PgExecutor, PgPool};

use fieldhub_core::error::{AppError, ErrorKind};
use fieldhub_core::result::AppResult;
use fieldhub_core::types::JobId;
use fieldhub_entity::job::Job;

use super::insert_error;

/// Repository for job CRUD operations.
///
/// Status changes go through the lifecycle and are written with
/// [`save_status`] inside a unit of work.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a job by ID.
    pub async fn find_by_id(&self, id: JobId) -> AppResult<Option<Job>> {
        fetch_by_id(&self.pool, id).await
    }

    /// List every job, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>("SELECT * FROM jobs ORDER BY created_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list jobs", e))
    }

    /// Insert a freshly built job.
    pub async fn insert(&self, job: &Job) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (id, description, status, client_id, worker_id, created_at, \
             updated_at, scheduled_start_time, scheduled_end_time, actual_start_time, \
             actual_end_time) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING *",
        )
        .bind(job.id)
        .bind(&job.description)
        .bind(job.status)
        .bind(job.client_id)
        .bind(job.worker_id)
        .bind(job.created_at)
        .bind(job.updated_at)
        .bind(job.scheduled_start_time)
        .bind(job.scheduled_end_time)
        .bind(job.actual_start_time)
        .bind(job.actual_end_time)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error("job", e))
    }
}

/// Fetch a job by ID on any executor.
pub(crate) async fn fetch_by_id<'e, E>(executor: E, id: JobId) -> AppResult<Option<Job>>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find job", e))
}

/// Write the job's status and last-update timestamp. No other column changes.
pub(crate) async fn save_status<'e, E>(executor: E, job: &Job) -> AppResult<Job>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Job>(
        "UPDATE jobs SET status = $2, updated_at = $3 WHERE id = $1 RETURNING *",
    )
    .bind(job.id)
    .bind(job.status)
    .bind(job.updated_at)
    .fetch_optional(executor)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save job", e))?
    .ok_or_else(|| AppError::entity_not_found("job", job.id))
}
