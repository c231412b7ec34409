//! Record store contract consumed by the scheduling core.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use fieldhub_core::result::AppResult;
use fieldhub_core::types::{JobId, UserId};
use fieldhub_entity::availability::AvailabilityException;
use fieldhub_entity::job::Job;
use fieldhub_entity::user::User;

/// The reads and writes the job lifecycle and availability checks need.
///
/// Lookups return `Ok(None)` when the record does not exist; turning that
/// into a not-found error is the caller's decision.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Load a job by id.
    async fn get_job_by_id(&self, id: JobId) -> AppResult<Option<Job>>;

    /// Persist the job's status and last-update timestamp.
    async fn save_job(&self, job: &Job) -> AppResult<Job>;

    /// Load a user by id, whatever their role.
    async fn get_worker_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Every user with role `worker`, in store order.
    async fn list_workers(&self) -> AppResult<Vec<User>>;

    /// Exceptions for `worker_id` whose interval overlaps `[start, end)`,
    /// i.e. `exception.start_time < end AND exception.end_time > start`.
    async fn list_availability_exceptions(
        &self,
        worker_id: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<AvailabilityException>>;
}
