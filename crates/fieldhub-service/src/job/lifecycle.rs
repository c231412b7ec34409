//! The job status state machine.

use chrono::{DateTime, Duration, SubsecRound, Utc};
use thiserror::Error;
use tracing::{info, warn};

use fieldhub_core::error::AppError;
use fieldhub_core::result::AppResult;
use fieldhub_core::types::JobId;
use fieldhub_database::RecordStore;
use fieldhub_entity::job::{Job, JobStatus};

/// A rejected status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// `requested` is not reachable in one step from `current`.
    #[error("Cannot transition job from '{current}' to '{requested}'")]
    InvalidTransition {
        /// Status the job is in.
        current: JobStatus,
        /// Status that was asked for.
        requested: JobStatus,
    },
}

impl From<TransitionError> for AppError {
    fn from(e: TransitionError) -> Self {
        match e {
            TransitionError::InvalidTransition { current, requested } => {
                AppError::invalid_transition(current, requested)
            }
        }
    }
}

/// Guards and applies job status changes.
///
/// The allowed moves are those of [`JobStatus::allowed_transitions`].
/// A rejected transition never mutates the job.
#[derive(Debug, Clone, Copy, Default)]
pub struct JobLifecycle;

impl JobLifecycle {
    /// Creates a new lifecycle guard.
    pub fn new() -> Self {
        Self
    }

    /// Move `job` to `requested`, stamping it with the current time.
    pub fn transition(&self, job: &Job, requested: JobStatus) -> Result<Job, TransitionError> {
        self.transition_at(job, requested, Utc::now())
    }

    /// Move `job` to `requested` as of `now`.
    ///
    /// On success the returned job differs from the input only in `status`
    /// and `updated_at`, and `updated_at` is strictly later than before.
    pub fn transition_at(
        &self,
        job: &Job,
        requested: JobStatus,
        now: DateTime<Utc>,
    ) -> Result<Job, TransitionError> {
        let current = job.status;
        if !current.can_transition_to(requested) {
            warn!(
                job_id = %job.id,
                current = %current,
                requested = %requested,
                "Rejected job status transition"
            );
            return Err(TransitionError::InvalidTransition { current, requested });
        }

        let mut next = job.clone();
        next.status = requested;
        next.updated_at = next_update_timestamp(job.updated_at, now);

        info!(
            job_id = %job.id,
            from = %current,
            to = %requested,
            "Job status changed"
        );

        Ok(next)
    }

    /// Load a job from `store`, transition it, and save the result.
    ///
    /// Nothing is written when the transition is rejected.
    pub async fn transition_stored(
        &self,
        store: &dyn RecordStore,
        id: JobId,
        requested: JobStatus,
    ) -> AppResult<Job> {
        let job = store
            .get_job_by_id(id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("job", id))?;
        let next = self.transition(&job, requested)?;
        store.save_job(&next).await
    }
}

/// The timestamp to record for an update made at `now`.
///
/// PostgreSQL stores microseconds, so `now` is truncated to that precision
/// and bumped by one microsecond if it does not pass `previous`.
pub fn next_update_timestamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    let now = now.trunc_subsecs(6);
    if now > previous {
        now
    } else {
        previous.trunc_subsecs(6) + Duration::microseconds(1)
    }
}
