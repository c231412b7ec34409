//! Job creation, lookup, and status changes.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use fieldhub_core::error::AppError;
use fieldhub_core::result::AppResult;
use fieldhub_core::types::JobId;
use fieldhub_database::RecordStore;
use fieldhub_database::repositories::{ClientRepository, JobRepository, UserRepository};
use fieldhub_entity::job::{CreateJob, Job, JobStatus};

use super::lifecycle::JobLifecycle;

/// Orchestrates job repositories and the status lifecycle.
#[derive(Debug, Clone)]
pub struct JobService {
    /// Job repository.
    job_repo: Arc<JobRepository>,
    /// Client repository, for ownership checks.
    client_repo: Arc<ClientRepository>,
    /// User repository, for worker checks.
    user_repo: Arc<UserRepository>,
    /// Status state machine.
    lifecycle: JobLifecycle,
}

impl JobService {
    /// Creates a new job service.
    pub fn new(
        job_repo: Arc<JobRepository>,
        client_repo: Arc<ClientRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            job_repo,
            client_repo,
            user_repo,
            lifecycle: JobLifecycle::new(),
        }
    }

    /// Creates a job in [`JobStatus::NewRequest`].
    ///
    /// The client must exist, and so must the worker when one is given.
    pub async fn create(&self, data: CreateJob) -> AppResult<Job> {
        if data.description.trim().is_empty() {
            return Err(AppError::validation("Job description cannot be empty"));
        }
        if let (Some(start), Some(end)) = (data.scheduled_start_time, data.scheduled_end_time) {
            if start >= end {
                return Err(AppError::validation(
                    "Scheduled start must be before scheduled end",
                ));
            }
        }

        if self.client_repo.find_by_id(data.client_id).await?.is_none() {
            return Err(AppError::entity_not_found("client", data.client_id));
        }
        if let Some(worker_id) = data.worker_id {
            if self.user_repo.find_by_id(worker_id).await?.is_none() {
                return Err(AppError::entity_not_found("user", worker_id));
            }
        }

        let job = self.job_repo.insert(&Job::new(data, Utc::now())).await?;
        info!(job_id = %job.id, client_id = %job.client_id, "Job created");
        Ok(job)
    }

    /// Gets a job by ID.
    pub async fn get(&self, id: JobId) -> AppResult<Job> {
        self.job_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("job", id))
    }

    /// Lists every job, newest first.
    pub async fn list(&self) -> AppResult<Vec<Job>> {
        self.job_repo.find_all().await
    }

    /// Moves a job to `requested` inside the caller's unit of work.
    pub async fn transition(
        &self,
        store: &dyn RecordStore,
        id: JobId,
        requested: JobStatus,
    ) -> AppResult<Job> {
        self.lifecycle.transition_stored(store, id, requested).await
    }
}
