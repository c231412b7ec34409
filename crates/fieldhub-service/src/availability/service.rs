//! Availability exceptions and worker availability lookups.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use fieldhub_core::error::AppError;
use fieldhub_core::result::AppResult;
use fieldhub_core::types::UserId;
use fieldhub_database::RecordStore;
use fieldhub_database::repositories::{AvailabilityRepository, UserRepository};
use fieldhub_entity::availability::{AvailabilityException, CreateAvailabilityException};
use fieldhub_entity::user::User;

use super::checker::{AvailabilityChecker, Verdict};

/// Manages availability exceptions and answers availability queries.
#[derive(Debug, Clone)]
pub struct AvailabilityService {
    /// Exception repository.
    availability_repo: Arc<AvailabilityRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Availability rules.
    checker: AvailabilityChecker,
}

impl AvailabilityService {
    /// Creates a new availability service.
    pub fn new(
        availability_repo: Arc<AvailabilityRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            availability_repo,
            user_repo,
            checker: AvailabilityChecker::new(),
        }
    }

    /// Records an exception for a worker.
    ///
    /// The interval is stored as given; `start_time < end_time` is not checked.
    pub async fn create_exception(
        &self,
        data: CreateAvailabilityException,
    ) -> AppResult<AvailabilityException> {
        let worker = self.find_user(data.worker_id).await?;
        if !worker.is_worker() {
            return Err(AppError::validation(
                "Availability exceptions can only be recorded for workers",
            ));
        }

        let exception = self.availability_repo.create(&data).await?;
        info!(
            exception_id = %exception.id,
            worker_id = %exception.worker_id,
            is_unavailable = exception.is_unavailable,
            "Availability exception recorded"
        );
        Ok(exception)
    }

    /// Lists every exception recorded for a worker.
    pub async fn list_exceptions(&self, worker_id: UserId) -> AppResult<Vec<AvailabilityException>> {
        self.find_user(worker_id).await?;
        self.availability_repo.find_by_worker(worker_id).await
    }

    /// Checks one worker inside the caller's unit of work.
    pub async fn check_worker(
        &self,
        store: &dyn RecordStore,
        worker_id: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Verdict> {
        self.checker.check_worker(store, worker_id, start, end).await
    }

    /// Lists the workers free during `[start, end)`.
    pub async fn find_available_workers(
        &self,
        store: &dyn RecordStore,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<User>> {
        self.checker.find_available_workers(store, start, end).await
    }

    async fn find_user(&self, id: UserId) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("worker", id))
    }
}
