//! In-memory [`RecordStore`] backed by `DashMap`.
//!
//! Used by the service tests and anywhere a PostgreSQL instance is not
//! available. Behaves like the PostgreSQL store for every query the
//! scheduling core issues, including half-open exception overlap.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use fieldhub_core::error::AppError;
use fieldhub_core::result::AppResult;
use fieldhub_core::types::{AvailabilityExceptionId, JobId, UserId};
use fieldhub_entity::availability::AvailabilityException;
use fieldhub_entity::job::Job;
use fieldhub_entity::user::User;

use crate::store::RecordStore;

/// Thread-safe in-memory record store.
///
/// Clones share the same underlying maps.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    jobs: Arc<DashMap<JobId, Job>>,
    users: Arc<DashMap<UserId, User>>,
    exceptions: Arc<DashMap<AvailabilityExceptionId, AvailabilityException>>,
    /// Number of exception-overlap queries served.
    exception_queries: Arc<AtomicUsize>,
}

impl MemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a job.
    pub fn insert_job(&self, job: Job) {
        self.jobs.insert(job.id, job);
    }

    /// Insert or replace a user.
    pub fn insert_user(&self, user: User) {
        self.users.insert(user.id, user);
    }

    /// Insert an availability exception.
    pub fn insert_exception(&self, exception: AvailabilityException) {
        self.exceptions.insert(exception.id, exception);
    }

    /// Snapshot of a stored job.
    pub fn job(&self, id: JobId) -> Option<Job> {
        self.jobs.get(&id).map(|entry| entry.value().clone())
    }

    /// How many times [`RecordStore::list_availability_exceptions`] ran.
    pub fn exception_query_count(&self) -> usize {
        self.exception_queries.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get_job_by_id(&self, id: JobId) -> AppResult<Option<Job>> {
        Ok(self.job(id))
    }

    async fn save_job(&self, job: &Job) -> AppResult<Job> {
        let mut stored = self
            .jobs
            .get_mut(&job.id)
            .ok_or_else(|| AppError::entity_not_found("job", job.id))?;
        stored.status = job.status;
        stored.updated_at = job.updated_at;
        Ok(stored.clone())
    }

    async fn get_worker_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_workers(&self) -> AppResult<Vec<User>> {
        let mut workers: Vec<User> = self
            .users
            .iter()
            .filter(|entry| entry.is_worker())
            .map(|entry| entry.value().clone())
            .collect();
        workers.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(workers)
    }

    async fn list_availability_exceptions(
        &self,
        worker_id: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<AvailabilityException>> {
        self.exception_queries.fetch_add(1, Ordering::Relaxed);
        let mut found: Vec<AvailabilityException> = self
            .exceptions
            .iter()
            .filter(|entry| entry.worker_id == worker_id && entry.overlaps(start, end))
            .map(|entry| entry.value().clone())
            .collect();
        found.sort_by(|a, b| (a.start_time, a.id).cmp(&(b.start_time, b.id)));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use fieldhub_core::types::ClientId;
    use fieldhub_entity::availability::CreateAvailabilityException;
    use fieldhub_entity::job::{CreateJob, JobStatus};
    use fieldhub_entity::user::UserRole;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 2, hour, 0, 0).unwrap()
    }

    fn user(role: UserRole, created_at: DateTime<Utc>) -> User {
        User {
            id: UserId::new(),
            full_name: None,
            email: format!("{}@example.com", UserId::new()),
            phone_number: None,
            role,
            is_active: true,
            default_start_time: None,
            default_end_time: None,
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn test_save_job_writes_status_and_timestamp_only() {
        let store = MemoryRecordStore::new();
        let job = Job::new(
            CreateJob {
                description: "Replace boiler".to_string(),
                client_id: ClientId::new(),
                worker_id: None,
                scheduled_start_time: None,
                scheduled_end_time: None,
            },
            at(8),
        );
        store.insert_job(job.clone());

        let mut changed = job.clone();
        changed.status = JobStatus::Approved;
        changed.updated_at = at(9);
        changed.description = "ignored".to_string();

        let saved = store.save_job(&changed).await.unwrap();
        assert_eq!(saved.status, JobStatus::Approved);
        assert_eq!(saved.updated_at, at(9));
        assert_eq!(saved.description, "Replace boiler");
    }

    #[tokio::test]
    async fn test_save_unknown_job_is_not_found() {
        let store = MemoryRecordStore::new();
        let job = Job::new(
            CreateJob {
                description: "Fix tap".to_string(),
                client_id: ClientId::new(),
                worker_id: None,
                scheduled_start_time: None,
                scheduled_end_time: None,
            },
            at(8),
        );
        let err = store.save_job(&job).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_list_workers_filters_role_and_orders_by_creation() {
        let store = MemoryRecordStore::new();
        let late = user(UserRole::Worker, at(10));
        let early = user(UserRole::Worker, at(8));
        store.insert_user(late.clone());
        store.insert_user(user(UserRole::Contractor, at(9)));
        store.insert_user(early.clone());

        let ids: Vec<UserId> = store
            .list_workers()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec![early.id, late.id]);
    }

    #[tokio::test]
    async fn test_exception_query_is_per_worker_and_half_open() {
        let store = MemoryRecordStore::new();
        let worker = UserId::new();
        let other = UserId::new();
        for owner in [worker, other] {
            store.insert_exception(AvailabilityException::new(
                CreateAvailabilityException {
                    worker_id: owner,
                    start_time: at(10),
                    end_time: at(12),
                    is_unavailable: true,
                    reason: None,
                },
                Utc::now(),
            ));
        }

        let hits = store
            .list_availability_exceptions(worker, at(11), at(11) + Duration::minutes(30))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].worker_id, worker);

        let misses = store
            .list_availability_exceptions(worker, at(12), at(13))
            .await
            .unwrap();
        assert!(misses.is_empty());
        assert_eq!(store.exception_query_count(), 2);
    }
}
