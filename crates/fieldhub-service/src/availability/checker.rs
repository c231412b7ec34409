//! Decides whether workers can be booked for a time window.
//!
//! A worker is available for `[start, end)` when all of these hold:
//!
//! 1. the user has role `worker`;
//! 2. if both default hours are set, `start.time() >= default_start` and
//!    `end.time() <= default_end` (time of day only, dates are ignored);
//! 3. no exception with `is_unavailable = true` overlaps the window.
//!
//! Exceptions with `is_unavailable = false` are loaded but never widen
//! availability. Windows spanning midnight or several days are compared
//! on time of day alone. Callers must pass `start < end`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use fieldhub_core::error::AppError;
use fieldhub_core::result::AppResult;
use fieldhub_core::types::{AvailabilityExceptionId, UserId};
use fieldhub_database::RecordStore;
use fieldhub_entity::availability::ExceptionKind;
use fieldhub_entity::user::User;

/// Outcome of an availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Verdict {
    /// The worker can be booked.
    Available,
    /// The user is not a worker.
    NotAWorker,
    /// The window falls outside the worker's default hours.
    OutsideDefaultHours,
    /// An unavailability exception overlaps the window.
    Blocked {
        /// The first blocking exception.
        exception_id: AvailabilityExceptionId,
    },
}

impl Verdict {
    /// Whether the worker can be booked.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Read-only availability checks against a [`RecordStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityChecker;

impl AvailabilityChecker {
    /// Creates a new checker.
    pub fn new() -> Self {
        Self
    }

    /// Whether `worker` is free during `[start, end)`.
    pub async fn is_available(
        &self,
        store: &dyn RecordStore,
        worker: &User,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<bool> {
        Ok(self.check(store, worker, start, end).await?.is_available())
    }

    /// Like [`is_available`](Self::is_available) but says which rule decided.
    ///
    /// The exception store is only queried when the first two rules pass.
    pub async fn check(
        &self,
        store: &dyn RecordStore,
        worker: &User,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Verdict> {
        if !worker.is_worker() {
            debug!(user_id = %worker.id, role = %worker.role, "Not a worker");
            return Ok(Verdict::NotAWorker);
        }

        if let Some((day_start, day_end)) = worker.default_hours() {
            if start.time() < day_start || end.time() > day_end {
                debug!(
                    worker_id = %worker.id,
                    %day_start,
                    %day_end,
                    "Window outside default hours"
                );
                return Ok(Verdict::OutsideDefaultHours);
            }
        }

        let exceptions = store
            .list_availability_exceptions(worker.id, start, end)
            .await?;
        if let Some(blocking) = exceptions
            .iter()
            .find(|exc| exc.kind() == ExceptionKind::Unavailable)
        {
            debug!(
                worker_id = %worker.id,
                exception_id = %blocking.id,
                "Window blocked by exception"
            );
            return Ok(Verdict::Blocked {
                exception_id: blocking.id,
            });
        }

        Ok(Verdict::Available)
    }

    /// Loads a worker by ID and checks it.
    ///
    /// A missing user is an error; a user who is not a worker is simply
    /// not available.
    pub async fn check_worker(
        &self,
        store: &dyn RecordStore,
        worker_id: UserId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Verdict> {
        let worker = store
            .get_worker_by_id(worker_id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("worker", worker_id))?;
        self.check(store, &worker, start, end).await
    }

    /// Every worker free during `[start, end)`, in store order.
    ///
    /// Issues one exception query per worker that passes the hours rule.
    pub async fn find_available_workers(
        &self,
        store: &dyn RecordStore,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<User>> {
        let workers = store.list_workers().await?;
        let total = workers.len();

        let mut available = Vec::new();
        for worker in workers {
            if self.is_available(store, &worker, start, end).await? {
                available.push(worker);
            }
        }

        debug!(total, available = available.len(), "Available workers computed");
        Ok(available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveTime, TimeZone};
    use fieldhub_database::MemoryRecordStore;
    use fieldhub_entity::availability::{AvailabilityException, CreateAvailabilityException};
    use fieldhub_entity::user::UserRole;

    fn day(d: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, hour, minute, 0).unwrap()
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        day(2, hour, minute)
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn user(role: UserRole, hours: Option<(NaiveTime, NaiveTime)>) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(),
            full_name: Some("Alex Fitter".to_string()),
            email: format!("{}@example.com", UserId::new()),
            phone_number: None,
            role,
            is_active: true,
            default_start_time: hours.map(|(s, _)| s),
            default_end_time: hours.map(|(_, e)| e),
            created_at: now,
            updated_at: now,
        }
    }

    fn nine_to_five() -> Option<(NaiveTime, NaiveTime)> {
        Some((hm(9, 0), hm(17, 0)))
    }

    fn add_exception(
        store: &MemoryRecordStore,
        worker: &User,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        is_unavailable: bool,
    ) -> AvailabilityException {
        let exc = AvailabilityException::new(
            CreateAvailabilityException {
                worker_id: worker.id,
                start_time: start,
                end_time: end,
                is_unavailable,
                reason: Some("training".to_string()),
            },
            Utc::now(),
        );
        store.insert_exception(exc.clone());
        exc
    }

    #[tokio::test]
    async fn test_default_hours_bound_the_window() {
        let store = MemoryRecordStore::new();
        let worker = user(UserRole::Worker, nine_to_five());
        let checker = AvailabilityChecker::new();

        assert!(!checker.is_available(&store, &worker, at(8, 0), at(10, 0)).await.unwrap());
        assert!(checker.is_available(&store, &worker, at(9, 0), at(12, 0)).await.unwrap());
        assert!(checker.is_available(&store, &worker, at(9, 0), at(17, 0)).await.unwrap());
        assert!(!checker.is_available(&store, &worker, at(16, 0), at(17, 1)).await.unwrap());
    }

    #[tokio::test]
    async fn test_hours_rejection_skips_exception_query() {
        let store = MemoryRecordStore::new();
        let worker = user(UserRole::Worker, nine_to_five());

        let verdict = AvailabilityChecker::new()
            .check(&store, &worker, at(8, 0), at(10, 0))
            .await
            .unwrap();
        assert_eq!(verdict, Verdict::OutsideDefaultHours);
        assert_eq!(store.exception_query_count(), 0);
    }

    #[tokio::test]
    async fn test_partial_default_hours_are_unrestricted() {
        let store = MemoryRecordStore::new();
        let mut worker = user(UserRole::Worker, nine_to_five());
        worker.default_end_time = None;

        assert!(
            AvailabilityChecker::new()
                .is_available(&store, &worker, at(6, 0), at(22, 0))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_unavailable_exception_overlap_is_half_open() {
        let store = MemoryRecordStore::new();
        let worker = user(UserRole::Worker, None);
        let exc = add_exception(&store, &worker, at(10, 0), at(12, 0), true);
        let checker = AvailabilityChecker::new();

        assert_eq!(
            checker.check(&store, &worker, at(11, 0), at(11, 30)).await.unwrap(),
            Verdict::Blocked { exception_id: exc.id }
        );
        assert!(checker.is_available(&store, &worker, at(12, 0), at(13, 0)).await.unwrap());
        assert!(checker.is_available(&store, &worker, at(9, 0), at(10, 0)).await.unwrap());
    }

    #[tokio::test]
    async fn test_other_workers_exceptions_do_not_apply() {
        let store = MemoryRecordStore::new();
        let worker = user(UserRole::Worker, None);
        let colleague = user(UserRole::Worker, None);
        add_exception(&store, &colleague, at(10, 0), at(12, 0), true);

        assert!(
            AvailabilityChecker::new()
                .is_available(&store, &worker, at(10, 0), at(12, 0))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_available_exception_does_not_extend_default_hours() {
        let store = MemoryRecordStore::new();
        let worker = user(UserRole::Worker, nine_to_five());
        add_exception(&store, &worker, at(6, 0), at(10, 0), false);
        let checker = AvailabilityChecker::new();

        assert!(!checker.is_available(&store, &worker, at(7, 0), at(8, 0)).await.unwrap());
        assert!(checker.is_available(&store, &worker, at(9, 0), at(10, 0)).await.unwrap());
    }

    #[tokio::test]
    async fn test_contractor_is_never_available() {
        let store = MemoryRecordStore::new();
        let contractor = user(UserRole::Contractor, None);

        let verdict = AvailabilityChecker::new()
            .check(&store, &contractor, at(10, 0), at(11, 0))
            .await
            .unwrap();
        assert_eq!(verdict, Verdict::NotAWorker);
        assert_eq!(store.exception_query_count(), 0);
    }

    #[tokio::test]
    async fn test_multi_day_window_compares_time_of_day_only() {
        let store = MemoryRecordStore::new();
        let worker = user(UserRole::Worker, nine_to_five());
        let checker = AvailabilityChecker::new();

        // Three days, nights included, yet both ends fall inside 09:00-17:00.
        assert!(checker.is_available(&store, &worker, day(2, 10, 0), day(4, 16, 0)).await.unwrap());
        assert!(!checker.is_available(&store, &worker, day(2, 8, 0), day(4, 16, 0)).await.unwrap());
    }

    #[tokio::test]
    async fn test_window_spanning_midnight_compares_time_of_day_only() {
        let store = MemoryRecordStore::new();
        let worker = user(UserRole::Worker, nine_to_five());
        let checker = AvailabilityChecker::new();

        // Overnight windows pass whenever both clock times are in bounds.
        assert!(checker.is_available(&store, &worker, day(2, 16, 0), day(3, 10, 0)).await.unwrap());
        assert!(checker.is_available(&store, &worker, day(2, 22, 0), day(3, 2, 0)).await.unwrap());
        assert!(!checker.is_available(&store, &worker, day(2, 16, 0), day(3, 18, 0)).await.unwrap());
    }

    #[tokio::test]
    async fn test_inverted_window_is_not_rejected() {
        let store = MemoryRecordStore::new();
        let worker = user(UserRole::Worker, None);

        // start > end is a caller error; the checker does not detect it.
        assert!(
            AvailabilityChecker::new()
                .is_available(&store, &worker, at(12, 0), at(10, 0))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_check_worker_missing_is_not_found() {
        let store = MemoryRecordStore::new();
        let err = AvailabilityChecker::new()
            .check_worker(&store, UserId::new(), at(9, 0), at(10, 0))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_check_worker_loads_by_id() {
        let store = MemoryRecordStore::new();
        let worker = user(UserRole::Worker, nine_to_five());
        store.insert_user(worker.clone());

        let verdict = AvailabilityChecker::new()
            .check_worker(&store, worker.id, at(9, 0), at(12, 0))
            .await
            .unwrap();
        assert!(verdict.is_available());
    }

    #[tokio::test]
    async fn test_find_available_matches_is_available_for_every_worker() {
        let store = MemoryRecordStore::new();
        let free = user(UserRole::Worker, None);
        let mut late = user(UserRole::Worker, nine_to_five());
        late.created_at = free.created_at + Duration::seconds(1);
        let mut blocked = user(UserRole::Worker, None);
        blocked.created_at = free.created_at + Duration::seconds(2);
        let mut early_bird = user(UserRole::Worker, Some((hm(6, 0), hm(14, 0))));
        early_bird.created_at = free.created_at + Duration::seconds(3);
        let contractor = user(UserRole::Contractor, None);
        for u in [&free, &late, &blocked, &early_bird, &contractor] {
            store.insert_user(u.clone());
        }
        add_exception(&store, &blocked, at(7, 0), at(8, 0), true);

        let checker = AvailabilityChecker::new();
        let (start, end) = (at(7, 30), at(8, 30));
        let found = checker.find_available_workers(&store, start, end).await.unwrap();
        let found_ids: Vec<UserId> = found.iter().map(|w| w.id).collect();
        assert_eq!(found_ids, vec![free.id, early_bird.id]);

        for worker in store.list_workers().await.unwrap() {
            let listed = found_ids.contains(&worker.id);
            let available = checker.is_available(&store, &worker, start, end).await.unwrap();
            assert_eq!(listed, available, "worker {}", worker.id);
        }
        assert!(!found_ids.contains(&contractor.id));
    }

    #[tokio::test]
    async fn test_find_available_queries_exceptions_once_per_eligible_worker() {
        let store = MemoryRecordStore::new();
        for _ in 0..3 {
            store.insert_user(user(UserRole::Worker, None));
        }
        store.insert_user(user(UserRole::Worker, nine_to_five()));

        let found = AvailabilityChecker::new()
            .find_available_workers(&store, at(7, 0), at(8, 0))
            .await
            .unwrap();
        assert_eq!(found.len(), 3);
        assert_eq!(store.exception_query_count(), 3);
    }

    #[test]
    fn test_verdict_serializes_with_reason_tag() {
        let json = serde_json::to_value(Verdict::OutsideDefaultHours).unwrap();
        assert_eq!(json["reason"], "outside_default_hours");
    }
}
