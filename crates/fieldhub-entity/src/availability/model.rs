//! Availability exception entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fieldhub_core::types::{AvailabilityExceptionId, UserId};

/// A worker-specific carve-out from the default working hours.
///
/// `start_time < end_time` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AvailabilityException {
    /// Unique exception identifier.
    pub id: AvailabilityExceptionId,
    /// Worker the exception applies to.
    pub worker_id: UserId,
    /// Start of the interval.
    pub start_time: DateTime<Utc>,
    /// End of the interval.
    pub end_time: DateTime<Utc>,
    /// Whether the worker is unavailable during the interval.
    pub is_unavailable: bool,
    /// Free-text reason (time off, training, ...).
    pub reason: Option<String>,
    /// When the exception was recorded.
    pub created_at: DateTime<Utc>,
}

/// What an exception says about the worker during its interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExceptionKind {
    /// The worker cannot be booked.
    Unavailable,
    /// The worker is explicitly available. Currently has no effect on
    /// availability checks.
    Available,
}

impl AvailabilityException {
    /// Build a new exception from creation data.
    pub fn new(data: CreateAvailabilityException, now: DateTime<Utc>) -> Self {
        Self {
            id: AvailabilityExceptionId::new(),
            worker_id: data.worker_id,
            start_time: data.start_time,
            end_time: data.end_time,
            is_unavailable: data.is_unavailable,
            reason: data.reason,
            created_at: now,
        }
    }

    /// Classify the stored flag.
    pub fn kind(&self) -> ExceptionKind {
        if self.is_unavailable {
            ExceptionKind::Unavailable
        } else {
            ExceptionKind::Available
        }
    }

    /// Half-open overlap with `[start, end)`: touching boundaries do not overlap.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_time < end && self.end_time > start
    }
}

/// Data required to record an availability exception.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAvailabilityException {
    /// Worker the exception applies to.
    pub worker_id: UserId,
    /// Start of the interval.
    pub start_time: DateTime<Utc>,
    /// End of the interval.
    pub end_time: DateTime<Utc>,
    /// Whether the worker is unavailable.
    pub is_unavailable: bool,
    /// Reason (optional).
    pub reason: Option<String>,
}
