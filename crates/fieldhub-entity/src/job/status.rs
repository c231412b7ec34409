//! Job status enumeration and its transition table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a field-service job.
///
/// New jobs start in [`JobStatus::NewRequest`]. [`JobStatus::Completed`]
/// and [`JobStatus::Cancelled`] are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Requested by a client, not yet reviewed.
    #[default]
    NewRequest,
    /// Accepted for planning.
    Approved,
    /// Planned into a time slot.
    Scheduled,
    /// Work is under way on site.
    InProgress,
    /// Work is finished.
    Completed,
    /// Called off.
    Cancelled,
}

impl JobStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [JobStatus; 6] = [
        Self::NewRequest,
        Self::Approved,
        Self::Scheduled,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Statuses reachable in a single step from this one.
    pub fn allowed_transitions(&self) -> &'static [JobStatus] {
        match self {
            Self::NewRequest => &[Self::Approved, Self::Cancelled],
            Self::Approved => &[Self::Scheduled, Self::Cancelled],
            Self::Scheduled => &[Self::InProgress, Self::Cancelled],
            Self::InProgress => &[Self::Completed, Self::Cancelled],
            Self::Completed | Self::Cancelled => &[],
        }
    }

    /// Check whether `next` is reachable in a single step.
    pub fn can_transition_to(&self, next: JobStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Check if the job is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewRequest => "new_request",
            Self::Approved => "approved",
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = fieldhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s.to_lowercase())
            .ok_or_else(|| {
                fieldhub_core::AppError::validation(format!(
                    "Invalid job status: '{s}'. Expected one of: new_request, approved, \
                     scheduled, in_progress, completed, cancelled"
                ))
            })
    }
}
