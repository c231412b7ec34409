//! Job entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fieldhub_core::types::{ClientId, JobId, UserId};

use super::status::JobStatus;

/// A unit of work carried out for a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Unique job identifier.
    pub id: JobId,
    /// What needs to be done.
    pub description: String,
    /// Current lifecycle status.
    pub status: JobStatus,
    /// Client the job is done for.
    pub client_id: ClientId,
    /// Assigned worker, if any.
    pub worker_id: Option<UserId>,
    /// When the job was created.
    pub created_at: DateTime<Utc>,
    /// When the job was last updated.
    pub updated_at: DateTime<Utc>,
    /// Planned start.
    pub scheduled_start_time: Option<DateTime<Utc>>,
    /// Planned end.
    pub scheduled_end_time: Option<DateTime<Utc>>,
    /// When work actually started.
    pub actual_start_time: Option<DateTime<Utc>>,
    /// When work actually ended.
    pub actual_end_time: Option<DateTime<Utc>>,
}

impl Job {
    /// Build a fresh job in [`JobStatus::NewRequest`] from creation data.
    pub fn new(data: CreateJob, now: DateTime<Utc>) -> Self {
        Self {
            id: JobId::new(),
            description: data.description,
            status: JobStatus::NewRequest,
            client_id: data.client_id,
            worker_id: data.worker_id,
            created_at: now,
            updated_at: now,
            scheduled_start_time: data.scheduled_start_time,
            scheduled_end_time: data.scheduled_end_time,
            actual_start_time: None,
            actual_end_time: None,
        }
    }
}

/// Data required to create a new job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJob {
    /// What needs to be done.
    pub description: String,
    /// Owning client.
    pub client_id: ClientId,
    /// Assigned worker (optional).
    pub worker_id: Option<UserId>,
    /// Planned start (optional).
    pub scheduled_start_time: Option<DateTime<Utc>>,
    /// Planned end (optional).
    pub scheduled_end_time: Option<DateTime<Utc>>,
}
