//! User entity model.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use fieldhub_core::types::UserId;

use super::role::UserRole;

/// A person who can log work in FieldHub.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Human-readable name.
    pub full_name: Option<String>,
    /// Email address (unique).
    pub email: String,
    /// Phone number (unique, optional).
    pub phone_number: Option<String>,
    /// Role.
    pub role: UserRole,
    /// Whether the account is active.
    pub is_active: bool,
    /// Usual start of the working day.
    pub default_start_time: Option<NaiveTime>,
    /// Usual end of the working day.
    pub default_end_time: Option<NaiveTime>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user is a worker.
    pub fn is_worker(&self) -> bool {
        self.role.is_schedulable()
    }

    /// The default working window, present only when both bounds are set.
    pub fn default_hours(&self) -> Option<(NaiveTime, NaiveTime)> {
        self.default_start_time.zip(self.default_end_time)
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name (optional).
    pub full_name: Option<String>,
    /// Email address.
    pub email: String,
    /// Phone number (optional).
    pub phone_number: Option<String>,
    /// Assigned role.
    pub role: UserRole,
    /// Usual start of the working day (optional).
    pub default_start_time: Option<NaiveTime>,
    /// Usual end of the working day (optional).
    pub default_end_time: Option<NaiveTime>,
}

/// Data for replacing a user's default working hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDefaultHours {
    /// New start of day (`None` clears it).
    pub default_start_time: Option<NaiveTime>,
    /// New end of day (`None` clears it).
    pub default_end_time: Option<NaiveTime>,
}
