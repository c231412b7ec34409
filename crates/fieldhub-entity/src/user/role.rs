//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a user can hold.
///
/// Only [`UserRole::Worker`] participates in scheduling and availability
/// checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Runs the business and dispatches jobs.
    Contractor,
    /// Carries out jobs on site.
    Worker,
}

impl UserRole {
    /// Check if this role can be booked for jobs.
    pub fn is_schedulable(&self) -> bool {
        matches!(self, Self::Worker)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contractor => "contractor",
            Self::Worker => "worker",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = fieldhub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contractor" => Ok(Self::Contractor),
            "worker" => Ok(Self::Worker),
            _ => Err(fieldhub_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: contractor, worker"
            ))),
        }
    }
}
