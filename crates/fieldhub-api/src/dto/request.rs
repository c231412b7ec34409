//! Request DTOs with validation.

use std::borrow::Cow;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use fieldhub_core::types::{ClientId, UserId};
use fieldhub_entity::availability::CreateAvailabilityException;
use fieldhub_entity::client::CreateClient;
use fieldhub_entity::job::{CreateJob, JobStatus};
use fieldhub_entity::tool::CreateTool;
use fieldhub_entity::user::{CreateUser, UpdateDefaultHours, UserRole};

/// Create client request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateClientRequest {
    /// Full name.
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    /// Email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Postal address.
    pub address: Option<String>,
}

impl From<CreateClientRequest> for CreateClient {
    fn from(req: CreateClientRequest) -> Self {
        Self {
            full_name: req.full_name,
            email: req.email,
            phone_number: req.phone_number,
            address: req.address,
        }
    }
}

/// Create job request. New jobs always start as `new_request`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobRequest {
    /// What needs to be done.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Owning client.
    pub client_id: ClientId,
    /// Assigned worker.
    pub worker_id: Option<UserId>,
    /// Planned start.
    pub scheduled_start_time: Option<DateTime<Utc>>,
    /// Planned end.
    pub scheduled_end_time: Option<DateTime<Utc>>,
}

impl From<CreateJobRequest> for CreateJob {
    fn from(req: CreateJobRequest) -> Self {
        Self {
            description: req.description,
            client_id: req.client_id,
            worker_id: req.worker_id,
            scheduled_start_time: req.scheduled_start_time,
            scheduled_end_time: req.scheduled_end_time,
        }
    }
}

/// Job status change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransitionJobRequest {
    /// Target status.
    pub status: JobStatus,
}

/// Create user request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name.
    pub full_name: Option<String>,
    /// Email.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Role.
    pub role: UserRole,
    /// Usual start of the working day.
    pub default_start_time: Option<NaiveTime>,
    /// Usual end of the working day.
    pub default_end_time: Option<NaiveTime>,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            full_name: req.full_name,
            email: req.email,
            phone_number: req.phone_number,
            role: req.role,
            default_start_time: req.default_start_time,
            default_end_time: req.default_end_time,
        }
    }
}

/// Replace default working hours. Omitted fields are cleared.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateDefaultHoursRequest {
    /// Start of day.
    pub default_start_time: Option<NaiveTime>,
    /// End of day.
    pub default_end_time: Option<NaiveTime>,
}

impl From<UpdateDefaultHoursRequest> for UpdateDefaultHours {
    fn from(req: UpdateDefaultHoursRequest) -> Self {
        Self {
            default_start_time: req.default_start_time,
            default_end_time: req.default_end_time,
        }
    }
}

/// Create tool request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateToolRequest {
    /// Unique name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Units on hand.
    #[serde(default = "default_quantity")]
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

impl From<CreateToolRequest> for CreateTool {
    fn from(req: CreateToolRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            quantity: req.quantity,
        }
    }
}

/// Record an availability exception for the worker in the path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExceptionRequest {
    /// Start of the interval.
    pub start_time: DateTime<Utc>,
    /// End of the interval.
    pub end_time: DateTime<Utc>,
    /// Whether the worker is unavailable (default: true).
    #[serde(default = "default_unavailable")]
    pub is_unavailable: bool,
    /// Reason.
    pub reason: Option<String>,
}

fn default_unavailable() -> bool {
    true
}

impl CreateExceptionRequest {
    /// Attach the worker from the path.
    pub fn into_create(self, worker_id: UserId) -> CreateAvailabilityException {
        CreateAvailabilityException {
            worker_id,
            start_time: self.start_time,
            end_time: self.end_time,
            is_unavailable: self.is_unavailable,
            reason: self.reason,
        }
    }
}

/// `?start=&end=` window for availability queries.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_window"))]
pub struct AvailabilityQuery {
    /// Window start (inclusive).
    pub start: DateTime<Utc>,
    /// Window end (exclusive).
    pub end: DateTime<Utc>,
}

fn validate_window(query: &AvailabilityQuery) -> Result<(), ValidationError> {
    if query.start < query.end {
        Ok(())
    } else {
        Err(ValidationError::new("window")
            .with_message(Cow::Borrowed("start must be before end")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_availability_window_must_be_ordered() {
        let nine = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let noon = Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap();

        assert!(AvailabilityQuery { start: nine, end: noon }.validate().is_ok());
        assert!(AvailabilityQuery { start: noon, end: nine }.validate().is_err());
        assert!(AvailabilityQuery { start: nine, end: nine }.validate().is_err());
    }

    #[test]
    fn test_tool_quantity_defaults_to_one_and_rejects_negative() {
        let req: CreateToolRequest = serde_json::from_str(r#"{"name":"Ladder"}"#).unwrap();
        assert_eq!(req.quantity, 1);
        assert!(req.validate().is_ok());

        let req: CreateToolRequest =
            serde_json::from_str(r#"{"name":"Ladder","quantity":-2}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_client_email_is_checked() {
        let req = CreateClientRequest {
            full_name: "Jo Client".to_string(),
            email: "not-an-email".to_string(),
            phone_number: None,
            address: None,
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_exception_defaults_to_unavailable() {
        let req: CreateExceptionRequest = serde_json::from_str(
            r#"{"start_time":"2026-03-02T10:00:00Z","end_time":"2026-03-02T12:00:00Z"}"#,
        )
        .unwrap();
        assert!(req.is_unavailable);
        let worker = UserId::new();
        assert_eq!(req.into_create(worker).worker_id, worker);
    }

    #[test]
    fn test_job_description_required() {
        let req = CreateJobRequest {
            description: String::new(),
            client_id: ClientId::new(),
            worker_id: None,
            scheduled_start_time: None,
            scheduled_end_time: None,
        };
        assert!(req.validate().is_err());
    }
}
