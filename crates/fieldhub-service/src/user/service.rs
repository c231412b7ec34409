//! User registration, lookup, and working hours.

use std::sync::Arc;

use tracing::info;

use fieldhub_core::error::AppError;
use fieldhub_core::result::AppResult;
use fieldhub_core::types::UserId;
use fieldhub_database::repositories::UserRepository;
use fieldhub_entity::user::{CreateUser, UpdateDefaultHours, User};

/// Handles user operations.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Registers a user. Emails are unique.
    pub async fn create(&self, data: CreateUser) -> AppResult<User> {
        check_hours(&data.default_start_time, &data.default_end_time)?;
        if self.user_repo.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let user = self.user_repo.create(&data).await?;
        info!(user_id = %user.id, role = %user.role, "User created");
        Ok(user)
    }

    /// Gets a user by ID.
    pub async fn get(&self, id: UserId) -> AppResult<User> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::entity_not_found("user", id))
    }

    /// Replaces a user's default working hours.
    pub async fn update_default_hours(
        &self,
        id: UserId,
        hours: UpdateDefaultHours,
    ) -> AppResult<User> {
        check_hours(&hours.default_start_time, &hours.default_end_time)?;
        let user = self
            .user_repo
            .update_default_hours(id, &hours)
            .await?
            .ok_or_else(|| AppError::entity_not_found("user", id))?;
        info!(user_id = %user.id, "Default hours updated");
        Ok(user)
    }
}

/// Reject a default window that closes before it opens.
fn check_hours<T: PartialOrd>(start: &Option<T>, end: &Option<T>) -> AppResult<()> {
    match (start, end) {
        (Some(start), Some(end)) if start >= end => Err(AppError::validation(
            "Default start time must be before default end time",
        )),
        _ => Ok(()),
    }
}
