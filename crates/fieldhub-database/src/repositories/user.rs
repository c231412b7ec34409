//! User repository implementation.

use chrono::Utc;
use sqlx::{PgExecutor, PgPool};

use fieldhub_core::error::{AppError, ErrorKind};
use fieldhub_core::result::AppResult;
use fieldhub_core::types::UserId;
use fieldhub_entity::user::{CreateUser, UpdateDefaultHours, User, UserRole};

use super::insert_error;

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        fetch_by_id(&self.pool, id).await
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Insert a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let now = Utc::now();
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, full_name, email, phone_number, role, is_active, \
             default_start_time, default_end_time, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, TRUE, $6, $7, $8, $8) RETURNING *",
        )
        .bind(UserId::new())
        .bind(&data.full_name)
        .bind(&data.email)
        .bind(&data.phone_number)
        .bind(data.role)
        .bind(data.default_start_time)
        .bind(data.default_end_time)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error("user", e))
    }

    /// Replace a user's default working hours.
    pub async fn update_default_hours(
        &self,
        id: UserId,
        hours: &UpdateDefaultHours,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET default_start_time = $2, default_end_time = $3, updated_at = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(hours.default_start_time)
        .bind(hours.default_end_time)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update default hours", e)
        })
    }
}

/// Fetch a user by ID on any executor.
pub(crate) async fn fetch_by_id<'e, E>(executor: E, id: UserId) -> AppResult<Option<User>>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
}

/// Fetch all users with a role on any executor, oldest first.
pub(crate) async fn fetch_by_role<'e, E>(executor: E, role: UserRole) -> AppResult<Vec<User>>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, User>(
        "SELECT * FROM users WHERE role = $1 ORDER BY created_at ASC, id ASC",
    )
    .bind(role)
    .fetch_all(executor)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users by role", e))
}
