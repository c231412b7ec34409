//! Repository implementations for all FieldHub entities.

pub mod availability;
pub mod client;
pub mod job;
pub mod tool;
pub mod user;

pub use availability::AvailabilityRepository;
pub use client::ClientRepository;
pub use job::JobRepository;
pub use tool::ToolRepository;
pub use user::UserRepository;

use fieldhub_core::error::{AppError, ErrorKind};

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Map an insert failure, turning unique-constraint violations into conflicts.
pub(crate) fn insert_error(entity: &str, err: sqlx::Error) -> AppError {
    let is_unique_violation = err
        .as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == UNIQUE_VIOLATION);

    if is_unique_violation {
        AppError::with_source(
            ErrorKind::Conflict,
            format!("A {entity} with the same unique field already exists"),
            err,
        )
    } else {
        AppError::with_source(ErrorKind::Database, format!("Failed to create {entity}"), err)
    }
}
