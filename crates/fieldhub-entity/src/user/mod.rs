//! User domain entities (workers and contractors).

pub mod model;
pub mod role;

pub use model::{CreateUser, UpdateDefaultHours, User};
pub use role::UserRole;
