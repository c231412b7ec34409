//! # fieldhub-service
//!
//! Business logic service layer for FieldHub. The scheduling core lives
//! here: [`JobLifecycle`] guards job status changes and
//! [`AvailabilityChecker`] decides whether workers can be booked. The
//! remaining services orchestrate repositories for the CRUD surface.
//!
//! Services follow constructor injection; repositories are provided at
//! construction time via `Arc` references. Core operations take the
//! request's [`RecordStore`](fieldhub_database::RecordStore) explicitly.

pub mod availability;
pub mod client;
pub mod job;
pub mod tool;
pub mod user;

pub use availability::{AvailabilityChecker, AvailabilityService, Verdict};
pub use client::ClientService;
pub use job::{JobLifecycle, JobService, TransitionError};
pub use tool::ToolService;
pub use user::UserService;
