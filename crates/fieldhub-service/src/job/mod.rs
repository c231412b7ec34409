//! Job status lifecycle and job orchestration.

pub mod lifecycle;
pub mod service;

pub use lifecycle::{JobLifecycle, TransitionError};
pub use service::JobService;
