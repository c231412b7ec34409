//! Worker availability decisions and exception management.

pub mod checker;
pub mod service;

pub use checker::{AvailabilityChecker, Verdict};
pub use service::AvailabilityService;
