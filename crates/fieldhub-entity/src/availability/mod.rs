//! Worker availability exceptions.

pub mod model;

pub use model::{AvailabilityException, CreateAvailabilityException, ExceptionKind};
