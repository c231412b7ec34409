//! Custom Axum extractors.

pub mod unit_of_work;
pub mod validated;

pub use unit_of_work::UnitOfWork;
pub use validated::{ValidatedJson, ValidatedQuery};
