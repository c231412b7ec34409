//! Tool inventory entities.

pub mod model;

pub use model::{CreateTool, Tool};
