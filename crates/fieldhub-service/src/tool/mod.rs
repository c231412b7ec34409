//! Tool inventory.

pub mod service;

pub use service::ToolService;
