//! # fieldhub-entity
//!
//! Domain entity models for FieldHub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod availability;
pub mod client;
pub mod job;
pub mod tool;
pub mod user;
