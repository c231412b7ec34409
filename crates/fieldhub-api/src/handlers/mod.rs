//! HTTP request handlers, one module per resource.

pub mod clients;
pub mod health;
pub mod jobs;
pub mod tools;
pub mod users;
pub mod workers;
