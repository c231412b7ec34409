//! Core type definitions used across the FieldHub workspace.

pub mod id;

pub use id::*;
