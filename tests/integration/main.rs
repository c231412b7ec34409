//! HTTP integration tests against a real PostgreSQL database.
//!
//! Ignored by default. Point `FIELDHUB_TEST_DATABASE_URL` at a scratch
//! database and run `cargo test --test integration -- --ignored`.

mod helpers;

mod availability_test;
mod client_test;
mod job_test;
mod tool_test;
