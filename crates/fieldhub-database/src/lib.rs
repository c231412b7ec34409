//! # fieldhub-database
//!
//! PostgreSQL connection management, the [`RecordStore`] contract used by
//! the scheduling core, its per-request PostgreSQL and in-memory
//! implementations, and CRUD repositories for all FieldHub entities.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;
pub mod unit_of_work;

pub use connection::DatabasePool;
pub use memory::MemoryRecordStore;
pub use store::RecordStore;
pub use unit_of_work::PgUnitOfWork;
