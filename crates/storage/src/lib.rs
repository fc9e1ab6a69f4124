//! Storage layer for salescript
//!
//! PostgreSQL backend (sqlx) plus an in-process backend with the same
//! contract. Both implement the async traits in [`traits`].

pub mod error;
mod memory;
mod pg_migrations;
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;
mod types;

pub use error::StorageError;
pub use memory::MemoryStorage;
pub use pg_migrations::run_pg_migrations;
pub use pg_storage::PgStorage;
pub use traits::{SalesStore, ScriptStore, SessionStore, TeamStore};
pub use types::{HistoryQuery, SessionUpdate};
