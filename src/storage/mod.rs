//! Key-value storage collaborator and the JSON documents kept in it.

pub mod documents;
pub mod migration;
pub mod sqlite;
pub mod store;

pub use sqlite::SqliteStore;
pub use store::{KeyValueStore, MemoryStore, StoreError};
