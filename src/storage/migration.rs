//! Schema version check run before the documents are loaded.
//!
//! The stored version is a plain string under the version key. When it differs
//! from [`SCHEMA_VERSION`], upgrades run and the current version is written back.

use super::store::{KeyValueStore, StoreError};

pub const SCHEMA_VERSION: &str = "1.0.0";

/// Brings stored data up to the current schema. Returns the version found in
/// storage before migrating, if any.
pub async fn migrate_if_needed(
    store: &dyn KeyValueStore,
    version_key: &str,
) -> Result<Option<String>, StoreError> {
    let stored = store.read(version_key).await?;
    if stored.as_deref() == Some(SCHEMA_VERSION) {
        return Ok(stored);
    }

    log::info!(
        "Migration: schema {} -> {}",
        stored.as_deref().unwrap_or("<none>"),
        SCHEMA_VERSION
    );

    // 1.0.0 is the first schema; upgrade steps go here, oldest first.

    store.write(version_key, SCHEMA_VERSION.to_string()).await?;
    Ok(stored)
}
