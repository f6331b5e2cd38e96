//! JSON encoding of the persisted documents (card collection, study stats).
//!
//! Loading is lenient: a document that no longer parses is replaced by its
//! default so the app stays usable, and the problem is logged.

use super::store::{KeyValueStore, StoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Reads and decodes a document, falling back to `T::default()` when the key is
/// absent or the stored JSON is malformed. Only storage failures are errors.
pub async fn load_document<T>(store: &dyn KeyValueStore, key: &str) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = store.read(key).await? else {
        return Ok(T::default());
    };

    Ok(decode_or_default(key, &raw))
}

/// Encodes and writes the whole document under `key`.
pub async fn save_document<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value)?;
    store.write(key, json).await
}

pub fn decode_or_default<T>(key: &str, raw: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            match discarded_entries(raw) {
                Some(count) => log::warn!(
                    "Document '{}' is malformed, discarding {} entries: {}",
                    key,
                    count,
                    e
                ),
                None => log::warn!("Document '{}' is malformed, using defaults: {}", key, e),
            }
            T::default()
        }
    }
}

/// Number of entries in a document that is still a JSON array, such as a card
/// collection where one card no longer decodes.
fn discarded_entries(raw: &str) -> Option<usize> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Array(items)) => Some(items.len()),
        _ => None,
    }
}
