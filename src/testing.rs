//! Test doubles for the storage collaborator.

use crate::storage::{KeyValueStore, MemoryStore, StoreError};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory store that can be switched into failing reads or writes, or
/// writes to a single key.
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    failing_key: Mutex<Option<String>>,
    writes: AtomicUsize,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Refuses writes to `key` only; `None` lifts it.
    pub fn fail_writes_to(&self, key: Option<&str>) {
        *self.failing_key.lock().unwrap() = key.map(str::to_string);
    }

    /// Successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Reads bypassing the failure switch.
    pub async fn peek(&self, key: &str) -> Option<String> {
        self.inner.read(key).await.ok().flatten()
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!("read of '{key}' refused")));
        }
        self.inner.read(key).await
    }

    async fn write(&self, key: &str, document: String) -> Result<(), StoreError> {
        let key_refused = self.failing_key.lock().unwrap().as_deref() == Some(key);
        if key_refused || self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!("write of '{key}' refused")));
        }
        self.inner.write(key, document).await?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
