//! In-memory [`ArticleStore`] for tests and embedding.
//!
//! Clones share state, so a test can keep a handle and inspect what the
//! repository saved.

use super::{ArticleStore, StoreSnapshot};
use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct MemoryInner {
    snapshot: Option<StoreSnapshot>,
    fail_saves: bool,
    save_count: usize,
}

/// Snapshot held behind a mutex
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `snapshot`
    pub fn with_snapshot(snapshot: StoreSnapshot) -> Self {
        let store = Self::new();
        store.lock().snapshot = Some(snapshot);
        store
    }

    /// Make every subsequent `save_all` fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.lock().fail_saves = fail;
    }

    /// Last successfully saved snapshot
    pub fn snapshot(&self) -> Option<StoreSnapshot> {
        self.lock().snapshot.clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    fn lock(&self) -> MutexGuard<'_, MemoryInner> {
        // A panic while holding the lock cannot leave a half-written snapshot
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ArticleStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn load_all(&self) -> Result<Option<StoreSnapshot>> {
        Ok(self.lock().snapshot.clone())
    }

    fn save_all(&self, snapshot: &StoreSnapshot) -> Result<()> {
        let mut inner = self.lock();
        if inner.fail_saves {
            return Err(anyhow!("memory store is configured to fail saves"));
        }
        inner.snapshot = Some(snapshot.clone());
        inner.save_count += 1;
        Ok(())
    }
}
