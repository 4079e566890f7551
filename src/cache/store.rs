//! Expiring Store Module
//!
//! Thread-safe map from request keys to timestamped payloads. The store does
//! no scheduling of its own; stale entries are removed by the janitor task
//! calling [`ExpiringStore::sweep`].

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Store State ==
/// Everything guarded by the store's single lock.
#[derive(Debug, Default)]
struct StoreState {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

// == Expiring Store ==
/// Holds the freshest payload per key.
///
/// Every operation takes the same exclusive lock for its whole read/modify
/// step, so operations are linearizable and no reader can observe a
/// half-written entry. The lock is never held across an `.await`.
#[derive(Debug, Default)]
pub struct ExpiringStore {
    state: Mutex<StoreState>,
}

impl ExpiringStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Put ==
    /// Stores `payload` under `key`, stamped with the current instant.
    ///
    /// Any previous entry for `key` is replaced and its age resets to zero.
    /// Concurrent puts to the same key leave whichever write ran last.
    pub fn put(&self, key: impl Into<String>, payload: impl Into<Vec<u8>>) {
        let entry = CacheEntry::new(payload.into());
        let mut state = self.state.lock();
        state.entries.insert(key.into(), entry);
        state.stats.record_put();
        let total = state.entries.len();
        state.stats.set_total_entries(total);
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Age is not checked here: an entry stays readable until the janitor
    /// removes it or it is overwritten.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut state = self.state.lock();
        let payload = state.entries.get(key).map(|entry| entry.payload.clone());
        match payload {
            Some(_) => state.stats.record_hit(),
            None => state.stats.record_miss(),
        }
        payload
    }

    // == Sweep ==
    /// Removes every entry older than `ttl` and returns how many were removed.
    pub fn sweep(&self, ttl: Duration) -> usize {
        self.sweep_at(Instant::now(), ttl)
    }

    /// Sweeps as if the current instant were `now`.
    pub(crate) fn sweep_at(&self, now: Instant, ttl: Duration) -> usize {
        let mut state = self.state.lock();
        let before = state.entries.len();
        state.entries.retain(|_, entry| !entry.is_stale_at(now, ttl));
        let removed = before - state.entries.len();

        state.stats.record_sweep(removed);
        let total = state.entries.len();
        state.stats.set_total_entries(total);
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the store's statistics.
    pub fn stats(&self) -> CacheStats {
        self.state.lock().stats.clone()
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.state.lock().entries.is_empty()
    }
}
