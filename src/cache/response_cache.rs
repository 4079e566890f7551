//! Response Cache Module
//!
//! Couples an [`ExpiringStore`] with the janitor task that keeps it trimmed.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheStats, ExpiringStore};
use crate::tasks::Janitor;

// == Sweep Mode ==
/// How many times the janitor sweeps before exiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepMode {
    /// Sweep on every tick until the cache is closed
    #[default]
    Repeating,
    /// Sweep once, one interval after start, then stop
    Once,
}

// == Cache Config ==
/// Timing parameters for a [`Cache`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum age an entry may reach before a sweep removes it
    pub ttl: Duration,
    /// How often the janitor sweeps
    pub sweep_interval: Duration,
    /// Repeating or single sweep
    pub mode: SweepMode,
}

impl CacheConfig {
    /// Uses `interval` as both the TTL and the sweep period.
    pub fn new(interval: Duration) -> Self {
        Self {
            ttl: interval,
            sweep_interval: interval,
            mode: SweepMode::Repeating,
        }
    }

    pub fn with_sweep_interval(mut self, sweep_interval: Duration) -> Self {
        self.sweep_interval = sweep_interval;
        self
    }

    pub fn with_mode(mut self, mode: SweepMode) -> Self {
        self.mode = mode;
        self
    }
}

// == Cache ==
/// Time-bounded response cache keyed by request URL.
///
/// `get` and `put` are synchronous and only wait on the store's lock. Stale
/// entries are reclaimed in the background by a janitor whose lifetime ends
/// with the cache: call [`Cache::close`] for an orderly stop, or drop the
/// cache to abort the janitor.
///
/// # Example
/// ```ignore
/// let cache = Cache::new(Duration::from_secs(5));
/// cache.put("https://pokeapi.co/api/v2/pokemon/pikachu", body);
/// let hit = cache.get("https://pokeapi.co/api/v2/pokemon/pikachu");
/// cache.close().await;
/// ```
#[derive(Debug)]
pub struct Cache {
    store: Arc<ExpiringStore>,
    janitor: Janitor,
    config: CacheConfig,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache whose TTL and sweep period are both `interval`, and
    /// starts its janitor.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn new(interval: Duration) -> Self {
        Self::with_config(CacheConfig::new(interval))
    }

    /// Creates a cache from explicit timing parameters and starts its janitor.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn with_config(config: CacheConfig) -> Self {
        let store = Arc::new(ExpiringStore::new());
        let janitor = Janitor::spawn(Arc::clone(&store), &config);

        Self {
            store,
            janitor,
            config,
        }
    }

    /// Returns the cached payload for `key`, if any.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.get(key)
    }

    /// Stores `payload` under `key`, replacing any previous entry.
    pub fn put(&self, key: impl Into<String>, payload: impl Into<Vec<u8>>) {
        self.store.put(key, payload);
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Returns true while the janitor task is alive.
    pub fn is_sweeping(&self) -> bool {
        self.janitor.is_running()
    }

    // == Close ==
    /// Stops the janitor and waits for it to exit.
    pub async fn close(self) {
        self.janitor.shutdown().await;
    }
}
