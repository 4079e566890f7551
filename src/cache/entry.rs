//! Cache Entry Module
//!
//! Defines a single cached payload stamped with its creation time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached response body together with the instant it was written.
///
/// Entries are never mutated in place. A new write to the same key replaces
/// the whole entry, which resets its age to zero.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload (a serialized response body)
    pub payload: Vec<u8>,
    /// Creation timestamp on the monotonic clock
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(payload: Vec<u8>) -> Self {
        Self::stamped_at(payload, Instant::now())
    }

    /// Creates an entry with an explicit creation instant.
    pub fn stamped_at(payload: Vec<u8>, created_at: Instant) -> Self {
        Self {
            payload,
            created_at,
        }
    }

    // == Age ==
    /// Returns how old the entry is relative to `now`.
    ///
    /// Saturates to zero if `now` is earlier than the creation instant.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived `ttl` at `now`.
    ///
    /// Boundary condition: an entry whose age is exactly `ttl` is still
    /// fresh. Only an age strictly greater than `ttl` makes it stale.
    pub fn is_stale_at(&self, now: Instant, ttl: Duration) -> bool {
        self.age_at(now) > ttl
    }
}
