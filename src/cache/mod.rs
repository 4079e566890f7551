//! Cache Module
//!
//! Time-bounded response cache with background eviction.

mod entry;
mod response_cache;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use response_cache::{Cache, CacheConfig, SweepMode};
pub use stats::CacheStats;
pub use store::ExpiringStore;
