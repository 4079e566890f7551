//! Background Tasks Module
//!
//! Contains background tasks that run alongside the REPL.
//!
//! # Tasks
//! - Janitor: removes stale cache entries at a configured interval

mod janitor;

pub use janitor::Janitor;
