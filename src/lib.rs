//! Pokedex - a command-line PokeAPI explorer
//!
//! Browses location areas, explores their encounters and catches Pokemon.
//! API responses are kept in a time-bounded cache that is trimmed by a
//! background janitor.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeClient;
pub use cache::{Cache, CacheConfig, SweepMode};
pub use config::Config;
pub use error::{PokedexError, Result};
