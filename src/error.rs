//! Error types for the explorer
//!
//! The cache itself cannot fail; these errors come from the fetch layer,
//! the REPL and configuration.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for everything outside the cache core.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The HTTP request could not be completed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },

    /// The response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A command was called without a required argument
    #[error("usage: {command} <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// Configuration values are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl PokedexError {
    /// Returns true if the server reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokedexError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

// == Result Type Alias ==
/// Convenience Result type for the explorer.
pub type Result<T> = std::result::Result<T, PokedexError>;
