//! Configuration Module
//!
//! Loads explorer settings from environment variables and command-line flags.

use std::env;
use std::time::Duration;

use crate::cache::{CacheConfig, SweepMode};
use crate::cli::Cli;
use crate::error::{PokedexError, Result};

/// Root of the public PokeAPI
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default cache TTL in milliseconds
pub const DEFAULT_CACHE_TTL_MS: u64 = 5_000;

/// Explorer configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults; command-line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// PokeAPI root URL, without a trailing slash
    pub api_base_url: String,
    /// Age in milliseconds after which a cached response is swept
    pub cache_ttl_ms: u64,
    /// Janitor sweep period in milliseconds
    pub sweep_interval_ms: u64,
    /// Sweep only once instead of on every tick
    pub sweep_once: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `CACHE_TTL_MS` - Cache TTL in milliseconds (default: 5000)
    /// - `CACHE_SWEEP_INTERVAL_MS` - Sweep period in milliseconds (default: the TTL)
    /// - `CACHE_SWEEP_ONCE` - `true` to sweep a single time (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let cache_ttl_ms = lookup("CACHE_TTL_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CACHE_TTL_MS);

        Self {
            api_base_url: lookup("POKEAPI_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cache_ttl_ms,
            sweep_interval_ms: lookup("CACHE_SWEEP_INTERVAL_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(cache_ttl_ms),
            sweep_once: lookup("CACHE_SWEEP_ONCE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    // == CLI Overrides ==
    /// Applies any flags given on the command line.
    ///
    /// Setting the TTL without a sweep interval keeps the two equal.
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(base_url) = &cli.base_url {
            self.api_base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(ttl) = cli.cache_ttl_ms {
            self.cache_ttl_ms = ttl;
            self.sweep_interval_ms = ttl;
        }
        if let Some(interval) = cli.sweep_interval_ms {
            self.sweep_interval_ms = interval;
        }
        if cli.sweep_once {
            self.sweep_once = true;
        }
        self
    }

    // == Validation ==
    /// Rejects settings the cache or client cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.is_empty() {
            return Err(PokedexError::InvalidConfig(
                "API base URL must not be empty".to_string(),
            ));
        }
        if self.cache_ttl_ms == 0 {
            return Err(PokedexError::InvalidConfig(
                "cache TTL must be greater than zero".to_string(),
            ));
        }
        if self.sweep_interval_ms == 0 {
            return Err(PokedexError::InvalidConfig(
                "sweep interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Converts the cache settings into a [`CacheConfig`].
    pub fn cache_config(&self) -> CacheConfig {
        let mode = if self.sweep_once {
            SweepMode::Once
        } else {
            SweepMode::Repeating
        };

        CacheConfig::new(Duration::from_millis(self.cache_ttl_ms))
            .with_sweep_interval(Duration::from_millis(self.sweep_interval_ms))
            .with_mode(mode)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl_ms: DEFAULT_CACHE_TTL_MS,
            sweep_interval_ms: DEFAULT_CACHE_TTL_MS,
            sweep_once: false,
        }
    }
}
