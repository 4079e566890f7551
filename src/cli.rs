//! Command-line interface parsing
//!
//! Flags override the environment-derived [`Config`](crate::Config).

use clap::Parser;

/// Pokedex - explore PokeAPI locations and catch Pokemon from your terminal
#[derive(Parser, Debug, Default)]
#[command(name = "pokedex")]
#[command(about = "Interactive PokeAPI explorer with a response cache")]
#[command(version)]
pub struct Cli {
    /// PokeAPI root URL (overrides POKEAPI_BASE_URL)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Age in milliseconds after which cached responses are dropped
    /// (overrides CACHE_TTL_MS)
    #[arg(long, value_name = "MS")]
    pub cache_ttl_ms: Option<u64>,

    /// How often, in milliseconds, stale responses are swept
    /// (overrides CACHE_SWEEP_INTERVAL_MS; defaults to the TTL)
    #[arg(long, value_name = "MS")]
    pub sweep_interval_ms: Option<u64>,

    /// Sweep the cache a single time instead of on every interval
    #[arg(long)]
    pub sweep_once: bool,
}
