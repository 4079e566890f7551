//! Pokedex - a command-line PokeAPI explorer
//!
//! Browses location areas, explores their encounters and catches Pokemon,
//! caching API responses for the configured TTL.

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::repl::{self, Session};
use pokedex::{Config, PokeClient};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Parse command-line flags
/// 2. Initialize tracing subscriber (stderr, so stdout stays for the REPL)
/// 3. Load configuration from environment variables, then apply flags
/// 4. Create the response cache and start its janitor
/// 5. Run the REPL on stdin/stdout
/// 6. Close the cache, stopping the janitor
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Defaults to "warn" so log lines do not interleave with REPL output,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().merge_cli(&cli);
    config.validate().context("refusing to start")?;
    info!(
        "Configuration loaded: base_url={}, cache_ttl={}ms, sweep_interval={}ms, sweep_once={}",
        config.api_base_url, config.cache_ttl_ms, config.sweep_interval_ms, config.sweep_once
    );

    let client = PokeClient::from_config(&config);
    info!("Response cache initialized");

    let mut session = Session::new(client, StdRng::from_entropy());
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    let result = repl::run(&mut session, stdin, &mut stdout).await;

    session.into_client().shutdown().await;
    info!("Cache janitor stopped");

    result.context("terminal I/O failed")
}
