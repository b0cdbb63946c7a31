//! Strictly Knights - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, DEFAULT_CONFIG};
use strictly_knights::{
    DEMO_QUERIES, KnightsConfig, OutputFormat, Square, distances_from,
    find_shortest_knight_path, render_distances, render_path, shortest_path,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => KnightsConfig::from_file(path)?,
        None => KnightsConfig::load_or_default(DEFAULT_CONFIG)?,
    };

    init_tracing(&config, cli.verbose);
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Path { from, to, format } => {
            run_path(from, to, format.unwrap_or(*config.format()))
        }
        Command::Demo { format } => run_demo(format.unwrap_or(*config.format())),
        Command::Distances { from } => run_distances(from),
    }
}

/// Installs the stderr subscriber, preferring `RUST_LOG` over config.
fn init_tracing(config: &KnightsConfig, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.log_filter().as_str() };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Find and print one path
#[instrument]
fn run_path(from: Square, to: Square, format: OutputFormat) -> Result<()> {
    info!(%from, %to, "Searching for knight path");
    let path = shortest_path(from, to);
    print!("{}", render_path(&path, format)?);
    Ok(())
}

/// Run the sample queries
#[instrument]
fn run_demo(format: OutputFormat) -> Result<()> {
    for (start, end) in DEMO_QUERIES {
        let path = find_shortest_knight_path(start, end)
            .with_context(|| format!("Demo query {:?} -> {:?}", start, end))?;
        print!("{}", render_path(&path, format)?);
    }
    Ok(())
}

/// Print the distance grid
#[instrument]
fn run_distances(from: Square) -> Result<()> {
    let map = distances_from(from.coords())?;
    print!("{}", render_distances(&map));
    Ok(())
}
