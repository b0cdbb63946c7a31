//! Command-line interface for strictly_knights.

use clap::{Parser, Subcommand};
use strictly_knights::{OutputFormat, Square};

/// Default config file, read from the working directory when present.
pub const DEFAULT_CONFIG: &str = "strictly_knights.toml";

/// Strictly Knights - shortest knight paths on a chessboard
#[derive(Parser, Debug)]
#[command(name = "strictly_knights")]
#[command(about = "Find the shortest knight path between two squares", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Enable debug logging (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find a shortest path between two squares given as "file,rank"
    Path {
        /// Starting square, e.g. "0,0"
        #[arg(allow_hyphen_values = true)]
        from: Square,

        /// Target square, e.g. "3,3"
        #[arg(allow_hyphen_values = true)]
        to: Square,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Run the three sample queries
    Demo {
        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print the knight distance from one square to every square
    Distances {
        /// Starting square, e.g. "0,0"
        #[arg(allow_hyphen_values = true)]
        from: Square,
    },
}
