//! CLI argument definitions using clap
//!
//! Commands:
//! - errdesk serve --config <path>
//! - errdesk query --config <path> [--device <id>] <code>
//! - errdesk candidates --config <path> [--device <id>] <code>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// errdesk - device error-code lookup service
#[derive(Parser, Debug)]
#[command(name = "errdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the tables and run the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./errdesk.json")]
        config: PathBuf,
    },

    /// Resolve one code and print the record as JSON
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./errdesk.json")]
        config: PathBuf,

        /// Device selector (defaults to the configured default device)
        #[arg(long)]
        device: Option<String>,

        /// Raw code input, numeric or alphanumeric
        code: String,
    },

    /// Print the numeric candidate set for a code (remap diagnostics)
    Candidates {
        /// Path to configuration file
        #[arg(long, default_value = "./errdesk.json")]
        config: PathBuf,

        /// Device selector (defaults to the configured default device)
        #[arg(long)]
        device: Option<String>,

        /// Numeric code input
        code: i64,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
