//! CLI module for errdesk
//!
//! Provides command-line interface for:
//! - serve: load tables and run the HTTP server
//! - query: one-shot resolution
//! - candidates: one-shot candidate-set dump

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{candidates, query, run, run_command, serve};
pub use errors::{CliError, CliResult};
