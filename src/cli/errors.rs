//! CLI-specific error types
//!
//! Everything here ends the process with a non-zero exit; `main` prints the
//! message to stderr.

use thiserror::Error;

use crate::config::ConfigError;
use crate::loader::LoadError;
use crate::resolver::ResolveError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    /// One-shot query produced no record
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
