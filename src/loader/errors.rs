//! Loader error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for loader operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while building a catalog from table files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Table file could not be read
    #[error("failed to read table file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed CSV content
    #[error("malformed CSV in {path}: {reason}")]
    Csv { path: PathBuf, reason: String },

    /// Header row is missing a required column
    #[error("table {path} has no '{column}' column")]
    MissingColumn { path: PathBuf, column: &'static str },

    /// Table file has no rows at all
    #[error("table {path} is empty")]
    EmptyTable { path: PathBuf },
}
