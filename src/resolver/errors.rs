//! Resolution result taxonomy
//!
//! These are ordinary result values, not failures of the service: the core
//! never panics or raises for any input string, and it never builds
//! user-facing prose. Each variant carries the original device selector and
//! raw input so the transport layer can phrase its own message.

use thiserror::Error;

/// Result type for resolution
pub type ResolveResult = Result<crate::catalog::CodeRecord, ResolveError>;

/// Why a query produced no record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Device selector is not in the configured set
    #[error("unknown device '{device}'")]
    UnknownDevice { device: String, input: String },

    /// No record matched after literal and numeric resolution
    #[error("no record for '{input}' on device '{device}'")]
    NotFound { device: String, input: String },

    /// Reserved for structured-input validation; currently unreachable
    /// (non-numeric non-matching input falls through to NotFound)
    #[error("malformed input '{input}' for device '{device}'")]
    MalformedInput { device: String, input: String },
}

impl ResolveError {
    /// Device selector the query named
    pub fn device(&self) -> &str {
        match self {
            Self::UnknownDevice { device, .. }
            | Self::NotFound { device, .. }
            | Self::MalformedInput { device, .. } => device,
        }
    }

    /// Raw input as the caller supplied it
    pub fn input(&self) -> &str {
        match self {
            Self::UnknownDevice { input, .. }
            | Self::NotFound { input, .. }
            | Self::MalformedInput { input, .. } => input,
        }
    }
}
