//! Observability subsystem for errdesk
//!
//! Structured JSON logging only.
//!
//! # Principles
//!
//! 1. Observability is read-only: no side effects on resolution
//! 2. Synchronous, no background threads
//! 3. Deterministic output (sorted fields, fixed key order)

mod logger;

pub use logger::{Logger, Severity};
