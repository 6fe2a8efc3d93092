//! Numeric code remapping for errdesk
//!
//! One device class stores raw numeric codes whose display form is reached
//! through a fixed piecewise interval transform. This module owns that
//! transform and the candidate-set generation built on it.
//!
//! # Invariants
//!
//! - The interval table is a single authoritative constant; per-call
//!   behavior is pure and deterministic
//! - The inverse direction exists only as a scan over a loaded table's
//!   stored codes

mod candidates;
mod intervals;

pub use candidates::candidates;
pub use intervals::forward;
