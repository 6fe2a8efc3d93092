//! Query resolution for errdesk
//!
//! `resolve` picks exactly one record for a (device, raw input) query,
//! orchestrating literal matching against the device table and, for numeric
//! input, the remap candidate set.
//!
//! # Policy
//!
//! 1. Unknown device id rejects immediately, no table access
//! 2. Literal match against `code_str` is always attempted first,
//!    regardless of numeric parseability
//! 3. Numeric input additionally matches by `code_num`: via the candidate
//!    set on remap-enabled devices, by the literal value elsewhere
//! 4. Among all matched rows, the first in the table's source order wins
//!
//! Stateless: a pure function over one catalog snapshot. No request-level
//! state is retained.

mod errors;

pub use errors::{ResolveError, ResolveResult};

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::mapping::candidates;

/// Resolve a raw query against one catalog snapshot.
///
/// Never panics for any input; worst case is `Err(NotFound)`.
pub fn resolve(catalog: &Catalog, device: &str, raw_input: &str) -> ResolveResult {
    let table = catalog
        .table(device)
        .ok_or_else(|| ResolveError::UnknownDevice {
            device: device.to_string(),
            input: raw_input.to_string(),
        })?;

    let needle = raw_input.trim().to_uppercase();

    // Matched row indices; BTreeSet keeps the source-order tie-break exact
    // even when the literal and numeric paths both succeed.
    let mut matched: BTreeSet<usize> = table.rows_matching_str(&needle).collect();

    if let Ok(value) = needle.parse::<i64>() {
        if table.remap_enabled() {
            for cand in candidates(value, table) {
                matched.extend(table.rows_matching_num(cand));
            }
        } else {
            matched.extend(table.rows_matching_num(value));
        }
    }

    match matched.iter().next() {
        Some(&row) => Ok(table.records()[row].clone()),
        None => Err(ResolveError::NotFound {
            device: device.to_string(),
            input: raw_input.to_string(),
        }),
    }
}
