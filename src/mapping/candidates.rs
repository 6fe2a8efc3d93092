//! Candidate generation for numeric queries
//!
//! A numeric query on a remap-enabled device can refer to a stored code in
//! three ways: literally, as the raw form of a forward-mapped display code,
//! or as the display form of a stored raw code. The candidate set covers all
//! three. The inverse direction is an exhaustive scan over the codes actually
//! present in the table; it is defined only relative to a loaded table, never
//! as a pure function of integers.

use std::collections::BTreeSet;

use crate::catalog::DeviceTable;

use super::intervals::forward;

/// All numeric codes that could refer to the same record as `input`.
///
/// Always contains `input` and `forward(input)`, plus every stored numeric
/// code whose forward mapping equals `input`. Sorted set; small (table sizes
/// are a few hundred rows at most).
pub fn candidates(input: i64, table: &DeviceTable) -> BTreeSet<i64> {
    let mut out = BTreeSet::new();
    out.insert(input);
    out.insert(forward(input));

    for stored in table.numeric_codes() {
        if forward(stored) == input {
            out.insert(stored);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CodeRecord;

    fn table(codes: &[&str]) -> DeviceTable {
        let records = codes
            .iter()
            .map(|c| CodeRecord::new(*c, "E", "", ""))
            .collect();
        DeviceTable::new("w", true, records)
    }

    #[test]
    fn test_contains_input_and_forward() {
        let t = table(&[]);
        let cands = candidates(1001, &t);
        assert!(cands.contains(&1001));
        assert!(cands.contains(&301)); // forward(1001)
    }

    #[test]
    fn test_inverse_scan_finds_stored_raw_code() {
        // forward(-1705) == 865, so a query for 865 must surface -1705
        let t = table(&["-1705", "42"]);
        let cands = candidates(865, &t);
        assert!(cands.contains(&-1705));
        assert!(!cands.contains(&42));
    }

    #[test]
    fn test_identity_input_collapses() {
        // Outside every interval, forward(x) == x; the set stays minimal
        let t = table(&[]);
        let cands = candidates(7, &t);
        assert_eq!(cands.into_iter().collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_inverse_only_relative_to_table() {
        // -1705 maps to 865, but it is not in this table
        let t = table(&["-1706"]);
        let cands = candidates(865, &t);
        assert!(!cands.contains(&-1705));
        // forward(-1706) == 866 != 865
        assert!(!cands.contains(&-1706));
    }
}
