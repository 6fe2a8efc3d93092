//! Resolver Policy Tests
//!
//! Tests for the resolution policy invariants:
//! - Unknown device rejects before any table access
//! - Literal match is always attempted, numeric match unions in after it
//! - First row in source order wins among all matches
//! - The resolver never panics for any input string

use errdesk::catalog::{Catalog, CodeRecord, DeviceTable};
use errdesk::resolver::{resolve, ResolveError};

// =============================================================================
// Helper Functions
// =============================================================================

fn record(code: &str, err_name: &str) -> CodeRecord {
    CodeRecord::new(code, err_name, format!("{} description", err_name), "")
}

/// Catalog with one remap-enabled device ("w") and one plain device ("a")
fn catalog() -> Catalog {
    Catalog::new(vec![
        DeviceTable::new(
            "w",
            true,
            vec![
                record("-1705", "SRV"),
                record("865", "LIT"),
                record("E02", "VAC"),
            ],
        ),
        DeviceTable::new(
            "a",
            false,
            vec![
                record("1001", "JAM"),
                record("E02", "VAC_A"),
                record("1001", "JAM_DUP"),
            ],
        ),
    ])
}

// =============================================================================
// Device Selection
// =============================================================================

#[test]
fn test_unknown_device_rejected() {
    let err = resolve(&catalog(), "z", "1001").unwrap_err();
    match err {
        ResolveError::UnknownDevice { device, input } => {
            assert_eq!(device, "z");
            assert_eq!(input, "1001");
        }
        other => panic!("expected UnknownDevice, got {:?}", other),
    }
}

#[test]
fn test_unknown_device_wins_over_valid_code() {
    // The code exists on device "a", but the selector is checked first
    let err = resolve(&catalog(), "nope", "1001").unwrap_err();
    assert!(matches!(err, ResolveError::UnknownDevice { .. }));
}

// =============================================================================
// Literal Path
// =============================================================================

#[test]
fn test_alphanumeric_literal_match() {
    let rec = resolve(&catalog(), "a", "E02").unwrap();
    assert_eq!(rec.err_name, "VAC_A");
}

#[test]
fn test_literal_match_is_case_insensitive() {
    let rec = resolve(&catalog(), "a", "e02").unwrap();
    assert_eq!(rec.err_name, "VAC_A");
}

#[test]
fn test_literal_match_trims_whitespace() {
    let rec = resolve(&catalog(), "a", "  e02  ").unwrap();
    assert_eq!(rec.err_name, "VAC_A");
}

// =============================================================================
// Numeric Path
// =============================================================================

#[test]
fn test_numeric_literal_on_plain_device() {
    // {code: 1001, err_name: JAM} on a non-remapping device
    let rec = resolve(&catalog(), "a", "1001").unwrap();
    assert_eq!(rec.err_name, "JAM");
}

#[test]
fn test_plain_device_does_not_remap() {
    // forward(1001) == 301; a plain device must not consider it
    let catalog = Catalog::new(vec![DeviceTable::new(
        "a",
        false,
        vec![record("301", "MAPPED")],
    )]);
    let err = resolve(&catalog, "a", "1001").unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { .. }));
}

#[test]
fn test_inverse_candidate_path() {
    // row code_num = -1705, forward(-1705) = 865; numeric query 865 on the
    // remap device must reach the -1705 row
    let catalog = Catalog::new(vec![DeviceTable::new(
        "w",
        true,
        vec![record("-1705", "SRV")],
    )]);
    let rec = resolve(&catalog, "w", "865").unwrap();
    assert_eq!(rec.err_name, "SRV");
}

#[test]
fn test_forward_candidate_path() {
    // Querying the raw form 1001 must reach the display-form row 301
    let catalog = Catalog::new(vec![DeviceTable::new(
        "w",
        true,
        vec![record("301", "DISPLAY")],
    )]);
    let rec = resolve(&catalog, "w", "1001").unwrap();
    assert_eq!(rec.err_name, "DISPLAY");
}

// =============================================================================
// Tie-break: first row in source order
// =============================================================================

#[test]
fn test_duplicate_codes_first_row_wins() {
    let rec = resolve(&catalog(), "a", "1001").unwrap();
    assert_eq!(rec.err_name, "JAM");
}

#[test]
fn test_literal_and_numeric_union_keeps_source_order() {
    // Query 865 on "w": the inverse candidate matches row 0 (-1705) and the
    // literal/numeric paths match row 1 ("865"). Row 0 wins by source
    // order, not by which path produced it.
    let rec = resolve(&catalog(), "w", "865").unwrap();
    assert_eq!(rec.err_name, "SRV");
}

#[test]
fn test_source_order_follows_table_not_match_insertion() {
    // Literal path matches row 1, numeric candidate path matches row 0;
    // the earlier table row still wins.
    let catalog = Catalog::new(vec![DeviceTable::new(
        "w",
        true,
        vec![record("-1705", "RAW"), record("865", "DISPLAY")],
    )]);
    let rec = resolve(&catalog, "w", "865").unwrap();
    assert_eq!(rec.err_name, "RAW");
}

// =============================================================================
// NotFound and hostile input
// =============================================================================

#[test]
fn test_absent_code_not_found() {
    let err = resolve(&catalog(), "a", "424242").unwrap_err();
    match err {
        ResolveError::NotFound { device, input } => {
            assert_eq!(device, "a");
            assert_eq!(input, "424242");
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_resolver_never_panics() {
    let catalog = catalog();
    for input in [
        "",
        " ",
        "abc",
        "-",
        "--5",
        "1 001",
        "1,001",
        "99999999999999999999999999",
        "\"quoted\"",
        "\n\t",
        "/w 1001",
    ] {
        // Worst case is NotFound; any panic fails the test
        let _ = resolve(&catalog, "w", input);
        let _ = resolve(&catalog, "a", input);
    }
}

#[test]
fn test_not_found_carries_original_input() {
    let err = resolve(&catalog(), "w", "  bogus  ").unwrap_err();
    assert_eq!(err.input(), "  bogus  ");
    assert_eq!(err.device(), "w");
}
