//! Code record type
//!
//! One row of a device's error-code table. All derived fields are computed
//! once at construction and never recomputed afterward.

use serde::Serialize;

/// One row of a device's error-code table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeRecord {
    /// Canonical display code exactly as loaded
    pub code: String,

    /// Uppercased form of `code`, used for literal matching
    pub code_str: String,

    /// Numeric form of `code` when it parses as an integer
    pub code_num: Option<i64>,

    /// Short error label
    pub err_name: String,

    /// Free-text description
    pub desc: String,

    /// Attachment filenames, comma-joined, possibly empty
    pub attach: String,
}

impl CodeRecord {
    /// Build a record from raw cell values, deriving `code_str` and
    /// `code_num` from `code`.
    pub fn new(
        code: impl Into<String>,
        err_name: impl Into<String>,
        desc: impl Into<String>,
        attach: impl Into<String>,
    ) -> Self {
        let code = code.into();
        let code_str = code.trim().to_uppercase();
        let code_num = code_str.parse::<i64>().ok();
        Self {
            code,
            code_str,
            code_num,
            err_name: err_name.into(),
            desc: desc.into(),
            attach: attach.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_code_derivation() {
        let rec = CodeRecord::new("1001", "JAM", "arm jam", "");
        assert_eq!(rec.code_str, "1001");
        assert_eq!(rec.code_num, Some(1001));
    }

    #[test]
    fn test_negative_numeric_code() {
        let rec = CodeRecord::new("-1705", "SRV", "servo fault", "");
        assert_eq!(rec.code_num, Some(-1705));
    }

    #[test]
    fn test_alphanumeric_code_has_no_numeric_form() {
        let rec = CodeRecord::new("e02", "VAC", "vacuum loss", "vac.pdf");
        assert_eq!(rec.code_str, "E02");
        assert_eq!(rec.code_num, None);
        assert_eq!(rec.attach, "vac.pdf");
    }

    #[test]
    fn test_code_whitespace_trimmed_for_matching() {
        let rec = CodeRecord::new(" 42 ", "X", "", "");
        assert_eq!(rec.code, " 42 ");
        assert_eq!(rec.code_str, "42");
        assert_eq!(rec.code_num, Some(42));
    }
}
