//! Interval-based numeric code remapping
//!
//! One device class reports raw numeric codes that differ from the display
//! codes printed in its manual. The transform between the two is a fixed
//! piecewise table of disjoint integer intervals with per-interval offsets.
//!
//! # Invariants
//!
//! - Intervals are mutually disjoint; at most one rule matches any input
//! - Inputs outside every interval map to themselves (identity fallback)
//! - There is no closed-form inverse; inverse lookups scan stored codes
//!   (see `candidates`)
//! - Idempotence is NOT a contract: `forward(forward(x))` has no guaranteed
//!   relation to `forward(x)`

/// One remapping rule over an inclusive integer interval.
///
/// Output is `-input + shift` when `negate` is set, `input + shift`
/// otherwise. Exclusive bounds from the published table are normalized to
/// inclusive integer bounds (membership is unchanged over the integers).
#[derive(Debug, Clone, Copy)]
struct IntervalRule {
    lo: i64,
    hi: i64,
    negate: bool,
    shift: i64,
}

impl IntervalRule {
    const fn direct(lo: i64, hi: i64, shift: i64) -> Self {
        Self {
            lo,
            hi,
            negate: false,
            shift,
        }
    }

    const fn negated(lo: i64, hi: i64, shift: i64) -> Self {
        Self {
            lo,
            hi,
            negate: true,
            shift,
        }
    }

    fn contains(&self, code: i64) -> bool {
        self.lo <= code && code <= self.hi
    }

    fn apply(&self, code: i64) -> i64 {
        if self.negate {
            -code + self.shift
        } else {
            code + self.shift
        }
    }
}

/// The canonical remap table.
///
/// Bound inclusivity follows the published table exactly:
/// `1000 <= x <= 1100` and `2000 < x < 2100` for the positive rows, and
/// `low < x <= high` for every negative row. Adjacent rows such as
/// `(-1620, -1600]` and `(-1750, -1700]` are distinct rules with different
/// offsets and must not be merged.
const REMAP_RULES: [IntervalRule; 12] = [
    IntervalRule::direct(1000, 1100, -700), //  1000 <= x <= 1100 -> x - 700
    IntervalRule::direct(2001, 2099, -1600), // 2000 <  x <  2100 -> x - 1600
    IntervalRule::negated(-229, -200, 300), //  -230 <  x <= -200 -> -x + 300
    IntervalRule::negated(-329, -300, 230), //  -330 <  x <= -300 -> -x + 230
    IntervalRule::negated(-529, -500, 60),  //  -530 <  x <= -500 -> -x + 60
    IntervalRule::negated(-819, -700, -110), // -820 <  x <= -700 -> -x - 110
    IntervalRule::negated(-1059, -1000, -290), // -1060 < x <= -1000 -> -x - 290
    IntervalRule::negated(-1569, -1500, -730), // -1570 < x <= -1500 -> -x - 730
    IntervalRule::negated(-1619, -1600, -760), // -1620 < x <= -1600 -> -x - 760
    IntervalRule::negated(-1749, -1700, -840), // -1750 < x <= -1700 -> -x - 840
    IntervalRule::negated(-3019, -3000, -2090), // -3020 < x <= -3000 -> -x - 2090
    IntervalRule::negated(-3149, -3100, -2170), // -3150 < x <= -3100 -> -x - 2170
];

/// Forward-map a raw numeric code to its display form.
///
/// Returns the first matching rule's output, or `code` unchanged when no
/// interval contains it.
pub fn forward(code: i64) -> i64 {
    for rule in &REMAP_RULES {
        if rule.contains(code) {
            return rule.apply(code);
        }
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_rows() {
        assert_eq!(forward(1000), 300);
        assert_eq!(forward(1100), 400);
        assert_eq!(forward(2001), 401);
        assert_eq!(forward(2099), 499);
    }

    #[test]
    fn test_exclusive_positive_bounds() {
        // 2000 and 2100 sit outside the open interval
        assert_eq!(forward(2000), 2000);
        assert_eq!(forward(2100), 2100);
    }

    #[test]
    fn test_negative_rows_negate() {
        assert_eq!(forward(-200), 500);
        assert_eq!(forward(-1705), 865);
        assert_eq!(forward(-3100), 930);
    }

    #[test]
    fn test_identity_fallback() {
        assert_eq!(forward(0), 0);
        assert_eq!(forward(999), 999);
        assert_eq!(forward(-230), -230);
        assert_eq!(forward(5000), 5000);
    }

    #[test]
    fn test_rules_are_disjoint() {
        for (i, a) in REMAP_RULES.iter().enumerate() {
            for b in &REMAP_RULES[i + 1..] {
                assert!(
                    a.hi < b.lo || b.hi < a.lo,
                    "overlapping intervals [{}, {}] and [{}, {}]",
                    a.lo,
                    a.hi,
                    b.lo,
                    b.hi
                );
            }
        }
    }
}
