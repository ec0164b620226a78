//! # Result Interpreter Module
//!
//! ## Aim
//! Numeric results alone are not very telling for a student: a pH of 2.3 should say
//! "strongly acidic", a logP of 4.1 "highly lipophilic". Instead of if/else chains
//! scattered over the calculators, every qualitative classification in this crate is
//! a `ThresholdTable`: a static ordered list of (upper bound, label) bands plus a
//! fallback label, so the lookup is total and the tables are trivially testable.
//!
//! ## Key Methods
//! - `ThresholdTable::classify()`: first band whose upper bound is >= the value wins,
//!   values beyond every band get the fallback label

/// Ordered (upper bound, label) bands with a fallback. Bounds are inclusive and
/// must be ascending.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdTable {
    bands: &'static [(f64, &'static str)],
    fallback: &'static str,
}

impl ThresholdTable {
    pub const fn new(bands: &'static [(f64, &'static str)], fallback: &'static str) -> Self {
        Self { bands, fallback }
    }

    /// total lookup: every real number gets a label
    pub fn classify(&self, value: f64) -> &'static str {
        for &(upper, label) in self.bands {
            if value <= upper {
                return label;
            }
        }
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // the canonical table: buffer effectiveness from |pH - pKa|
    const EFFECTIVENESS: ThresholdTable = ThresholdTable::new(
        &[(1.0, "Excellent"), (1.5, "Good")],
        "Poor",
    );

    #[test]
    fn test_bands_and_fallback() {
        assert_eq!(EFFECTIVENESS.classify(0.2), "Excellent");
        assert_eq!(EFFECTIVENESS.classify(1.0), "Excellent");
        assert_eq!(EFFECTIVENESS.classify(1.2), "Good");
        assert_eq!(EFFECTIVENESS.classify(7.3), "Poor");
    }

    #[test]
    fn test_lookup_is_total() {
        assert_eq!(EFFECTIVENESS.classify(f64::MAX), "Poor");
        assert_eq!(EFFECTIVENESS.classify(-42.0), "Excellent");
    }
}
