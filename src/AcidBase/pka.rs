//! Ka <-> pKa evaluator. Both directions report the pair (Ka, pKa) plus an acid
//! strength classification, lower pKa = stronger acid.

use crate::calc_api::{CalculationResult, Evaluate, ResultValue};
use crate::interpreter::ThresholdTable;
use crate::validator::{CalcError, ensure_positive, parse_number, parse_positive};
use std::collections::HashMap;

const ACID_STRENGTH: ThresholdTable = ThresholdTable::new(
    &[
        (0.0, "Very Strong Acid"),
        (2.0, "Strong Acid"),
        (7.0, "Weak Acid"),
        (12.0, "Very Weak Acid"),
    ],
    "Extremely Weak Acid",
);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PkaRequest {
    /// pKa = -log10(Ka), Ka must be > 0
    FromKa { ka: f64 },
    /// Ka = 10^(-pKa), any real pKa
    FromPka { pka: f64 },
}

impl PkaRequest {
    pub fn from_ka(ka: f64) -> Result<Self, CalcError> {
        ensure_positive("ka", ka)?;
        Ok(Self::FromKa { ka })
    }

    pub fn from_pka(pka: f64) -> Self {
        Self::FromPka { pka }
    }

    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, Vec<CalcError>> {
        if let Some(ka) = raw.get("ka") {
            let ka = parse_positive("ka", ka).map_err(|e| vec![e])?;
            Ok(Self::FromKa { ka })
        } else if let Some(pka) = raw.get("pka") {
            let pka = parse_number("pka", pka).map_err(|e| vec![e])?;
            Ok(Self::FromPka { pka })
        } else {
            Err(vec![CalcError::MissingField {
                field: "ka".to_string(),
            }])
        }
    }
}

pub fn acid_strength_label(pka: f64) -> &'static str {
    ACID_STRENGTH.classify(pka)
}

impl Evaluate for PkaRequest {
    fn evaluate(&self) -> Result<CalculationResult, CalcError> {
        let (ka, pka) = match *self {
            PkaRequest::FromKa { ka } => (ka, -ka.log10()),
            PkaRequest::FromPka { pka } => (10f64.powf(-pka), pka),
        };
        let mut result = CalculationResult::default();
        result.push_value(ResultValue::exp("Ka", ka, "", 3));
        result.push_value(ResultValue::fixed("pKa", pka, "", 2));
        result.push_interpretation(acid_strength_label(pka));
        Ok(result)
    }

    fn calculator_id(&self) -> &'static str {
        "pka"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_acetic_acid() {
        // Ka of acetic acid 1.8e-5 -> pKa 4.74
        let result = PkaRequest::from_ka(1.8e-5).unwrap().evaluate().unwrap();
        assert_relative_eq!(result.value_of("pKa").unwrap(), 4.7447, epsilon = 1e-4);
        assert!(result.interpretations.contains(&"Weak Acid".to_string()));
    }

    #[test]
    fn test_ka_pka_round_trip() {
        for ka in [1.8e-5, 6.2e-8, 1.0e-10, 2.5e-2] {
            let pka = PkaRequest::from_ka(ka)
                .unwrap()
                .evaluate()
                .unwrap()
                .value_of("pKa")
                .unwrap();
            let back = PkaRequest::from_pka(pka)
                .evaluate()
                .unwrap()
                .value_of("Ka")
                .unwrap();
            assert_relative_eq!(back, ka, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_nonpositive_ka_rejected() {
        assert!(PkaRequest::from_ka(0.0).is_err());
        assert!(PkaRequest::from_ka(-1.0).is_err());
    }

    #[test]
    fn test_strength_classification() {
        assert_eq!(acid_strength_label(-3.0), "Very Strong Acid");
        assert_eq!(acid_strength_label(1.5), "Strong Acid");
        assert_eq!(acid_strength_label(4.76), "Weak Acid");
        assert_eq!(acid_strength_label(10.3), "Very Weak Acid");
        assert_eq!(acid_strength_label(15.0), "Extremely Weak Acid");
    }
}
