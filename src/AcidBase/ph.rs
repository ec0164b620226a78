//! pH/pOH evaluator. pH = -log10([H+]), pOH = 14 - pH at standard conditions.
//! [H+] must be strictly positive: the logarithm of zero or a negative
//! concentration is a validation error, never a silent NaN.

use crate::calc_api::{CalculationResult, Evaluate, ResultValue};
use crate::interpreter::ThresholdTable;
use crate::validator::{CalcError, Constraint, FieldSpec, ensure_positive, validate};
use std::collections::HashMap;

/// ion product of water exponent at 25 C
pub const PKW: f64 = 14.0;

const FIELDS: &[FieldSpec] = &[FieldSpec::required(
    "hydrogen_concentration",
    Constraint::Positive,
    Some("mol/L"),
)];

const ACIDITY_SCALE: ThresholdTable = ThresholdTable::new(
    &[(3.0, "Strongly Acidic"), (7.0, "Acidic"), (11.0, "Basic")],
    "Strongly Basic",
);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhRequest {
    pub hydrogen_concentration: f64,
}

impl PhRequest {
    pub fn new(hydrogen_concentration: f64) -> Result<Self, CalcError> {
        ensure_positive("hydrogen_concentration", hydrogen_concentration)?;
        Ok(Self {
            hydrogen_concentration,
        })
    }

    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, Vec<CalcError>> {
        let input = validate(raw, FIELDS)?;
        Ok(Self {
            hydrogen_concentration: input.require("hydrogen_concentration").map_err(|e| vec![e])?,
        })
    }
}

pub fn acidity_label(ph: f64) -> &'static str {
    if ph == 7.0 {
        "Neutral"
    } else {
        ACIDITY_SCALE.classify(ph)
    }
}

impl Evaluate for PhRequest {
    fn evaluate(&self) -> Result<CalculationResult, CalcError> {
        let ph = -self.hydrogen_concentration.log10();
        let poh = PKW - ph;
        let mut result = CalculationResult::default();
        result.push_value(ResultValue::fixed("pH", ph, "", 2));
        result.push_value(ResultValue::fixed("pOH", poh, "", 2));
        result.push_interpretation(acidity_label(ph));
        // real solutions can leave the 0..14 scale, report instead of clamping
        if ph < 0.0 {
            result.push_interpretation("pH below 0: very strong acid, outside the usual scale");
        } else if ph > PKW {
            result.push_interpretation("pH above 14: very strong base, outside the usual scale");
        }
        Ok(result)
    }

    fn calculator_id(&self) -> &'static str {
        "ph"
    }
}

/// recover [H+] from a pH value, the inverse of the evaluator above
pub fn hydrogen_concentration_from_ph(ph: f64) -> f64 {
    10f64.powf(-ph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ph_of_1e5_molar() {
        let result = PhRequest::new(1.0e-5).unwrap().evaluate().unwrap();
        assert_relative_eq!(result.value_of("pH").unwrap(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(result.value_of("pOH").unwrap(), 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ph_plus_poh_is_14() {
        for h in [1.0e-2, 3.3e-5, 1.0e-9, 5.0] {
            let result = PhRequest::new(h).unwrap().evaluate().unwrap();
            let sum = result.value_of("pH").unwrap() + result.value_of("pOH").unwrap();
            assert_relative_eq!(sum, PKW, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_nonpositive_concentration_rejected() {
        assert!(PhRequest::new(0.0).is_err());
        assert!(PhRequest::new(-1.0e-3).is_err());
    }

    #[test]
    fn test_acidity_labels() {
        assert_eq!(acidity_label(1.2), "Strongly Acidic");
        assert_eq!(acidity_label(4.76), "Acidic");
        assert_eq!(acidity_label(7.0), "Neutral");
        assert_eq!(acidity_label(8.5), "Basic");
        assert_eq!(acidity_label(13.2), "Strongly Basic");
    }

    #[test]
    fn test_out_of_scale_ph_flagged_not_rejected() {
        // 5 M strong acid: pH is negative and that is fine
        let result = PhRequest::new(5.0).unwrap().evaluate().unwrap();
        assert!(result.value_of("pH").unwrap() < 0.0);
        assert!(
            result
                .interpretations
                .iter()
                .any(|s| s.contains("very strong acid"))
        );
    }
}
