//! Limiting reagent evaluator for a two-reactant reaction
//! a A + b B -> products. The reactant with the smaller moles/coefficient ratio
//! is fully consumed first; an exact tie means the mix is exactly stoichiometric
//! and both reactants are limiting.

use crate::calc_api::{CalculationResult, Evaluate, ResultValue};
use crate::validator::{CalcError, Constraint, FieldSpec, ensure_positive, validate};
use std::collections::HashMap;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("moles_a", Constraint::Positive, Some("mol")),
    FieldSpec::required("moles_b", Constraint::Positive, Some("mol")),
    FieldSpec::required("coefficient_a", Constraint::Positive, None),
    FieldSpec::required("coefficient_b", Constraint::Positive, None),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitingReagentRequest {
    pub moles_a: f64,
    pub moles_b: f64,
    pub coefficient_a: f64,
    pub coefficient_b: f64,
}

impl LimitingReagentRequest {
    pub fn new(
        moles_a: f64,
        moles_b: f64,
        coefficient_a: f64,
        coefficient_b: f64,
    ) -> Result<Self, CalcError> {
        ensure_positive("moles_a", moles_a)?;
        ensure_positive("moles_b", moles_b)?;
        ensure_positive("coefficient_a", coefficient_a)?;
        ensure_positive("coefficient_b", coefficient_b)?;
        Ok(Self {
            moles_a,
            moles_b,
            coefficient_a,
            coefficient_b,
        })
    }

    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, Vec<CalcError>> {
        let input = validate(raw, FIELDS)?;
        let get = |f: &str| input.require(f).map_err(|e| vec![e]);
        Ok(Self {
            moles_a: get("moles_a")?,
            moles_b: get("moles_b")?,
            coefficient_a: get("coefficient_a")?,
            coefficient_b: get("coefficient_b")?,
        })
    }
}

impl Evaluate for LimitingReagentRequest {
    fn evaluate(&self) -> Result<CalculationResult, CalcError> {
        let ratio_a = self.moles_a / self.coefficient_a;
        let ratio_b = self.moles_b / self.coefficient_b;

        let mut result = CalculationResult::default();
        result.push_value(ResultValue::fixed("ratio_per_coefficient_a", ratio_a, "mol", 3));
        result.push_value(ResultValue::fixed("ratio_per_coefficient_b", ratio_b, "mol", 3));

        if ratio_a < ratio_b {
            let moles_b_used = ratio_a * self.coefficient_b;
            result.push_value(ResultValue::fixed(
                "excess_moles",
                self.moles_b - moles_b_used,
                "mol",
                2,
            ));
            result.push_interpretation("reagent A is limiting, B is in excess");
        } else if ratio_b < ratio_a {
            let moles_a_used = ratio_b * self.coefficient_a;
            result.push_value(ResultValue::fixed(
                "excess_moles",
                self.moles_a - moles_a_used,
                "mol",
                2,
            ));
            result.push_interpretation("reagent B is limiting, A is in excess");
        } else {
            result.push_value(ResultValue::fixed("excess_moles", 0.0, "mol", 2));
            result.push_interpretation(
                "exact stoichiometric amounts - both reagents are fully consumed",
            );
        }
        Ok(result)
    }

    fn calculator_id(&self) -> &'static str {
        "limiting_reagent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hydrogen_combustion_scenario() {
        // 2H2 + O2 -> 2H2O with 3.0 mol H2 and 5.0 mol O2
        let result = LimitingReagentRequest::new(3.0, 5.0, 2.0, 1.0)
            .unwrap()
            .evaluate()
            .unwrap();
        assert_relative_eq!(result.value_of("ratio_per_coefficient_a").unwrap(), 1.5);
        assert_relative_eq!(result.value_of("ratio_per_coefficient_b").unwrap(), 5.0);
        assert_relative_eq!(result.value_of("excess_moles").unwrap(), 3.5);
        assert!(result.interpretations[0].contains("A is limiting"));
    }

    #[test]
    fn test_exact_stoichiometric_mix() {
        let result = LimitingReagentRequest::new(2.0, 1.0, 2.0, 1.0)
            .unwrap()
            .evaluate()
            .unwrap();
        assert_eq!(result.value_of("excess_moles").unwrap(), 0.0);
        assert!(result.interpretations[0].contains("both reagents"));
    }

    #[test]
    fn test_fractional_coefficients_allowed() {
        // C + 1/2 O2 -> CO style half coefficients
        let result = LimitingReagentRequest::new(1.0, 1.0, 1.0, 0.5)
            .unwrap()
            .evaluate()
            .unwrap();
        assert!(result.interpretations[0].contains("A is limiting"));
    }

    #[test]
    fn test_nonpositive_inputs_rejected() {
        assert!(LimitingReagentRequest::new(0.0, 1.0, 1.0, 1.0).is_err());
        assert!(LimitingReagentRequest::new(1.0, 1.0, -2.0, 1.0).is_err());
    }
}
