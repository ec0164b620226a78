//! Hess's law evaluator: dH_total = sum(coefficient_i * dH_i) over the reaction
//! steps. The coefficient scales a step and its sign reverses it; cancellation of
//! intermediate species across steps is the caller's responsibility, the engine
//! only sums.

use crate::calc_api::{CalculationResult, Evaluate, ResultValue};
use crate::validator::{CalcError, parse_number};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct HessStep {
    /// display only, e.g. "C(s) + 1/2 O2 -> CO"
    pub equation: String,
    /// kJ/mol
    pub delta_h: f64,
    /// scale, negative = reversed step
    pub coefficient: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HessLawRequest {
    pub steps: Vec<HessStep>,
}

impl HessLawRequest {
    pub fn new(steps: Vec<HessStep>) -> Result<Self, CalcError> {
        if steps.is_empty() {
            return Err(CalcError::domain("at least one reaction step is required"));
        }
        for (i, step) in steps.iter().enumerate() {
            if step.coefficient == 0.0 {
                return Err(CalcError::domain(format!(
                    "step {} has a zero coefficient, it would not contribute",
                    i + 1
                )));
            }
        }
        Ok(Self { steps })
    }

    /// indexed raw fields: delta_h_1, coefficient_1, equation_1, delta_h_2, ...
    /// steps are read until the first missing delta_h_i
    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, Vec<CalcError>> {
        let mut steps = Vec::new();
        let mut i = 1;
        while let Some(dh) = raw.get(&format!("delta_h_{}", i)) {
            let delta_h = parse_number(&format!("delta_h_{}", i), dh).map_err(|e| vec![e])?;
            let coefficient = match raw.get(&format!("coefficient_{}", i)) {
                Some(c) => parse_number(&format!("coefficient_{}", i), c).map_err(|e| vec![e])?,
                None => 1.0,
            };
            let equation = raw
                .get(&format!("equation_{}", i))
                .cloned()
                .unwrap_or_default();
            steps.push(HessStep {
                equation,
                delta_h,
                coefficient,
            });
            i += 1;
        }
        Self::new(steps).map_err(|e| vec![e])
    }
}

impl Evaluate for HessLawRequest {
    fn evaluate(&self) -> Result<CalculationResult, CalcError> {
        let total: f64 = self
            .steps
            .iter()
            .map(|step| step.coefficient * step.delta_h)
            .sum();
        let mut result = CalculationResult::default();
        result.push_value(ResultValue::fixed("total_enthalpy", total, "kJ/mol", 1));
        if total < 0.0 {
            result.push_interpretation("exothermic overall - heat is released");
        } else if total > 0.0 {
            result.push_interpretation("endothermic overall - heat is absorbed");
        } else {
            result.push_interpretation("thermoneutral overall");
        }
        Ok(result)
    }

    fn calculator_id(&self) -> &'static str {
        "hess_law"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn step(equation: &str, delta_h: f64, coefficient: f64) -> HessStep {
        HessStep {
            equation: equation.to_string(),
            delta_h,
            coefficient,
        }
    }

    #[test]
    fn test_carbon_combustion_two_step() {
        // C + 1/2 O2 -> CO (-110.5), CO + 1/2 O2 -> CO2 (-283.0)
        // overall C + O2 -> CO2 must give -393.5
        let request = HessLawRequest::new(vec![
            step("C(s) + 1/2 O2 -> CO", -110.5, 1.0),
            step("CO + 1/2 O2 -> CO2", -283.0, 1.0),
        ])
        .unwrap();
        let result = request.evaluate().unwrap();
        assert_relative_eq!(result.value_of("total_enthalpy").unwrap(), -393.5);
        assert!(result.interpretations[0].contains("exothermic"));
    }

    #[test]
    fn test_reversed_step_flips_sign() {
        let forward = HessLawRequest::new(vec![step("A -> B", -50.0, 1.0)])
            .unwrap()
            .evaluate()
            .unwrap()
            .value_of("total_enthalpy")
            .unwrap();
        let reversed = HessLawRequest::new(vec![step("B -> A", -50.0, -1.0)])
            .unwrap()
            .evaluate()
            .unwrap()
            .value_of("total_enthalpy")
            .unwrap();
        assert_relative_eq!(forward, -reversed);
    }

    #[test]
    fn test_ammonia_pathway_with_reversed_step() {
        // three step pathway with the last step reversed
        let request = HessLawRequest::new(vec![
            step("N2 + O2 -> 2NO", 180.5, 1.0),
            step("2NO + O2 -> 2NO2", -114.1, 1.0),
            step("4NO2 + O2 + 4NH3 -> 6H2O + 4N2", -1170.0, -1.0),
        ])
        .unwrap();
        let result = request.evaluate().unwrap();
        assert_relative_eq!(
            result.value_of("total_enthalpy").unwrap(),
            180.5 - 114.1 + 1170.0
        );
    }

    #[test]
    fn test_zero_coefficient_rejected() {
        assert!(HessLawRequest::new(vec![step("A -> B", -10.0, 0.0)]).is_err());
        assert!(HessLawRequest::new(vec![]).is_err());
    }
}
