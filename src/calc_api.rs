//! # Calculator API Module
//!
//! ## Aim
//! Common contract of all formula evaluators. Each calculator type implements
//! exactly one pure function `evaluate() -> CalculationResult` on its own request
//! struct; this module gathers them behind the `Evaluate` trait and an
//! `enum_dispatch`ed `CalculatorEnum`, so callers (CLI, examples, tests) can build
//! a calculator by name from a raw field map and run it without knowing the
//! concrete type.
//!
//! ## Main Data Structures and Logic
//! - `ResultValue`: one derived number with unit, precision and notation rule
//! - `CalculationResult`: ordered values + interpretation strings + terminal state
//! - `Evaluate` trait + `CalculatorEnum`: static dispatch over every calculator
//! - `create_calculator_by_name()`: raw field map -> ready-to-run calculator
//!
//! A `CalculationResult` is always a pure function of its request: no hidden
//! state, no clock, no randomness. Re-running the same request reproduces the
//! same formatted output byte for byte.

use crate::AcidBase::henderson_hasselbalch::HendersonHasselbalchRequest;
use crate::AcidBase::ph::PhRequest;
use crate::AcidBase::pka::PkaRequest;
use crate::Buffers::capacity::BufferCapacityRequest;
use crate::Buffers::design::BufferDesignRequest;
use crate::Buffers::ph_shift::BufferPhShiftRequest;
use crate::Partition::distribution::DistributionRequest;
use crate::Partition::extraction::ExtractionRequest;
use crate::Partition::log_p::LogPRequest;
use crate::Solutions::dilution::DilutionRequest;
use crate::Spectroscopy::nmr_shift::NmrShiftRequest;
use crate::Stoichiometry::combustion::CombustionRequest;
use crate::Stoichiometry::limiting_reagent::LimitingReagentRequest;
use crate::Thermochemistry::entropy::EntropyRequest;
use crate::Thermochemistry::hess_law::HessLawRequest;
use crate::validator::CalcError;
use enum_dispatch::enum_dispatch;
use prettytable::{Table, row};
use serde::Serialize;
use std::collections::HashMap;

/// One derived numeric value with its display rule. Formatting lives here so the
/// same request always renders the same string (idempotence contract).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultValue {
    pub name: String,
    pub value: f64,
    pub unit: &'static str,
    pub precision: usize,
    pub exponential: bool,
}

impl ResultValue {
    pub fn fixed(name: &str, value: f64, unit: &'static str, precision: usize) -> Self {
        Self {
            name: name.to_string(),
            value,
            unit,
            precision,
            exponential: false,
        }
    }

    pub fn exp(name: &str, value: f64, unit: &'static str, precision: usize) -> Self {
        Self {
            name: name.to_string(),
            value,
            unit,
            precision,
            exponential: true,
        }
    }

    /// exponential notation for very small or very large magnitudes, fixed otherwise
    pub fn auto(name: &str, value: f64, unit: &'static str, precision: usize) -> Self {
        let abs = value.abs();
        let exponential = abs != 0.0 && (abs < 1e-3 || abs >= 1e6);
        Self {
            name: name.to_string(),
            value,
            unit,
            precision,
            exponential,
        }
    }

    pub fn format(&self) -> String {
        if self.exponential {
            format!("{:.prec$e}", self.value, prec = self.precision)
        } else {
            format!("{:.prec$}", self.value, prec = self.precision)
        }
    }
}

/// Terminal state of a calculation. Saturation/exhaustion conditions ("buffer
/// destroyed") are reportable states of a successful invocation, not errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub enum ResultState {
    #[default]
    Completed,
    Exhausted {
        what: String,
    },
}

/// Immutable outcome of one calculation invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CalculationResult {
    pub values: Vec<ResultValue>,
    pub interpretations: Vec<String>,
    pub state: ResultState,
}

impl CalculationResult {
    pub fn push_value(&mut self, value: ResultValue) {
        self.values.push(value);
    }

    pub fn push_interpretation(&mut self, text: impl Into<String>) {
        self.interpretations.push(text.into());
    }

    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.values.iter().find(|v| v.name == name).map(|v| v.value)
    }

    /// result-field name -> formatted value, in insertion order
    pub fn rendered(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .map(|v| {
                let formatted = if v.unit.is_empty() {
                    v.format()
                } else {
                    format!("{} {}", v.format(), v.unit)
                };
                (v.name.clone(), formatted)
            })
            .collect()
    }

    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(row!["Result", "Value"]);
        for (name, formatted) in self.rendered() {
            table.add_row(row![name, formatted]);
        }
        table.printstd();
        if let ResultState::Exhausted { what } = &self.state {
            println!("State: {}", what);
        }
        for note in &self.interpretations {
            println!("- {}", note);
        }
    }
}

#[enum_dispatch]
pub trait Evaluate {
    /// the single pure computation of this calculator type
    fn evaluate(&self) -> Result<CalculationResult, CalcError>;
    fn calculator_id(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq)]
#[enum_dispatch(Evaluate)]
pub enum CalculatorEnum {
    Ph(PhRequest),
    Pka(PkaRequest),
    HendersonHasselbalch(HendersonHasselbalchRequest),
    Dilution(DilutionRequest),
    BufferCapacity(BufferCapacityRequest),
    BufferPhShift(BufferPhShiftRequest),
    BufferDesign(BufferDesignRequest),
    LimitingReagent(LimitingReagentRequest),
    Combustion(CombustionRequest),
    HessLaw(HessLawRequest),
    Entropy(EntropyRequest),
    LogP(LogPRequest),
    Distribution(DistributionRequest),
    Extraction(ExtractionRequest),
    NmrShift(NmrShiftRequest),
}

pub const ALL_CALCULATORS: &[&str] = &[
    "ph",
    "pka",
    "henderson_hasselbalch",
    "dilution",
    "buffer_capacity",
    "buffer_ph_shift",
    "buffer_design",
    "limiting_reagent",
    "combustion",
    "hess_law",
    "entropy",
    "log_p",
    "distribution",
    "extraction",
    "nmr_shift",
];

/// Build a calculator from its id and a raw field map. Multi-mode calculators read
/// their "mode"/"solve_for" selector from the same map.
pub fn create_calculator_by_name(
    name: &str,
    raw: &HashMap<String, String>,
) -> Result<CalculatorEnum, Vec<CalcError>> {
    let calc = match name {
        "ph" => CalculatorEnum::Ph(PhRequest::from_raw(raw)?),
        "pka" => CalculatorEnum::Pka(PkaRequest::from_raw(raw)?),
        "henderson_hasselbalch" => {
            CalculatorEnum::HendersonHasselbalch(HendersonHasselbalchRequest::from_raw(raw)?)
        }
        "dilution" => CalculatorEnum::Dilution(DilutionRequest::from_raw(raw)?),
        "buffer_capacity" => CalculatorEnum::BufferCapacity(BufferCapacityRequest::from_raw(raw)?),
        "buffer_ph_shift" => CalculatorEnum::BufferPhShift(BufferPhShiftRequest::from_raw(raw)?),
        "buffer_design" => CalculatorEnum::BufferDesign(BufferDesignRequest::from_raw(raw)?),
        "limiting_reagent" => {
            CalculatorEnum::LimitingReagent(LimitingReagentRequest::from_raw(raw)?)
        }
        "combustion" => CalculatorEnum::Combustion(CombustionRequest::from_raw(raw)?),
        "hess_law" => CalculatorEnum::HessLaw(HessLawRequest::from_raw(raw)?),
        "entropy" => CalculatorEnum::Entropy(EntropyRequest::from_raw(raw)?),
        "log_p" => CalculatorEnum::LogP(LogPRequest::from_raw(raw)?),
        "distribution" => CalculatorEnum::Distribution(DistributionRequest::from_raw(raw)?),
        "extraction" => CalculatorEnum::Extraction(ExtractionRequest::from_raw(raw)?),
        "nmr_shift" => CalculatorEnum::NmrShift(NmrShiftRequest::from_raw(raw)?),
        other => return Err(vec![CalcError::UnknownCalculator(other.to_string())]),
    };
    Ok(calc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_value_formatting() {
        assert_eq!(ResultValue::fixed("pH", 5.0, "", 2).format(), "5.00");
        assert_eq!(ResultValue::exp("Ka", 1.8e-5, "", 3).format(), "1.800e-5");
        // auto switches to exponential only for extreme magnitudes
        assert!(!ResultValue::auto("V2", 50.0, "mL", 2).exponential);
        assert!(ResultValue::auto("beta", 5.7e-4, "mol/(L*pH)", 2).exponential);
    }

    #[test]
    fn test_create_by_name_and_run() {
        let raw: HashMap<String, String> = [("hydrogen_concentration", "1.0e-5")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let calc = create_calculator_by_name("ph", &raw).unwrap();
        assert_eq!(calc.calculator_id(), "ph");
        let result = calc.evaluate().unwrap();
        assert_eq!(result.value_of("pH"), Some(5.0));
    }

    #[test]
    fn test_unknown_calculator_name() {
        let raw = HashMap::new();
        let errors = create_calculator_by_name("alchemy", &raw).unwrap_err();
        assert!(matches!(errors[0], CalcError::UnknownCalculator(_)));
    }

    #[test]
    fn test_rendered_output_is_deterministic() {
        let raw: HashMap<String, String> = [("hydrogen_concentration", "2.5e-4")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let first = create_calculator_by_name("ph", &raw)
            .unwrap()
            .evaluate()
            .unwrap()
            .rendered();
        let second = create_calculator_by_name("ph", &raw)
            .unwrap()
            .evaluate()
            .unwrap()
            .rendered();
        assert_eq!(first, second);
    }
}
