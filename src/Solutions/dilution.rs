//! Dilution evaluator, M1*V1 = M2*V2. Two modes: solve the final volume V2 given
//! the target concentration, or solve the final concentration M2 given the final
//! volume. Division by zero is impossible by construction: every divisor is
//! validated strictly positive before the formula runs.

use crate::calc_api::{CalculationResult, Evaluate, ResultValue};
use crate::validator::{CalcError, ensure_positive, parse_positive};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DilutionRequest {
    /// V2 = M1*V1 / M2, requires M2 <= M1
    SolveFinalVolume { m1: f64, v1: f64, m2: f64 },
    /// M2 = M1*V1 / V2, requires V2 >= V1
    SolveFinalConcentration { m1: f64, v1: f64, v2: f64 },
}

impl DilutionRequest {
    pub fn solve_final_volume(m1: f64, v1: f64, m2: f64) -> Result<Self, CalcError> {
        ensure_positive("initial_concentration", m1)?;
        ensure_positive("initial_volume", v1)?;
        ensure_positive("final_concentration", m2)?;
        Ok(Self::SolveFinalVolume { m1, v1, m2 })
    }

    pub fn solve_final_concentration(m1: f64, v1: f64, v2: f64) -> Result<Self, CalcError> {
        ensure_positive("initial_concentration", m1)?;
        ensure_positive("initial_volume", v1)?;
        ensure_positive("final_volume", v2)?;
        Ok(Self::SolveFinalConcentration { m1, v1, v2 })
    }

    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, Vec<CalcError>> {
        let positive = |field: &str| -> Result<f64, Vec<CalcError>> {
            let s = raw.get(field).ok_or_else(|| {
                vec![CalcError::MissingField {
                    field: field.to_string(),
                }]
            })?;
            parse_positive(field, s).map_err(|e| vec![e])
        };
        let mode = raw.get("mode").map(|s| s.as_str()).unwrap_or("final_volume");
        match mode {
            "final_volume" => Ok(Self::SolveFinalVolume {
                m1: positive("initial_concentration")?,
                v1: positive("initial_volume")?,
                m2: positive("final_concentration")?,
            }),
            "final_concentration" => Ok(Self::SolveFinalConcentration {
                m1: positive("initial_concentration")?,
                v1: positive("initial_volume")?,
                v2: positive("final_volume")?,
            }),
            other => Err(vec![CalcError::InvalidChoice {
                field: "mode".to_string(),
                value: other.to_string(),
                allowed: vec!["final_volume", "final_concentration"],
            }]),
        }
    }
}

impl Evaluate for DilutionRequest {
    fn evaluate(&self) -> Result<CalculationResult, CalcError> {
        let mut result = CalculationResult::default();
        match *self {
            Self::SolveFinalVolume { m1, v1, m2 } => {
                if m2 > m1 {
                    return Err(CalcError::domain(
                        "final concentration cannot exceed initial concentration: simple dilution cannot concentrate a solution",
                    ));
                }
                let v2 = m1 * v1 / m2;
                result.push_value(ResultValue::auto("final_volume", v2, "mL", 2));
                result.push_value(ResultValue::fixed("dilution_factor", m1 / m2, "", 2));
                result.push_interpretation(format!(
                    "add {:.2} mL of solvent to {:.2} mL of stock",
                    v2 - v1,
                    v1
                ));
            }
            Self::SolveFinalConcentration { m1, v1, v2 } => {
                if v2 < v1 {
                    return Err(CalcError::domain(
                        "final volume must be greater than initial volume",
                    ));
                }
                let m2 = m1 * v1 / v2;
                result.push_value(ResultValue::auto("final_concentration", m2, "mol/L", 4));
                result.push_value(ResultValue::fixed("dilution_factor", v2 / v1, "", 2));
            }
        }
        Ok(result)
    }

    fn calculator_id(&self) -> &'static str {
        "dilution"
    }
}
