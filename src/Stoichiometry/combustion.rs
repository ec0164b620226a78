//! Combustion evaluator for C/H/O fuels, three modes:
//! - complete: CxHyOz + (2x + y/2 - z)/2 O2 -> x CO2 + y/2 H2O, scaled by moles
//! - incomplete: compare available O2 with the stoichiometric demand; below 50%
//!   of the demand soot dominates, between 50% and 100% CO forms
//! - energy: heat released by a combusted mass from the molar enthalpy of
//!   combustion, E = |m / M * dHc|

use crate::Stoichiometry::formula_parser::{FuelComposition, molar_mass, parse_fuel_formula};
use crate::calc_api::{CalculationResult, Evaluate, ResultValue};
use crate::validator::{CalcError, ensure_positive, parse_number, parse_positive};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub enum CombustionRequest {
    Complete {
        fuel_formula: String,
        moles: f64,
    },
    Incomplete {
        fuel_formula: String,
        /// mol O2 actually available per mol of fuel
        oxygen_available: f64,
    },
    Energy {
        fuel_formula: String,
        /// g
        mass: f64,
        /// kJ/mol, negative for exothermic
        enthalpy_of_combustion: f64,
    },
}

impl CombustionRequest {
    pub fn complete(fuel_formula: &str, moles: f64) -> Result<Self, CalcError> {
        ensure_positive("moles", moles)?;
        Ok(Self::Complete {
            fuel_formula: fuel_formula.to_string(),
            moles,
        })
    }

    pub fn incomplete(fuel_formula: &str, oxygen_available: f64) -> Result<Self, CalcError> {
        ensure_positive("oxygen_available", oxygen_available)?;
        Ok(Self::Incomplete {
            fuel_formula: fuel_formula.to_string(),
            oxygen_available,
        })
    }

    pub fn energy(
        fuel_formula: &str,
        mass: f64,
        enthalpy_of_combustion: f64,
    ) -> Result<Self, CalcError> {
        ensure_positive("mass", mass)?;
        Ok(Self::Energy {
            fuel_formula: fuel_formula.to_string(),
            mass,
            enthalpy_of_combustion,
        })
    }

    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, Vec<CalcError>> {
        let formula = raw
            .get("fuel_formula")
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                vec![CalcError::MissingField {
                    field: "fuel_formula".to_string(),
                }]
            })?
            .trim();
        let mode = raw.get("mode").map(|s| s.as_str()).unwrap_or("complete");
        match mode {
            "complete" => {
                let moles = raw.get("moles").map(|s| s.as_str()).unwrap_or("1");
                Self::complete(formula, parse_positive("moles", moles).map_err(|e| vec![e])?)
                    .map_err(|e| vec![e])
            }
            "incomplete" => {
                let o2 = raw.get("oxygen_available").ok_or_else(|| {
                    vec![CalcError::MissingField {
                        field: "oxygen_available".to_string(),
                    }]
                })?;
                Self::incomplete(
                    formula,
                    parse_positive("oxygen_available", o2).map_err(|e| vec![e])?,
                )
                .map_err(|e| vec![e])
            }
            "energy" => {
                let mass = raw.get("mass").ok_or_else(|| {
                    vec![CalcError::MissingField {
                        field: "mass".to_string(),
                    }]
                })?;
                let dh = raw.get("enthalpy_of_combustion").ok_or_else(|| {
                    vec![CalcError::MissingField {
                        field: "enthalpy_of_combustion".to_string(),
                    }]
                })?;
                Self::energy(
                    formula,
                    parse_positive("mass", mass).map_err(|e| vec![e])?,
                    parse_number("enthalpy_of_combustion", dh).map_err(|e| vec![e])?,
                )
                .map_err(|e| vec![e])
            }
            other => Err(vec![CalcError::InvalidChoice {
                field: "mode".to_string(),
                value: other.to_string(),
                allowed: vec!["complete", "incomplete", "energy"],
            }]),
        }
    }
}

/// stoichiometric coefficients of CxHyOz + o2 O2 -> co2 CO2 + h2o H2O per mol of fuel
pub fn combustion_coefficients(composition: &FuelComposition) -> Result<(f64, f64, f64), CalcError> {
    let co2 = composition.carbon as f64;
    let h2o = composition.hydrogen as f64 / 2.0;
    let o2 = (2.0 * co2 + h2o - composition.oxygen as f64) / 2.0;
    if o2 <= 0.0 {
        return Err(CalcError::domain(
            "the fuel already carries more oxygen than its combustion products, it cannot burn",
        ));
    }
    Ok((o2, co2, h2o))
}

fn balanced_equation(formula: &str, scale: f64, o2: f64, co2: f64, h2o: f64) -> String {
    let coeff = |c: f64| {
        if (c - 1.0).abs() < 1e-12 {
            String::new()
        } else {
            format!("{:.1} ", c)
        }
    };
    format!(
        "{}{} + {:.1} O2 -> {:.1} CO2 + {:.1} H2O",
        coeff(scale),
        formula,
        o2 * scale,
        co2 * scale,
        h2o * scale
    )
}

impl Evaluate for CombustionRequest {
    fn evaluate(&self) -> Result<CalculationResult, CalcError> {
        let mut result = CalculationResult::default();
        match self {
            Self::Complete { fuel_formula, moles } => {
                let composition = parse_fuel_formula(fuel_formula)?;
                let (o2, co2, h2o) = combustion_coefficients(&composition)?;
                result.push_value(ResultValue::fixed("o2_required", o2 * moles, "mol", 2));
                result.push_value(ResultValue::fixed("co2_produced", co2 * moles, "mol", 2));
                result.push_value(ResultValue::fixed("h2o_produced", h2o * moles, "mol", 2));
                result.push_interpretation(balanced_equation(fuel_formula, *moles, o2, co2, h2o));
                result.push_interpretation("complete combustion");
            }
            Self::Incomplete {
                fuel_formula,
                oxygen_available,
            } => {
                let composition = parse_fuel_formula(fuel_formula)?;
                let (o2_required, co2, h2o) = combustion_coefficients(&composition)?;
                result.push_value(ResultValue::fixed("o2_required", o2_required, "mol", 2));
                result.push_value(ResultValue::fixed(
                    "o2_available",
                    *oxygen_available,
                    "mol",
                    2,
                ));
                if *oxygen_available >= o2_required {
                    result.push_value(ResultValue::fixed("co2_produced", co2, "mol", 2));
                    result.push_value(ResultValue::fixed("h2o_produced", h2o, "mol", 2));
                    result.push_interpretation(balanced_equation(fuel_formula, 1.0, o2_required, co2, h2o));
                    result.push_interpretation("complete combustion (sufficient O2)");
                } else if oxygen_available / o2_required > 0.5 {
                    result.push_interpretation(
                        "incomplete combustion - carbon monoxide produced alongside CO2 and H2O",
                    );
                } else {
                    result.push_interpretation(
                        "severely oxygen-starved combustion - soot (C) and CO dominate",
                    );
                }
            }
            Self::Energy {
                fuel_formula,
                mass,
                enthalpy_of_combustion,
            } => {
                let composition = parse_fuel_formula(fuel_formula)?;
                let (_, co2, h2o) = combustion_coefficients(&composition)?;
                let m = molar_mass(&composition);
                let fuel_moles = mass / m;
                let energy = (fuel_moles * enthalpy_of_combustion).abs();
                result.push_value(ResultValue::fixed("molar_mass", m, "g/mol", 2));
                result.push_value(ResultValue::fixed("fuel_moles", fuel_moles, "mol", 3));
                result.push_value(ResultValue::fixed("energy_released", energy, "kJ", 2));
                result.push_value(ResultValue::fixed(
                    "co2_produced",
                    co2 * fuel_moles,
                    "mol",
                    2,
                ));
                result.push_value(ResultValue::fixed(
                    "h2o_produced",
                    h2o * fuel_moles,
                    "mol",
                    2,
                ));
            }
        }
        Ok(result)
    }

    fn calculator_id(&self) -> &'static str {
        "combustion"
    }
}
