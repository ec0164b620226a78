//! NMR chemical shift estimator, three modes:
//! - proton: base shift of a named 1H environment plus aromatic ring and
//!   hydrogen bonding corrections, with n+1 multiplicity from neighbor count
//! - carbon13: base shift of a carbon type plus +10 ppm per alpha and +5 ppm
//!   per beta substituent
//! - prediction: a user-given base shift plus additive corrections per
//!   electron withdrawing group, ring current and hydrogen bonding
//!
//! These are teaching heuristics with +/- 0.3 ppm (1H) and +/- 5 ppm (13C)
//! windows, not a substitute for increment schemes or measured spectra.

use crate::calc_api::{CalculationResult, Evaluate, ResultValue};
use crate::interpreter::ThresholdTable;
use crate::validator::{CalcError, parse_count, parse_number};
use std::collections::HashMap;

/// base 1H shifts in ppm, matched by substring against the environment name
const PROTON_BASE: &[(&str, f64)] = &[
    ("aldehyde", 9.5),
    ("carboxylic", 11.0),
    ("aromatic", 7.3),
    ("vinylic", 5.3),
    ("alpha-oxygen", 3.4),
    ("alpha-nitrogen", 2.7),
    ("alpha-carbonyl", 2.1),
    ("benzylic", 2.3),
    ("allylic", 1.7),
    ("alkyl", 0.9),
];

/// base 13C shifts in ppm; more specific names first, the match is substring based
const CARBON_BASE: &[(&str, f64)] = &[
    ("methylene", 30.0),
    ("methine", 40.0),
    ("methyl", 15.0),
    ("quaternary", 35.0),
    ("carboxyl", 175.0),
    ("carbonyl", 200.0),
    ("nitrile", 120.0),
    ("alkene", 120.0),
    ("alkyne", 80.0),
    ("aromatic", 130.0),
    ("ether", 65.0),
    ("amine", 45.0),
    ("alkyl", 20.0),
];

const PROTON_RING_SHIFT: f64 = 0.3;
const PROTON_H_BOND_SHIFT: f64 = 1.0;
const PREDICTION_EWG_SHIFT: f64 = 0.5;
const PREDICTION_RING_SHIFT: f64 = 0.4;
const PREDICTION_H_BOND_SHIFT: f64 = 0.8;
const ALPHA_SUBSTITUENT_SHIFT: f64 = 10.0;
const BETA_SUBSTITUENT_SHIFT: f64 = 5.0;
const PROTON_WINDOW: f64 = 0.3;
const CARBON_WINDOW: f64 = 5.0;

const PROTON_REGION: ThresholdTable = ThresholdTable::new(
    &[
        (1.0, "shielded alkyl region"),
        (2.0, "allylic / alpha-to-carbonyl region"),
        (3.0, "benzylic / alpha-to-nitrogen region"),
        (5.0, "alpha-to-oxygen region"),
        (7.0, "vinylic region"),
        (9.0, "aromatic region"),
    ],
    "aldehyde / carboxylic acid region",
);

const CARBON_REGION: ThresholdTable = ThresholdTable::new(
    &[
        (50.0, "aliphatic carbon region"),
        (100.0, "heteroatom-bonded carbon or alkyne region"),
        (160.0, "aromatic / alkene carbon region"),
        (180.0, "carboxyl and ester carbonyl region"),
    ],
    "aldehyde and ketone carbonyl region",
);

fn lookup(table: &[(&str, f64)], field: &str, name: &str) -> Result<f64, CalcError> {
    let needle = name.trim().to_lowercase();
    table
        .iter()
        .find(|(key, _)| needle.contains(key))
        .map(|(_, shift)| *shift)
        .ok_or_else(|| {
            CalcError::domain(format!(
                "unrecognized {}: '{}'",
                field,
                name.trim()
            ))
        })
}

/// n+1 rule for first order coupling
fn multiplicity(neighboring_protons: u32) -> &'static str {
    match neighboring_protons + 1 {
        1 => "singlet",
        2 => "doublet",
        3 => "triplet",
        4 => "quartet",
        5 => "quintet",
        6 => "sextet",
        7 => "septet",
        _ => "multiplet",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NmrShiftRequest {
    Proton {
        environment: String,
        neighboring_protons: Option<u32>,
        aromatic_ring: bool,
        hydrogen_bonding: bool,
    },
    Carbon13 {
        carbon_type: String,
        alpha_substituents: u32,
        beta_substituents: u32,
    },
    Prediction {
        base_shift: f64,
        electron_withdrawing_groups: u32,
        aromatic_ring: bool,
        hydrogen_bonding: bool,
    },
}

fn flag(raw: &HashMap<String, String>, field: &str) -> bool {
    raw.get(field)
        .map(|s| matches!(s.trim(), "true" | "yes" | "1"))
        .unwrap_or(false)
}

fn count_or_zero(raw: &HashMap<String, String>, field: &str) -> Result<u32, CalcError> {
    match raw.get(field).map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some("0") | None => Ok(0),
        Some(s) => parse_count(field, s),
    }
}

impl NmrShiftRequest {
    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, Vec<CalcError>> {
        let mode = raw.get("mode").map(|s| s.as_str()).unwrap_or("proton");
        match mode {
            "proton" => {
                let environment = raw
                    .get("environment")
                    .filter(|s| !s.trim().is_empty())
                    .ok_or_else(|| {
                        vec![CalcError::MissingField {
                            field: "environment".to_string(),
                        }]
                    })?
                    .clone();
                let neighboring_protons = match raw
                    .get("neighboring_protons")
                    .map(|s| s.trim())
                    .filter(|s| !s.is_empty())
                {
                    Some("0") => Some(0),
                    Some(s) => Some(parse_count("neighboring_protons", s).map_err(|e| vec![e])?),
                    None => None,
                };
                Ok(Self::Proton {
                    environment,
                    neighboring_protons,
                    aromatic_ring: flag(raw, "aromatic_ring"),
                    hydrogen_bonding: flag(raw, "hydrogen_bonding"),
                })
            }
            "carbon13" => {
                let carbon_type = raw
                    .get("carbon_type")
                    .filter(|s| !s.trim().is_empty())
                    .ok_or_else(|| {
                        vec![CalcError::MissingField {
                            field: "carbon_type".to_string(),
                        }]
                    })?
                    .clone();
                Ok(Self::Carbon13 {
                    carbon_type,
                    alpha_substituents: count_or_zero(raw, "alpha_substituents")
                        .map_err(|e| vec![e])?,
                    beta_substituents: count_or_zero(raw, "beta_substituents")
                        .map_err(|e| vec![e])?,
                })
            }
            "prediction" => {
                let base = raw.get("base_shift").ok_or_else(|| {
                    vec![CalcError::MissingField {
                        field: "base_shift".to_string(),
                    }]
                })?;
                Ok(Self::Prediction {
                    base_shift: parse_number("base_shift", base).map_err(|e| vec![e])?,
                    electron_withdrawing_groups: count_or_zero(raw, "electron_withdrawing_groups")
                        .map_err(|e| vec![e])?,
                    aromatic_ring: flag(raw, "aromatic_ring"),
                    hydrogen_bonding: flag(raw, "hydrogen_bonding"),
                })
            }
            other => Err(vec![CalcError::InvalidChoice {
                field: "mode".to_string(),
                value: other.to_string(),
                allowed: vec!["proton", "carbon13", "prediction"],
            }]),
        }
    }
}

impl Evaluate for NmrShiftRequest {
    fn evaluate(&self) -> Result<CalculationResult, CalcError> {
        let mut result = CalculationResult::default();
        match self {
            Self::Proton {
                environment,
                neighboring_protons,
                aromatic_ring,
                hydrogen_bonding,
            } => {
                let mut shift = lookup(PROTON_BASE, "proton environment", environment)?;
                if *aromatic_ring {
                    shift += PROTON_RING_SHIFT;
                }
                if *hydrogen_bonding {
                    shift += PROTON_H_BOND_SHIFT;
                }
                result.push_value(ResultValue::fixed("chemical_shift", shift, "ppm", 1));
                result.push_value(ResultValue::fixed(
                    "range_low",
                    shift - PROTON_WINDOW,
                    "ppm",
                    1,
                ));
                result.push_value(ResultValue::fixed(
                    "range_high",
                    shift + PROTON_WINDOW,
                    "ppm",
                    1,
                ));
                result.push_interpretation(PROTON_REGION.classify(shift));
                if let Some(n) = neighboring_protons {
                    result.push_interpretation(format!(
                        "expected splitting: {} ({} neighboring protons)",
                        multiplicity(*n),
                        n
                    ));
                }
            }
            Self::Carbon13 {
                carbon_type,
                alpha_substituents,
                beta_substituents,
            } => {
                let shift = lookup(CARBON_BASE, "carbon type", carbon_type)?
                    + ALPHA_SUBSTITUENT_SHIFT * *alpha_substituents as f64
                    + BETA_SUBSTITUENT_SHIFT * *beta_substituents as f64;
                result.push_value(ResultValue::fixed("chemical_shift", shift, "ppm", 1));
                result.push_value(ResultValue::fixed(
                    "range_low",
                    shift - CARBON_WINDOW,
                    "ppm",
                    1,
                ));
                result.push_value(ResultValue::fixed(
                    "range_high",
                    shift + CARBON_WINDOW,
                    "ppm",
                    1,
                ));
                result.push_interpretation(CARBON_REGION.classify(shift));
            }
            Self::Prediction {
                base_shift,
                electron_withdrawing_groups,
                aromatic_ring,
                hydrogen_bonding,
            } => {
                let mut shift =
                    base_shift + PREDICTION_EWG_SHIFT * *electron_withdrawing_groups as f64;
                if *aromatic_ring {
                    shift += PREDICTION_RING_SHIFT;
                }
                if *hydrogen_bonding {
                    shift += PREDICTION_H_BOND_SHIFT;
                }
                result.push_value(ResultValue::fixed("chemical_shift", shift, "ppm", 1));
                result.push_value(ResultValue::fixed(
                    "range_low",
                    shift - PROTON_WINDOW,
                    "ppm",
                    1,
                ));
                result.push_value(ResultValue::fixed(
                    "range_high",
                    shift + PROTON_WINDOW,
                    "ppm",
                    1,
                ));
                result.push_interpretation(PROTON_REGION.classify(shift));
            }
        }
        Ok(result)
    }

    fn calculator_id(&self) -> &'static str {
        "nmr_shift"
    }
}
