//! Henderson-Hasselbalch evaluator: pH = pKa + log10([A-]/[HA]). The equation
//! relates four quantities, so the request is a tagged union of the four "solve
//! for" variants, each carrying only the three fields its formula needs.

use crate::calc_api::{CalculationResult, Evaluate, ResultValue};
use crate::validator::{CalcError, ensure_positive, parse_number, parse_positive};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HendersonHasselbalchRequest {
    SolvePh { pka: f64, base: f64, acid: f64 },
    SolvePka { ph: f64, base: f64, acid: f64 },
    SolveBase { ph: f64, pka: f64, acid: f64 },
    SolveAcid { ph: f64, pka: f64, base: f64 },
}

impl HendersonHasselbalchRequest {
    pub fn solve_ph(pka: f64, base: f64, acid: f64) -> Result<Self, CalcError> {
        ensure_positive("conjugate_base_concentration", base)?;
        ensure_positive("weak_acid_concentration", acid)?;
        Ok(Self::SolvePh { pka, base, acid })
    }

    pub fn solve_pka(ph: f64, base: f64, acid: f64) -> Result<Self, CalcError> {
        ensure_positive("conjugate_base_concentration", base)?;
        ensure_positive("weak_acid_concentration", acid)?;
        Ok(Self::SolvePka { ph, base, acid })
    }

    pub fn solve_base(ph: f64, pka: f64, acid: f64) -> Result<Self, CalcError> {
        ensure_positive("weak_acid_concentration", acid)?;
        Ok(Self::SolveBase { ph, pka, acid })
    }

    pub fn solve_acid(ph: f64, pka: f64, base: f64) -> Result<Self, CalcError> {
        ensure_positive("conjugate_base_concentration", base)?;
        Ok(Self::SolveAcid { ph, pka, base })
    }

    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, Vec<CalcError>> {
        let solve_for = raw.get("solve_for").map(|s| s.as_str()).unwrap_or("ph");
        let number = |field: &str| -> Result<f64, Vec<CalcError>> {
            let s = raw.get(field).ok_or_else(|| {
                vec![CalcError::MissingField {
                    field: field.to_string(),
                }]
            })?;
            parse_number(field, s).map_err(|e| vec![e])
        };
        let positive = |field: &str| -> Result<f64, Vec<CalcError>> {
            let s = raw.get(field).ok_or_else(|| {
                vec![CalcError::MissingField {
                    field: field.to_string(),
                }]
            })?;
            parse_positive(field, s).map_err(|e| vec![e])
        };
        match solve_for {
            "ph" => Ok(Self::SolvePh {
                pka: number("pka")?,
                base: positive("conjugate_base_concentration")?,
                acid: positive("weak_acid_concentration")?,
            }),
            "pka" => Ok(Self::SolvePka {
                ph: number("ph")?,
                base: positive("conjugate_base_concentration")?,
                acid: positive("weak_acid_concentration")?,
            }),
            "base" => Ok(Self::SolveBase {
                ph: number("ph")?,
                pka: number("pka")?,
                acid: positive("weak_acid_concentration")?,
            }),
            "acid" => Ok(Self::SolveAcid {
                ph: number("ph")?,
                pka: number("pka")?,
                base: positive("conjugate_base_concentration")?,
            }),
            other => Err(vec![CalcError::InvalidChoice {
                field: "solve_for".to_string(),
                value: other.to_string(),
                allowed: vec!["ph", "pka", "base", "acid"],
            }]),
        }
    }
}

impl Evaluate for HendersonHasselbalchRequest {
    fn evaluate(&self) -> Result<CalculationResult, CalcError> {
        let mut result = CalculationResult::default();
        match *self {
            Self::SolvePh { pka, base, acid } => {
                let ph = pka + (base / acid).log10();
                result.push_value(ResultValue::fixed("pH", ph, "", 2));
                result.push_value(ResultValue::fixed("base_to_acid_ratio", base / acid, "", 3));
                note_buffer_range(&mut result, ph, pka);
            }
            Self::SolvePka { ph, base, acid } => {
                let pka = ph - (base / acid).log10();
                result.push_value(ResultValue::fixed("pKa", pka, "", 2));
                result.push_value(ResultValue::fixed("base_to_acid_ratio", base / acid, "", 3));
                note_buffer_range(&mut result, ph, pka);
            }
            Self::SolveBase { ph, pka, acid } => {
                let base = acid * 10f64.powf(ph - pka);
                result.push_value(ResultValue::auto(
                    "conjugate_base_concentration",
                    base,
                    "mol/L",
                    4,
                ));
                note_buffer_range(&mut result, ph, pka);
            }
            Self::SolveAcid { ph, pka, base } => {
                let acid = base / 10f64.powf(ph - pka);
                result.push_value(ResultValue::auto(
                    "weak_acid_concentration",
                    acid,
                    "mol/L",
                    4,
                ));
                note_buffer_range(&mut result, ph, pka);
            }
        }
        Ok(result)
    }

    fn calculator_id(&self) -> &'static str {
        "henderson_hasselbalch"
    }
}

// buffers only work within about one pH unit of pKa
fn note_buffer_range(result: &mut CalculationResult, ph: f64, pka: f64) {
    if (ph - pka).abs() > 1.0 {
        result.push_interpretation(format!(
            "pH is {:.2} units away from pKa: outside the effective buffer range (pKa +/- 1)",
            (ph - pka).abs()
        ));
    }
}
