//! # Input Validator Module
//!
//! ## Aim
//! Every calculator of this crate receives its data as raw strings (form fields,
//! CLI prompts). This module turns those raw strings into checked numbers. Nothing
//! here ever panics on user input: an unparseable number, a missing field or a value
//! violating a physical constraint comes back as a `CalcError`, computation is
//! simply not attempted.
//!
//! ## Main Data Structures and Logic
//! - `CalcError`: shared error enum of the whole crate (missing field / parse / domain)
//! - `Constraint`: what a single field must satisfy (positive, integer >= 1, choice of options...)
//! - `FieldSpec`: name + constraint + unit label, one per calculator field
//! - `CalculatorInput`: immutable map of validated values, built once at submit time
//!
//! ## Key Methods
//! - `validate()`: raw map + field specs -> `CalculatorInput` or a list of per-field errors
//! - `parse_number()`, `parse_positive()`, `parse_count()`: helpers for typed request constructors

use std::collections::HashMap;
use thiserror::Error;

/// Error taxonomy shared by all formula evaluators. Missing-field and parse errors
/// are per-field, domain errors are calculation-level.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },
    #[error("Field '{field}' is not a valid number: '{value}'")]
    ParseError { field: String, value: String },
    #[error("Field '{field}' must be one of {allowed:?}, got '{value}'")]
    InvalidChoice {
        field: String,
        value: String,
        allowed: Vec<&'static str>,
    },
    #[error("{0}")]
    DomainError(String),
    #[error("Unknown calculator: {0}")]
    UnknownCalculator(String),
}

impl CalcError {
    pub fn domain(msg: impl Into<String>) -> Self {
        CalcError::DomainError(msg.into())
    }
}

/// Per-field numeric constraint. `Count` means a positive integer (number of
/// extractions, number of neighboring protons and so on).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// any finite real
    Any,
    /// strictly positive: concentrations, volumes, masses, moles, Ka, [H+]
    Positive,
    NonNegative,
    /// integer >= 1
    Count,
}

#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub constraint: Constraint,
    pub required: bool,
    /// unit label shown to the user, e.g. "mol/L"
    pub unit: Option<&'static str>,
}

impl FieldSpec {
    pub const fn required(name: &'static str, constraint: Constraint, unit: Option<&'static str>) -> Self {
        Self {
            name,
            constraint,
            required: true,
            unit,
        }
    }
    pub const fn optional(name: &'static str, constraint: Constraint, unit: Option<&'static str>) -> Self {
        Self {
            name,
            constraint,
            required: false,
            unit,
        }
    }
}

/// Validated, immutable set of named inputs. Constructed once per calculation,
/// discarded after the result is computed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalculatorInput {
    values: HashMap<String, f64>,
}

impl CalculatorInput {
    pub fn get(&self, field: &str) -> Option<f64> {
        self.values.get(field).copied()
    }

    /// field that was declared required and therefore must be present
    pub fn require(&self, field: &str) -> Result<f64, CalcError> {
        self.values.get(field).copied().ok_or(CalcError::MissingField {
            field: field.to_string(),
        })
    }

    pub fn get_or(&self, field: &str, default: f64) -> f64 {
        self.get(field).unwrap_or(default)
    }
}

fn check_constraint(field: &str, value: f64, constraint: Constraint) -> Result<(), CalcError> {
    match constraint {
        Constraint::Any => Ok(()),
        Constraint::Positive => {
            if value > 0.0 {
                Ok(())
            } else {
                Err(CalcError::domain(format!("{} must be positive", field)))
            }
        }
        Constraint::NonNegative => {
            if value >= 0.0 {
                Ok(())
            } else {
                Err(CalcError::domain(format!("{} must not be negative", field)))
            }
        }
        Constraint::Count => {
            if value >= 1.0 && value.fract() == 0.0 {
                Ok(())
            } else {
                Err(CalcError::domain(format!(
                    "{} must be a whole number >= 1",
                    field
                )))
            }
        }
    }
}

/// Validate a raw field map against the calculator field specs. All field-level
/// problems are collected and returned together, so the user sees every broken
/// field at once instead of fixing them one by one.
pub fn validate(
    raw: &HashMap<String, String>,
    specs: &[FieldSpec],
) -> Result<CalculatorInput, Vec<CalcError>> {
    let mut values = HashMap::new();
    let mut errors = Vec::new();
    for spec in specs {
        let raw_value = raw.get(spec.name).map(|s| s.trim()).filter(|s| !s.is_empty());
        match raw_value {
            None => {
                if spec.required {
                    errors.push(CalcError::MissingField {
                        field: spec.name.to_string(),
                    });
                }
            }
            Some(s) => match s.parse::<f64>() {
                Ok(v) if v.is_finite() => match check_constraint(spec.name, v, spec.constraint) {
                    Ok(()) => {
                        values.insert(spec.name.to_string(), v);
                    }
                    Err(e) => errors.push(e),
                },
                _ => errors.push(CalcError::ParseError {
                    field: spec.name.to_string(),
                    value: s.to_string(),
                }),
            },
        }
    }
    if errors.is_empty() {
        Ok(CalculatorInput { values })
    } else {
        Err(errors)
    }
}

/// parse one raw string as a finite real
pub fn parse_number(field: &str, raw: &str) -> Result<f64, CalcError> {
    let s = raw.trim();
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CalcError::ParseError {
            field: field.to_string(),
            value: s.to_string(),
        }),
    }
}

/// parse one raw string as a strictly positive real
pub fn parse_positive(field: &str, raw: &str) -> Result<f64, CalcError> {
    let v = parse_number(field, raw)?;
    check_constraint(field, v, Constraint::Positive)?;
    Ok(v)
}

/// parse one raw string as an integer count >= 1
pub fn parse_count(field: &str, raw: &str) -> Result<u32, CalcError> {
    let s = raw.trim();
    match s.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(CalcError::domain(format!(
            "{} must be a whole number >= 1",
            field
        ))),
    }
}

/// positivity check on an already typed value, for request structs built in code
pub fn ensure_positive(field: &str, value: f64) -> Result<(), CalcError> {
    check_constraint(field, value, Constraint::Positive)
}
