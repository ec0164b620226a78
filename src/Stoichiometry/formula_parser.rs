//! Parser for fuel formulas restricted to C/H/O compounds (hydrocarbons,
//! alcohols, sugars). Accepts plain ASCII ("C2H5OH") as well as unicode
//! subscripts ("C₂H₅OH") and phase marks like "(g)". Counts of a repeated
//! element are summed, so ethanol correctly gets 6 hydrogens.

use crate::validator::CalcError;
use regex::Regex;
use std::sync::OnceLock;

// Element data for the molar mass of C/H/O fuels
pub struct Element {
    name: &'static str,
    atomic_mass: f64,
}

const ELEMENTS: &[Element] = &[
    Element {
        name: "H",
        atomic_mass: 1.008,
    },
    Element {
        name: "C",
        atomic_mass: 12.011,
    },
    Element {
        name: "O",
        atomic_mass: 15.999,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FuelComposition {
    pub carbon: usize,
    pub hydrogen: usize,
    pub oxygen: usize,
}

fn element_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Z][a-z]?)(\d*)").unwrap())
}

fn normalize(formula: &str) -> String {
    let subscripts = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
    let mut normalized = String::with_capacity(formula.len());
    for c in formula.chars() {
        if let Some(digit) = subscripts.iter().position(|s| *s == c) {
            normalized.push(char::from_digit(digit as u32, 10).unwrap());
        } else {
            normalized.push(c);
        }
    }
    // phase marks carry no composition
    for phase in ["(g)", "(G)", "(l)", "(L)", "(s)", "(S)", "(c)", "(C)"] {
        normalized = normalized.replace(phase, "");
    }
    normalized.replace(" ", "")
}

/// Parse a C/H/O formula into its atomic composition. Elements outside C, H, O
/// are a domain error: the combustion evaluators only balance C/H/O fuels.
pub fn parse_fuel_formula(formula: &str) -> Result<FuelComposition, CalcError> {
    let normalized = normalize(formula);
    if normalized.is_empty() {
        return Err(CalcError::MissingField {
            field: "fuel_formula".to_string(),
        });
    }
    let mut composition = FuelComposition::default();
    let mut matched_len = 0;
    for captures in element_regex().captures_iter(&normalized) {
        let symbol = captures.get(1).map(|m| m.as_str()).unwrap_or("");
        let count: usize = match captures.get(2).map(|m| m.as_str()) {
            Some("") | None => 1,
            Some(digits) => digits.parse().map_err(|_| CalcError::ParseError {
                field: "fuel_formula".to_string(),
                value: formula.to_string(),
            })?,
        };
        matched_len += captures.get(0).map(|m| m.as_str().len()).unwrap_or(0);
        match symbol {
            "C" => composition.carbon += count,
            "H" => composition.hydrogen += count,
            "O" => composition.oxygen += count,
            other => {
                return Err(CalcError::domain(format!(
                    "element {} is not supported, combustion calculators handle C/H/O fuels only",
                    other
                )));
            }
        }
    }
    // leftover characters mean the formula was not element symbols at all
    if matched_len != normalized.len() {
        return Err(CalcError::ParseError {
            field: "fuel_formula".to_string(),
            value: formula.to_string(),
        });
    }
    if composition.carbon == 0 && composition.hydrogen == 0 {
        return Err(CalcError::domain(format!(
            "'{}' contains neither carbon nor hydrogen, nothing to combust",
            formula
        )));
    }
    Ok(composition)
}

/// molar mass of a parsed fuel, g/mol
pub fn molar_mass(composition: &FuelComposition) -> f64 {
    let mass_of = |name: &str| {
        ELEMENTS
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.atomic_mass)
            .unwrap_or(0.0)
    };
    composition.carbon as f64 * mass_of("C")
        + composition.hydrogen as f64 * mass_of("H")
        + composition.oxygen as f64 * mass_of("O")
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_simple_hydrocarbons() {
        assert_eq!(
            parse_fuel_formula("CH4").unwrap(),
            FuelComposition {
                carbon: 1,
                hydrogen: 4,
                oxygen: 0
            }
        );
        assert_eq!(
            parse_fuel_formula("C3H8").unwrap(),
            FuelComposition {
                carbon: 3,
                hydrogen: 8,
                oxygen: 0
            }
        );
    }

    #[test]
    fn test_repeated_elements_are_summed() {
        // ethanol written the chemist's way
        assert_eq!(
            parse_fuel_formula("C2H5OH").unwrap(),
            FuelComposition {
                carbon: 2,
                hydrogen: 6,
                oxygen: 1
            }
        );
    }

    #[test]
    fn test_unicode_subscripts_and_phase_marks() {
        assert_eq!(
            parse_fuel_formula("C₆H₁₂O₆").unwrap(),
            FuelComposition {
                carbon: 6,
                hydrogen: 12,
                oxygen: 6
            }
        );
        assert_eq!(
            parse_fuel_formula("CH4(g)").unwrap(),
            parse_fuel_formula("CH4").unwrap()
        );
    }

    #[test]
    fn test_unsupported_elements_rejected() {
        assert!(parse_fuel_formula("NaCl").is_err());
        assert!(parse_fuel_formula("CH3NH2").is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(parse_fuel_formula("").is_err());
        assert!(parse_fuel_formula("???").is_err());
    }

    #[test]
    fn test_molar_mass() {
        let methane = parse_fuel_formula("CH4").unwrap();
        assert_relative_eq!(molar_mass(&methane), 16.043, epsilon = 1e-2);
        let glucose = parse_fuel_formula("C6H12O6").unwrap();
        assert_relative_eq!(molar_mass(&glucose), 180.16, epsilon = 1e-1);
    }
}
