//! # Example Loader Module
//!
//! ## Aim
//! Worked classroom examples for the calculators, embedded as a small JSON
//! library. Each preset is a named raw field map; loading a preset means
//! overwriting the calculator form with exactly these strings, so running a
//! preset goes through the same validation and evaluation path as hand-typed
//! input.
//!
//! ## Main Data Structures and Logic
//! - `ExampleEntry`: name + optional note + raw field map
//! - `PresetLibrary`: calculator id -> list of presets, parsed once from the
//!   embedded JSON
//!
//! ## Key Methods
//! - `PresetLibrary::load()`: parse the embedded library
//! - `instantiate()`: preset -> ready-to-run calculator
//! - `pretty_print_presets()`: table of presets of one calculator

use crate::calc_api::{CalculatorEnum, create_calculator_by_name};
use crate::validator::CalcError;
use log::info;
use prettytable::{Table, row};
use serde::Deserialize;
use std::collections::HashMap;

const PRESETS_JSON: &str = r#"
{
  "buffer_capacity": [
    {"name": "Acetic acid buffer at its pKa",
     "note": "0.1 M acetate buffer poised at pH = pKa, maximum capacity",
     "fields": {"buffer_concentration": "0.1", "pka": "4.76", "ph": "4.76"}},
    {"name": "Phosphate buffer at pH 7.4",
     "note": "physiological pH, 0.1 M total phosphate",
     "fields": {"buffer_concentration": "0.1", "pka": "7.21", "ph": "7.4"}},
    {"name": "Tris buffer for biochemistry",
     "note": "0.05 M Tris at pH 8.0",
     "fields": {"buffer_concentration": "0.05", "pka": "8.06", "ph": "8.0"}},
    {"name": "Carbonate buffer at pH 10",
     "fields": {"buffer_concentration": "0.1", "pka": "10.33", "ph": "10.0"}}
  ],
  "buffer_design": [
    {"name": "Physiological phosphate buffer",
     "note": "0.1 M buffer at pH 7.4 from the HPO4/H2PO4 pair",
     "fields": {"target_ph": "7.4", "pka": "7.21", "total_concentration": "0.1"}}
  ],
  "combustion": [
    {"name": "Methane heating value",
     "fields": {"mode": "energy", "fuel_formula": "CH4", "mass": "16.0",
                "enthalpy_of_combustion": "-890"}},
    {"name": "Propane cylinder burn",
     "fields": {"mode": "energy", "fuel_formula": "C3H8", "mass": "44.1",
                "enthalpy_of_combustion": "-2220"}},
    {"name": "Ethanol burner",
     "fields": {"mode": "energy", "fuel_formula": "C2H5OH", "mass": "46.1",
                "enthalpy_of_combustion": "-1367"}},
    {"name": "Glucose respiration",
     "note": "complete oxidation of one mole of glucose",
     "fields": {"mode": "energy", "fuel_formula": "C6H12O6", "mass": "180.2",
                "enthalpy_of_combustion": "-2803"}}
  ],
  "hess_law": [
    {"name": "Carbon combustion via CO",
     "note": "two steps summing to C + O2 -> CO2, -393.5 kJ/mol",
     "fields": {"equation_1": "C(s) + 1/2 O2 -> CO", "delta_h_1": "-110.5",
                "equation_2": "CO + 1/2 O2 -> CO2", "delta_h_2": "-283.0"}},
    {"name": "NO2 formation with a reversed step",
     "fields": {"equation_1": "N2 + O2 -> 2NO", "delta_h_1": "180.5",
                "equation_2": "2NO + O2 -> 2NO2", "delta_h_2": "-114.1",
                "equation_3": "4NO2 + O2 + 4NH3 -> 6H2O + 4N2",
                "delta_h_3": "-1170", "coefficient_3": "-1"}}
  ],
  "log_p": [
    {"name": "Caffeine between dichloromethane and water",
     "fields": {"organic_concentration": "85", "aqueous_concentration": "15"}},
    {"name": "Diazepam between octanol and water",
     "fields": {"organic_concentration": "98", "aqueous_concentration": "2"}}
  ],
  "distribution": [
    {"name": "Aspirin at physiological pH",
     "note": "weak acid, almost fully ionized at pH 7.4",
     "fields": {"compound_type": "acid", "log_p": "1.19", "pka": "3.5", "ph": "7.4"}},
    {"name": "Ibuprofen at physiological pH",
     "fields": {"compound_type": "acid", "log_p": "3.97", "pka": "4.9", "ph": "7.4"}},
    {"name": "Atenolol at physiological pH",
     "note": "weak base, mostly protonated at pH 7.4",
     "fields": {"compound_type": "base", "log_p": "0.16", "pka": "9.6", "ph": "7.4"}}
  ],
  "extraction": [
    {"name": "Caffeine extraction, two passes",
     "fields": {"partition_coefficient": "10", "organic_volume": "50",
                "aqueous_volume": "100", "extractions": "2"}}
  ],
  "nmr_shift": [
    {"name": "Ethanol CH3 protons",
     "note": "alkyl protons split by the neighboring CH2",
     "fields": {"environment": "alkyl", "neighboring_protons": "2"}},
    {"name": "Benzene ring protons",
     "fields": {"environment": "aromatic", "neighboring_protons": "0"}},
    {"name": "Acetaldehyde CHO carbon",
     "fields": {"mode": "carbon13", "carbon_type": "carbonyl"}}
  ]
}
"#;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExampleEntry {
    pub name: String,
    #[serde(default)]
    pub note: Option<String>,
    pub fields: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct PresetLibrary {
    presets: HashMap<String, Vec<ExampleEntry>>,
}

impl PresetLibrary {
    pub fn load() -> Result<Self, CalcError> {
        let presets: HashMap<String, Vec<ExampleEntry>> = serde_json::from_str(PRESETS_JSON)
            .map_err(|e| CalcError::domain(format!("preset library is corrupt: {}", e)))?;
        info!("preset library loaded for {} calculators", presets.len());
        Ok(Self { presets })
    }

    /// calculator ids that ship at least one preset, sorted
    pub fn calculators_with_presets(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.presets.keys().map(|k| k.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    pub fn presets_for(&self, calculator: &str) -> &[ExampleEntry] {
        self.presets
            .get(calculator)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    pub fn find(&self, calculator: &str, preset_name: &str) -> Option<&ExampleEntry> {
        self.presets_for(calculator)
            .iter()
            .find(|entry| entry.name == preset_name)
    }

    /// build a ready-to-run calculator from a preset, through the same
    /// validation path as hand-typed input
    pub fn instantiate(
        &self,
        calculator: &str,
        preset_name: &str,
    ) -> Result<CalculatorEnum, Vec<CalcError>> {
        let entry = self.find(calculator, preset_name).ok_or_else(|| {
            vec![CalcError::domain(format!(
                "no preset '{}' for calculator '{}'",
                preset_name, calculator
            ))]
        })?;
        create_calculator_by_name(calculator, &entry.fields)
    }

    pub fn pretty_print_presets(&self, calculator: &str) {
        let mut table = Table::new();
        table.add_row(row!["Preset", "Note"]);
        for entry in self.presets_for(calculator) {
            table.add_row(row![entry.name, entry.note.as_deref().unwrap_or("")]);
        }
        table.printstd();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc_api::Evaluate;
    use approx::assert_relative_eq;

    #[test]
    fn test_embedded_library_parses() {
        let library = PresetLibrary::load().unwrap();
        assert!(!library.calculators_with_presets().is_empty());
    }

    #[test]
    fn test_every_preset_instantiates_and_runs() {
        let library = PresetLibrary::load().unwrap();
        for calculator in library.calculators_with_presets() {
            for entry in library.presets_for(calculator) {
                let calc = library
                    .instantiate(calculator, &entry.name)
                    .unwrap_or_else(|e| panic!("{} / {}: {:?}", calculator, entry.name, e));
                calc.evaluate()
                    .unwrap_or_else(|e| panic!("{} / {}: {}", calculator, entry.name, e));
            }
        }
    }

    #[test]
    fn test_carbon_combustion_preset_value() {
        let library = PresetLibrary::load().unwrap();
        let result = library
            .instantiate("hess_law", "Carbon combustion via CO")
            .unwrap()
            .evaluate()
            .unwrap();
        assert_relative_eq!(result.value_of("total_enthalpy").unwrap(), -393.5);
    }

    #[test]
    fn test_unknown_preset_errors() {
        let library = PresetLibrary::load().unwrap();
        assert!(library.instantiate("hess_law", "no such preset").is_err());
        assert!(library.find("alchemy", "anything").is_none());
    }
}
