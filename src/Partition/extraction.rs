//! Liquid-liquid extraction evaluator. One pass extracts the fraction
//! E = P*Vorg / (P*Vorg + Vaq); n passes with the same organic volume each leave
//! (Vaq / (P*Vorg + Vaq))^n of the solute behind. Splitting a given total solvent
//! volume over several passes always beats one big pass.

use crate::calc_api::{CalculationResult, Evaluate, ResultValue};
use crate::interpreter::ThresholdTable;
use crate::validator::{CalcError, ensure_positive, parse_count, parse_positive};
use std::collections::HashMap;

const QUALITY: ThresholdTable = ThresholdTable::new(
    &[
        (0.80, "incomplete extraction - consider more passes or more solvent"),
        (0.90, "acceptable extraction"),
        (0.95, "good extraction"),
        (0.99, "very good extraction"),
    ],
    "essentially quantitative extraction",
);

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionRequest {
    pub partition_coefficient: f64,
    /// organic solvent volume per pass, mL
    pub organic_volume: f64,
    /// aqueous volume, mL
    pub aqueous_volume: f64,
    pub extractions: u32,
}

impl ExtractionRequest {
    pub fn new(
        partition_coefficient: f64,
        organic_volume: f64,
        aqueous_volume: f64,
        extractions: u32,
    ) -> Result<Self, CalcError> {
        ensure_positive("partition_coefficient", partition_coefficient)?;
        ensure_positive("organic_volume", organic_volume)?;
        ensure_positive("aqueous_volume", aqueous_volume)?;
        if extractions < 1 {
            return Err(CalcError::domain("extractions must be a whole number >= 1"));
        }
        Ok(Self {
            partition_coefficient,
            organic_volume,
            aqueous_volume,
            extractions,
        })
    }

    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, Vec<CalcError>> {
        let field = |name: &str| -> Result<&String, Vec<CalcError>> {
            raw.get(name).ok_or_else(|| {
                vec![CalcError::MissingField {
                    field: name.to_string(),
                }]
            })
        };
        let partition_coefficient =
            parse_positive("partition_coefficient", field("partition_coefficient")?)
                .map_err(|e| vec![e])?;
        let organic_volume =
            parse_positive("organic_volume", field("organic_volume")?).map_err(|e| vec![e])?;
        let aqueous_volume =
            parse_positive("aqueous_volume", field("aqueous_volume")?).map_err(|e| vec![e])?;
        let extractions = match raw.get("extractions") {
            Some(s) => parse_count("extractions", s).map_err(|e| vec![e])?,
            None => 1,
        };
        Self::new(
            partition_coefficient,
            organic_volume,
            aqueous_volume,
            extractions,
        )
        .map_err(|e| vec![e])
    }

    fn single_pass_fraction(&self) -> f64 {
        let pv = self.partition_coefficient * self.organic_volume;
        pv / (pv + self.aqueous_volume)
    }

    fn remaining_after_all_passes(&self) -> f64 {
        let pv = self.partition_coefficient * self.organic_volume;
        (self.aqueous_volume / (pv + self.aqueous_volume)).powi(self.extractions as i32)
    }
}

impl Evaluate for ExtractionRequest {
    fn evaluate(&self) -> Result<CalculationResult, CalcError> {
        let single = self.single_pass_fraction();
        let remaining = self.remaining_after_all_passes();
        let total = 1.0 - remaining;
        // both fractions are probabilities by construction
        if !(0.0..=1.0).contains(&total) || !(0.0..=1.0).contains(&single) {
            return Err(CalcError::domain(
                "extraction efficiency fell outside [0, 1], check the inputs",
            ));
        }

        let mut result = CalculationResult::default();
        result.push_value(ResultValue::fixed(
            "single_pass_efficiency",
            100.0 * single,
            "%",
            2,
        ));
        result.push_value(ResultValue::fixed("total_efficiency", 100.0 * total, "%", 2));
        result.push_value(ResultValue::fixed(
            "fraction_remaining",
            100.0 * remaining,
            "%",
            2,
        ));
        result.push_interpretation(QUALITY.classify(total));
        if self.extractions > 1 {
            result.push_interpretation(format!(
                "{} passes of {} mL each ({} mL of solvent in total)",
                self.extractions,
                self.organic_volume,
                self.organic_volume * self.extractions as f64
            ));
        }
        Ok(result)
    }

    fn calculator_id(&self) -> &'static str {
        "extraction"
    }
}
