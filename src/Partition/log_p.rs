//! Partition coefficient evaluator: logP = log10(C_organic / C_aqueous) for a
//! neutral solute equilibrated between octanol (or another organic phase) and
//! water. Classification bands follow the usual medicinal chemistry reading.

use crate::calc_api::{CalculationResult, Evaluate, ResultValue};
use crate::interpreter::ThresholdTable;
use crate::validator::{CalcError, Constraint, FieldSpec, ensure_positive, validate};
use std::collections::HashMap;

const FIELDS: [FieldSpec; 2] = [
    FieldSpec::required("organic_concentration", Constraint::Positive, Some("mol/L")),
    FieldSpec::required("aqueous_concentration", Constraint::Positive, Some("mol/L")),
];

const LIPOPHILICITY: ThresholdTable = ThresholdTable::new(
    &[
        (-2.0, "Very hydrophilic - stays almost entirely in water"),
        (0.0, "Hydrophilic - prefers the aqueous phase"),
        (3.0, "Moderately lipophilic - typical drug-like range"),
        (5.0, "Highly lipophilic - prefers the organic phase strongly"),
    ],
    "Very lipophilic - poor aqueous solubility expected",
);

#[derive(Debug, Clone, PartialEq)]
pub struct LogPRequest {
    pub organic_concentration: f64,
    pub aqueous_concentration: f64,
}

impl LogPRequest {
    pub fn new(organic_concentration: f64, aqueous_concentration: f64) -> Result<Self, CalcError> {
        ensure_positive("organic_concentration", organic_concentration)?;
        ensure_positive("aqueous_concentration", aqueous_concentration)?;
        Ok(Self {
            organic_concentration,
            aqueous_concentration,
        })
    }

    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, Vec<CalcError>> {
        let input = validate(raw, &FIELDS)?;
        Self::new(
            input.require("organic_concentration").map_err(|e| vec![e])?,
            input.require("aqueous_concentration").map_err(|e| vec![e])?,
        )
        .map_err(|e| vec![e])
    }
}

impl Evaluate for LogPRequest {
    fn evaluate(&self) -> Result<CalculationResult, CalcError> {
        let partition = self.organic_concentration / self.aqueous_concentration;
        let log_p = partition.log10();

        let mut result = CalculationResult::default();
        result.push_value(ResultValue::auto("partition_coefficient", partition, "", 3));
        result.push_value(ResultValue::fixed("log_p", log_p, "", 2));
        result.push_interpretation(LIPOPHILICITY.classify(log_p));
        if (-0.4..=5.6).contains(&log_p) {
            result.push_interpretation("within the Lipinski logP window (-0.4 to 5.6)");
        } else {
            result.push_interpretation("outside the Lipinski logP window (-0.4 to 5.6)");
        }
        if (0.0..=3.0).contains(&log_p) {
            result.push_interpretation("in the range favored for CNS penetration (0 to 3)");
        }
        Ok(result)
    }

    fn calculator_id(&self) -> &'static str {
        "log_p"
    }
}
