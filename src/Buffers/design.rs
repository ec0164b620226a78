//! Buffer design evaluator: given a target pH, the acid pKa and a total
//! concentration, split the total into [HA] and [A-]. From Henderson-Hasselbalch
//! the ratio [A-]/[HA] = 10^(pH - pKa), and [HA] + [A-] = C_total holds exactly
//! by construction (the base concentration is computed as the remainder).

use crate::Buffers::buffer_capacity;
use crate::calc_api::{CalculationResult, Evaluate, ResultValue};
use crate::validator::{CalcError, Constraint, FieldSpec, ensure_positive, validate};
use std::collections::HashMap;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("target_ph", Constraint::Any, None),
    FieldSpec::required("pka", Constraint::Any, None),
    FieldSpec::required("total_concentration", Constraint::Positive, Some("mol/L")),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferDesignRequest {
    pub target_ph: f64,
    pub pka: f64,
    pub total_concentration: f64,
}

impl BufferDesignRequest {
    pub fn new(target_ph: f64, pka: f64, total_concentration: f64) -> Result<Self, CalcError> {
        ensure_positive("total_concentration", total_concentration)?;
        Ok(Self {
            target_ph,
            pka,
            total_concentration,
        })
    }

    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, Vec<CalcError>> {
        let input = validate(raw, FIELDS)?;
        let get = |f: &str| input.require(f).map_err(|e| vec![e]);
        Ok(Self {
            target_ph: get("target_ph")?,
            pka: get("pka")?,
            total_concentration: get("total_concentration")?,
        })
    }
}

impl Evaluate for BufferDesignRequest {
    fn evaluate(&self) -> Result<CalculationResult, CalcError> {
        let ratio = 10f64.powf(self.target_ph - self.pka);
        let acid = self.total_concentration / (1.0 + ratio);
        // remainder, so conservation [HA] + [A-] = C_total is exact
        let base = self.total_concentration - acid;

        let mut result = CalculationResult::default();
        result.push_value(ResultValue::auto("weak_acid_concentration", acid, "mol/L", 4));
        result.push_value(ResultValue::auto("conjugate_base_concentration", base, "mol/L", 4));
        result.push_value(ResultValue::fixed("base_to_acid_ratio", ratio, "", 2));
        result.push_value(ResultValue::fixed(
            "buffer_capacity",
            buffer_capacity(self.total_concentration, self.pka, self.target_ph),
            "mol/(L*pH)",
            3,
        ));
        result.push_interpretation(format!(
            "mix {:.1}% acid with {:.1}% conjugate base",
            acid / self.total_concentration * 100.0,
            base / self.total_concentration * 100.0
        ));
        let distance = (self.target_ph - self.pka).abs();
        if distance > 1.0 {
            result.push_interpretation(format!(
                "warning: target pH is outside the optimal range (pKa +/- 1), consider an acid with pKa closer to {:.2}",
                self.target_ph
            ));
        } else {
            result.push_interpretation("good choice - target pH within the optimal buffer range");
        }
        Ok(result)
    }

    fn calculator_id(&self) -> &'static str {
        "buffer_design"
    }
}
