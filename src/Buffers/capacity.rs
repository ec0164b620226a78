//! Buffer capacity evaluator. beta = 2.303*C*Ka*[H+]/(Ka+[H+])^2, maximum at
//! pH = pKa; the result also reports the capacity as percent of that theoretical
//! maximum and rates the effectiveness from the pH distance to pKa.

use crate::Buffers::{buffer_capacity, theoretical_max_capacity};
use crate::calc_api::{CalculationResult, Evaluate, ResultValue};
use crate::interpreter::ThresholdTable;
use crate::validator::{CalcError, Constraint, FieldSpec, ensure_positive, validate};
use std::collections::HashMap;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("buffer_concentration", Constraint::Positive, Some("mol/L")),
    FieldSpec::required("pka", Constraint::Any, None),
    FieldSpec::required("ph", Constraint::Any, None),
];

const EFFECTIVENESS: ThresholdTable = ThresholdTable::new(
    &[
        (1.0, "Excellent - within optimal range (pH = pKa +/- 1)"),
        (1.5, "Good - acceptable buffering capacity"),
    ],
    "Poor - outside effective buffer range",
);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferCapacityRequest {
    pub buffer_concentration: f64,
    pub pka: f64,
    pub ph: f64,
}

impl BufferCapacityRequest {
    pub fn new(buffer_concentration: f64, pka: f64, ph: f64) -> Result<Self, CalcError> {
        ensure_positive("buffer_concentration", buffer_concentration)?;
        Ok(Self {
            buffer_concentration,
            pka,
            ph,
        })
    }

    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, Vec<CalcError>> {
        let input = validate(raw, FIELDS)?;
        let get = |f: &str| input.require(f).map_err(|e| vec![e]);
        Ok(Self {
            buffer_concentration: get("buffer_concentration")?,
            pka: get("pka")?,
            ph: get("ph")?,
        })
    }
}

pub fn effectiveness_label(ph_distance: f64) -> &'static str {
    EFFECTIVENESS.classify(ph_distance)
}

impl Evaluate for BufferCapacityRequest {
    fn evaluate(&self) -> Result<CalculationResult, CalcError> {
        let beta = buffer_capacity(self.buffer_concentration, self.pka, self.ph);
        let beta_max = theoretical_max_capacity(self.buffer_concentration);
        let efficiency = beta / beta_max * 100.0;

        let mut result = CalculationResult::default();
        result.push_value(ResultValue::exp("buffer_capacity", beta, "mol/(L*pH)", 2));
        result.push_value(ResultValue::fixed("efficiency", efficiency, "%", 1));
        result.push_interpretation(effectiveness_label((self.ph - self.pka).abs()));
        result.push_interpretation(format!(
            "maximum capacity at pH = pKa = {:.2}",
            self.pka
        ));
        Ok(result)
    }

    fn calculator_id(&self) -> &'static str {
        "buffer_capacity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_capacity_is_maximal_at_pka() {
        // at pH = pKa, Ka = [H+] and beta = 2.303*C/4
        let result = BufferCapacityRequest::new(0.1, 4.76, 4.76)
            .unwrap()
            .evaluate()
            .unwrap();
        let beta = result.value_of("buffer_capacity").unwrap();
        assert_relative_eq!(beta, 2.303 * 0.1 / 4.0, max_relative = 1e-12);
        assert_relative_eq!(result.value_of("efficiency").unwrap(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_capacity_decays_away_from_pka() {
        let at_pka = BufferCapacityRequest::new(0.1, 7.21, 7.21)
            .unwrap()
            .evaluate()
            .unwrap()
            .value_of("buffer_capacity")
            .unwrap();
        let off_pka = BufferCapacityRequest::new(0.1, 7.21, 8.5)
            .unwrap()
            .evaluate()
            .unwrap()
            .value_of("buffer_capacity")
            .unwrap();
        assert!(off_pka < at_pka);
    }

    #[test]
    fn test_effectiveness_rating() {
        assert!(effectiveness_label(0.19).starts_with("Excellent"));
        assert!(effectiveness_label(1.3).starts_with("Good"));
        assert!(effectiveness_label(2.0).starts_with("Poor"));
    }

    #[test]
    fn test_concentration_must_be_positive() {
        assert!(BufferCapacityRequest::new(0.0, 4.76, 4.76).is_err());
    }
}
