//! Distribution coefficient evaluator: logD corrects logP for ionization at a
//! given pH. Only the neutral form partitions into the organic phase, so
//! - acid:    logD = logP + log10(1 / (1 + 10^(pH - pKa)))
//! - base:    logD = logP + log10(1 / (1 + 10^(pKa - pH)))
//! - neutral: logD = logP at every pH

use crate::calc_api::{CalculationResult, Evaluate, ResultValue};
use crate::interpreter::ThresholdTable;
use crate::validator::{CalcError, Constraint, FieldSpec, validate};
use std::collections::HashMap;

const IONIZABLE_FIELDS: [FieldSpec; 3] = [
    FieldSpec::required("log_p", Constraint::Any, None),
    FieldSpec::required("ph", Constraint::Any, None),
    FieldSpec::required("pka", Constraint::Any, None),
];

const NEUTRAL_FIELDS: [FieldSpec; 1] = [FieldSpec::required("log_p", Constraint::Any, None)];

/// strength of the pH effect, from logP - logD
const PH_EFFECT: ThresholdTable = ThresholdTable::new(
    &[
        (0.5, "minimal pH effect - the compound is mostly un-ionized here"),
        (2.0, "moderate pH effect - ionization noticeably lowers partitioning"),
    ],
    "strong pH effect - the compound is predominantly ionized at this pH",
);

#[derive(Debug, Clone, PartialEq)]
pub enum DistributionRequest {
    Acid { log_p: f64, ph: f64, pka: f64 },
    Base { log_p: f64, ph: f64, pka: f64 },
    Neutral { log_p: f64 },
}

impl DistributionRequest {
    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, Vec<CalcError>> {
        let kind = raw
            .get("compound_type")
            .map(|s| s.as_str())
            .unwrap_or("acid");
        match kind {
            "acid" | "base" => {
                let input = validate(raw, &IONIZABLE_FIELDS)?;
                let log_p = input.require("log_p").map_err(|e| vec![e])?;
                let ph = input.require("ph").map_err(|e| vec![e])?;
                let pka = input.require("pka").map_err(|e| vec![e])?;
                if kind == "acid" {
                    Ok(Self::Acid { log_p, ph, pka })
                } else {
                    Ok(Self::Base { log_p, ph, pka })
                }
            }
            "neutral" => {
                let input = validate(raw, &NEUTRAL_FIELDS)?;
                Ok(Self::Neutral {
                    log_p: input.require("log_p").map_err(|e| vec![e])?,
                })
            }
            other => Err(vec![CalcError::InvalidChoice {
                field: "compound_type".to_string(),
                value: other.to_string(),
                allowed: vec!["acid", "base", "neutral"],
            }]),
        }
    }

    /// fraction of the compound carrying charge at the given pH
    fn fraction_ionized(&self) -> f64 {
        match self {
            Self::Acid { ph, pka, .. } => 1.0 / (1.0 + 10f64.powf(pka - ph)),
            Self::Base { ph, pka, .. } => 1.0 / (1.0 + 10f64.powf(ph - pka)),
            Self::Neutral { .. } => 0.0,
        }
    }

    fn log_d(&self) -> f64 {
        match self {
            Self::Acid { log_p, ph, pka } => {
                log_p + (1.0 / (1.0 + 10f64.powf(ph - pka))).log10()
            }
            Self::Base { log_p, ph, pka } => {
                log_p + (1.0 / (1.0 + 10f64.powf(pka - ph))).log10()
            }
            Self::Neutral { log_p } => *log_p,
        }
    }
}

impl Evaluate for DistributionRequest {
    fn evaluate(&self) -> Result<CalculationResult, CalcError> {
        let log_d = self.log_d();
        let percent_ionized = 100.0 * self.fraction_ionized();
        let log_p = match self {
            Self::Acid { log_p, .. } | Self::Base { log_p, .. } | Self::Neutral { log_p } => *log_p,
        };

        let mut result = CalculationResult::default();
        result.push_value(ResultValue::fixed("log_d", log_d, "", 2));
        result.push_value(ResultValue::fixed("percent_ionized", percent_ionized, "%", 1));
        match self {
            Self::Neutral { .. } => {
                result.push_interpretation("neutral compound - logD equals logP at every pH");
            }
            _ => {
                result.push_interpretation(PH_EFFECT.classify(log_p - log_d));
                if percent_ionized > 90.0 {
                    result.push_interpretation(
                        "mostly ionized - expect poor membrane permeation at this pH",
                    );
                }
            }
        }
        Ok(result)
    }

    fn calculator_id(&self) -> &'static str {
        "distribution"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_acid_at_its_pka_is_half_ionized() {
        let request = DistributionRequest::Acid {
            log_p: 2.0,
            ph: 4.5,
            pka: 4.5,
        };
        let result = request.evaluate().unwrap();
        assert_relative_eq!(result.value_of("percent_ionized").unwrap(), 50.0);
        // half the material ionized costs log10(2) of partitioning
        assert_relative_eq!(
            result.value_of("log_d").unwrap(),
            2.0 - 2f64.log10(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_aspirin_at_physiological_ph() {
        // pKa 3.5, logP 1.19: at pH 7.4 nearly fully ionized
        let request = DistributionRequest::Acid {
            log_p: 1.19,
            ph: 7.4,
            pka: 3.5,
        };
        let result = request.evaluate().unwrap();
        assert!(result.value_of("percent_ionized").unwrap() > 99.0);
        assert!(result.value_of("log_d").unwrap() < -2.0);
        assert!(result.interpretations.iter().any(|s| s.contains("mostly ionized")));
    }

    #[test]
    fn test_base_mirrors_acid() {
        // atenolol-like base, pKa 9.6 at pH 7.4 is mostly protonated
        let request = DistributionRequest::Base {
            log_p: 0.16,
            ph: 7.4,
            pka: 9.6,
        };
        let result = request.evaluate().unwrap();
        assert!(result.value_of("percent_ionized").unwrap() > 99.0);
    }

    #[test]
    fn test_neutral_compound_unchanged() {
        let result = DistributionRequest::Neutral { log_p: 2.7 }
            .evaluate()
            .unwrap();
        assert_relative_eq!(result.value_of("log_d").unwrap(), 2.7);
        assert_relative_eq!(result.value_of("percent_ionized").unwrap(), 0.0);
    }

    #[test]
    fn test_far_below_pka_acid_is_unionized() {
        let request = DistributionRequest::Acid {
            log_p: 3.0,
            ph: 1.0,
            pka: 4.5,
        };
        let result = request.evaluate().unwrap();
        assert!(result.value_of("percent_ionized").unwrap() < 1.0);
        assert!(result.interpretations[0].contains("minimal"));
    }
}
