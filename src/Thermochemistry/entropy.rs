//! Standard reaction entropy evaluator:
//! dS = sum(coeff * S(products)) - sum(coeff * S(reactants)), all S in
//! J/(mol*K). Stoichiometric coefficients must be positive; standard molar
//! entropies themselves may take any sign (aqueous ions can be negative).

use crate::calc_api::{CalculationResult, Evaluate, ResultValue};
use crate::validator::{CalcError, parse_number, parse_positive};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesEntropy {
    pub name: String,
    pub coefficient: f64,
    /// standard molar entropy, J/(mol*K)
    pub entropy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntropyRequest {
    pub reactants: Vec<SpeciesEntropy>,
    pub products: Vec<SpeciesEntropy>,
}

impl EntropyRequest {
    pub fn new(
        reactants: Vec<SpeciesEntropy>,
        products: Vec<SpeciesEntropy>,
    ) -> Result<Self, CalcError> {
        if reactants.is_empty() || products.is_empty() {
            return Err(CalcError::domain(
                "at least one reactant and one product are required",
            ));
        }
        for species in reactants.iter().chain(products.iter()) {
            if species.coefficient <= 0.0 {
                return Err(CalcError::domain(format!(
                    "stoichiometric coefficient of {} must be positive",
                    species.name
                )));
            }
        }
        Ok(Self {
            reactants,
            products,
        })
    }

    /// indexed raw fields: reactant_1_entropy, reactant_1_coefficient,
    /// product_1_entropy, ... read until the first missing entropy field
    pub fn from_raw(raw: &HashMap<String, String>) -> Result<Self, Vec<CalcError>> {
        let side = |prefix: &str| -> Result<Vec<SpeciesEntropy>, Vec<CalcError>> {
            let mut list = Vec::new();
            let mut i = 1;
            while let Some(s) = raw.get(&format!("{}_{}_entropy", prefix, i)) {
                let entropy =
                    parse_number(&format!("{}_{}_entropy", prefix, i), s).map_err(|e| vec![e])?;
                let coefficient = match raw.get(&format!("{}_{}_coefficient", prefix, i)) {
                    Some(c) => parse_positive(&format!("{}_{}_coefficient", prefix, i), c)
                        .map_err(|e| vec![e])?,
                    None => 1.0,
                };
                let name = raw
                    .get(&format!("{}_{}_name", prefix, i))
                    .cloned()
                    .unwrap_or_else(|| format!("{} {}", prefix, i));
                list.push(SpeciesEntropy {
                    name,
                    coefficient,
                    entropy,
                });
                i += 1;
            }
            Ok(list)
        };
        Self::new(side("reactant")?, side("product")?).map_err(|e| vec![e])
    }
}

fn weighted_sum(side: &[SpeciesEntropy]) -> f64 {
    side.iter().map(|s| s.coefficient * s.entropy).sum()
}

impl Evaluate for EntropyRequest {
    fn evaluate(&self) -> Result<CalculationResult, CalcError> {
        let sum_products = weighted_sum(&self.products);
        let sum_reactants = weighted_sum(&self.reactants);
        let delta_s = sum_products - sum_reactants;

        let mut result = CalculationResult::default();
        result.push_value(ResultValue::fixed("delta_s", delta_s, "J/(mol*K)", 1));
        result.push_value(ResultValue::fixed("sum_products", sum_products, "J/(mol*K)", 1));
        result.push_value(ResultValue::fixed(
            "sum_reactants",
            sum_reactants,
            "J/(mol*K)",
            1,
        ));
        if delta_s > 0.0 {
            result.push_interpretation(
                "entropy increases (dS > 0), disorder grows - favors spontaneity",
            );
        } else if delta_s < 0.0 {
            result.push_interpretation(
                "entropy decreases (dS < 0), order grows - disfavors spontaneity",
            );
        } else {
            result.push_interpretation("no entropy change (dS = 0)");
        }
        Ok(result)
    }

    fn calculator_id(&self) -> &'static str {
        "entropy"
    }
}
