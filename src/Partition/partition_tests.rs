/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::calc_api::{Evaluate, create_calculator_by_name};
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_log_p_from_raw() {
        let calc = create_calculator_by_name(
            "log_p",
            &raw(&[
                ("organic_concentration", "0.1"),
                ("aqueous_concentration", "0.001"),
            ]),
        )
        .unwrap();
        let result = calc.evaluate().unwrap();
        assert_relative_eq!(result.value_of("log_p").unwrap(), 2.0);
    }

    #[test]
    fn test_distribution_from_raw_defaults_to_acid() {
        let calc = create_calculator_by_name(
            "distribution",
            &raw(&[("log_p", "1.19"), ("ph", "7.4"), ("pka", "3.5")]),
        )
        .unwrap();
        let result = calc.evaluate().unwrap();
        assert!(result.value_of("percent_ionized").unwrap() > 99.0);
    }

    #[test]
    fn test_distribution_neutral_skips_pka() {
        let calc = create_calculator_by_name(
            "distribution",
            &raw(&[("compound_type", "neutral"), ("log_p", "2.7")]),
        )
        .unwrap();
        let result = calc.evaluate().unwrap();
        assert_relative_eq!(result.value_of("log_d").unwrap(), 2.7);
    }

    #[test]
    fn test_distribution_rejects_bad_compound_type() {
        let errors = create_calculator_by_name(
            "distribution",
            &raw(&[("compound_type", "salt"), ("log_p", "1.0")]),
        )
        .unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_extraction_from_raw() {
        let calc = create_calculator_by_name(
            "extraction",
            &raw(&[
                ("partition_coefficient", "10"),
                ("organic_volume", "50"),
                ("aqueous_volume", "100"),
                ("extractions", "2"),
            ]),
        )
        .unwrap();
        let result = calc.evaluate().unwrap();
        // remaining fraction (100/600)^2, so 1 - 1/36 extracted
        assert_relative_eq!(
            result.value_of("total_efficiency").unwrap(),
            100.0 * (1.0 - (100.0f64 / 600.0).powi(2)),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_acid_and_base_are_symmetric_around_pka() {
        // an acid 2 units above its pKa is as ionized as a base 2 units below
        let acid = create_calculator_by_name(
            "distribution",
            &raw(&[
                ("compound_type", "acid"),
                ("log_p", "2.0"),
                ("ph", "6.5"),
                ("pka", "4.5"),
            ]),
        )
        .unwrap()
        .evaluate()
        .unwrap();
        let base = create_calculator_by_name(
            "distribution",
            &raw(&[
                ("compound_type", "base"),
                ("log_p", "2.0"),
                ("ph", "2.5"),
                ("pka", "4.5"),
            ]),
        )
        .unwrap()
        .evaluate()
        .unwrap();
        assert_relative_eq!(
            acid.value_of("percent_ionized").unwrap(),
            base.value_of("percent_ionized").unwrap(),
            max_relative = 1e-12
        );
    }
}
