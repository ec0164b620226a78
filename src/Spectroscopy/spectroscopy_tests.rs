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
    fn test_proton_from_raw_defaults() {
        let calc = create_calculator_by_name(
            "nmr_shift",
            &raw(&[("environment", "aromatic"), ("neighboring_protons", "1")]),
        )
        .unwrap();
        let result = calc.evaluate().unwrap();
        assert_relative_eq!(result.value_of("chemical_shift").unwrap(), 7.3);
        assert!(result.interpretations.iter().any(|s| s.contains("doublet")));
    }

    #[test]
    fn test_carbon13_from_raw() {
        let calc = create_calculator_by_name(
            "nmr_shift",
            &raw(&[
                ("mode", "carbon13"),
                ("carbon_type", "ether"),
                ("alpha_substituents", "1"),
            ]),
        )
        .unwrap();
        let result = calc.evaluate().unwrap();
        assert_relative_eq!(result.value_of("chemical_shift").unwrap(), 75.0);
    }

    #[test]
    fn test_prediction_from_raw() {
        let calc = create_calculator_by_name(
            "nmr_shift",
            &raw(&[
                ("mode", "prediction"),
                ("base_shift", "2.0"),
                ("electron_withdrawing_groups", "1"),
                ("hydrogen_bonding", "true"),
            ]),
        )
        .unwrap();
        let result = calc.evaluate().unwrap();
        assert_relative_eq!(result.value_of("chemical_shift").unwrap(), 2.0 + 0.5 + 0.8);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let errors = create_calculator_by_name(
            "nmr_shift",
            &raw(&[("mode", "deuterium"), ("environment", "alkyl")]),
        )
        .unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_environment_match_is_case_insensitive() {
        let calc = create_calculator_by_name(
            "nmr_shift",
            &raw(&[("environment", "Vinylic C-H")]),
        )
        .unwrap();
        let result = calc.evaluate().unwrap();
        assert_relative_eq!(result.value_of("chemical_shift").unwrap(), 5.3);
    }
}
