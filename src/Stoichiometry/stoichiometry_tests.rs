/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Stoichiometry::combustion::combustion_coefficients;
    use crate::Stoichiometry::formula_parser::{molar_mass, parse_fuel_formula};
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
    fn test_glucose_respiration_coefficients() {
        // C6H12O6 + 6O2 -> 6CO2 + 6H2O
        let glucose = parse_fuel_formula("C6H12O6").unwrap();
        let (o2, co2, h2o) = combustion_coefficients(&glucose).unwrap();
        assert_relative_eq!(o2, 6.0);
        assert_relative_eq!(co2, 6.0);
        assert_relative_eq!(h2o, 6.0);
    }

    #[test]
    fn test_oxygen_balance_closes() {
        // O atoms in: 2*o2 + z; O atoms out: 2*co2 + h2o
        for formula in ["CH4", "C3H8", "C2H5OH", "C6H12O6"] {
            let composition = parse_fuel_formula(formula).unwrap();
            let (o2, co2, h2o) = combustion_coefficients(&composition).unwrap();
            let oxygen_in = 2.0 * o2 + composition.oxygen as f64;
            let oxygen_out = 2.0 * co2 + h2o;
            assert_relative_eq!(oxygen_in, oxygen_out, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_limiting_reagent_from_raw() {
        let calc = create_calculator_by_name(
            "limiting_reagent",
            &raw(&[
                ("moles_a", "3.0"),
                ("moles_b", "5.0"),
                ("coefficient_a", "2"),
                ("coefficient_b", "1"),
            ]),
        )
        .unwrap();
        let result = calc.evaluate().unwrap();
        assert_relative_eq!(result.value_of("excess_moles").unwrap(), 3.5);
    }

    #[test]
    fn test_combustion_from_raw_defaults_to_one_mole() {
        let calc =
            create_calculator_by_name("combustion", &raw(&[("fuel_formula", "C3H8")])).unwrap();
        let result = calc.evaluate().unwrap();
        assert_relative_eq!(result.value_of("o2_required").unwrap(), 5.0);
    }

    #[test]
    fn test_propane_energy_from_raw() {
        let calc = create_calculator_by_name(
            "combustion",
            &raw(&[
                ("mode", "energy"),
                ("fuel_formula", "C3H8"),
                ("mass", "44.1"),
                ("enthalpy_of_combustion", "-2220"),
            ]),
        )
        .unwrap();
        let result = calc.evaluate().unwrap();
        let propane = parse_fuel_formula("C3H8").unwrap();
        assert_relative_eq!(
            result.value_of("energy_released").unwrap(),
            44.1 / molar_mass(&propane) * 2220.0,
            max_relative = 1e-9
        );
    }
}
