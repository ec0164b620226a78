/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::AcidBase::ph::{PhRequest, hydrogen_concentration_from_ph};
    use crate::AcidBase::pka::PkaRequest;
    use crate::calc_api::{CalculatorEnum, Evaluate, create_calculator_by_name};
    use crate::validator::CalcError;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_ph_round_trip_recovers_concentration() {
        // pH(pOH(...)) round trip within 1e-9 relative tolerance
        for h in [1.0e-5, 2.7e-3, 4.4e-11, 0.25] {
            let ph = PhRequest::new(h).unwrap().evaluate().unwrap().value_of("pH").unwrap();
            assert_relative_eq!(hydrogen_concentration_from_ph(ph), h, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_ph_from_raw_map() {
        let calc = create_calculator_by_name("ph", &raw(&[("hydrogen_concentration", "1e-5")]))
            .unwrap();
        let result = calc.evaluate().unwrap();
        assert_eq!(result.rendered()[0], ("pH".to_string(), "5.00".to_string()));
        assert_eq!(result.rendered()[1], ("pOH".to_string(), "9.00".to_string()));
    }

    #[test]
    fn test_ph_raw_map_rejects_garbage() {
        let errors =
            create_calculator_by_name("ph", &raw(&[("hydrogen_concentration", "lemon juice")]))
                .unwrap_err();
        assert!(matches!(errors[0], CalcError::ParseError { .. }));
    }

    #[test]
    fn test_pka_from_raw_prefers_ka_field() {
        let calc = create_calculator_by_name("pka", &raw(&[("ka", "1.8e-5")])).unwrap();
        assert!(matches!(
            calc,
            CalculatorEnum::Pka(PkaRequest::FromKa { .. })
        ));
        let calc = create_calculator_by_name("pka", &raw(&[("pka", "4.76")])).unwrap();
        let ka = calc.evaluate().unwrap().value_of("Ka").unwrap();
        assert_relative_eq!(ka, 10f64.powf(-4.76), max_relative = 1e-9);
    }

    #[test]
    fn test_hh_solve_for_selector() {
        let calc = create_calculator_by_name(
            "henderson_hasselbalch",
            &raw(&[
                ("solve_for", "pka"),
                ("ph", "4.76"),
                ("conjugate_base_concentration", "0.1"),
                ("weak_acid_concentration", "0.1"),
            ]),
        )
        .unwrap();
        let result = calc.evaluate().unwrap();
        assert_relative_eq!(result.value_of("pKa").unwrap(), 4.76, epsilon = 1e-12);
    }
}
