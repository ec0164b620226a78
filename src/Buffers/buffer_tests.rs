/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Buffers::capacity::BufferCapacityRequest;
    use crate::Buffers::design::BufferDesignRequest;
    use crate::Buffers::{buffer_capacity, theoretical_max_capacity};
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
    fn test_capacity_formula_symmetry_around_pka() {
        // beta(pKa + d) == beta(pKa - d)
        let up = buffer_capacity(0.1, 7.0, 7.5);
        let down = buffer_capacity(0.1, 7.0, 6.5);
        assert_relative_eq!(up, down, max_relative = 1e-9);
    }

    #[test]
    fn test_capacity_never_exceeds_theoretical_max() {
        for ph in [3.0, 5.0, 7.0, 7.21, 9.0, 12.0] {
            let beta = buffer_capacity(0.1, 7.21, ph);
            assert!(beta <= theoretical_max_capacity(0.1) + 1e-15);
        }
    }

    #[test]
    fn test_design_then_capacity_agree() {
        // the design evaluator reports the same beta the capacity evaluator computes
        let designed = BufferDesignRequest::new(7.4, 7.21, 0.1)
            .unwrap()
            .evaluate()
            .unwrap()
            .value_of("buffer_capacity")
            .unwrap();
        let direct = BufferCapacityRequest::new(0.1, 7.21, 7.4)
            .unwrap()
            .evaluate()
            .unwrap()
            .value_of("buffer_capacity")
            .unwrap();
        assert_relative_eq!(designed, direct, max_relative = 1e-12);
    }

    #[test]
    fn test_ph_shift_from_raw_with_optional_additions() {
        let calc = create_calculator_by_name(
            "buffer_ph_shift",
            &raw(&[
                ("weak_acid_concentration", "0.1"),
                ("conjugate_base_concentration", "0.1"),
                ("buffer_volume", "100"),
                ("pka", "4.76"),
                ("acid_added", "0.005"),
            ]),
        )
        .unwrap();
        let result = calc.evaluate().unwrap();
        assert!(result.value_of("final_ph").unwrap() < 4.76);
    }

    #[test]
    fn test_tris_buffer_capacity_example() {
        // Tris pKa 8.06 at 0.05 M, probed at its own pKa
        let calc = create_calculator_by_name(
            "buffer_capacity",
            &raw(&[
                ("buffer_concentration", "0.05"),
                ("pka", "8.06"),
                ("ph", "8.06"),
            ]),
        )
        .unwrap();
        let result = calc.evaluate().unwrap();
        assert_relative_eq!(
            result.value_of("buffer_capacity").unwrap(),
            theoretical_max_capacity(0.05),
            max_relative = 1e-12
        );
    }
}
