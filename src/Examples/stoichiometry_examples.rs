use crate::Stoichiometry::combustion::CombustionRequest;
use crate::Stoichiometry::formula_parser::{molar_mass, parse_fuel_formula};
use crate::Stoichiometry::limiting_reagent::LimitingReagentRequest;
use crate::Thermochemistry::entropy::{EntropyRequest, SpeciesEntropy};
use crate::Thermochemistry::hess_law::{HessLawRequest, HessStep};
use crate::calc_api::Evaluate;
use approx::assert_relative_eq;

pub fn stoichiometry_examples(task: usize) {
    match task {
        0 => {
            // 2H2 + O2 -> 2H2O with 3 mol H2 and 5 mol O2: H2 runs out first
            let request = LimitingReagentRequest::new(3.0, 5.0, 2.0, 1.0).unwrap();
            let result = request.evaluate().unwrap();
            result.pretty_print();
            assert_relative_eq!(result.value_of("excess_moles").unwrap(), 3.5);
        }
        1 => {
            // burn a 44.1 g propane charge
            let request = CombustionRequest::energy("C3H8", 44.1, -2220.0).unwrap();
            let result = request.evaluate().unwrap();
            result.pretty_print();
            let propane = parse_fuel_formula("C3H8").unwrap();
            println!("molar mass of propane: {:.2} g/mol", molar_mass(&propane));
            assert_relative_eq!(
                result.value_of("energy_released").unwrap(),
                2220.0,
                epsilon = 5.0
            );
        }
        2 => {
            // oxygen-starved methane flame
            let request = CombustionRequest::incomplete("CH4", 1.2).unwrap();
            let result = request.evaluate().unwrap();
            result.pretty_print();
        }
        3 => {
            // Hess cycle for C + O2 -> CO2 through carbon monoxide
            let request = HessLawRequest::new(vec![
                HessStep {
                    equation: "C(s) + 1/2 O2 -> CO".to_string(),
                    delta_h: -110.5,
                    coefficient: 1.0,
                },
                HessStep {
                    equation: "CO + 1/2 O2 -> CO2".to_string(),
                    delta_h: -283.0,
                    coefficient: 1.0,
                },
            ])
            .unwrap();
            let result = request.evaluate().unwrap();
            result.pretty_print();
            assert_relative_eq!(result.value_of("total_enthalpy").unwrap(), -393.5);
        }
        4 => {
            // entropy change of the Haber process
            let species = |name: &str, coefficient: f64, entropy: f64| SpeciesEntropy {
                name: name.to_string(),
                coefficient,
                entropy,
            };
            let request = EntropyRequest::new(
                vec![species("N2", 1.0, 191.6), species("H2", 3.0, 130.7)],
                vec![species("NH3", 2.0, 192.8)],
            )
            .unwrap();
            let result = request.evaluate().unwrap();
            result.pretty_print();
            assert!(result.value_of("delta_s").unwrap() < 0.0);
        }
        _ => println!("no such task"),
    }
}
