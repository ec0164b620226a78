use crate::Partition::distribution::DistributionRequest;
use crate::Partition::extraction::ExtractionRequest;
use crate::Partition::log_p::LogPRequest;
use crate::Spectroscopy::nmr_shift::NmrShiftRequest;
use crate::calc_api::Evaluate;
use crate::preset_lib_api::PresetLibrary;
use approx::assert_relative_eq;

pub fn partition_examples(task: usize) {
    match task {
        0 => {
            // caffeine distribution between dichloromethane and water
            let request = LogPRequest::new(85.0, 15.0).unwrap();
            let result = request.evaluate().unwrap();
            result.pretty_print();
            assert_relative_eq!(
                result.value_of("log_p").unwrap(),
                (85.0f64 / 15.0).log10(),
                max_relative = 1e-9
            );
        }
        1 => {
            // ibuprofen loses its lipophilicity at physiological pH
            let request = DistributionRequest::Acid {
                log_p: 3.97,
                ph: 7.4,
                pka: 4.9,
            };
            let result = request.evaluate().unwrap();
            result.pretty_print();
            assert!(result.value_of("log_d").unwrap() < 2.0);
        }
        2 => {
            // one 100 mL pass vs two 50 mL passes, same solvent budget
            let one = ExtractionRequest::new(4.0, 100.0, 100.0, 1).unwrap();
            let two = ExtractionRequest::new(4.0, 50.0, 100.0, 2).unwrap();
            println!("one pass of 100 mL:");
            one.evaluate().unwrap().pretty_print();
            println!("two passes of 50 mL:");
            two.evaluate().unwrap().pretty_print();
        }
        3 => {
            // ethanol CH3 protons: shift and splitting
            let request = NmrShiftRequest::Proton {
                environment: "alkyl".to_string(),
                neighboring_protons: Some(2),
                aromatic_ring: false,
                hydrogen_bonding: false,
            };
            let result = request.evaluate().unwrap();
            result.pretty_print();
            assert_relative_eq!(result.value_of("chemical_shift").unwrap(), 0.9);
        }
        4 => {
            // every drug preset of the distribution calculator
            let library = PresetLibrary::load().unwrap();
            for entry in library.presets_for("distribution") {
                println!("--- {}", entry.name);
                library
                    .instantiate("distribution", &entry.name)
                    .unwrap()
                    .evaluate()
                    .unwrap()
                    .pretty_print();
            }
        }
        _ => println!("no such task"),
    }
}
