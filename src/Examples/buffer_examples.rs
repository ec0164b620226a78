use crate::Buffers::capacity::BufferCapacityRequest;
use crate::Buffers::design::BufferDesignRequest;
use crate::Buffers::ph_shift::BufferPhShiftRequest;
use crate::Buffers::theoretical_max_capacity;
use crate::calc_api::{Evaluate, ResultState};
use crate::preset_lib_api::PresetLibrary;
use approx::assert_relative_eq;

pub fn buffer_examples(task: usize) {
    match task {
        0 => {
            // acetate buffer poised at its pKa has maximal capacity
            let request = BufferCapacityRequest::new(0.1, 4.76, 4.76).unwrap();
            let result = request.evaluate().unwrap();
            result.pretty_print();
            assert_relative_eq!(
                result.value_of("buffer_capacity").unwrap(),
                theoretical_max_capacity(0.1),
                max_relative = 1e-12
            );
        }
        1 => {
            // design a 0.1 M phosphate buffer for pH 7.4
            let request = BufferDesignRequest::new(7.4, 7.21, 0.1).unwrap();
            let result = request.evaluate().unwrap();
            result.pretty_print();
            let acid = result.value_of("weak_acid_concentration").unwrap();
            let base = result.value_of("conjugate_base_concentration").unwrap();
            assert_relative_eq!(acid + base, 0.1, max_relative = 1e-12);
            assert_relative_eq!(base / acid, 10f64.powf(7.4 - 7.21), max_relative = 1e-9);
        }
        2 => {
            // challenge an equimolar acetate buffer with strong acid
            let request =
                BufferPhShiftRequest::new(0.1, 0.1, 100.0, 4.76, 0.002, 0.0).unwrap();
            let result = request.evaluate().unwrap();
            result.pretty_print();
            assert_relative_eq!(result.value_of("initial_ph").unwrap(), 4.76);
            assert!(result.value_of("final_ph").unwrap() < 4.76);
        }
        3 => {
            // overwhelm the same buffer: all conjugate base consumed
            let request =
                BufferPhShiftRequest::new(0.1, 0.1, 100.0, 4.76, 0.05, 0.0).unwrap();
            let result = request.evaluate().unwrap();
            result.pretty_print();
            assert!(matches!(result.state, ResultState::Exhausted { .. }));
        }
        4 => {
            // run every buffer preset from the example library
            let library = PresetLibrary::load().unwrap();
            for entry in library.presets_for("buffer_capacity") {
                println!("--- {}", entry.name);
                library
                    .instantiate("buffer_capacity", &entry.name)
                    .unwrap()
                    .evaluate()
                    .unwrap()
                    .pretty_print();
            }
        }
        _ => println!("no such task"),
    }
}
