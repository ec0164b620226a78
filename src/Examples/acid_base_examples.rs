use crate::AcidBase::henderson_hasselbalch::HendersonHasselbalchRequest;
use crate::AcidBase::ph::PhRequest;
use crate::AcidBase::pka::PkaRequest;
use crate::calc_api::Evaluate;
use approx::assert_relative_eq;

pub fn acid_base_examples(task: usize) {
    match task {
        0 => {
            // pH of 1.0e-5 M strong acid solution
            let request = PhRequest::new(1.0e-5).unwrap();
            let result = request.evaluate().unwrap();
            result.pretty_print();
            assert_relative_eq!(result.value_of("pH").unwrap(), 5.0);
            assert_relative_eq!(result.value_of("pOH").unwrap(), 9.0);
        }
        1 => {
            // acetic acid: Ka 1.8e-5 -> pKa 4.74
            let request = PkaRequest::from_ka(1.8e-5).unwrap();
            let result = request.evaluate().unwrap();
            result.pretty_print();
            assert_relative_eq!(result.value_of("pKa").unwrap(), 4.745, epsilon = 1e-3);
        }
        2 => {
            // acetate buffer with twice as much base as acid
            let request =
                HendersonHasselbalchRequest::solve_ph(4.76, 0.2, 0.1).unwrap();
            let result = request.evaluate().unwrap();
            result.pretty_print();
            assert_relative_eq!(
                result.value_of("pH").unwrap(),
                4.76 + 2f64.log10(),
                epsilon = 1e-6
            );
        }
        3 => {
            // invert the buffer equation: which ratio gives pH 5.0 at pKa 4.76?
            let request = HendersonHasselbalchRequest::solve_base(5.0, 4.76, 0.1).unwrap();
            let result = request.evaluate().unwrap();
            result.pretty_print();
            let base = result.value_of("conjugate_base_concentration").unwrap();
            assert_relative_eq!(base / 0.1, 10f64.powf(5.0 - 4.76), epsilon = 1e-6);
        }
        _ => println!("no such task"),
    }
}
