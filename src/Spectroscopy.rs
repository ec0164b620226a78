/// Heuristic 1H and 13C NMR chemical shift estimation from tabulated base
/// values for common environments plus additive substituent corrections.
pub mod nmr_shift;
mod spectroscopy_tests;
