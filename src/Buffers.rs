/// Buffer capacity beta = 2.303*C*Ka*[H+]/(Ka+[H+])^2 and efficiency against the
/// theoretical maximum at pH = pKa.
pub mod capacity;
/// pH shift of a buffer after addition of strong acid or base, by
/// Henderson-Hasselbalch on the post-addition moles. Exceeding the buffer moles
/// is reported as a terminal "buffer destroyed" state, not an error.
pub mod ph_shift;
/// Buffer design: split a total concentration into [HA] and [A-] hitting a
/// target pH for a given pKa.
pub mod design;
mod buffer_tests;

/// beta at the optimum pH = pKa, where Ka = [H+]
pub fn theoretical_max_capacity(total_concentration: f64) -> f64 {
    2.303 * total_concentration / 4.0
}

/// the buffer capacity formula shared by the capacity and design evaluators
pub fn buffer_capacity(total_concentration: f64, pka: f64, ph: f64) -> f64 {
    let ka = 10f64.powf(-pka);
    let h = 10f64.powf(-ph);
    2.303 * total_concentration * ka * h / (ka + h).powi(2)
}
