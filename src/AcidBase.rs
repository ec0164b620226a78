/// pH and pOH from hydrogen ion concentration, with classification of the
/// solution on the acidity scale. Out-of-scale values (pH < 0 or > 14) are
/// physically real for concentrated solutions, so they are flagged, not rejected.
pub mod ph;
/// Ka <-> pKa conversions, pKa = -log10(Ka), with acid strength classification.
pub mod pka;
/// Henderson-Hasselbalch equation pH = pKa + log10([A-]/[HA]) solved for any of
/// its four quantities.
pub mod henderson_hasselbalch;
mod acid_base_tests;
