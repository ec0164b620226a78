/// Partition coefficient logP = log10([organic]/[aqueous]) with lipophilicity
/// classification and drug-likeness notes.
pub mod log_p;
/// pH-dependent distribution coefficient logD for ionizable acids and bases,
/// with the fraction ionized at the given pH.
pub mod distribution;
/// Liquid-liquid extraction efficiency, single pass and repeated passes of the
/// same total solvent volume.
pub mod extraction;
mod partition_tests;
