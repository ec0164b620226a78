/// Dilution of stock solutions by M1*V1 = M2*V2, solved for final volume or
/// final concentration. Simple dilution can never concentrate a solution, so
/// M2 > M1 (or V2 < V1) is rejected as physically impossible.
pub mod dilution;
