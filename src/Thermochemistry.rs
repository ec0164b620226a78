/// Hess's law: the enthalpy of an overall reaction is the signed, scaled sum of
/// its step enthalpies. A negative step coefficient means the step is reversed.
pub mod hess_law;
/// Standard reaction entropy change dS = sum(S products) - sum(S reactants),
/// with the spontaneity reading of the sign.
pub mod entropy;
