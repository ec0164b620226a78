/// Parsing of C/H/O fuel formulas ("CH4", "C2H5OH", unicode subscripts allowed)
/// into atomic composition and molar mass.
pub mod formula_parser;
/// The limiting reagent of a two-reactant reaction from moles and stoichiometric
/// coefficients: the reactant with the smaller moles/coefficient ratio runs out
/// first.
pub mod limiting_reagent;
/// Combustion of C/H/O fuels: complete balancing, oxygen-starved (incomplete)
/// branching, and energy released from a combusted mass.
pub mod combustion;
mod stoichiometry_tests;
