pub mod acid_base_examples;
pub mod buffer_examples;
pub mod partition_examples;
pub mod stoichiometry_examples;
