#[allow(non_snake_case)]
pub mod AcidBase;
#[allow(non_snake_case)]
pub mod Buffers;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Partition;
#[allow(non_snake_case)]
pub mod Solutions;
#[allow(non_snake_case)]
pub mod Spectroscopy;
#[allow(non_snake_case)]
pub mod Stoichiometry;
#[allow(non_snake_case)]
pub mod Thermochemistry;
pub mod calc_api;
pub mod cli;
pub mod interpreter;
pub mod preset_lib_api;
pub mod validator;
