//! Interactive prompt flows for the calculators. Every flow collects raw strings
//! into a field map and hands it to `create_calculator_by_name`, so the CLI goes
//! through exactly the same validation as any other caller.

use super::cli_main::get_user_input;
use crate::calc_api::create_calculator_by_name;
use crate::calc_api::Evaluate;
use crate::preset_lib_api::PresetLibrary;
use log::error;
use std::collections::HashMap;
use std::io::{self, Write};

/// prompt for each (field, label) pair; empty answers are simply not inserted,
/// optional fields then fall back to their defaults
fn prompt_fields(prompts: &[(&str, &str)]) -> HashMap<String, String> {
    let mut raw = HashMap::new();
    for (field, label) in prompts {
        print!("\x1b[36m{}: \x1b[0m", label);
        let _ = io::stdout().flush();
        let answer = get_user_input().trim().to_string();
        if !answer.is_empty() {
            raw.insert(field.to_string(), answer);
        }
    }
    raw
}

fn run_calculator(name: &str, raw: &HashMap<String, String>) {
    match create_calculator_by_name(name, raw) {
        Ok(calc) => match calc.evaluate() {
            Ok(result) => result.pretty_print(),
            Err(e) => println!("\x1b[31m{}\x1b[0m", e),
        },
        Err(errors) => {
            for e in errors {
                println!("\x1b[31m{}\x1b[0m", e);
            }
        }
    }
}

pub fn acid_base_menu() {
    loop {
        println!("\n=== Acid-Base and Dilution ===");
        println!("1. pH from [H+]");
        println!("2. pKa <-> Ka");
        println!("3. Henderson-Hasselbalch");
        println!("4. Dilution");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        match get_user_input().trim() {
            "1" => {
                let raw = prompt_fields(&[(
                    "hydrogen_concentration",
                    "H+ concentration, mol/L (e.g. 1.0e-5)",
                )]);
                run_calculator("ph", &raw);
            }
            "2" => {
                let raw = prompt_fields(&[
                    ("ka", "Ka (leave empty to enter pKa instead)"),
                    ("pka", "pKa (leave empty if Ka was given)"),
                ]);
                run_calculator("pka", &raw);
            }
            "3" => {
                let raw = prompt_fields(&[
                    ("solve_for", "solve for [ph/pka/base/acid] (default ph)"),
                    ("ph", "pH (if known)"),
                    ("pka", "pKa (if known)"),
                    ("conjugate_base_concentration", "[A-], mol/L (if known)"),
                    ("weak_acid_concentration", "[HA], mol/L (if known)"),
                ]);
                run_calculator("henderson_hasselbalch", &raw);
            }
            "4" => {
                let raw = prompt_fields(&[
                    ("mode", "solve for [final_volume/final_concentration] (default final_volume)"),
                    ("initial_concentration", "M1, mol/L"),
                    ("initial_volume", "V1, mL"),
                    ("final_concentration", "M2, mol/L (if known)"),
                    ("final_volume", "V2, mL (if known)"),
                ]);
                run_calculator("dilution", &raw);
            }
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

pub fn buffer_menu() {
    loop {
        println!("\n=== Buffers ===");
        println!("1. Buffer capacity");
        println!("2. pH shift after adding acid/base");
        println!("3. Buffer design for a target pH");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        match get_user_input().trim() {
            "1" => {
                let raw = prompt_fields(&[
                    ("buffer_concentration", "total buffer concentration, mol/L"),
                    ("pka", "pKa of the buffer pair"),
                    ("ph", "pH of the buffer"),
                ]);
                run_calculator("buffer_capacity", &raw);
            }
            "2" => {
                let raw = prompt_fields(&[
                    ("weak_acid_concentration", "[HA], mol/L"),
                    ("conjugate_base_concentration", "[A-], mol/L"),
                    ("buffer_volume", "buffer volume, mL"),
                    ("pka", "pKa of the buffer pair"),
                    ("acid_added", "strong acid added, mol (default 0)"),
                    ("base_added", "strong base added, mol (default 0)"),
                ]);
                run_calculator("buffer_ph_shift", &raw);
            }
            "3" => {
                let raw = prompt_fields(&[
                    ("target_ph", "target pH"),
                    ("pka", "pKa of the buffer pair"),
                    ("total_concentration", "total buffer concentration, mol/L"),
                ]);
                run_calculator("buffer_design", &raw);
            }
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

pub fn stoichiometry_menu() {
    loop {
        println!("\n=== Stoichiometry and Thermochemistry ===");
        println!("1. Limiting reagent");
        println!("2. Combustion");
        println!("3. Hess's law");
        println!("4. Reaction entropy");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        match get_user_input().trim() {
            "1" => {
                let raw = prompt_fields(&[
                    ("moles_a", "moles of reagent A"),
                    ("moles_b", "moles of reagent B"),
                    ("coefficient_a", "stoichiometric coefficient of A"),
                    ("coefficient_b", "stoichiometric coefficient of B"),
                ]);
                run_calculator("limiting_reagent", &raw);
            }
            "2" => {
                let raw = prompt_fields(&[
                    ("mode", "mode [complete/incomplete/energy] (default complete)"),
                    ("fuel_formula", "fuel formula (e.g. C3H8, C2H5OH)"),
                    ("moles", "moles of fuel (complete mode, default 1)"),
                    ("oxygen_available", "O2 available, mol (incomplete mode)"),
                    ("mass", "fuel mass, g (energy mode)"),
                    ("enthalpy_of_combustion", "enthalpy of combustion, kJ/mol (energy mode)"),
                ]);
                run_calculator("combustion", &raw);
            }
            "3" => {
                let raw = hess_prompt();
                run_calculator("hess_law", &raw);
            }
            "4" => {
                let raw = entropy_prompt();
                run_calculator("entropy", &raw);
            }
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

/// steps are entered one by one, an empty enthalpy ends the list
fn hess_prompt() -> HashMap<String, String> {
    let mut raw = HashMap::new();
    let mut i = 1;
    loop {
        print!("\x1b[36mstep {} enthalpy, kJ/mol (empty to finish): \x1b[0m", i);
        let _ = io::stdout().flush();
        let delta_h = get_user_input().trim().to_string();
        if delta_h.is_empty() {
            break;
        }
        raw.insert(format!("delta_h_{}", i), delta_h);
        print!("\x1b[36mstep {} coefficient (default 1, negative reverses): \x1b[0m", i);
        let _ = io::stdout().flush();
        let coefficient = get_user_input().trim().to_string();
        if !coefficient.is_empty() {
            raw.insert(format!("coefficient_{}", i), coefficient);
        }
        i += 1;
    }
    raw
}

fn entropy_prompt() -> HashMap<String, String> {
    let mut raw = HashMap::new();
    for prefix in ["reactant", "product"] {
        let mut i = 1;
        loop {
            print!(
                "\x1b[36m{} {} molar entropy, J/(mol*K) (empty to finish): \x1b[0m",
                prefix, i
            );
            let _ = io::stdout().flush();
            let entropy = get_user_input().trim().to_string();
            if entropy.is_empty() {
                break;
            }
            raw.insert(format!("{}_{}_entropy", prefix, i), entropy);
            print!("\x1b[36m{} {} coefficient (default 1): \x1b[0m", prefix, i);
            let _ = io::stdout().flush();
            let coefficient = get_user_input().trim().to_string();
            if !coefficient.is_empty() {
                raw.insert(format!("{}_{}_coefficient", prefix, i), coefficient);
            }
            i += 1;
        }
    }
    raw
}

pub fn partition_menu() {
    loop {
        println!("\n=== Partitioning and Extraction ===");
        println!("1. logP from phase concentrations");
        println!("2. logD at a given pH");
        println!("3. Liquid-liquid extraction");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        match get_user_input().trim() {
            "1" => {
                let raw = prompt_fields(&[
                    ("organic_concentration", "concentration in the organic phase, mol/L"),
                    ("aqueous_concentration", "concentration in the aqueous phase, mol/L"),
                ]);
                run_calculator("log_p", &raw);
            }
            "2" => {
                let raw = prompt_fields(&[
                    ("compound_type", "compound type [acid/base/neutral] (default acid)"),
                    ("log_p", "logP"),
                    ("ph", "pH (acid/base only)"),
                    ("pka", "pKa (acid/base only)"),
                ]);
                run_calculator("distribution", &raw);
            }
            "3" => {
                let raw = prompt_fields(&[
                    ("partition_coefficient", "partition coefficient P"),
                    ("organic_volume", "organic volume per pass, mL"),
                    ("aqueous_volume", "aqueous volume, mL"),
                    ("extractions", "number of passes (default 1)"),
                ]);
                run_calculator("extraction", &raw);
            }
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

pub fn spectroscopy_menu() {
    loop {
        println!("\n=== NMR Chemical Shifts ===");
        println!("1. 1H shift from environment");
        println!("2. 13C shift from carbon type");
        println!("3. Additive shift prediction");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        match get_user_input().trim() {
            "1" => {
                let raw = prompt_fields(&[
                    ("environment", "proton environment (alkyl, benzylic, aromatic...)"),
                    ("neighboring_protons", "neighboring protons (optional)"),
                    ("aromatic_ring", "aromatic ring nearby? [true/false]"),
                    ("hydrogen_bonding", "hydrogen bonding? [true/false]"),
                ]);
                run_calculator("nmr_shift", &raw);
            }
            "2" => {
                let mut raw = prompt_fields(&[
                    ("carbon_type", "carbon type (methyl, methylene, carbonyl...)"),
                    ("alpha_substituents", "alpha substituents (default 0)"),
                    ("beta_substituents", "beta substituents (default 0)"),
                ]);
                raw.insert("mode".to_string(), "carbon13".to_string());
                run_calculator("nmr_shift", &raw);
            }
            "3" => {
                let mut raw = prompt_fields(&[
                    ("base_shift", "base shift, ppm"),
                    ("electron_withdrawing_groups", "electron withdrawing groups (default 0)"),
                    ("aromatic_ring", "aromatic ring nearby? [true/false]"),
                    ("hydrogen_bonding", "hydrogen bonding? [true/false]"),
                ]);
                raw.insert("mode".to_string(), "prediction".to_string());
                run_calculator("nmr_shift", &raw);
            }
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

pub fn preset_menu() {
    let library = match PresetLibrary::load() {
        Ok(library) => library,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };
    loop {
        println!("\n=== Worked Presets ===");
        let calculators = library.calculators_with_presets();
        for (i, id) in calculators.iter().enumerate() {
            println!("{}. {}", i + 1, id);
        }
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        let choice = get_user_input();
        let choice = choice.trim();
        if choice == "0" {
            break;
        }
        let Some(calculator) = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|n| calculators.get(n).copied())
        else {
            println!("Invalid choice. Please try again.");
            continue;
        };
        library.pretty_print_presets(calculator);
        print!("Preset name (empty to run all): ");
        let _ = io::stdout().flush();
        let name = get_user_input().trim().to_string();
        let selected: Vec<String> = if name.is_empty() {
            library
                .presets_for(calculator)
                .iter()
                .map(|e| e.name.clone())
                .collect()
        } else {
            vec![name]
        };
        for preset in selected {
            println!("--- {}", preset);
            match library.instantiate(calculator, &preset) {
                Ok(calc) => match calc.evaluate() {
                    Ok(result) => result.pretty_print(),
                    Err(e) => println!("\x1b[31m{}\x1b[0m", e),
                },
                Err(errors) => {
                    for e in errors {
                        println!("\x1b[31m{}\x1b[0m", e);
                    }
                }
            }
        }
    }
}
