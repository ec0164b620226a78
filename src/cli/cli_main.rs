use super::cli_calculators::{
    acid_base_menu, buffer_menu, partition_menu, preset_menu, spectroscopy_menu,
    stoichiometry_menu,
};
use crate::Examples::acid_base_examples::acid_base_examples;
use crate::Examples::buffer_examples::buffer_examples;
use crate::Examples::partition_examples::partition_examples;
use crate::Examples::stoichiometry_examples::stoichiometry_examples;
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => acid_base_menu(),
            "2" => buffer_menu(),
            "3" => stoichiometry_menu(),
            "4" => partition_menu(),
            "5" => spectroscopy_menu(),
            "6" => preset_menu(),
            "7" => examples_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - "Enter your choice:" prompt

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to ChemCalc: acid-base equilibria, buffers, stoichiometry,\n
    thermochemistry, partitioning and NMR shift estimation \n \x1b[0m"
    );
    println!("\x1b[33m1. Acid-Base and Dilution\x1b[0m");
    println!("\x1b[33m2. Buffers\x1b[0m");
    println!("\x1b[33m3. Stoichiometry and Thermochemistry\x1b[0m");
    println!("\x1b[33m4. Partitioning and Extraction\x1b[0m");
    println!("\x1b[33m5. NMR Chemical Shifts\x1b[0m");
    println!("\x1b[33m6. Worked Presets\x1b[0m");
    println!("\x1b[33m7. Examples\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    let _ = io::stdout().flush();
}

fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. Acid-Base Examples");
        println!("2. Buffer Examples");
        println!("3. Stoichiometry Examples");
        println!("4. Partition and NMR Examples");
        println!("0. Back to main menu");
        print!("Enter your choice: ");
        let _ = io::stdout().flush();

        let choice = get_user_input();
        match choice.trim() {
            "1" => acid_base_examples(2),
            "2" => buffer_examples(1),
            "3" => stoichiometry_examples(3),
            "4" => partition_examples(4),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}

pub fn get_user_input() -> String {
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");
    input
}
