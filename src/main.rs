//! Convert the MyFoodData export to a SparkyFitness food import CSV
//!
//! Usage: cargo run --bin convert_myfooddata
//! (run from the directory holding the MyFoodData spreadsheet CSV)

use sparky_import::{build_info, convert_file, logging, ConvertConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init()?;
    build_info::print_startup_banner("MyFoodData -> SparkyFitness converter");

    let config = ConvertConfig::default();
    let stats = convert_file(&config)?;

    println!("\nDone!");
    println!("  Rows processed: {}", stats.processed);
    println!("  Foods written: {}", stats.written);
    println!("  Skipped (no name): {}", stats.skipped());
    println!("  Output file: {}", config.output.display());

    Ok(())
}
