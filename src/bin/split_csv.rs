//! Split the SparkyFitness food CSV into batch files
//! Usage: cargo run --bin split_csv

use sparky_import::{build_info, logging, split_file, SplitConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init()?;
    build_info::print_startup_banner("SparkyFitness batch splitter");

    let config = SplitConfig::default();
    let stats = split_file(&config)?;

    println!(
        "\nDone! Created {} batch files ({} foods) in {}/",
        stats.batch_count(),
        stats.total_rows(),
        config.output_dir.display()
    );
    println!("Import them one at a time in order.");

    Ok(())
}
