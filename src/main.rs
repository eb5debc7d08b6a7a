//! Interest Ledger CLI
//!
//! Converts a tabular file of dated entries into a monthly interest
//! accrual ledger under a JSON configuration.

use chrono::Local;
use clap::Parser;
use interest_ledger::{
    accrual::{AccrualConfig, AccrualEngine},
    config::Config,
    entry::load_entries,
    rates::load_schedule,
    terminal, writer,
};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Monthly compound interest accrual over dated entries")]
struct Args {
    /// Path of the JSON configuration file
    #[arg(default_value = "config.json")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = Config::load(&args.config)?;

    println!("Interest Ledger v0.1.0");
    println!("======================\n");

    // Resolve the file paths the configuration left blank
    let input_path = match &config.input_file {
        Some(path) => path.clone(),
        None => terminal::input("Input file")?,
    };
    let output_path = match &config.output_file {
        Some(path) => path.clone(),
        None => terminal::input("Output file")?,
    };

    println!("Configuration:");
    println!("  Annual rate: {:.2}%", config.annual_interest_rate);
    println!("  Input file: {}", input_path);
    println!("  Output file: {}", output_path);
    match &config.interest_rates_file {
        Some(path) => println!("  Rate schedule: {}", path),
        None => println!("  Rate schedule: (none, flat rate)"),
    }
    println!("  Overwrite existing: {}", config.overwrite_existing_file);
    println!();

    let entries = load_entries(&input_path)?;
    info!("loaded {} entries from {}", entries.len(), input_path);

    let schedule = match &config.interest_rates_file {
        Some(path) => {
            let loaded = load_schedule(path)?;
            match &loaded {
                Some(schedule) => info!("loaded {} rate entries from {}", schedule.len(), path),
                None => {
                    warn!("rate schedule {} not found, using flat rate", path);
                    println!(
                        "Rate schedule {} not found, using the flat {:.2}% rate.",
                        path, config.annual_interest_rate
                    );
                }
            }
            loaded
        }
        None => None,
    };

    let engine = AccrualEngine::new(
        schedule,
        AccrualConfig {
            annual_rate: config.annual_rate_fraction(),
            valuation_date: Local::now().date_naive(),
        },
    );

    let mut rows = Vec::new();
    let mut total_accrued = 0.0;
    for entry in &entries {
        let entry_rows = engine.accrue(entry);
        if let Some(last) = entry_rows.last() {
            total_accrued += last.amount - entry.amount;
        }
        rows.extend(entry_rows);
    }

    let written = writer::write_ledger(&rows, &output_path, config.overwrite_existing_file)?;

    println!("Ledger written to: {}", written.display());
    println!("\nSummary:");
    println!("  Entries: {}", entries.len());
    println!("  Accrual rows: {}", rows.len());
    println!("  Total accrued interest: {:.2}", total_accrued);

    Ok(())
}
