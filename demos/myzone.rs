//! MyZone energy expenditure against the Swain and heart-rate-reserve estimators
//!
//! Usage: cargo run --example myzone -- [options.json]

use anyhow::{Context, Result};
use vo2calc::curves::{energy_expenditure_by_weight, myzone_comparison};
use vo2calc::report::write_csv_file;
use vo2calc::{EnergyOptions, Gender, HeartRateProfile};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading options from {path}"))?;
            EnergyOptions::from_json(&json)?
        }
        None => EnergyOptions::default(),
    };

    let profile = HeartRateProfile::new(185.0, 60.0)?;
    let vo2max = [30.0, 40.0, 50.0, 60.0, 70.0];
    let table = myzone_comparison(&vo2max, &profile, 48.0, 61.5, Gender::Male, &options)?;

    for pct in [60usize, 70, 80, 90] {
        let row = pct - 50;
        print!("{pct:>3} %HRmax:");
        for curve in table.curves().iter().filter(|c| c.name.starts_with("myzone_over_swain")) {
            print!(" {}={:.2}", curve.name, curve.values[row]);
        }
        println!();
    }

    let dir = std::env::temp_dir();
    write_csv_file(dir.join("myzone_comparison.csv"), &table)?;

    let by_weight = energy_expenditure_by_weight(
        &[50.0, 60.0, 70.0, 80.0],
        48.0,
        45.0,
        &HeartRateProfile::new(184.0, 55.0)?,
        Gender::Male,
    )?;
    write_csv_file(dir.join("energy_by_weight.csv"), &by_weight)?;
    tracing::info!(dir = %dir.display(), "tables written");
    Ok(())
}
