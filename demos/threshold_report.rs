//! Training thresholds and calorie curves for one subject
//!
//! Usage: cargo run --example threshold_report -- [output.csv] [level]

use anyhow::Result;
use std::path::PathBuf;
use vo2calc::curves::threshold_summary;
use vo2calc::energy::{bmr, calories_per_hr_from_met};
use vo2calc::heart_rate::{aerobic_training, anaerobic_training, TrainingLevel};
use vo2calc::report::write_csv_file;
use vo2calc::vo2max::classify;
use vo2calc::{EnergyOptions, Gender, HeartRateProfile, ZoneOptions};

fn init_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("thresholds.csv"));
    let level: TrainingLevel = args.next().as_deref().unwrap_or("regular").parse()?;

    let (age, weight_kg, height_cm, body_fat_pct) = (48.0, 63.0, 169.0, 19.0);
    let gender = Gender::Male;
    let profile = HeartRateProfile::new(185.0, 65.0)?;
    let zones = ZoneOptions::default();
    let energy = EnergyOptions::default();

    let summary = threshold_summary(&profile, age, level, &zones)?;
    let category = classify(summary.vo2max, age, gender)?;
    println!("VO2max (HRmax/HRrest): {:.1} mL/kg/min ({category})", summary.vo2max);
    println!("Maffetone aerobic limit: {:.1} %HRmax", summary.maffetone_pct_hrmax);
    println!(
        "Aerobic threshold: {:.1} %HRmax (lactate threshold {:.0} %)",
        summary.aerobic_threshold_pct_hrmax, summary.lactate_threshold_pct
    );

    let band = aerobic_training(&profile, &zones);
    let (low_bpm, high_bpm) = band.to_bpm(&profile);
    println!(
        "Aerobic band: {:.1}-{:.1} %HRmax ({low_bpm:.0}-{high_bpm:.0} bpm)",
        band.lower_pct_hrmax, band.upper_pct_hrmax
    );
    println!(
        "Anaerobic threshold training: {:.1} %HRmax",
        anaerobic_training(&profile, zones.anaerobic_pct)
    );

    let daily = bmr(weight_kg, height_cm, age, body_fat_pct, gender, energy.bmr_formula);
    println!(
        "BMR ({}): {daily:.0} kcal/day, {:.0} kcal/h at 8 METs",
        energy.bmr_formula.name(),
        calories_per_hr_from_met(daily, 8.0)
    );

    write_csv_file(&output, &summary.curves)?;
    tracing::info!(path = %output.display(), "calorie curves written");
    Ok(())
}
