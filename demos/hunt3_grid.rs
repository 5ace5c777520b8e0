//! HUNT3 VO2max predictions over treadmill speeds, inclines and heart rates

use anyhow::Result;
use vo2calc::vo2max::{classify, hunt3_grid};
use vo2calc::Gender;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let (hr_max, weight_kg, age) = (196.0, 63.0, 25.0);
    let speeds: Vec<f64> = (0..9).map(|i| 3.0 + 0.5 * i as f64).collect();
    let fractions = [0.65, 0.7, 0.75, 0.8, 0.85];
    let inclines = [0.0, 5.0, 10.0, 15.0, 20.0, 25.0];

    let grid = hunt3_grid(&inclines, &speeds, &fractions, hr_max, weight_kg, age);
    tracing::info!(points = grid.len(), "HUNT3 grid computed");

    for chunk in grid.chunks(speeds.len()) {
        let head = &chunk[0];
        print!("incline {:>4.0} %  HR {:>3.0} %:", head.incline_pct, head.pct_hrmax);
        for point in chunk {
            print!(" {:>5.1}", point.vo2max);
        }
        println!();
    }

    let best = grid
        .iter()
        .filter(|p| p.pct_hrmax <= 75.0)
        .map(|p| p.vo2max)
        .fold(f64::NEG_INFINITY, f64::max);
    println!(
        "Highest estimate at <= 75 % HRmax: {best:.1} ({})",
        classify(best, age, Gender::Male)?
    );
    Ok(())
}
