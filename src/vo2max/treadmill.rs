//! HUNT3 submaximal treadmill model
//!
//! Loe H, Nes BM, Wisløff U. Predicting VO2peak from Submaximal- and Peak
//! Exercise Models: The HUNT 3 Fitness Study, Norway. PLoS ONE 2016;
//! 11(1): e0144873.

use serde::{Deserialize, Serialize};

/// VO2peak predicted from a submaximal treadmill stage
///
/// VO2max = 35.25 + 1.276 incl + 6.402 speed - 0.196 W
///          - 27.65 HR / (215.336 - 0.73 age)
///
/// `215.336 - 0.73 age` is the age-predicted HRmax of the HUNT cohort.
///
/// # Arguments
///
/// * `incline_pct` - Treadmill inclination (%)
/// * `speed_kmh` - Treadmill speed (km/h)
/// * `weight_kg` - Body weight (kg)
/// * `hr` - Steady-state heart rate at the stage (bpm)
/// * `age` - Age in years
pub fn hunt3_submaximal(incline_pct: f64, speed_kmh: f64, weight_kg: f64, hr: f64, age: f64) -> f64 {
    35.25 + (1.276 * incline_pct) + (6.402 * speed_kmh)
        - (0.196 * weight_kg)
        - (27.65 * hr / (215.336 - 0.73 * age))
}

/// One cell of a HUNT3 prediction grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubmaximalPoint {
    pub incline_pct: f64,
    pub speed_kmh: f64,
    pub pct_hrmax: f64,
    pub vo2max: f64,
}

/// Predictions over every incline x HR fraction x speed combination
///
/// `hr_fractions` are fractions of `hr_max` (0.65 for 65 %). Points are
/// ordered by incline, then HR fraction, then speed.
pub fn hunt3_grid(
    inclines_pct: &[f64],
    speeds_kmh: &[f64],
    hr_fractions: &[f64],
    hr_max: f64,
    weight_kg: f64,
    age: f64,
) -> Vec<SubmaximalPoint> {
    let mut points = Vec::with_capacity(inclines_pct.len() * speeds_kmh.len() * hr_fractions.len());
    for &incline_pct in inclines_pct {
        for &fraction in hr_fractions {
            let hr = fraction * hr_max;
            for &speed_kmh in speeds_kmh {
                points.push(SubmaximalPoint {
                    incline_pct,
                    speed_kmh,
                    pct_hrmax: fraction * 100.0,
                    vo2max: hunt3_submaximal(incline_pct, speed_kmh, weight_kg, hr, age),
                });
            }
        }
    }
    points
}
