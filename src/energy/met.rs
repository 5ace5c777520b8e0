//! MET (metabolic equivalent) conversions
//!
//! 1 MET = 3.5 mL O2/kg/min, roughly 1 kcal/kg/h.

use serde::{Deserialize, Serialize};

use crate::constants::{cycling, metabolic};
use crate::error::{ensure_positive, Vo2Error};
use crate::fit::polyfit;

/// kcal/min burned at `met` for a subject of `weight_kg`
///
/// kcal/min = MET x W x 3.5 / 200
#[inline]
pub fn cal_min_from_met(met: f64, weight_kg: f64) -> f64 {
    met * weight_kg * metabolic::ML_O2_PER_MET / metabolic::KCAL_MIN_DIVISOR
}

/// kcal/h at `met` given the basal metabolic rate (kcal/day)
///
/// kcal = BMR x METs / 24 x hours, with METs from the Compendium of
/// Physical Activities 2011.
#[inline]
pub fn calories_per_hr_from_met(bmr: f64, met: f64) -> f64 {
    bmr * met / metabolic::HOURS_PER_DAY
}

/// Cycling intensity at a given speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BicycleEstimate {
    pub mets: f64,
    /// Power per kg of body weight
    pub watts_per_kg: f64,
}

/// METs and W/kg when cycling at `speed_kmh`
///
/// First-order least-squares fits over the reference table:
///
/// | km/h | METs | W (70 kg) |
/// |------|------|-----------|
/// | 10 | 4.8 | 84 |
/// | 15 | 5.9 | 103 |
/// | 20 | 7.1 | 124 |
/// | 25 | 8.4 | 147 |
/// | 30 | 9.8 | 172 |
///
/// The tabulated power is divided by `weight_kg` before fitting.
pub fn met_bicycle(speed_kmh: f64, weight_kg: f64) -> Result<BicycleEstimate, Vo2Error> {
    let weight_kg = ensure_positive("weight_kg", weight_kg)?;

    let mets_fit = polyfit(&cycling::SPEED_KMH, &cycling::METS, 1)?;
    let watts_per_kg: Vec<f64> = cycling::WATTS.iter().map(|w| w / weight_kg).collect();
    let power_fit = polyfit(&cycling::SPEED_KMH, &watts_per_kg, 1)?;

    Ok(BicycleEstimate {
        mets: mets_fit.eval(speed_kmh),
        watts_per_kg: power_fit.eval(speed_kmh),
    })
}

/// Leg ergometry VO2 (mL/kg/min) at `power_w`
///
/// VO2 = 1.8 x work rate (kgm/min) / W + 7, with 1 W = 6 kgm/min, so
/// VO2 = 10.8 P / W + 7. Valid for 50-200 W at 50-60 rpm.
pub fn vo2_bicycle(power_w: f64, weight_kg: f64) -> Result<f64, Vo2Error> {
    let weight_kg = ensure_positive("weight_kg", weight_kg)?;
    Ok(cycling::O2_PER_WATT * (power_w / weight_kg) + cycling::UNLOADED_O2)
}

/// Treadmill walking VO2 (mL/kg/min)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkingVo2 {
    /// Including resting consumption
    pub gross: f64,
    /// Horizontal plus vertical components only
    pub net: f64,
}

/// ACSM walking equation
///
/// With `s` in m/min: horizontal = 0.1 s, vertical = 1.8 s x grade,
/// rest = 3.5.
pub fn vo2_walking(speed_kmh: f64, grade_pct: f64) -> WalkingVo2 {
    let s = speed_kmh * 1e3 / metabolic::MINUTES_PER_HOUR;
    let horizontal = 0.1 * s;
    let vertical = 1.8 * s * grade_pct / 100.0;
    let net = horizontal + vertical;
    WalkingVo2 {
        gross: net + metabolic::ML_O2_PER_MET,
        net,
    }
}

/// METs when walking at `speed_kmh` up `grade_pct`
pub fn met_walking(speed_kmh: f64, grade_pct: f64) -> f64 {
    vo2_walking(speed_kmh, grade_pct).gross / metabolic::ML_O2_PER_MET
}
