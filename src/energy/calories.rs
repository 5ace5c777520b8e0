//! kcal/kg/min from %HRmax for a subject of known VO2max
//!
//! VO2work = %VO2max x VO2max is the uptake during the exercise. With
//! 1 MET = 3.5 mL/kg/min and 1 MET ~ 1 kcal/kg/h, VO2work / 3.5 / 60 is the
//! expenditure in kcal/kg/min.

use crate::constants::{metabolic, swain};
use crate::subject::HeartRateProfile;

/// kcal/kg/min using the heart rate reserve as the fraction of VO2max
pub fn calories_kg_hr_hrr(percentage_hr: f64, profile: &HeartRateProfile, vo2max: f64) -> f64 {
    let frac_vo2max = profile.fraction_of_reserve(profile.hr_at_percentage(percentage_hr));
    frac_vo2max * vo2max / metabolic::ML_O2_PER_MET / metabolic::MINUTES_PER_HOUR
}

/// kcal/kg/min using the Swain relation %HRmax = 0.6463 %VO2max + 37.182
pub fn calories_kg_hr(percentage_hr: f64, vo2max: f64) -> f64 {
    (percentage_hr - swain::INTERCEPT) / swain::SLOPE / 100.0 * vo2max
        / metabolic::KCAL_MIN_DIVISOR
}
