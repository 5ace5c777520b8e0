//! Training heart rate ranges from the heart rate reserve
//!
//! Aerobic training takes 50-75 % of the reserve added to the resting heart
//! rate; anaerobic threshold training 80-85 %. Results are expressed as a
//! percentage of HRmax.

use serde::{Deserialize, Serialize};

use crate::options::ZoneOptions;
use crate::subject::HeartRateProfile;

/// A training range as percentages of HRmax
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingBand {
    pub lower_pct_hrmax: f64,
    pub upper_pct_hrmax: f64,
}

impl TrainingBand {
    /// Band converted to beats per minute
    pub fn to_bpm(&self, profile: &HeartRateProfile) -> (f64, f64) {
        (
            profile.hr_at_percentage(self.lower_pct_hrmax),
            profile.hr_at_percentage(self.upper_pct_hrmax),
        )
    }

    pub fn contains(&self, pct_hrmax: f64) -> bool {
        pct_hrmax >= self.lower_pct_hrmax && pct_hrmax <= self.upper_pct_hrmax
    }
}

/// Heart rate reserve, HRmax - HRrest (bpm)
///
/// Robergs RA, Landwehr R. The surprising history of the "HRmax=220-age"
/// equation. J Exerc Physiol. 2002;5(2).
#[inline]
pub fn heart_rate_reserve(profile: &HeartRateProfile) -> f64 {
    profile.reserve()
}

/// %HRmax reached at `level_pct` of the heart rate reserve
#[inline]
fn reserve_level_pct_hrmax(profile: &HeartRateProfile, level_pct: f64) -> f64 {
    (heart_rate_reserve(profile) * (level_pct / 100.0) + profile.hr_rest()) / profile.hr_max()
        * 100.0
}

/// Aerobic training band
pub fn aerobic_training(profile: &HeartRateProfile, options: &ZoneOptions) -> TrainingBand {
    TrainingBand {
        lower_pct_hrmax: reserve_level_pct_hrmax(profile, options.aerobic_low_pct),
        upper_pct_hrmax: reserve_level_pct_hrmax(profile, options.aerobic_high_pct),
    }
}

/// Anaerobic threshold training heart rate as %HRmax
///
/// `anaerobic_level_pct` is 80 in general and up to 85 for top athletes
/// (see [`ZoneOptions::anaerobic_pct`]).
pub fn anaerobic_training(profile: &HeartRateProfile, anaerobic_level_pct: f64) -> f64 {
    reserve_level_pct_hrmax(profile, anaerobic_level_pct)
}
