use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::constants::zones::MAFFETONE_BASE;
use crate::error::Vo2Error;

/// Training history categories of the Maffetone "180 formula"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingLevel {
    /// No exercise for over a year, recovering from major illness, or age 65+
    Recovering,
    /// Exercising up to two years, at least four times a week
    Regular,
    /// Exercising more than two years, at least four times a week
    Consistent,
    /// Competitive athlete
    Competitive,
}

impl TrainingLevel {
    /// Adjustment to `180 - age`, in bpm
    pub fn adjustment(&self) -> f64 {
        match self {
            TrainingLevel::Recovering => -10.0,
            TrainingLevel::Regular => 0.0,
            TrainingLevel::Consistent => 5.0,
            TrainingLevel::Competitive => 10.0,
        }
    }

    /// Level from its 0-3 index
    pub fn from_index(index: usize) -> Result<Self, Vo2Error> {
        match index {
            0 => Ok(TrainingLevel::Recovering),
            1 => Ok(TrainingLevel::Regular),
            2 => Ok(TrainingLevel::Consistent),
            3 => Ok(TrainingLevel::Competitive),
            other => Err(Vo2Error::invalid("training_level", other)),
        }
    }
}

impl FromStr for TrainingLevel {
    type Err = Vo2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recovering" => Ok(TrainingLevel::Recovering),
            "regular" => Ok(TrainingLevel::Regular),
            "consistent" => Ok(TrainingLevel::Consistent),
            "competitive" => Ok(TrainingLevel::Competitive),
            other => Err(Vo2Error::invalid("training_level", other)),
        }
    }
}

/// Aerobic threshold as %HRmax from the lactate threshold
///
/// (LT% x 1e-2 x HRmax - offset) / HRmax x 100, the aerobic threshold
/// sitting `offset_bpm` (25-35) below the lactate threshold heart rate.
pub fn aerobic_threshold_from_lactate(
    hr_max: f64,
    lactate_threshold_pct: f64,
    offset_bpm: f64,
) -> f64 {
    (lactate_threshold_pct * 1e-2 * hr_max - offset_bpm) / hr_max * 100.0
}

/// Maximum aerobic heart rate (bpm) just below the anabolic threshold
///
/// Phil Maffetone's method: 180 - age, adjusted by training history.
pub fn anabolic_threshold_maffetone(age: f64, level: TrainingLevel) -> f64 {
    MAFFETONE_BASE - age + level.adjustment()
}
