//! VO2max norms by age and sex
//!
//! Thresholds are the lower bounds of each category above "very poor", from
//! the verywellfit norm tables for non-athletes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Vo2Error;
use crate::subject::Gender;

/// Fitness category of a VO2max value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessCategory {
    VeryPoor,
    Poor,
    Fair,
    Good,
    Excellent,
    Superior,
}

impl fmt::Display for FitnessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FitnessCategory::VeryPoor => "Very Poor",
            FitnessCategory::Poor => "Poor",
            FitnessCategory::Fair => "Fair",
            FitnessCategory::Good => "Good",
            FitnessCategory::Excellent => "Excellent",
            FitnessCategory::Superior => "Superior",
        };
        f.write_str(name)
    }
}

const CATEGORIES: [FitnessCategory; 5] = [
    FitnessCategory::Poor,
    FitnessCategory::Fair,
    FitnessCategory::Good,
    FitnessCategory::Excellent,
    FitnessCategory::Superior,
];

// Age bands: 13-19, 20-29, 30-39, 40-49, 50-59, 60+
const MEN: [[f64; 5]; 6] = [
    [35.0, 38.4, 45.2, 51.0, 56.0],
    [33.0, 36.5, 42.5, 46.5, 52.5],
    [31.5, 35.5, 41.0, 45.0, 49.5],
    [30.2, 33.6, 39.0, 43.8, 48.1],
    [26.1, 31.0, 35.8, 41.0, 45.4],
    [20.5, 26.1, 32.3, 36.5, 44.3],
];

const WOMEN: [[f64; 5]; 6] = [
    [25.0, 31.0, 35.0, 39.0, 42.0],
    [23.6, 29.0, 33.0, 37.0, 41.1],
    [22.8, 27.0, 31.5, 35.7, 40.1],
    [21.0, 24.5, 29.0, 32.9, 37.0],
    [20.2, 22.8, 27.0, 31.5, 35.8],
    [17.5, 20.2, 24.5, 30.3, 31.5],
];

fn age_band(age: f64) -> Result<usize, Vo2Error> {
    if !age.is_finite() || age < 13.0 {
        return Err(Vo2Error::invalid("age", age));
    }
    let band = if age < 20.0 {
        0
    } else {
        // 20-29 -> 1, ..., 60+ -> 5
        ((age / 10.0).floor() as usize - 1).min(5)
    };
    Ok(band)
}

/// Category of `vo2max` (mL/kg/min) for a subject of the given age and sex
///
/// # Errors
///
/// Returns [`Vo2Error::InvalidParameter`] for a non-finite `vo2max` and for
/// ages below 13, where no norms are tabulated.
pub fn classify(vo2max: f64, age: f64, gender: Gender) -> Result<FitnessCategory, Vo2Error> {
    if !vo2max.is_finite() {
        return Err(Vo2Error::invalid("vo2max", vo2max));
    }
    let band = age_band(age)?;
    let thresholds = match gender {
        Gender::Male => &MEN[band],
        Gender::Female => &WOMEN[band],
    };

    let category = thresholds
        .iter()
        .zip(CATEGORIES)
        .rev()
        .find(|(&lower, _)| vo2max >= lower)
        .map_or(FitnessCategory::VeryPoor, |(_, category)| category);
    Ok(category)
}
