//! Energy expenditure from heart rate (MyZone belt)
//!
//! Keytel LR et al. Prediction of energy expenditure from heart rate
//! monitoring during submaximal exercise. J Sports Sci. 2005;23(3):289-297.
//!
//! The regressions stay close to linear between 95 and 150 bpm. Above
//! 150 bpm with a high HRmax they can overestimate expenditure by 10-15 %.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::constants::metabolic::KJ_TO_KCAL;
use crate::subject::Gender;

/// Energy expenditure in kcal/min
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyExpenditure {
    /// Regression including VO2max
    pub with_vo2max: f64,
    /// Regression from age, weight, sex and heart rate only
    pub without_vo2max: f64,
}

#[inline]
fn with_vo2max_kj(g: f64, age: f64, weight_kg: f64, vo2max: f64, hr: f64) -> f64 {
    -59.3954
        + g * (-36.3781 + 0.271 * age + 0.394 * weight_kg + 0.404 * vo2max + 0.634 * hr)
        + (1.0 - g) * (0.274 * age + 0.103 * weight_kg + 0.380 * vo2max + 0.450 * hr)
}

#[inline]
fn without_vo2max_kj(g: f64, age: f64, weight_kg: f64, hr: f64) -> f64 {
    g * (-55.0969 + 0.6309 * hr + 0.1988 * weight_kg + 0.2017 * age)
        + (1.0 - g) * (-20.4022 + 0.4472 * hr - 0.1263 * weight_kg + 0.074 * age)
}

/// Energy expenditure (kcal/min) at heart rate `hr`
///
/// # Arguments
///
/// * `gender` - Sex of the subject
/// * `age` - Age in years
/// * `weight_kg` - Body weight in kg
/// * `vo2max` - VO2max in mL/kg/min
/// * `hr` - Heart rate in bpm
pub fn energy_expenditure_kg(
    gender: Gender,
    age: f64,
    weight_kg: f64,
    vo2max: f64,
    hr: f64,
) -> EnergyExpenditure {
    let g = gender.indicator();
    EnergyExpenditure {
        with_vo2max: with_vo2max_kj(g, age, weight_kg, vo2max, hr) * KJ_TO_KCAL,
        without_vo2max: without_vo2max_kj(g, age, weight_kg, hr) * KJ_TO_KCAL,
    }
}

/// Energy expenditure over a heart rate series
///
/// Returns `(with_vo2max, without_vo2max)`, both in kcal/min.
pub fn energy_expenditure_kg_series(
    gender: Gender,
    age: f64,
    weight_kg: f64,
    vo2max: f64,
    heart_rate: &Array1<f64>,
) -> (Array1<f64>, Array1<f64>) {
    let g = gender.indicator();
    let with_vo2max = heart_rate.mapv(|hr| with_vo2max_kj(g, age, weight_kg, vo2max, hr) * KJ_TO_KCAL);
    let without_vo2max = heart_rate.mapv(|hr| without_vo2max_kj(g, age, weight_kg, hr) * KJ_TO_KCAL);
    (with_vo2max, without_vo2max)
}
