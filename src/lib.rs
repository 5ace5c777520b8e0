//! Physiological formulas for exercise testing
//!
//! Estimators of VO2max, basal metabolic rate, caloric expenditure and
//! heart-rate training zones, each a closed-form expression from the
//! fitness-science literature.
//!
//! ```rust
//! use vo2calc::prelude::*;
//!
//! let profile = HeartRateProfile::new(185.0, 65.0)?;
//! let vo2max = vo2max::from_mets(8.0, 140.0, &profile)?;
//! assert!((vo2max - 44.8).abs() < 1e-10);
//!
//! let category = vo2max::classify(vo2max, 48.0, Gender::Male)?;
//! assert_eq!(category, FitnessCategory::Excellent);
//! # Ok::<(), vo2calc::Vo2Error>(())
//! ```

pub mod constants;
pub mod curves;
pub mod energy;
pub mod error;
pub mod fit;
pub mod heart_rate;
pub mod interpolation;
pub mod options;
pub mod report;
pub mod subject;
pub mod vo2max;

pub use error::{CalcError, Vo2Error};
pub use options::{EnergyOptions, ZoneOptions};
pub use subject::{Gender, HeartRateProfile};

pub mod prelude {
    pub use crate::energy::{
        bmr, cal_min_from_met, cal_rer, cal_vo2_rer, calories_kg_hr, calories_kg_hr_hrr,
        energy_expenditure_kg, BmrFormula, CaloricEquivalent, EnergyExpenditure,
    };
    pub use crate::heart_rate::{
        aerobic_training, anaerobic_training, heart_rate_reserve, invert_swain, swain,
        TrainingBand, TrainingLevel,
    };
    pub use crate::options::{EnergyOptions, ZoneOptions};
    pub use crate::subject::{Gender, HeartRateProfile};
    pub use crate::vo2max::{self, FitnessCategory};
    pub use crate::{CalcError, Vo2Error};
}
