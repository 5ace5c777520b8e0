//! Energy expenditure
//!
//! - [`bmr`]: basal metabolic rate (kcal/day)
//! - [`met`]: MET conversions for cycling and walking
//! - [`myzone`]: heart-rate regressions used by the MyZone belt
//! - [`rer`]: caloric equivalent of oxygen from the respiratory exchange ratio
//! - [`calories`]: kcal/kg/min from %HRmax and VO2max

pub mod bmr;
pub mod calories;
pub mod met;
pub mod myzone;
pub mod rer;

pub use bmr::{bmr, BmrFormula};
pub use calories::{calories_kg_hr, calories_kg_hr_hrr};
pub use met::{
    cal_min_from_met, calories_per_hr_from_met, met_bicycle, met_walking, vo2_bicycle,
    vo2_walking, BicycleEstimate, WalkingVo2,
};
pub use myzone::{energy_expenditure_kg, energy_expenditure_kg_series, EnergyExpenditure};
pub use rer::{cal_rer, cal_vo2_rer, cal_vo2_rer_series, CaloricEquivalent, RerTable};
