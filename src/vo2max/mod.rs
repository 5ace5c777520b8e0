//! VO2max estimators (mL O2/kg/min)
//!
//! | Estimator | Inputs |
//! |-----------|--------|
//! | [`rockport`] | 1-mile walk time, HR at finish, age, weight, sex |
//! | [`brigham_young`] | 1-mile jog time, HR at finish, weight, sex |
//! | [`hunt3_submaximal`] | treadmill incline and speed, HR, weight, age |
//! | [`from_hr_ratio`] | HRmax / HRrest |
//! | [`from_vo2_hr`] | exercise VO2 at a known HR |
//! | [`from_mets`] | exercise METs at a known HR |
//!
//! [`classify`] places an estimate against population norms by age and sex.

mod heart_rate;
mod norms;
mod treadmill;

pub use field_tests::{brigham_young, rockport};
pub use heart_rate::{from_hr_ratio, from_mets, from_vo2_hr};
pub use norms::{classify, FitnessCategory};
pub use treadmill::{hunt3_grid, hunt3_submaximal, SubmaximalPoint};
