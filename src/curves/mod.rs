//! Curves over a %HRmax grid
//!
//! Tables comparing the calorie estimators across exercise intensities, for
//! inspection or export with [`crate::report`].

mod comparison;
mod table;

pub use comparison::{
    energy_expenditure_by_weight, myzone_comparison, percentage_hr_grid, threshold_summary,
    ThresholdSummary,
};
pub use table::{Curve, CurveTable};
