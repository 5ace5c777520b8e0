use ndarray::Array1;
use serde::{Deserialize, Serialize};

use super::table::CurveTable;
use crate::energy::{cal_rer, calories_kg_hr, calories_kg_hr_hrr, energy_expenditure_kg_series};
use crate::error::{ensure_positive, Vo2Error};
use crate::heart_rate::{
    aerobic_threshold_from_lactate, anabolic_threshold_maffetone, TrainingLevel,
};
use crate::options::{EnergyOptions, ZoneOptions};
use crate::subject::{Gender, HeartRateProfile};
use crate::vo2max::from_hr_ratio;

const X_LABEL: &str = "pct_hrmax";

/// 50 % to 100 % of HRmax in steps of 1 %
pub fn percentage_hr_grid() -> Array1<f64> {
    Array1::range(50.0, 101.0, 1.0)
}

/// Compare the Swain and heart-rate-reserve estimators with MyZone
///
/// For every VO2max value the table holds, in kcal/kg/min:
/// - `swain_{v}`: [`calories_kg_hr`]
/// - `hrr_{v}`: [`calories_kg_hr_hrr`]
/// - `myzone_{v}` (with VO2max) or a single `myzone` column (without),
///   the MyZone expenditure divided by weight
/// - `myzone_over_swain_{v}` and `myzone_over_hrr_{v}`: ratios of MyZone to
///   the two estimators
///
/// `options.myzone_with_vo2max` selects the MyZone regression.
///
/// # Errors
///
/// Returns [`Vo2Error::InvalidParameter`] for a non-positive weight and
/// [`Vo2Error::DuplicateCurve`] when a VO2max value is repeated.
pub fn myzone_comparison(
    vo2max_values: &[f64],
    profile: &HeartRateProfile,
    age: f64,
    weight_kg: f64,
    gender: Gender,
    options: &EnergyOptions,
) -> Result<CurveTable, Vo2Error> {
    let weight_kg = ensure_positive("weight_kg", weight_kg)?;
    let grid = percentage_hr_grid();
    let heart_rate = grid.mapv(|p| profile.hr_at_percentage(p));
    tracing::debug!(
        n_vo2max = vo2max_values.len(),
        %gender,
        weight_kg,
        with_vo2max = options.myzone_with_vo2max,
        "building MyZone comparison"
    );

    let mut table = CurveTable::new(X_LABEL, grid.clone());
    let mut ratios = Vec::with_capacity(vo2max_values.len() * 2);

    for &v in vo2max_values {
        let swain_curve = grid.mapv(|p| calories_kg_hr(p, v));
        let hrr_curve = grid.mapv(|p| calories_kg_hr_hrr(p, profile, v));
        let (with_vo2max, without_vo2max) =
            energy_expenditure_kg_series(gender, age, weight_kg, v, &heart_rate);

        let myzone = if options.myzone_with_vo2max {
            let per_kg = with_vo2max / weight_kg;
            table.push(format!("myzone_{v}"), per_kg.clone())?;
            per_kg
        } else {
            without_vo2max / weight_kg
        };

        ratios.push((format!("myzone_over_swain_{v}"), &myzone / &swain_curve));
        ratios.push((format!("myzone_over_hrr_{v}"), &myzone / &hrr_curve));
        table.push(format!("swain_{v}"), swain_curve)?;
        table.push(format!("hrr_{v}"), hrr_curve)?;
    }

    if !options.myzone_with_vo2max {
        let (_, without_vo2max) =
            energy_expenditure_kg_series(gender, age, weight_kg, 0.0, &heart_rate);
        table.push("myzone", without_vo2max / weight_kg)?;
    }
    for (name, values) in ratios {
        table.push(name, values)?;
    }

    Ok(table)
}

/// Energy expenditure (kcal/min) per body weight at a fixed VO2max
///
/// Columns per weight `w`: `mets_{w}kg` (heart-rate-reserve estimator times
/// weight), `myzone_vo2max_{w}kg` and `myzone_{w}kg`. A repeated weight is
/// rejected with [`Vo2Error::DuplicateCurve`].
pub fn energy_expenditure_by_weight(
    weights_kg: &[f64],
    age: f64,
    vo2max: f64,
    profile: &HeartRateProfile,
    gender: Gender,
) -> Result<CurveTable, Vo2Error> {
    let grid = percentage_hr_grid();
    let heart_rate = grid.mapv(|p| profile.hr_at_percentage(p));
    let mut table = CurveTable::new(X_LABEL, grid.clone());

    for &kg in weights_kg {
        let kg = ensure_positive("weight_kg", kg)?;
        let mets = grid.mapv(|p| calories_kg_hr_hrr(p, profile, vo2max) * kg);
        let (with_vo2max, without_vo2max) =
            energy_expenditure_kg_series(gender, age, kg, vo2max, &heart_rate);

        table.push(format!("mets_{kg}kg"), mets)?;
        table.push(format!("myzone_vo2max_{kg}kg"), with_vo2max)?;
        table.push(format!("myzone_{kg}kg"), without_vo2max)?;
    }

    Ok(table)
}

/// Threshold estimates and calorie curves for a heart rate profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdSummary {
    /// VO2max from HRmax / HRrest
    pub vo2max: f64,
    /// Maffetone maximum aerobic heart rate as %HRmax
    pub maffetone_pct_hrmax: f64,
    /// Aerobic threshold from the lactate threshold, %HRmax
    pub aerobic_threshold_pct_hrmax: f64,
    /// Lactate threshold, %HRmax
    pub lactate_threshold_pct: f64,
    /// `hrr`, `swain` and `rer` calorie curves (kcal/kg/min)
    pub curves: CurveTable,
}

/// Summarise thresholds and compare calorie estimators for one subject
pub fn threshold_summary(
    profile: &HeartRateProfile,
    age: f64,
    level: TrainingLevel,
    options: &ZoneOptions,
) -> Result<ThresholdSummary, Vo2Error> {
    let vo2max = from_hr_ratio(profile);
    let grid = percentage_hr_grid();

    let maffetone_pct_hrmax = anabolic_threshold_maffetone(age, level) / profile.hr_max() * 100.0;
    let aerobic_threshold_pct_hrmax = aerobic_threshold_from_lactate(
        profile.hr_max(),
        options.lactate_threshold_pct,
        options.lactate_offset_bpm,
    );

    let mut curves = CurveTable::new(X_LABEL, grid.clone());
    curves.push("hrr", grid.mapv(|p| calories_kg_hr_hrr(p, profile, vo2max)))?;
    curves.push("swain", grid.mapv(|p| calories_kg_hr(p, vo2max)))?;
    curves.push("rer", grid.mapv(|p| cal_rer(p, profile, vo2max)))?;

    tracing::debug!(
        vo2max,
        maffetone_pct_hrmax,
        aerobic_threshold_pct_hrmax,
        "threshold summary"
    );

    Ok(ThresholdSummary {
        vo2max,
        maffetone_pct_hrmax,
        aerobic_threshold_pct_hrmax,
        lactate_threshold_pct: options.lactate_threshold_pct,
        curves,
    })
}
