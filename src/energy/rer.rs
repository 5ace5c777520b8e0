//! Caloric equivalent of oxygen from the respiratory exchange ratio
//!
//! RER = VCO2 / VO2 measured from expired air. The respiratory quotient (RQ)
//! is the same ratio at the cell; the two can differ but are assumed equal
//! here. RQ spans 0.7 (mostly fat) to 1.0 (carbohydrate); RER can drop below
//! 0.7 or exceed 1.2 near maximal effort.
//!
//! kcal = VO2 (L/min) x caloric equivalent (kcal/L) x time (min)

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::constants::rer;
use crate::error::Vo2Error;
use crate::interpolation::LinearInterpolator;
use crate::subject::HeartRateProfile;

/// Energy released per litre of oxygen and its substrate split at an RQ
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaloricEquivalent {
    /// Energy expenditure in kcal/kg/min
    pub kcal_per_min_per_kg: f64,
    /// Caloric equivalent of oxygen, kcal/L
    pub kcal_per_litre: f64,
    /// Share of energy from carbohydrate (%)
    pub carbohydrate_pct: f64,
    /// Share of energy from fat (%)
    pub fat_pct: f64,
}

/// Non-protein RQ table with interpolation over the RQ axis
///
/// Serializes as its three columns and is rebuilt through [`RerTable::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RerColumns", into = "RerColumns")]
pub struct RerTable {
    kcal_per_litre: LinearInterpolator,
    carbohydrate_pct: LinearInterpolator,
}

#[derive(Serialize, Deserialize)]
struct RerColumns {
    rq: Vec<f64>,
    kcal_per_litre: Vec<f64>,
    carbohydrate_pct: Vec<f64>,
}

impl TryFrom<RerColumns> for RerTable {
    type Error = Vo2Error;

    fn try_from(columns: RerColumns) -> Result<Self, Self::Error> {
        RerTable::new(&columns.rq, &columns.kcal_per_litre, &columns.carbohydrate_pct)
    }
}

impl From<RerTable> for RerColumns {
    fn from(table: RerTable) -> Self {
        RerColumns {
            rq: table.rq().to_vec(),
            kcal_per_litre: table.kcal_per_litre.y().to_vec(),
            carbohydrate_pct: table.carbohydrate_pct.y().to_vec(),
        }
    }
}

impl RerTable {
    /// Build a table from RQ nodes, kcal/L and carbohydrate share (%)
    ///
    /// # Errors
    ///
    /// Returns [`Vo2Error::Interpolation`] when the columns differ in length,
    /// have fewer than two rows, or `rq` is not strictly increasing.
    pub fn new(rq: &[f64], kcal_per_litre: &[f64], carbohydrate_pct: &[f64]) -> Result<Self, Vo2Error> {
        Ok(Self {
            kcal_per_litre: LinearInterpolator::new(rq, kcal_per_litre)?,
            carbohydrate_pct: LinearInterpolator::new(rq, carbohydrate_pct)?,
        })
    }

    /// The 31-row table from RQ 0.707 to 1.00
    pub fn standard() -> &'static RerTable {
        static TABLE: OnceLock<RerTable> = OnceLock::new();
        TABLE.get_or_init(|| RerTable {
            kcal_per_litre: LinearInterpolator::from_sorted(&rer::RQ, &rer::KCAL_PER_LITRE),
            carbohydrate_pct: LinearInterpolator::from_sorted(&rer::RQ, &rer::CARBOHYDRATE_PCT),
        })
    }

    pub fn rq(&self) -> &[f64] {
        self.kcal_per_litre.x()
    }

    /// Caloric equivalent (kcal/L) at `rq`, extrapolated linearly outside the table
    pub fn kcal_per_litre(&self, rq: f64) -> f64 {
        self.kcal_per_litre.eval(rq)
    }

    /// Evaluate the table for an oxygen uptake `vo2` (mL/kg/min) at `rq`
    pub fn evaluate(&self, vo2: f64, rq: f64) -> CaloricEquivalent {
        if !self.kcal_per_litre.in_range(rq) {
            let (low, high) = self.kcal_per_litre.bounds();
            tracing::warn!(rq, low, high, "RQ outside table, extrapolating");
        }
        let kcal_per_litre = self.kcal_per_litre(rq);
        let carbohydrate_pct = self.carbohydrate_pct.eval(rq).clamp(0.0, 100.0);
        CaloricEquivalent {
            kcal_per_min_per_kg: vo2 * 1e-3 * kcal_per_litre,
            kcal_per_litre,
            carbohydrate_pct,
            fat_pct: 100.0 - carbohydrate_pct,
        }
    }
}

/// Energy expenditure (kcal/kg/min) of an oxygen uptake `vo2` (mL/kg/min) at `rq`
pub fn cal_vo2_rer(vo2: f64, rq: f64) -> CaloricEquivalent {
    RerTable::standard().evaluate(vo2, rq)
}

/// [`cal_vo2_rer`] over paired series
///
/// # Errors
///
/// Returns [`Vo2Error::LengthMismatch`] if the series differ in length.
pub fn cal_vo2_rer_series(vo2: &[f64], rq: &[f64]) -> Result<Vec<CaloricEquivalent>, Vo2Error> {
    if vo2.len() != rq.len() {
        return Err(Vo2Error::LengthMismatch {
            left: vo2.len(),
            right: rq.len(),
        });
    }
    let table = RerTable::standard();
    Ok(vo2
        .iter()
        .zip(rq)
        .map(|(&v, &q)| table.evaluate(v, q))
        .collect())
}

/// Energy expenditure (kcal/kg/min) at `percentage_hr` of HRmax
///
/// The working VO2 is VO2max scaled by the fraction of heart rate reserve in
/// use, and the RQ is approximated by %HRmax / 100.
pub fn cal_rer(percentage_hr: f64, profile: &HeartRateProfile, vo2max: f64) -> f64 {
    let frac_vo2max = profile.fraction_of_reserve(profile.hr_at_percentage(percentage_hr));
    let vo2_work = vo2max * frac_vo2max;
    cal_vo2_rer(vo2_work, percentage_hr / 100.0).kcal_per_min_per_kg
}
