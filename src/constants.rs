//! Physiological constants used by the estimators
//!
//! Values are taken from the published equations they belong to and grouped
//! by the formula family that uses them.

/// Oxygen uptake and energy conversions
pub mod metabolic {
    /// Oxygen cost of one MET (mL O2/kg/min)
    pub const ML_O2_PER_MET: f64 = 3.5;

    /// kJ to kcal conversion used by the MyZone regressions
    pub const KJ_TO_KCAL: f64 = 0.239006;

    /// Divisor turning MET x kg x 3.5 into kcal/min
    pub const KCAL_MIN_DIVISOR: f64 = 200.0;

    /// Hours per day, for BMR-based hourly expenditure
    pub const HOURS_PER_DAY: f64 = 24.0;

    /// Minutes per hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
}

/// Swain et al. (1994) %HRmax = 0.6463 %VO2max + 37.182
///
/// Reference: Swain DP, Abernathy KS, Smith CS, Lee SJ, Bunn SA. Target heart
/// rates for the development of cardiorespiratory fitness. Med Sci Sports
/// Exerc. 1994;26(1):112-116.
pub mod swain {
    pub const SLOPE: f64 = 0.6463;
    pub const INTERCEPT: f64 = 37.182;
}

/// Respiratory quotient table for the non-protein caloric equivalent of oxygen
///
/// Columns: RQ, kcal per litre of O2, % energy from carbohydrate.
/// Fat contribution is `100 - carbohydrate`.
pub mod rer {
    pub const RQ: [f64; 31] = [
        0.707, 0.71, 0.72, 0.73, 0.74, 0.75, 0.76, 0.77, 0.78, 0.79, 0.80, 0.81, 0.82, 0.83,
        0.84, 0.85, 0.86, 0.87, 0.88, 0.89, 0.90, 0.91, 0.92, 0.93, 0.94, 0.95, 0.96, 0.97,
        0.98, 0.99, 1.00,
    ];

    pub const KCAL_PER_LITRE: [f64; 31] = [
        4.686, 4.690, 4.702, 4.714, 4.727, 4.739, 4.751, 4.764, 4.776, 4.788, 4.801, 4.813,
        4.825, 4.838, 4.850, 4.862, 4.875, 4.887, 4.899, 4.911, 4.924, 4.936, 4.948, 4.961,
        4.973, 4.985, 4.998, 5.010, 5.022, 5.035, 5.047,
    ];

    pub const CARBOHYDRATE_PCT: [f64; 31] = [
        0.0, 1.1, 4.76, 8.40, 12.0, 15.6, 19.2, 22.3, 26.3, 29.9, 33.4, 36.9, 40.3, 43.8, 47.2,
        50.7, 54.1, 57.5, 60.8, 64.2, 67.5, 70.8, 74.1, 77.4, 80.7, 84.0, 87.2, 90.4, 93.6,
        96.8, 100.0,
    ];
}

/// Cycling reference table (Compendium of Physical Activities)
///
/// Power column is for a 70 kg rider.
pub mod cycling {
    pub const SPEED_KMH: [f64; 5] = [10.0, 15.0, 20.0, 25.0, 30.0];
    pub const METS: [f64; 5] = [4.8, 5.9, 7.1, 8.4, 9.8];
    pub const WATTS: [f64; 5] = [84.0, 103.0, 124.0, 147.0, 172.0];

    /// Oxygen cost of 1 W on a leg ergometer (1.8 mL/kgm x 6 kgm/min per W)
    pub const O2_PER_WATT: f64 = 10.8;

    /// Unloaded cycling plus resting oxygen consumption (mL/kg/min)
    pub const UNLOADED_O2: f64 = 7.0;
}

/// Training heart rate defaults
pub mod zones {
    /// Lower bound of aerobic training, % of heart rate reserve
    pub const AEROBIC_LOW_PCT: f64 = 50.0;

    /// Upper bound of aerobic training, % of heart rate reserve
    pub const AEROBIC_HIGH_PCT: f64 = 75.0;

    /// Anaerobic threshold training, % of heart rate reserve
    pub const ANAEROBIC_PCT: f64 = 80.0;

    /// Anaerobic threshold training for top athletes
    pub const ANAEROBIC_ATHLETE_PCT: f64 = 85.0;

    /// Gap between lactate threshold and aerobic threshold (bpm, 25-35)
    pub const LACTATE_TO_AEROBIC_BPM: f64 = 30.0;

    /// Lactate threshold as % of HRmax
    pub const LACTATE_THRESHOLD_PCT: f64 = 85.0;

    /// Maffetone base number
    pub const MAFFETONE_BASE: f64 = 180.0;

    /// Crude VO2max multiplier of HRmax / HRrest
    pub const HR_RATIO_FACTOR: f64 = 15.0;
}
