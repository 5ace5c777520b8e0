//! Configuration of the tunable constants
//!
//! Options are plain serializable structs with defaults taken from the
//! published guidelines, a few presets, and builder-style setters.
//!
//! ```rust
//! use vo2calc::options::ZoneOptions;
//!
//! let options = ZoneOptions::athlete().with_lactate_offset(25.0);
//! assert_eq!(options.anaerobic_pct, 85.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::zones;
use crate::energy::BmrFormula;
use crate::error::CalcError;

/// Heart-rate training zone configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoneOptions {
    /// Lower bound of aerobic training, % of heart rate reserve (default: 50)
    pub aerobic_low_pct: f64,

    /// Upper bound of aerobic training, % of heart rate reserve (default: 75)
    pub aerobic_high_pct: f64,

    /// Anaerobic threshold training level, % of heart rate reserve (default: 80)
    pub anaerobic_pct: f64,

    /// Lactate threshold, % of HRmax (default: 85)
    pub lactate_threshold_pct: f64,

    /// Beats between the lactate and the aerobic threshold (default: 30, range 25-35)
    pub lactate_offset_bpm: f64,
}

impl Default for ZoneOptions {
    fn default() -> Self {
        Self {
            aerobic_low_pct: zones::AEROBIC_LOW_PCT,
            aerobic_high_pct: zones::AEROBIC_HIGH_PCT,
            anaerobic_pct: zones::ANAEROBIC_PCT,
            lactate_threshold_pct: zones::LACTATE_THRESHOLD_PCT,
            lactate_offset_bpm: zones::LACTATE_TO_AEROBIC_BPM,
        }
    }
}

impl ZoneOptions {
    /// Top athletes train their anaerobic threshold up to 85 % HRR and reach
    /// a lactate threshold near 90 % HRmax
    pub fn athlete() -> Self {
        Self {
            anaerobic_pct: zones::ANAEROBIC_ATHLETE_PCT,
            lactate_threshold_pct: 90.0,
            ..Default::default()
        }
    }

    pub fn with_aerobic_band(mut self, low_pct: f64, high_pct: f64) -> Self {
        self.aerobic_low_pct = low_pct;
        self.aerobic_high_pct = high_pct;
        self
    }

    pub fn with_anaerobic_pct(mut self, pct: f64) -> Self {
        self.anaerobic_pct = pct;
        self
    }

    pub fn with_lactate_threshold_pct(mut self, pct: f64) -> Self {
        self.lactate_threshold_pct = pct;
        self
    }

    pub fn with_lactate_offset(mut self, bpm: f64) -> Self {
        self.lactate_offset_bpm = bpm;
        self
    }

    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, CalcError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Energy estimation configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyOptions {
    /// BMR equation (default: Mifflin-St Jeor)
    pub bmr_formula: BmrFormula,

    /// Use the MyZone regression including VO2max in comparison curves
    pub myzone_with_vo2max: bool,
}

impl Default for EnergyOptions {
    fn default() -> Self {
        Self {
            bmr_formula: BmrFormula::MifflinStJeor,
            myzone_with_vo2max: false,
        }
    }
}

impl EnergyOptions {
    pub fn with_bmr_formula(mut self, formula: BmrFormula) -> Self {
        self.bmr_formula = formula;
        self
    }

    pub fn with_myzone_vo2max(mut self, enabled: bool) -> Self {
        self.myzone_with_vo2max = enabled;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, CalcError> {
        Ok(serde_json::from_str(json)?)
    }
}
