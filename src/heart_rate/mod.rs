//! Heart-rate derived quantities
//!
//! - [`swain`]: %HRmax <-> %VO2max conversion
//! - [`zones`]: heart rate reserve and training bands (Karvonen)
//! - [`thresholds`]: aerobic and anabolic threshold estimates

pub mod swain;
pub mod thresholds;
pub mod zones;

pub use swain::{invert_swain, swain};
pub use thresholds::{aerobic_threshold_from_lactate, anabolic_threshold_maffetone, TrainingLevel};
pub use zones::{aerobic_training, anaerobic_training, heart_rate_reserve, TrainingBand};
