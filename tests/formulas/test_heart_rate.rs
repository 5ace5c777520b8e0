//! Heart-rate conversions, training bands and thresholds

use approx::assert_relative_eq;
use vo2calc::heart_rate::*;
use vo2calc::{HeartRateProfile, ZoneOptions};

#[test]
fn test_swain_reference() {
    assert_relative_eq!(swain(80.0), 66.2509670431688, epsilon = 1e-12);
}

#[test]
fn test_swain_round_trip() {
    let mut pct = 30.0;
    while pct <= 100.0 {
        assert_relative_eq!(swain(invert_swain(pct)), pct, epsilon = 1e-10);
        pct += 0.5;
    }
}

#[test]
fn test_training_bands() {
    let profile = HeartRateProfile::new(185.0, 65.0).unwrap();
    let options = ZoneOptions::default();

    let band = aerobic_training(&profile, &options);
    assert!(band.lower_pct_hrmax < band.upper_pct_hrmax);
    let anaerobic = anaerobic_training(&profile, options.anaerobic_pct);
    assert!(anaerobic > band.upper_pct_hrmax);

    let athlete = ZoneOptions::athlete();
    assert!(anaerobic_training(&profile, athlete.anaerobic_pct) > anaerobic);
    assert_eq!(heart_rate_reserve(&profile), 120.0);
}

#[test]
fn test_thresholds() {
    assert_relative_eq!(
        aerobic_threshold_from_lactate(185.0, 85.0, 30.0),
        68.78378378378378,
        epsilon = 1e-10
    );
    assert_eq!(anabolic_threshold_maffetone(30.0, TrainingLevel::Consistent), 155.0);
}

#[test]
fn test_zone_options_json_round_trip() {
    let options = ZoneOptions::athlete().with_lactate_offset(25.0);
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(ZoneOptions::from_json(&json).unwrap(), options);
}
