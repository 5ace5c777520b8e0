//! VO2max estimators
//!
//! - Field tests (Rockport, Brigham Young)
//! - HUNT3 treadmill model
//! - Heart-rate based estimators and their domain
//! - Norm classification

use approx::assert_relative_eq;
use vo2calc::prelude::*;

fn profile() -> HeartRateProfile {
    HeartRateProfile::new(185.0, 65.0).unwrap()
}

#[test]
fn test_field_tests_reference() {
    let rockport = vo2max::rockport(48.0, 61.0, 20.0, 0.75 * 184.0, Gender::Male);
    assert_relative_eq!(rockport, 31.602172727272723, epsilon = 1e-10);

    let jog = vo2max::brigham_young(61.0, 10.8, 0.9 * 184.0, Gender::Male);
    assert_relative_eq!(jog, 51.40632, epsilon = 1e-10);
}

#[test]
fn test_hunt3_reference() {
    let vo2 = vo2max::hunt3_submaximal(0.0, 7.5, 63.0, 0.8 * 182.0, 47.0);
    assert_relative_eq!(vo2, 48.67798460994554, epsilon = 1e-10);
}

#[test]
fn test_hunt3_grid_matches_scalar() {
    let speeds = [3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 6.0, 6.5, 7.0];
    let fractions = [0.65, 0.7, 0.75, 0.8, 0.85];
    let inclines = [0.0, 5.0, 10.0, 15.0, 20.0, 25.0];
    let grid = vo2max::hunt3_grid(&inclines, &speeds, &fractions, 196.0, 63.0, 25.0);

    assert_eq!(grid.len(), inclines.len() * speeds.len() * fractions.len());
    for point in &grid {
        let hr = point.pct_hrmax / 100.0 * 196.0;
        let expected =
            vo2max::hunt3_submaximal(point.incline_pct, point.speed_kmh, 63.0, hr, 25.0);
        assert_relative_eq!(point.vo2max, expected, epsilon = 1e-9);
    }
}

#[test]
fn test_hr_estimators() {
    assert_relative_eq!(vo2max::from_hr_ratio(&profile()), 42.69230769230769, epsilon = 1e-12);
    assert_relative_eq!(
        vo2max::from_mets(8.0, 140.0, &profile()).unwrap(),
        44.8,
        epsilon = 1e-10
    );
}

#[test]
fn test_out_of_range_heart_rate_is_an_error() {
    for hr in [40.0, 64.9, 185.1, 220.0] {
        let result = vo2max::from_vo2_hr(28.0, hr, &profile());
        assert!(
            matches!(result, Err(Vo2Error::HeartRateOutOfRange { .. })),
            "hr = {hr} should be rejected"
        );
    }
    assert!(vo2max::from_vo2_hr(28.0, 185.0, &profile()).is_ok());
}

#[test]
fn test_classification_of_estimates() {
    let vo2 = vo2max::from_mets(8.0, 140.0, &profile()).unwrap();
    assert_eq!(
        vo2max::classify(vo2, 48.0, Gender::Male).unwrap(),
        FitnessCategory::Excellent
    );
    assert_eq!(
        vo2max::classify(vo2, 25.0, Gender::Female).unwrap(),
        FitnessCategory::Superior
    );
    assert!(vo2max::classify(vo2, 10.0, Gender::Male).is_err());
}
