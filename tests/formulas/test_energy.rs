//! Energy expenditure estimators
//!
//! - BMR equations
//! - MET conversions (cycling, walking)
//! - MyZone regressions
//! - RER caloric equivalent

use approx::assert_relative_eq;
use vo2calc::energy::*;
use vo2calc::{EnergyOptions, Gender, HeartRateProfile, Vo2Error};

#[test]
fn test_bmr_reference() {
    let kcal = bmr(63.0, 169.0, 51.0, 19.0, Gender::Male, BmrFormula::MifflinStJeor);
    assert_relative_eq!(kcal, 1436.25, epsilon = 1e-10);
}

#[test]
fn test_bmr_from_options() {
    let options = EnergyOptions::from_json(r#"{"bmr_formula": "katch_mcardle"}"#).unwrap();
    let kcal = bmr(63.0, 169.0, 51.0, 19.0, Gender::Male, options.bmr_formula);
    assert_relative_eq!(kcal, 1472.248, epsilon = 1e-9);
}

#[test]
fn test_daily_to_hourly() {
    let daily = bmr(63.0, 169.0, 51.0, 19.0, Gender::Male, BmrFormula::MifflinStJeor);
    assert_relative_eq!(calories_per_hr_from_met(daily, 1.0) * 24.0, daily, epsilon = 1e-9);
    assert_relative_eq!(calories_per_hr_from_met(1500.0, 8.0), 500.0);
}

#[test]
fn test_met_reference() {
    assert_relative_eq!(cal_min_from_met(8.0, 65.0), 9.1, epsilon = 1e-12);
    assert_relative_eq!(vo2_bicycle(100.0, 63.0).unwrap(), 24.142857142857142, epsilon = 1e-12);

    let cycling = met_bicycle(25.0, 50.0).unwrap();
    assert_relative_eq!(
        cal_min_from_met(cycling.mets, 50.0),
        7.393750000000001,
        epsilon = 1e-9
    );
}

#[test]
fn test_met_bicycle_reproduces_table_trend() {
    // the fit lies within 0.15 MET of every tabulated speed
    let table = [(10.0, 4.8), (15.0, 5.9), (20.0, 7.1), (25.0, 8.4), (30.0, 9.8)];
    for (speed, mets) in table {
        let estimate = met_bicycle(speed, 70.0).unwrap();
        assert!((estimate.mets - mets).abs() < 0.15, "{speed} km/h");
    }
}

#[test]
fn test_walking_equation() {
    let walk = vo2_walking(5.0, 10.0);
    assert_relative_eq!(walk.gross, 26.833333333333336, epsilon = 1e-10);
    assert_relative_eq!(walk.gross - walk.net, 3.5, epsilon = 1e-12);
    assert!(met_walking(6.0, 0.0) > met_walking(4.0, 0.0));
}

#[test]
fn test_myzone_reference() {
    let ee = energy_expenditure_kg(Gender::Male, 48.0, 63.0, 48.0, 110.0);
    assert_relative_eq!(ee.with_vo2max, 7.454238630999999, epsilon = 1e-10);
}

#[test]
fn test_rer_reference() {
    let profile = HeartRateProfile::new(185.0, 65.0).unwrap();
    let vo2max = 15.0 * (185.0 / 65.0);
    assert_relative_eq!(
        cal_rer(75.0, &profile, vo2max),
        0.12434179086538462,
        epsilon = 1e-10
    );
}

#[test]
fn test_rer_scales_with_vo2() {
    let low = cal_vo2_rer(20.0, 0.85);
    let high = cal_vo2_rer(40.0, 0.85);
    assert_relative_eq!(high.kcal_per_min_per_kg, 2.0 * low.kcal_per_min_per_kg, epsilon = 1e-12);
    assert_relative_eq!(low.carbohydrate_pct + low.fat_pct, 100.0, epsilon = 1e-12);
}

#[test]
fn test_rer_series_length_mismatch() {
    assert!(matches!(
        cal_vo2_rer_series(&[20.0, 30.0, 40.0], &[0.8]),
        Err(Vo2Error::LengthMismatch { left: 3, right: 1 })
    ));
}

#[test]
fn test_hr_calorie_estimators_agree_in_order_of_magnitude() {
    let profile = HeartRateProfile::new(185.0, 65.0).unwrap();
    let hrr = calories_kg_hr_hrr(80.0, &profile, 45.0);
    let swain = calories_kg_hr(80.0, 45.0);
    assert!(hrr > 0.1 && hrr < 0.2);
    assert!(swain > 0.1 && swain < 0.2);
}

#[test]
fn test_custom_rer_table_from_json() {
    let json = r#"{"rq": [0.7, 0.85, 1.0], "kcal_per_litre": [4.69, 4.86, 5.05], "carbohydrate_pct": [0.0, 50.7, 100.0]}"#;
    let table: RerTable = serde_json::from_str(json).unwrap();
    let eq = table.evaluate(30.0, 0.85);
    assert_relative_eq!(eq.kcal_per_litre, 4.86, epsilon = 1e-12);
    assert_relative_eq!(eq.fat_pct, 49.3, epsilon = 1e-10);

    let unsorted = r#"{"rq": [1.0, 0.7], "kcal_per_litre": [5.05, 4.69], "carbohydrate_pct": [100.0, 0.0]}"#;
    assert!(serde_json::from_str::<RerTable>(unsorted).is_err());
}

#[test]
fn test_energy_options_round_trip() {
    for formula in [
        BmrFormula::MifflinStJeor,
        BmrFormula::RevisedHarrisBenedict,
        BmrFormula::KatchMcArdle,
    ] {
        let options = EnergyOptions::default().with_bmr_formula(formula);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(EnergyOptions::from_json(&json).unwrap(), options);
    }
}
