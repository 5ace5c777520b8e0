//! Curve tables and CSV export

use approx::assert_relative_eq;
use vo2calc::curves::*;
use vo2calc::heart_rate::TrainingLevel;
use vo2calc::report::write_csv;
use vo2calc::{EnergyOptions, Gender, HeartRateProfile, ZoneOptions};

#[test]
fn test_threshold_curves_to_csv() {
    let profile = HeartRateProfile::new(185.0, 65.0).unwrap();
    let summary =
        threshold_summary(&profile, 48.0, TrainingLevel::Regular, &ZoneOptions::default()).unwrap();

    let mut buf = Vec::new();
    write_csv(&mut buf, &summary.curves).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some("pct_hrmax,hrr,swain,rer"));
    assert_eq!(lines.count(), 51);
}

#[test]
fn test_myzone_comparison_serializes() {
    let profile = HeartRateProfile::new(185.0, 60.0).unwrap();
    let table = myzone_comparison(
        &[30.0, 40.0, 50.0, 60.0, 70.0],
        &profile,
        48.0,
        61.5,
        Gender::Male,
        &EnergyOptions::default().with_myzone_vo2max(true),
    )
    .unwrap();

    let json = serde_json::to_string(&table).unwrap();
    let back: CurveTable = serde_json::from_str(&json).unwrap();
    assert_eq!(back, table);
}

#[test]
fn test_energy_expenditure_by_weight_units() {
    let profile = HeartRateProfile::new(184.0, 55.0).unwrap();
    let table =
        energy_expenditure_by_weight(&[60.0, 70.0], 48.0, 45.0, &profile, Gender::Male).unwrap();

    // all of VO2max in use at 100 % HRmax
    let mets = &table.curve("mets_60kg").unwrap().values;
    assert_relative_eq!(mets[50], 45.0 / 3.5 / 60.0 * 60.0, epsilon = 1e-10);
}

#[test]
fn test_malformed_table_rejected_before_export() {
    let json = r#"{
        "x_label": "pct_hrmax",
        "x": {"v": 1, "dim": [3], "data": [50.0, 51.0, 52.0]},
        "curves": [{"name": "hrr", "values": {"v": 1, "dim": [1], "data": [0.1]}}]
    }"#;
    assert!(serde_json::from_str::<CurveTable>(json).is_err());
}
