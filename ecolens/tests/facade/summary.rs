use ecolens::{Cadence, DataPoint, EcolensError, Indicator};

use crate::helpers::{fixture_lens, lens_with, monthly};

#[test]
fn summary_of_monthly_series() {
    let lens = lens_with(&[(Indicator::UsdInr, monthly(2024, &[100.0, 110.0, 121.0]))]);
    let s = lens.summary(Indicator::UsdInr).unwrap();

    assert_eq!(s.indicator, Indicator::UsdInr);
    assert_eq!(s.count, 3);
    assert!((s.stats.mean - 331.0 / 3.0).abs() < 1e-9);
    assert_eq!(s.stats.median, 110.0);
    assert_eq!(s.stats.min, 100.0);
    assert_eq!(s.stats.max, 121.0);
    assert_eq!(s.stats.range(), 21.0);
    assert!((s.coefficient_of_variation - s.stats.std / s.stats.mean * 100.0).abs() < 1e-12);
    assert_eq!(s.latest, DataPoint::new("2024-03-01", 121.0));
    assert!((s.latest_change.unwrap() - 10.0).abs() < 1e-9);
    assert_eq!(s.cadence, Some(Cadence::Monthly));
}

#[test]
fn single_observation_has_no_change_or_cadence() {
    let lens = lens_with(&[(Indicator::Cpi, vec![DataPoint::new("2023-01-01", 5.65)])]);
    let s = lens.summary(Indicator::Cpi).unwrap();

    assert_eq!(s.count, 1);
    assert_eq!(s.stats.std, 0.0);
    assert_eq!(s.latest_change, None);
    assert_eq!(s.cadence, None);
}

#[test]
fn change_from_zero_level_is_infinite_not_an_error() {
    let lens = lens_with(&[(Indicator::Nifty, monthly(2024, &[0.0, 5.0]))]);
    let s = lens.summary(Indicator::Nifty).unwrap();
    assert_eq!(s.latest_change, Some(f64::INFINITY));
}

#[test]
fn missing_or_empty_series() {
    let lens = lens_with(&[(Indicator::Cpi, vec![])]);
    assert!(matches!(
        lens.summary(Indicator::Cpi),
        Err(EcolensError::InsufficientData { .. })
    ));
    assert!(matches!(
        lens.summary(Indicator::Nifty),
        Err(EcolensError::NotFound { .. })
    ));
}

#[test]
fn fixture_cadences_in_summaries() {
    let lens = fixture_lens();
    assert_eq!(
        lens.summary(Indicator::Cpi).unwrap().cadence,
        Some(Cadence::Annual)
    );
    assert_eq!(lens.summary(Indicator::Nifty).unwrap().count, 60);
}
