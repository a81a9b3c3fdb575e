use ecolens::{EcolensError, Indicator, RollingWindow};
use ecolens_mock::fixture;

use crate::helpers::{fixture_builder, fixture_lens, lens_with, monthly};

#[test]
fn fixture_matrix_is_complete_and_symmetric() {
    let report = fixture_lens().correlations();

    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    for (a, b) in ecolens::CorrelationMatrix::pairs() {
        let r = report.matrix.get(a, b);
        assert!((-1.0..=1.0).contains(&r), "{a}/{b}: {r}");
    }
    for i in 0..3 {
        assert_eq!(report.grid[i][i], 1.0);
        for j in 0..3 {
            assert_eq!(report.grid[i][j].to_bits(), report.grid[j][i].to_bits());
        }
    }
}

#[test]
fn linear_relationship_is_perfect() {
    let x: Vec<f64> = (1..=8).map(f64::from).collect();
    let up: Vec<f64> = x.iter().map(|v| 2.0 * v + 1.0).collect();
    let down: Vec<f64> = x.iter().map(|v| 100.0 - v).collect();
    let lens = lens_with(&[
        (Indicator::Cpi, monthly(2020, &x)),
        (Indicator::UsdInr, monthly(2020, &up)),
        (Indicator::Nifty, monthly(2020, &down)),
    ]);

    let m = lens.correlations().matrix;
    assert!((m.cpi_usdinr - 1.0).abs() < 1e-12);
    assert!((m.cpi_nifty + 1.0).abs() < 1e-12);
    assert!((m.usdinr_nifty + 1.0).abs() < 1e-12);
}

#[test]
fn pairs_without_enough_shared_dates_are_nan_with_warnings() {
    let lens = lens_with(&[
        (Indicator::UsdInr, fixture(Indicator::UsdInr)),
        (Indicator::Nifty, fixture(Indicator::Nifty)),
    ]);
    let report = lens.correlations();

    assert!(report.matrix.cpi_usdinr.is_nan());
    assert!(report.matrix.cpi_nifty.is_nan());
    assert!(report.matrix.usdinr_nifty.is_finite());
    assert_eq!(report.warnings.len(), 2);
    assert!(
        report
            .warnings
            .iter()
            .all(|w| matches!(w, EcolensError::InsufficientData { actual: 0, .. }))
    );
}

#[test]
fn min_points_threshold_applies() {
    // Annual CPI shares five January dates with the monthly fixtures.
    let mut lens = fixture_builder().min_points(10).build().unwrap();
    assert!(lens.load().is_empty());
    let report = lens.correlations();

    assert!(report.matrix.cpi_usdinr.is_nan());
    assert!(report.matrix.cpi_nifty.is_nan());
    assert!(report.matrix.usdinr_nifty.is_finite());
    assert!(report.warnings.iter().all(|w| matches!(
        w,
        EcolensError::InsufficientData {
            required: 10,
            actual: 5,
            ..
        }
    )));
}

#[test]
fn constant_series_correlation_is_nan_without_warning() {
    let lens = lens_with(&[
        (Indicator::UsdInr, monthly(2020, &[70.0; 6])),
        (Indicator::Nifty, monthly(2020, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])),
    ]);
    let report = lens.correlations();
    assert!(report.matrix.usdinr_nifty.is_nan());
    assert_eq!(report.warnings.len(), 2);
}

#[test]
fn rolling_uses_configured_window() {
    let mut lens = fixture_builder()
        .rolling_window(RollingWindow::Short)
        .build()
        .unwrap();
    assert!(lens.load().is_empty());

    let r = lens.rolling(Indicator::UsdInr, Indicator::Nifty).unwrap();
    assert_eq!(r.window, 6);
    assert_eq!(r.dates.len(), 60);
    assert_eq!(r.values.len(), 60);
    assert!(r.values[..5].iter().all(|v| v.is_nan()));
    assert!(
        r.values[5..]
            .iter()
            .all(|v| (-1.0..=1.0).contains(v))
    );
    assert_eq!(r.dates[5], "2019-06-01");
}

#[test]
fn rolling_over_sparse_overlap_is_all_nan() {
    let r = fixture_lens()
        .rolling(Indicator::Cpi, Indicator::Nifty)
        .unwrap();
    assert_eq!(r.dates.len(), 5);
    assert!(r.values.iter().all(|v| v.is_nan()));
}

#[test]
fn rolling_requires_loaded_indicators() {
    let lens = lens_with(&[(Indicator::Cpi, fixture(Indicator::Cpi))]);
    assert!(matches!(
        lens.rolling(Indicator::Cpi, Indicator::UsdInr),
        Err(EcolensError::NotFound { .. })
    ));
}

#[test]
fn return_histogram_counts_finite_changes_on_shared_range() {
    let mut lens = ecolens::Ecolens::builder()
        .histogram_bins(2)
        .with_series(Indicator::UsdInr, monthly(2024, &[100.0, 110.0, 121.0]))
        .with_series(Indicator::Nifty, monthly(2024, &[100.0, 90.0, 81.0]))
        .build()
        .unwrap();

    let bins = lens
        .return_histogram(Indicator::UsdInr, Indicator::Nifty)
        .unwrap();
    assert_eq!(bins.len(), 2);
    assert_eq!(bins[0].range_label, "-10.00 - 0.00");
    assert_eq!((bins[0].count_a, bins[0].count_b), (0, 2));
    assert_eq!(bins[1].range_label, "0.00 - 10.00");
    assert_eq!((bins[1].count_a, bins[1].count_b), (2, 0));

    // 0 -> 5 is an infinite change and is left out; 5 -> 10 is +100%.
    lens.set_series(Indicator::Cpi, monthly(2024, &[0.0, 5.0, 10.0]))
        .unwrap();
    let with_zero = lens
        .return_histogram(Indicator::Cpi, Indicator::Nifty)
        .unwrap();
    let total_a: usize = with_zero.iter().map(|b| b.count_a).sum();
    let total_b: usize = with_zero.iter().map(|b| b.count_b).sum();
    assert_eq!((total_a, total_b), (1, 2));
    assert_eq!(with_zero[1].count_a, 1);
}

#[test]
fn return_histogram_without_finite_changes() {
    let lens = lens_with(&[
        (Indicator::UsdInr, monthly(2024, &[0.0, 1.0])),
        (Indicator::Nifty, monthly(2024, &[5.0])),
    ]);
    assert!(matches!(
        lens.return_histogram(Indicator::UsdInr, Indicator::Nifty),
        Err(EcolensError::InsufficientData { .. })
    ));
}
