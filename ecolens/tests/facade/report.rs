use ecolens::{EcolensError, Indicator};
use ecolens_mock::fixture;

use crate::helpers::{fixture_lens, lens_with};

#[test]
fn full_report_from_fixtures() {
    let report = fixture_lens().report();

    assert_eq!(report.summaries.len(), 3);
    assert!(report.correlations.warnings.is_empty());
    // Only USD/INR vs NIFTY shares a full 12-period window.
    assert_eq!(report.rolling.len(), 1);
    assert_eq!(report.rolling[0].left, Indicator::UsdInr);
    assert_eq!(report.rolling[0].right, Indicator::Nifty);
    assert_eq!(report.warnings.len(), 2);
    assert!(
        report
            .warnings
            .iter()
            .all(|w| matches!(w, EcolensError::InsufficientData { required: 12, actual: 5, .. }))
    );

    let bins = report.return_histogram.unwrap();
    assert_eq!(bins.len(), 10);
    let total: usize = bins.iter().map(|b| b.count_a).sum();
    assert_eq!(total, 59);
}

#[test]
fn partial_data_degrades_to_warnings() {
    let lens = lens_with(&[(Indicator::Cpi, fixture(Indicator::Cpi))]);
    let report = lens.report();

    assert_eq!(report.summaries.len(), 1);
    assert_eq!(report.merged.len(), 10);
    assert!(report.rolling.is_empty());
    assert!(report.return_histogram.is_none());
    assert!(report.correlations.matrix.cpi_nifty.is_nan());
    // Three correlation pairs plus the histogram.
    assert_eq!(report.warnings.len(), 4);
    assert!(matches!(
        report.warnings.last(),
        Some(EcolensError::NotFound { .. })
    ));
}

#[test]
fn empty_instance_still_reports() {
    let report = ecolens::Ecolens::builder().build().unwrap().report();
    assert!(report.merged.is_empty());
    assert!(report.summaries.is_empty());
    assert_eq!(report.correlations.grid[1][1], 1.0);
}

#[test]
fn report_serializes_to_json() {
    let report = fixture_lens().report();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["summaries"][0]["indicator"], "cpi");
    assert_eq!(json["merged"][0]["date"], "2014-01-01");
    assert!(json["return_histogram"][0]["rangeLabel"].is_string());
    // Undefined coefficients (leading rolling NaNs) serialize as null.
    assert!(json["rolling"][0]["values"][0].is_null());
}
