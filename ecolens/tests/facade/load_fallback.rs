use std::sync::Arc;

use ecolens::{DataPoint, Ecolens, EcolensError, Indicator};
use ecolens_mock::{DynamicMockSource, MockBehavior, MockSource, fixture};

#[test]
fn falls_back_when_first_source_errors() {
    let first = Arc::new(DynamicMockSource::new("live").with(
        Indicator::Cpi,
        MockBehavior::Fail(EcolensError::source("live", "HTTP 503")),
    ));
    let second = Arc::new(MockSource::new());

    let mut lens = Ecolens::builder()
        .with_source(first.clone())
        .with_source(second)
        .build()
        .unwrap();
    let failures = lens.load();

    assert!(failures.is_empty(), "unexpected failures: {failures:?}");
    assert_eq!(lens.series(Indicator::Cpi).unwrap(), fixture(Indicator::Cpi));
    assert_eq!(lens.loaded(), Indicator::ALL.to_vec());
    // One attempt per indicator on the failing source
    assert_eq!(first.calls(), 3);
}

#[test]
fn first_success_wins() {
    let pts = vec![DataPoint::new("2024-01-01", 1.0)];
    let first = Arc::new(
        DynamicMockSource::new("first").with(Indicator::Nifty, MockBehavior::Return(pts.clone())),
    );
    let second = Arc::new(DynamicMockSource::new("second").with(Indicator::Nifty, MockBehavior::Fixture));

    let lens = Ecolens::builder()
        .with_source(first)
        .with_source(second.clone())
        .build()
        .unwrap();

    assert_eq!(lens.fetch(Indicator::Nifty).unwrap(), pts);
    assert_eq!(second.calls(), 0);
}

#[test]
fn unsupported_sources_are_skipped() {
    let only_cpi = Arc::new(MockSource::only(&[Indicator::Cpi]));
    let mut lens = Ecolens::builder().with_source(only_cpi).build().unwrap();

    let failures = lens.load();
    assert_eq!(failures.len(), 2);
    assert!(
        failures
            .iter()
            .all(|e| matches!(e, EcolensError::NotFound { .. }))
    );
    assert_eq!(lens.loaded(), vec![Indicator::Cpi]);
}

#[test]
fn all_not_found_collapses_to_not_found() {
    let lens = Ecolens::builder()
        .with_source(Arc::new(DynamicMockSource::new("a")))
        .with_source(Arc::new(DynamicMockSource::new("b")))
        .build()
        .unwrap();

    assert!(matches!(
        lens.fetch(Indicator::UsdInr),
        Err(EcolensError::NotFound { .. })
    ));
}

#[test]
fn mixed_failures_are_aggregated_and_tagged() {
    let broken = Arc::new(DynamicMockSource::new("broken").with(
        Indicator::Cpi,
        MockBehavior::Fail(EcolensError::Data("bad payload".into())),
    ));
    let empty = Arc::new(DynamicMockSource::new("empty"));

    let lens = Ecolens::builder()
        .with_source(broken)
        .with_source(empty)
        .build()
        .unwrap();

    match lens.fetch(Indicator::Cpi) {
        Err(EcolensError::AllSourcesFailed(errs)) => {
            assert_eq!(errs.len(), 2);
            assert!(matches!(
                &errs[0],
                EcolensError::Source { source_name, msg } if source_name == "broken" && msg.contains("bad payload")
            ));
            assert!(matches!(errs[1], EcolensError::NotFound { .. }));
        }
        other => panic!("expected AllSourcesFailed, got {other:?}"),
    }
}

#[test]
fn misordered_series_counts_as_source_failure() {
    let misordered = vec![
        DataPoint::new("2024-02-01", 2.0),
        DataPoint::new("2024-01-01", 1.0),
    ];
    let first = Arc::new(
        DynamicMockSource::new("unsorted").with(Indicator::UsdInr, MockBehavior::Return(misordered)),
    );

    let lens = Ecolens::builder()
        .with_source(first)
        .with_source(Arc::new(MockSource::new()))
        .build()
        .unwrap();

    assert_eq!(
        lens.fetch(Indicator::UsdInr).unwrap(),
        fixture(Indicator::UsdInr)
    );
}

#[test]
fn registered_series_are_not_refetched() {
    let src = Arc::new(
        DynamicMockSource::new("counting")
            .with(Indicator::UsdInr, MockBehavior::Fixture)
            .with(Indicator::Nifty, MockBehavior::Fixture),
    );
    let cpi = vec![DataPoint::new("2023-01-01", 5.0)];

    let mut lens = Ecolens::builder()
        .with_series(Indicator::Cpi, cpi.clone())
        .with_source(src.clone())
        .build()
        .unwrap();

    assert!(lens.load().is_empty());
    assert_eq!(src.calls(), 2);
    assert_eq!(lens.series(Indicator::Cpi).unwrap(), cpi);
}

#[test]
fn no_sources_means_not_found_everywhere() {
    let mut lens = Ecolens::builder().build().unwrap();
    let failures = lens.load();
    assert_eq!(failures.len(), 3);
    assert!(lens.loaded().is_empty());
}
