// Shared builders so tests can `use crate::helpers::*;`
use std::sync::Arc;

use ecolens::{DataPoint, Ecolens, EcolensBuilder, Indicator};
use ecolens_mock::MockSource;

/// First-of-month points starting January `year`, one per value.
pub fn monthly(year: i32, values: &[f64]) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let y = year + (i / 12) as i32;
            let m = i % 12 + 1;
            DataPoint::new(format!("{y}-{m:02}-01"), *v)
        })
        .collect()
}

/// Builder with the mock source serving every fixture.
pub fn fixture_builder() -> EcolensBuilder {
    Ecolens::builder().with_source(Arc::new(MockSource::new()))
}

/// Instance with every fixture loaded.
pub fn fixture_lens() -> Ecolens {
    let mut lens = fixture_builder().build().unwrap();
    assert!(lens.load().is_empty());
    lens
}

/// Instance holding exactly the given series and no sources.
#[allow(dead_code)]
pub fn lens_with(series: &[(Indicator, Vec<DataPoint>)]) -> Ecolens {
    series
        .iter()
        .fold(Ecolens::builder(), |b, (ind, pts)| b.with_series(*ind, pts.clone()))
        .build()
        .unwrap()
}
