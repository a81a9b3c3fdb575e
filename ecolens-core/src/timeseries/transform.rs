use crate::types::{DataPoint, EcolensError, MergedSeries};

/// Percentage change from `prev` to `curr`: `(curr - prev) / prev * 100`.
///
/// A zero `prev` follows IEEE rules (`+inf`, `-inf`, or NaN); callers treat
/// non-finite results as "no data" when displaying them.
///
/// ```
/// use ecolens_core::pct_change;
///
/// assert_eq!(pct_change(100.0, 110.0), 10.0);
/// assert_eq!(pct_change(0.0, 5.0), f64::INFINITY);
/// assert!(pct_change(0.0, 0.0).is_nan());
/// ```
#[must_use]
pub fn pct_change(prev: f64, curr: f64) -> f64 {
    (curr - prev) / prev * 100.0
}

/// Percentage change between consecutive points.
///
/// The first point has no predecessor, so the result has `len - 1` points
/// carrying the dates of points `1..len`. Fewer than two points yield an
/// empty series.
#[must_use]
pub fn pct_change_series(points: &[DataPoint]) -> Vec<DataPoint> {
    points
        .windows(2)
        .map(|w| DataPoint::new(w[1].date.clone(), pct_change(w[0].value, w[1].value)))
        .collect()
}

/// Variable name under which [`moving_average`] stores its output.
///
/// ```
/// assert_eq!(ecolens_core::moving_average_key("cpi", 12), "cpi_ma12");
/// ```
#[must_use]
pub fn moving_average_key(key: &str, window: usize) -> String {
    format!("{key}_ma{window}")
}

/// Add a trailing moving average of `key` as `"{key}_ma{window}"`.
///
/// Record `i` gets the arithmetic mean of `key` over records
/// `i + 1 - window ..= i` only when every one of those `window` records has
/// `key` present; otherwise the new field is absent. No partial averages are
/// produced, so the first `window - 1` records never carry the field. A window
/// longer than the series leaves the field absent everywhere.
///
/// Each call returns a new series; calls with different windows compose
/// without interfering because each writes its own field.
///
/// # Errors
/// Returns `EcolensError::InvalidArg` if `window` is zero.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip(series), fields(len = series.len()))
)]
pub fn moving_average(
    series: &MergedSeries,
    key: &str,
    window: usize,
) -> Result<MergedSeries, EcolensError> {
    if window == 0 {
        return Err(EcolensError::InvalidArg(
            "moving-average window must be positive".into(),
        ));
    }

    let column = series.column(key);
    let out_key = moving_average_key(key, window);
    let mut out = series.clone();

    for (i, record) in out.iter_mut().enumerate() {
        // Stale values from an earlier call with the same window must not survive.
        record.remove(&out_key);
        if i + 1 < window {
            continue;
        }
        let span = &column[i + 1 - window..=i];
        let full: Option<Vec<f64>> = span.iter().copied().collect();
        if let Some(values) = full {
            let sum: f64 = values.iter().sum();
            record.insert(out_key.as_str(), sum / window as f64);
        }
    }
    Ok(out)
}
