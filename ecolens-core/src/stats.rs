use crate::types::{EcolensError, Statistics};

/// Descriptive statistics over `values`.
///
/// - `mean`: arithmetic average.
/// - `median`: middle of the ascending order; the average of the two middle
///   values for an even count.
/// - `std`: population standard deviation, `sqrt(sum((v - mean)^2) / N)`.
/// - `min` / `max`: extrema.
///
/// A single value yields that value for every field and a zero `std`.
/// Results are deterministic for identical input.
///
/// ```
/// use ecolens_core::stats;
///
/// let s = stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_eq!(s.mean, 5.0);
/// assert_eq!(s.median, 4.5);
/// assert_eq!(s.std, 2.0);
/// ```
///
/// # Errors
/// Returns `EcolensError::InsufficientData` if `values` is empty.
pub fn stats(values: &[f64]) -> Result<Statistics, EcolensError> {
    if values.is_empty() {
        return Err(EcolensError::insufficient("statistics", 1, 0));
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    };

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(Statistics {
        mean,
        median,
        std: variance.sqrt(),
        min,
        max,
    })
}

/// Coefficient of variation in percent (`std / mean * 100`), NaN for a zero mean.
#[must_use]
pub fn coefficient_of_variation(s: &Statistics) -> f64 {
    s.coefficient_of_variation()
}
