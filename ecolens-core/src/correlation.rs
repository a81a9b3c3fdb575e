use crate::types::{EcolensError, MergedSeries, RollingCorrelationSeries};

/// Pearson product-moment correlation of two index-aligned series.
///
/// Uses population covariance and standard deviations; the `1/N` factors
/// cancel, so the coefficient is computed as
/// `sum(dx * dy) / sqrt(sum(dx^2) * sum(dy^2))` with deviations from the
/// respective means. The result is clamped to `[-1, 1]`.
///
/// A constant input has zero variance; the coefficient is then undefined and
/// NaN is returned rather than an error. Callers must filter out absent
/// observations before calling: the engine has no notion of "absent".
///
/// ```
/// use ecolens_core::correlate;
///
/// let r = correlate(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
/// assert_eq!(r, -1.0);
/// assert!(correlate(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]).unwrap().is_nan());
/// ```
///
/// # Errors
/// - Returns `EcolensError::LengthMismatch` if `x` and `y` differ in length.
/// - Returns `EcolensError::InsufficientData` if fewer than two pairs are given.
pub fn correlate(x: &[f64], y: &[f64]) -> Result<f64, EcolensError> {
    if x.len() != y.len() {
        return Err(EcolensError::length_mismatch(x.len(), y.len()));
    }
    if x.len() < 2 {
        return Err(EcolensError::insufficient("correlation", 2, x.len()));
    }
    Ok(pearson(x, y))
}

/// Correlation of each trailing window of `window` pairs.
///
/// The output has the input length. Index `i < window - 1` is NaN (not enough
/// history); index `i >= window - 1` holds `correlate` of
/// `x[i + 1 - window ..= i]` and the matching slice of `y`, which is NaN only
/// when a window has zero variance. Each window is recomputed from scratch.
/// A window longer than the inputs yields all NaN.
///
/// ```
/// use ecolens_core::rolling_correlate;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let y = [2.0, 4.0, 6.0, 8.0, 10.0, 12.0];
/// let r = rolling_correlate(&x, &y, 3).unwrap();
/// assert!(r[0].is_nan() && r[1].is_nan());
/// assert!(r[2..].iter().all(|v| (v - 1.0).abs() < 1e-9));
/// ```
///
/// # Errors
/// - Returns `EcolensError::LengthMismatch` if `x` and `y` differ in length.
/// - Returns `EcolensError::InvalidArg` if `window` is less than two.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip(x, y), fields(len = x.len()))
)]
pub fn rolling_correlate(
    x: &[f64],
    y: &[f64],
    window: usize,
) -> Result<RollingCorrelationSeries, EcolensError> {
    if x.len() != y.len() {
        return Err(EcolensError::length_mismatch(x.len(), y.len()));
    }
    if window < 2 {
        return Err(EcolensError::InvalidArg(format!(
            "rolling correlation window must be at least 2, got {window}"
        )));
    }

    let mut out = vec![f64::NAN; x.len()];
    for end in window..=x.len() {
        let start = end - window;
        out[end - 1] = pearson(&x[start..end], &y[start..end]);
    }
    Ok(out)
}

/// Correlation of two variables of a merged series over the dates where both
/// are present, requiring at least `min_points` such dates (never fewer than two).
///
/// # Errors
/// Returns `EcolensError::InsufficientData` if too few dates carry both variables.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip(series), fields(len = series.len()))
)]
pub fn pairwise_correlation(
    series: &MergedSeries,
    a: &str,
    b: &str,
    min_points: usize,
) -> Result<f64, EcolensError> {
    let required = min_points.max(2);
    let paired = series.paired(a, b);
    if paired.len() < required {
        return Err(EcolensError::insufficient(
            format!("correlation of {a} and {b}"),
            required,
            paired.len(),
        ));
    }
    correlate(&paired.left, &paired.right)
}

// Inputs are equal-length with at least two elements.
fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if is_constant(x) || is_constant(y) {
        return f64::NAN;
    }
    let x = &rescaled(x);
    let y = &rescaled(y);
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&a, &b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = (sxx * syy).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    (sxy / denom).clamp(-1.0, 1.0)
}

// Multiply by a power of two so the largest magnitude lands in [1, 2). The
// scaling is exact, so the coefficient is unchanged, but the sums of squares
// can no longer overflow or underflow for very large or very small inputs.
fn rescaled(v: &[f64]) -> Vec<f64> {
    let peak = v.iter().fold(0.0_f64, |m, e| m.max(e.abs()));
    if peak == 0.0 || !peak.is_finite() {
        return v.to_vec();
    }
    let exp = (peak.log2().floor() as i32).clamp(-1022, 1023);
    let factor = 2.0_f64.powi(-exp);
    v.iter().map(|e| e * factor).collect()
}

// Exact equality: the mean of a constant series can round away from its
// elements, leaving tiny nonzero deviations.
fn is_constant(v: &[f64]) -> bool {
    v.iter().all(|&e| e == v[0])
}
