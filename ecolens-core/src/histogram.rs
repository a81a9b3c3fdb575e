use crate::types::{EcolensError, HistogramBin};

/// Bucket count used by the dashboard's distribution charts.
pub const DEFAULT_BIN_COUNT: usize = 10;

/// Equal-width frequency counts for two comparison groups over one shared range.
///
/// Bucket edges come from the combined minimum and maximum of both groups, so
/// both counts refer to identical ranges. Width is `(max - min) / bin_count`.
/// Bucket `k` covers `[min + k * width, min + (k + 1) * width)`; the last
/// bucket also includes `max`. When every value is equal the width is zero and
/// all values fall in the first bucket. Non-finite values are not counted.
///
/// The output has exactly `bin_count` buckets in ascending order, each
/// labelled `"{lower:.2} - {upper:.2}"`.
///
/// ```
/// use ecolens_core::histogram;
///
/// let bins = histogram(&[1.0, 2.0, 3.0, 4.0, 5.0], &[10.0, 20.0, 30.0, 40.0, 50.0], 5).unwrap();
/// assert_eq!(bins.len(), 5);
/// assert_eq!(bins[0].range_label, "1.00 - 10.80");
/// assert_eq!(bins[0].count_a, 5);
/// assert_eq!(bins[4].count_b, 1);
/// ```
///
/// # Errors
/// - Returns `EcolensError::InvalidArg` if `bin_count` is zero.
/// - Returns `EcolensError::InsufficientData` if neither group has a finite value.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip(group_a, group_b), fields(a = group_a.len(), b = group_b.len()))
)]
pub fn histogram(
    group_a: &[f64],
    group_b: &[f64],
    bin_count: usize,
) -> Result<Vec<HistogramBin>, EcolensError> {
    if bin_count == 0 {
        return Err(EcolensError::InvalidArg(
            "histogram bin count must be positive".into(),
        ));
    }

    let finite = group_a
        .iter()
        .chain(group_b)
        .copied()
        .filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if min > max {
        return Err(EcolensError::insufficient("histogram", 1, 0));
    }

    let grid = Grid::new(min, max, bin_count);
    let mut bins: Vec<HistogramBin> = (0..bin_count)
        .map(|k| {
            let lower = grid.edge(k);
            let upper = if k + 1 == bin_count {
                max
            } else {
                grid.edge(k + 1)
            };
            HistogramBin {
                range_label: format!("{lower:.2} - {upper:.2}"),
                lower,
                upper,
                count_a: 0,
                count_b: 0,
            }
        })
        .collect();

    for v in group_a.iter().copied().filter(|v| v.is_finite()) {
        bins[grid.bucket_of(v)].count_a += 1;
    }
    for v in group_b.iter().copied().filter(|v| v.is_finite()) {
        bins[grid.bucket_of(v)].count_b += 1;
    }
    Ok(bins)
}

// Bucket geometry. When `max - min` overflows (values near both ends of the
// f64 range) everything is computed at half scale, which is exact.
struct Grid {
    min: f64,
    scale: f64,
    width: f64,
    bin_count: usize,
}

impl Grid {
    fn new(min: f64, max: f64, bin_count: usize) -> Self {
        let scale = if (max - min).is_finite() { 1.0 } else { 0.5 };
        Self {
            min,
            scale,
            width: (max * scale - min * scale) / bin_count as f64,
            bin_count,
        }
    }

    fn edge(&self, k: usize) -> f64 {
        let step = k as f64 * self.width;
        if self.scale == 1.0 {
            self.min + step
        } else {
            // Two half steps keep the intermediate in range.
            self.min + step + step
        }
    }

    fn bucket_of(&self, v: f64) -> usize {
        if self.width <= 0.0 {
            return 0;
        }
        // Truncation is the floor here: `v >= min`, so the quotient is non-negative.
        let k = ((v * self.scale - self.min * self.scale) / self.width) as usize;
        k.min(self.bin_count - 1)
    }
}
