use crate::correlation::pairwise_correlation;
use crate::types::{CorrelationMatrix, CorrelationReport, Indicator, MergedSeries};

/// Reshape pairwise coefficients into the symmetric 3x3 heatmap grid.
///
/// Rows and columns follow [`Indicator::ALL`] (cpi, usdinr, nifty); the
/// diagonal is 1.0 and each coefficient appears on both sides of it.
///
/// ```
/// use ecolens_core::{CorrelationMatrix, build_matrix};
///
/// let m = CorrelationMatrix { cpi_usdinr: 0.5, cpi_nifty: -0.2, usdinr_nifty: 0.1 };
/// let grid = build_matrix(&m);
/// assert_eq!(grid[0], [1.0, 0.5, -0.2]);
/// assert_eq!(grid[2][1], 0.1);
/// ```
#[must_use]
pub fn build_matrix(c: &CorrelationMatrix) -> [[f64; 3]; 3] {
    let mut grid = [[0.0; 3]; 3];
    for a in Indicator::ALL {
        for b in Indicator::ALL {
            grid[a.index()][b.index()] = c.get(a, b);
        }
    }
    grid
}

/// Whole-history correlations between every indicator pair of a merged series.
///
/// Each pair is correlated over the dates where both indicators are present.
/// A pair with fewer than `min_points` such dates (never fewer than two) keeps
/// its NaN entry and contributes an `InsufficientData` warning instead; the
/// other pairs are still computed.
///
/// ```
/// use ecolens_core::{DataPoint, correlation_report, merge};
///
/// let up = vec![DataPoint::new("2024-01-01", 1.0), DataPoint::new("2024-02-01", 2.0)];
/// let down = vec![DataPoint::new("2024-01-01", 2.0), DataPoint::new("2024-02-01", 1.0)];
/// let report = correlation_report(&merge([("usdinr", up), ("nifty", down)]), 2);
///
/// assert_eq!(report.matrix.usdinr_nifty, -1.0);
/// assert!(report.matrix.cpi_nifty.is_nan());
/// assert_eq!(report.warnings.len(), 2);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip(series), fields(len = series.len()))
)]
pub fn correlation_report(series: &MergedSeries, min_points: usize) -> CorrelationReport {
    let mut matrix = CorrelationMatrix::default();
    let mut warnings = Vec::new();

    for (a, b) in CorrelationMatrix::pairs() {
        match pairwise_correlation(series, a.key(), b.key(), min_points) {
            Ok(r) => matrix.set(a, b, r),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(left = %a, right = %b, error = %e, "pair left undefined");
                warnings.push(e);
            }
        }
    }

    CorrelationReport {
        grid: build_matrix(&matrix),
        matrix,
        warnings,
    }
}
