//! Report envelopes produced by the dashboard facade.

use serde::{Deserialize, Serialize};

use crate::analytics::{CorrelationMatrix, HistogramBin, RollingCorrelationSeries, Statistics};
use crate::error::EcolensError;
use crate::indicator::Indicator;
use crate::series::{DataPoint, MergedSeries};

/// Sampling cadence inferred from the gaps between observation dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Cadence {
    /// Gaps of up to a week (trading days, calendar days).
    Daily,
    /// Gaps of roughly one calendar month.
    Monthly,
    /// Gaps of roughly one calendar year.
    Annual,
    /// No recognizable regular gap.
    Irregular,
}

/// Summary panel for one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSummary {
    /// Indicator summarized.
    pub indicator: Indicator,
    /// Number of observations.
    pub count: usize,
    /// Descriptive statistics over all observations.
    pub stats: Statistics,
    /// `std / mean * 100`; NaN when the mean is zero.
    pub coefficient_of_variation: f64,
    /// Most recent observation.
    pub latest: DataPoint,
    /// Percentage change from the previous observation, if there is one.
    pub latest_change: Option<f64>,
    /// Inferred sampling cadence, if at least two dates parse.
    pub cadence: Option<Cadence>,
}

/// Whole-history correlations between all indicator pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReport {
    /// Pairwise coefficients; NaN where undefined.
    pub matrix: CorrelationMatrix,
    /// Symmetric 3x3 grid in `Indicator::ALL` order with a unit diagonal.
    pub grid: [[f64; 3]; 3],
    /// Non-fatal issues (pairs with too few paired observations).
    pub warnings: Vec<EcolensError>,
}

/// Rolling correlation of two indicators over their paired observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollingCorrelation {
    /// First indicator.
    pub left: Indicator,
    /// Second indicator.
    pub right: Indicator,
    /// Trailing window in periods.
    pub window: usize,
    /// Dates of the paired observations.
    pub dates: Vec<String>,
    /// Coefficient per date; NaN before the first full window.
    pub values: RollingCorrelationSeries,
}

/// Everything a dashboard page renders, recomputed from the latest series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// Date-aligned indicators with moving-average columns.
    pub merged: MergedSeries,
    /// Per-indicator summaries for indicators with data.
    pub summaries: Vec<IndicatorSummary>,
    /// Whole-history correlations.
    pub correlations: CorrelationReport,
    /// Rolling correlation per indicator pair that had enough data.
    pub rolling: Vec<RollingCorrelation>,
    /// Histogram of monthly percentage changes, USD/INR vs NIFTY, if computable.
    pub return_histogram: Option<Vec<HistogramBin>>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<EcolensError>,
}
