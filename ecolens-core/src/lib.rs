//! ecolens-core
//!
//! Pure analytics shared by every chart and summary panel of the dashboard.
//!
//! - `timeseries`: date-aligned merging, percentage change, moving averages, cadence inference.
//! - `stats`: descriptive statistics (population standard deviation).
//! - `correlation`: whole-series and rolling Pearson correlation.
//! - `histogram`: shared-range frequency buckets for two comparison groups.
//! - `matrix`: 3x3 correlation grid for the heatmap.
//! - `source`: the `SeriesSource` trait implemented by data providers.
//!
//! Every function is synchronous and side-effect free: inputs are borrowed,
//! outputs are freshly allocated, and nothing is cached between calls.
//! Undefined numeric outcomes (a constant series, division by a zero previous
//! value) are returned as NaN or infinities; only contract violations are
//! reported as [`EcolensError`].
#![warn(missing_docs)]

/// Whole-series and rolling Pearson correlation.
pub mod correlation;
/// Shared-range histogram binning.
pub mod histogram;
/// Correlation matrix assembly.
pub mod matrix;
/// Data provider trait.
pub mod source;
/// Descriptive statistics.
pub mod stats;
/// Time-series utilities for merging and transforming dated series.
pub mod timeseries;
pub mod types;

pub use correlation::{correlate, pairwise_correlation, rolling_correlate};
pub use histogram::{DEFAULT_BIN_COUNT, histogram};
pub use matrix::{build_matrix, correlation_report};
pub use source::SeriesSource;
pub use stats::{coefficient_of_variation, stats};
pub use timeseries::infer::infer_cadence;
pub use timeseries::merge::{merge, merge_into};
pub use timeseries::transform::{
    moving_average, moving_average_key, pct_change, pct_change_series,
};
pub use types::*;
