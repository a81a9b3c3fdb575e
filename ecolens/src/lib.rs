//! Ecolens turns the latest CPI, USD/INR and NIFTY series into dashboard views.
//!
//! Overview
//! - Loads each indicator from registered sources in order, falling back to
//!   the next source (for example a local CSV dataset) when one fails.
//! - Recomputes every view from the raw series on each call: the date-aligned
//!   merged table with moving averages, per-indicator summaries, the
//!   correlation heatmap, rolling correlations and return histograms.
//! - Partial data degrades gracefully: `report()` never fails and records what
//!   it could not compute as warnings.
//!
//! Key behaviors and trade-offs
//! - Alignment is by exact date string. Annual CPI observations dated
//!   `YYYY-01-01` pair only with monthly observations on the same day.
//! - Undefined numbers are values, not errors: a constant series has a NaN
//!   correlation, a move from zero has an infinite percentage change.
//! - Moving averages need a full window of the indicator's own observations;
//!   otherwise the column is absent for that date.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use ecolens::{Ecolens, Indicator, RollingWindow};
//! use ecolens::csv::CsvDirSource;
//!
//! let mut lens = Ecolens::builder()
//!     .with_source(Arc::new(CsvDirSource::new("data/")))
//!     .rolling_window(RollingWindow::Short)
//!     .build()?;
//! for failure in lens.load() {
//!     eprintln!("{failure}");
//! }
//!
//! let cpi = lens.summary(Indicator::Cpi)?;
//! let heatmap = lens.correlations().grid;
//! let report = lens.report();
//! ```
//!
//! See `ecolens/examples/` for a runnable end-to-end demonstration.
#![warn(missing_docs)]

mod analytics;
pub(crate) mod core;
pub mod csv;

pub use crate::core::{Ecolens, EcolensBuilder};

// Re-export core types for convenience
pub use ecolens_core::{
    AnalyticsConfig, Cadence, CorrelationMatrix, CorrelationReport, DashboardReport, DataPoint,
    EcolensError, HistogramBin, Indicator, IndicatorSummary, MergedRecord, MergedSeries,
    PairedValues, RollingCorrelation, RollingCorrelationSeries, RollingWindow, SeriesSource,
    Statistics,
};
