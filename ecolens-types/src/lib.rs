//! Data model, error taxonomy, and configuration primitives shared across the ecolens workspace.
#![warn(missing_docs)]

mod analytics;
mod config;
mod error;
mod indicator;
mod reports;
mod series;

pub use analytics::{CorrelationMatrix, HistogramBin, RollingCorrelationSeries, Statistics};
pub use config::{AnalyticsConfig, RollingWindow};
pub use error::EcolensError;
pub use indicator::Indicator;
pub use reports::{
    Cadence, CorrelationReport, DashboardReport, IndicatorSummary, RollingCorrelation,
};
pub use series::{DataPoint, MergedRecord, MergedSeries, PairedValues};
