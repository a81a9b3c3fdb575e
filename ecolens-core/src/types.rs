//! Re-export of the shared data model from `ecolens-types`.
// Downstream crates can depend on `ecolens-core` only

pub use ecolens_types::{
    AnalyticsConfig, Cadence, CorrelationMatrix, CorrelationReport, DashboardReport, DataPoint,
    EcolensError, HistogramBin, Indicator, IndicatorSummary, MergedRecord, MergedSeries,
    PairedValues, RollingCorrelation, RollingCorrelationSeries, RollingWindow, Statistics,
};
