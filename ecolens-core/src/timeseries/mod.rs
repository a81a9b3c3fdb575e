//! Time-series utilities applied to raw indicator series and merged records.
//!
//! Modules include:
//! - `infer`: infer the sampling cadence of a dated series
//! - `merge`: union independently-sampled series into date-aligned records
//! - `transform`: percentage-change series and full-window moving averages
/// Cadence inference from observation dates.
pub mod infer;
/// Merge utilities for joining multiple named series by date.
pub mod merge;
/// Per-point derived series.
pub mod transform;
