//! Analytics parameters chosen by the dashboard and passed explicitly to each computation.

use serde::{Deserialize, Serialize};

use crate::error::EcolensError;

/// Trailing window used for rolling correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RollingWindow {
    /// Six periods.
    Short,
    /// Twelve periods.
    #[default]
    Medium,
    /// Twenty-four periods.
    Long,
    /// Caller-chosen number of periods (must be at least 2).
    Custom(usize),
}

impl RollingWindow {
    /// Number of periods in the window.
    #[must_use]
    pub const fn periods(self) -> usize {
        match self {
            Self::Short => 6,
            Self::Medium => 12,
            Self::Long => 24,
            Self::Custom(n) => n,
        }
    }
}

/// Parameters for the dashboard analytics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Moving-average windows added to every indicator column.
    pub moving_average_windows: Vec<usize>,
    /// Window for rolling correlation.
    pub rolling_window: RollingWindow,
    /// Number of histogram buckets.
    pub histogram_bins: usize,
    /// Minimum paired observations before a correlation is attempted.
    pub min_points: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            moving_average_windows: vec![3, 6, 12],
            rolling_window: RollingWindow::default(),
            histogram_bins: 10,
            min_points: 2,
        }
    }
}

impl AnalyticsConfig {
    /// Check parameter ranges.
    ///
    /// # Errors
    /// Returns `EcolensError::InvalidArg` if a moving-average window is zero, the
    /// rolling window is shorter than two periods, the bin count is zero, or
    /// `min_points` is below two.
    pub fn validate(&self) -> Result<(), EcolensError> {
        if self.moving_average_windows.contains(&0) {
            return Err(EcolensError::InvalidArg(
                "moving-average window must be positive".into(),
            ));
        }
        let rolling = self.rolling_window.periods();
        if rolling < 2 {
            return Err(EcolensError::InvalidArg(format!(
                "rolling window must span at least 2 periods, got {rolling}"
            )));
        }
        if self.histogram_bins == 0 {
            return Err(EcolensError::InvalidArg(
                "histogram bin count must be positive".into(),
            ));
        }
        if self.min_points < 2 {
            return Err(EcolensError::InvalidArg(format!(
                "min_points must be at least 2, got {}",
                self.min_points
            )));
        }
        Ok(())
    }
}
