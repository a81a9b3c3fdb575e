//! Result types produced by the analytics engine.

use serde::{Deserialize, Serialize};

use crate::indicator::Indicator;

/// Descriptive statistics over the defined values of one series.
///
/// `std` is the population standard deviation (divisor N).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Median; the average of the two middle values for an even count.
    pub median: f64,
    /// Population standard deviation.
    pub std: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
}

impl Statistics {
    /// Coefficient of variation in percent: `std / mean * 100`.
    ///
    /// NaN when the mean is zero.
    #[must_use]
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean == 0.0 {
            return f64::NAN;
        }
        self.std / self.mean * 100.0
    }

    /// Spread between the largest and smallest value.
    #[must_use]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Whole-history Pearson coefficients between the three tracked indicators.
///
/// Each entry lies in [-1, 1], or is NaN when undefined (constant input or
/// too few paired observations).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// CPI vs USD/INR.
    pub cpi_usdinr: f64,
    /// CPI vs NIFTY.
    pub cpi_nifty: f64,
    /// USD/INR vs NIFTY.
    pub usdinr_nifty: f64,
}

impl Default for CorrelationMatrix {
    fn default() -> Self {
        Self {
            cpi_usdinr: f64::NAN,
            cpi_nifty: f64::NAN,
            usdinr_nifty: f64::NAN,
        }
    }
}

impl CorrelationMatrix {
    /// Coefficient for an unordered pair; 1.0 for an indicator with itself.
    #[must_use]
    pub fn get(&self, a: Indicator, b: Indicator) -> f64 {
        match Self::slot(a, b) {
            Some(slot) => *self.slot_ref(slot),
            None => 1.0,
        }
    }

    /// Set the coefficient for an unordered pair. Diagonal pairs are ignored.
    pub fn set(&mut self, a: Indicator, b: Indicator, value: f64) {
        if let Some(slot) = Self::slot(a, b) {
            *self.slot_mut(slot) = value;
        }
    }

    /// The three off-diagonal pairs in field order.
    #[must_use]
    pub const fn pairs() -> [(Indicator, Indicator); 3] {
        [
            (Indicator::Cpi, Indicator::UsdInr),
            (Indicator::Cpi, Indicator::Nifty),
            (Indicator::UsdInr, Indicator::Nifty),
        ]
    }

    const fn slot(a: Indicator, b: Indicator) -> Option<u8> {
        match (a, b) {
            (Indicator::Cpi, Indicator::UsdInr) | (Indicator::UsdInr, Indicator::Cpi) => Some(0),
            (Indicator::Cpi, Indicator::Nifty) | (Indicator::Nifty, Indicator::Cpi) => Some(1),
            (Indicator::UsdInr, Indicator::Nifty) | (Indicator::Nifty, Indicator::UsdInr) => {
                Some(2)
            }
            _ => None,
        }
    }

    fn slot_ref(&self, slot: u8) -> &f64 {
        match slot {
            0 => &self.cpi_usdinr,
            1 => &self.cpi_nifty,
            _ => &self.usdinr_nifty,
        }
    }

    fn slot_mut(&mut self, slot: u8) -> &mut f64 {
        match slot {
            0 => &mut self.cpi_usdinr,
            1 => &mut self.cpi_nifty,
            _ => &mut self.usdinr_nifty,
        }
    }
}

/// Rolling correlation values aligned by index with the two input series.
///
/// NaN marks positions without a full trailing window or with zero variance.
pub type RollingCorrelationSeries = Vec<f64>;

/// One histogram bucket shared by two comparison groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    /// Display label of the bucket bounds, e.g. `"1.00 - 10.80"`.
    pub range_label: String,
    /// Inclusive lower bound.
    pub lower: f64,
    /// Upper bound (exclusive except for the last bucket).
    pub upper: f64,
    /// Observations of the first group in this bucket.
    pub count_a: usize,
    /// Observations of the second group in this bucket.
    pub count_b: usize,
}
