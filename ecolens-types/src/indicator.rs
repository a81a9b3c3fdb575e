use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EcolensError;

/// Economic indicators tracked by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    /// Consumer price index (inflation).
    Cpi,
    /// USD/INR exchange rate.
    UsdInr,
    /// NIFTY 50 equity index.
    Nifty,
}

impl Indicator {
    /// All indicators, in correlation-matrix order.
    pub const ALL: [Self; 3] = [Self::Cpi, Self::UsdInr, Self::Nifty];

    /// Stable variable name used as the merged-record key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Cpi => "cpi",
            Self::UsdInr => "usdinr",
            Self::Nifty => "nifty",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cpi => "Consumer Price Index",
            Self::UsdInr => "USD/INR",
            Self::Nifty => "NIFTY 50",
        }
    }

    /// Position of this indicator in [`Indicator::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Cpi => 0,
            Self::UsdInr => 1,
            Self::Nifty => 2,
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Indicator {
    type Err = EcolensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpi" => Ok(Self::Cpi),
            "usdinr" | "usd_inr" | "usd/inr" => Ok(Self::UsdInr),
            "nifty" | "nifty50" => Ok(Self::Nifty),
            other => Err(EcolensError::InvalidArg(format!("unknown indicator: {other}"))),
        }
    }
}
