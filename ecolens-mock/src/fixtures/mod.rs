//! Static fixture series. Monthly series carry first-of-month dates; the
//! annual CPI series uses `YYYY-01-01` so it lines up with January points.

mod cpi;
mod nifty;
mod usdinr;

use ecolens_core::{DataPoint, Indicator};

pub fn by_indicator(indicator: Indicator) -> Vec<DataPoint> {
    let rows: &[(&str, f64)] = match indicator {
        Indicator::Cpi => cpi::ROWS,
        Indicator::UsdInr => usdinr::ROWS,
        Indicator::Nifty => nifty::ROWS,
    };
    rows.iter().map(|(d, v)| DataPoint::new(*d, *v)).collect()
}
