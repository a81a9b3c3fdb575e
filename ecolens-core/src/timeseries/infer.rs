use chrono::NaiveDate;

use crate::types::{Cadence, DataPoint};

/// Estimate a representative gap (in days) from positive adjacent date
/// differences in the input.
///
/// Prefer the mode (most frequent positive gap); if there is no unique mode,
/// return the lower median. Dates that do not parse as `%Y-%m-%d` are ignored,
/// as is input order. Returns `None` if fewer than two distinct dates parse.
///
/// ```
/// use ecolens_core::DataPoint;
/// use ecolens_core::timeseries::infer::estimate_step_days;
///
/// let pts = ["2024-01-01", "2024-02-01", "2024-03-01", "2024-04-01"]
///     .map(|d| DataPoint::new(d, 1.0));
/// // Gaps: 31, 29, 31 => unique mode is 31
/// assert_eq!(estimate_step_days(&pts), Some(31));
/// ```
#[must_use]
pub fn estimate_step_days(points: &[DataPoint]) -> Option<i64> {
    let mut dates: Vec<NaiveDate> = points
        .iter()
        .filter_map(|p| NaiveDate::parse_from_str(&p.date, "%Y-%m-%d").ok())
        .collect();
    if dates.len() < 2 {
        return None;
    }
    dates.sort_unstable();
    dates.dedup();

    let mut gaps: Vec<i64> = dates
        .windows(2)
        .map(|w| (w[1] - w[0]).num_days())
        .collect();
    if gaps.is_empty() {
        return None;
    }
    gaps.sort_unstable();

    let mut best_gap = gaps[0];
    let mut best_count = 0usize;
    let mut tied = 0usize;
    let mut run_gap = gaps[0];
    let mut run_count = 0usize;
    for &g in gaps.iter().chain(std::iter::once(&i64::MAX)) {
        if g == run_gap {
            run_count += 1;
            continue;
        }
        if run_count > best_count {
            best_gap = run_gap;
            best_count = run_count;
            tied = 1;
        } else if run_count == best_count {
            tied += 1;
        }
        run_gap = g;
        run_count = 1;
    }

    if tied == 1 {
        return Some(best_gap);
    }

    // Lower median
    let mid = gaps.len() / 2;
    if gaps.len() % 2 == 1 {
        Some(gaps[mid])
    } else {
        Some(gaps[mid - 1])
    }
}

/// Classify the sampling cadence of a dated series.
///
/// Gaps of up to a week are daily (weekends and holidays included), 28 to 31
/// days monthly, 365 or 366 days annual; any other representative gap is
/// irregular. Returns `None` if fewer than two distinct dates parse.
#[must_use]
pub fn infer_cadence(points: &[DataPoint]) -> Option<Cadence> {
    let step = estimate_step_days(points)?;
    Some(match step {
        1..=7 => Cadence::Daily,
        28..=31 => Cadence::Monthly,
        365..=366 => Cadence::Annual,
        _ => Cadence::Irregular,
    })
}
