use crate::types::{DataPoint, EcolensError, Indicator};

/// A provider of raw indicator series (an HTTP API, a fallback CSV dataset,
/// fixtures in tests).
///
/// Implementations return points ascending by date with unique dates. The
/// dashboard tries registered sources in order and uses the first success.
pub trait SeriesSource: Send + Sync {
    /// Stable name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Whether this source can serve `indicator`. Unsupported indicators are
    /// skipped without counting as a failure.
    fn supports(&self, indicator: Indicator) -> bool {
        let _ = indicator;
        true
    }

    /// Fetch the full history of `indicator`.
    ///
    /// # Errors
    /// Returns `EcolensError::NotFound` when the source has no such series and
    /// `EcolensError::Source` or `EcolensError::Data` for other failures.
    fn fetch(&self, indicator: Indicator) -> Result<Vec<DataPoint>, EcolensError>;
}
