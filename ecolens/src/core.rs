use std::collections::BTreeMap;
use std::sync::Arc;

use ecolens_core::{
    AnalyticsConfig, DataPoint, EcolensError, Indicator, RollingWindow, SeriesSource,
};

/// Dashboard analytics over the latest indicator series.
///
/// Holds the raw series per indicator plus the analytics parameters; every
/// view is recomputed in full from them on each call.
pub struct Ecolens {
    pub(crate) sources: Vec<Arc<dyn SeriesSource>>,
    pub(crate) series: BTreeMap<Indicator, Vec<DataPoint>>,
    pub(crate) cfg: AnalyticsConfig,
}

/// Builder for constructing an `Ecolens` instance with custom configuration.
pub struct EcolensBuilder {
    sources: Vec<Arc<dyn SeriesSource>>,
    series: BTreeMap<Indicator, Vec<DataPoint>>,
    cfg: AnalyticsConfig,
}

impl Default for EcolensBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EcolensBuilder {
    /// Create a new builder with the default analytics parameters:
    /// moving averages over 3, 6 and 12 periods, a 12-period rolling
    /// correlation window, 10 histogram buckets, and at least 2 paired points
    /// per correlation.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            series: BTreeMap::new(),
            cfg: AnalyticsConfig::default(),
        }
    }

    /// Register a series source.
    ///
    /// Sources are tried in registration order by [`Ecolens::fetch`]; the first
    /// success wins. Registering the same source twice is not deduplicated.
    #[must_use]
    pub fn with_source(mut self, s: Arc<dyn SeriesSource>) -> Self {
        self.sources.push(s);
        self
    }

    /// Register already-fetched points for an indicator, replacing any earlier
    /// registration. [`Ecolens::load`] does not refetch registered indicators.
    #[must_use]
    pub fn with_series(mut self, indicator: Indicator, points: Vec<DataPoint>) -> Self {
        self.series.insert(indicator, points);
        self
    }

    /// Replace every analytics parameter at once.
    #[must_use]
    pub fn config(mut self, cfg: AnalyticsConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Moving-average windows added to each indicator column.
    #[must_use]
    pub fn moving_average_windows(mut self, windows: &[usize]) -> Self {
        self.cfg.moving_average_windows = windows.to_vec();
        self
    }

    /// Window for rolling correlation.
    #[must_use]
    pub const fn rolling_window(mut self, window: RollingWindow) -> Self {
        self.cfg.rolling_window = window;
        self
    }

    /// Number of histogram buckets.
    #[must_use]
    pub const fn histogram_bins(mut self, bins: usize) -> Self {
        self.cfg.histogram_bins = bins;
        self
    }

    /// Minimum paired observations before a correlation is attempted.
    #[must_use]
    pub const fn min_points(mut self, n: usize) -> Self {
        self.cfg.min_points = n;
        self
    }

    /// Build the `Ecolens` instance.
    ///
    /// # Errors
    /// - Returns `InvalidArg` if the analytics parameters are out of range.
    /// - Returns `Data` if a registered series is not strictly ascending by date.
    pub fn build(self) -> Result<Ecolens, EcolensError> {
        self.cfg.validate()?;
        for (indicator, points) in &self.series {
            ensure_ascending(*indicator, points)?;
        }
        Ok(Ecolens {
            sources: self.sources,
            series: self.series,
            cfg: self.cfg,
        })
    }
}

/// Ensure points are strictly ascending by date (which also rules out duplicates).
///
/// # Errors
/// Returns `EcolensError::Data` naming the first offending date.
pub(crate) fn ensure_ascending(
    indicator: Indicator,
    points: &[DataPoint],
) -> Result<(), EcolensError> {
    for w in points.windows(2) {
        if w[0].date >= w[1].date {
            return Err(EcolensError::Data(format!(
                "{indicator} series not strictly ascending at {} -> {}",
                w[0].date, w[1].date
            )));
        }
    }
    Ok(())
}

pub(crate) fn tag_err(source_name: &str, e: EcolensError) -> EcolensError {
    match e {
        e @ (EcolensError::NotFound { .. }
        | EcolensError::Source { .. }
        | EcolensError::AllSourcesFailed(_)) => e,
        other => EcolensError::source(source_name, other.to_string()),
    }
}

impl Ecolens {
    /// Start building a new `Ecolens` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use ecolens::{Ecolens, Indicator, RollingWindow};
    ///
    /// let mut lens = Ecolens::builder()
    ///     .with_source(Arc::new(HttpSource::new("https://...")))
    ///     .with_source(Arc::new(ecolens::csv::CsvDirSource::new("data/")))
    ///     .rolling_window(RollingWindow::Long)
    ///     .build()?;
    /// let failures = lens.load();
    /// let report = lens.report();
    /// ```
    #[must_use]
    pub fn builder() -> EcolensBuilder {
        EcolensBuilder::new()
    }

    /// Analytics parameters in effect.
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.cfg
    }

    /// Points currently held for `indicator`.
    #[must_use]
    pub fn series(&self, indicator: Indicator) -> Option<&[DataPoint]> {
        self.series.get(&indicator).map(Vec::as_slice)
    }

    /// Indicators with data, in `Indicator::ALL` order.
    #[must_use]
    pub fn loaded(&self) -> Vec<Indicator> {
        self.series.keys().copied().collect()
    }

    /// Replace the points for an indicator (e.g. after a refresh).
    ///
    /// # Errors
    /// Returns `Data` if `points` is not strictly ascending by date.
    pub fn set_series(
        &mut self,
        indicator: Indicator,
        points: Vec<DataPoint>,
    ) -> Result<(), EcolensError> {
        ensure_ascending(indicator, &points)?;
        self.series.insert(indicator, points);
        Ok(())
    }

    /// Fetch every indicator that has no data yet from the registered sources.
    ///
    /// Returns the failures; indicators that loaded are available immediately
    /// even if others failed.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "ecolens::core::load", skip(self), fields(sources = self.sources.len()))
    )]
    pub fn load(&mut self) -> Vec<EcolensError> {
        let mut failures = Vec::new();
        for indicator in Indicator::ALL {
            if self.series.contains_key(&indicator) {
                continue;
            }
            match self.fetch(indicator) {
                Ok(points) => {
                    self.series.insert(indicator, points);
                }
                Err(e) => failures.push(e),
            }
        }
        failures
    }

    /// Fetch one indicator from the registered sources in order.
    ///
    /// - Sources that do not support the indicator are skipped.
    /// - The first source returning a strictly ascending series wins; a
    ///   misordered series counts as that source's failure.
    /// - If every source reports `NotFound`, the result is `NotFound`.
    ///
    /// # Errors
    /// - `NotFound` if no registered source supports the indicator, or all
    ///   attempted sources reported it missing.
    /// - `AllSourcesFailed` with each source's error otherwise.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "ecolens::core::fetch", skip(self), fields(indicator = %indicator))
    )]
    pub fn fetch(&self, indicator: Indicator) -> Result<Vec<DataPoint>, EcolensError> {
        let mut attempted_any = false;
        let mut errors: Vec<EcolensError> = Vec::new();

        for s in &self.sources {
            if !s.supports(indicator) {
                continue;
            }
            attempted_any = true;
            let result = s
                .fetch(indicator)
                .and_then(|points| ensure_ascending(indicator, &points).map(|()| points));
            match result {
                Ok(points) => return Ok(points),
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(source = s.name(), indicator = %indicator, error = %e, "source failed; trying next");
                    errors.push(tag_err(s.name(), e));
                }
            }
        }

        if !attempted_any {
            return Err(EcolensError::not_found(format!(
                "source supporting {indicator}"
            )));
        }
        if errors
            .iter()
            .all(|e| matches!(e, EcolensError::NotFound { .. }))
        {
            return Err(EcolensError::not_found(format!("series for {indicator}")));
        }
        Err(EcolensError::AllSourcesFailed(errors))
    }
}
