use ecolens_core::{
    CorrelationMatrix, CorrelationReport, DashboardReport, DataPoint, EcolensError, HistogramBin,
    Indicator, IndicatorSummary, MergedSeries, RollingCorrelation, correlation_report,
    infer_cadence, merge, merge_into, moving_average, moving_average_key, pct_change,
    pct_change_series, rolling_correlate, stats,
};

use crate::Ecolens;

impl Ecolens {
    fn points(&self, indicator: Indicator) -> Result<&[DataPoint], EcolensError> {
        self.series(indicator)
            .ok_or_else(|| EcolensError::not_found(format!("series for {indicator}")))
    }

    fn raw_merged(&self) -> MergedSeries {
        merge(
            self.series
                .iter()
                .map(|(indicator, points)| (indicator.key(), points.clone())),
        )
    }

    /// Date-aligned view of every loaded indicator plus one
    /// `<key>_ma<window>` column per configured moving-average window.
    ///
    /// Moving averages run over each indicator's own observations, so a date
    /// contributed only by another indicator does not break a window. The
    /// average is stored on the date that closes its window.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a configured window is zero.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "ecolens::analytics::merged", skip(self))
    )]
    pub fn merged(&self) -> Result<MergedSeries, EcolensError> {
        let mut out = self.raw_merged();
        for (indicator, points) in &self.series {
            let key = indicator.key();
            let own = merge([(key, points.clone())]);
            for &window in &self.cfg.moving_average_windows {
                let ma_key = moving_average_key(key, window);
                let averaged = moving_average(&own, key, window)?;
                let column: Vec<DataPoint> = averaged
                    .iter()
                    .filter_map(|r| r.get(&ma_key).map(|v| DataPoint::new(r.date(), v)))
                    .collect();
                out = merge_into(&out, &ma_key, column);
            }
        }
        Ok(out)
    }

    /// Summary panel for one indicator.
    ///
    /// # Errors
    /// - `NotFound` if the indicator has no data loaded.
    /// - `InsufficientData` if its series is empty.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "ecolens::analytics::summary", skip(self), fields(indicator = %indicator))
    )]
    pub fn summary(&self, indicator: Indicator) -> Result<IndicatorSummary, EcolensError> {
        let points = self.points(indicator)?;
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let s = stats(&values)?;
        let latest = points
            .last()
            .cloned()
            .ok_or_else(|| EcolensError::insufficient(format!("{indicator} summary"), 1, 0))?;
        let latest_change = match points {
            [.., prev, last] => Some(pct_change(prev.value, last.value)),
            _ => None,
        };

        Ok(IndicatorSummary {
            indicator,
            count: points.len(),
            coefficient_of_variation: s.coefficient_of_variation(),
            stats: s,
            latest,
            latest_change,
            cadence: infer_cadence(points),
        })
    }

    /// Whole-history correlation of every indicator pair over their shared dates.
    ///
    /// Pairs with fewer than `min_points` shared dates (including pairs whose
    /// indicators are not loaded) stay NaN and are reported as warnings.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "ecolens::analytics::correlations", skip(self))
    )]
    pub fn correlations(&self) -> CorrelationReport {
        correlation_report(&self.raw_merged(), self.cfg.min_points)
    }

    /// Rolling correlation of two indicators over their shared dates, using
    /// the configured window. Entries before the first full window are NaN.
    ///
    /// # Errors
    /// - `NotFound` if either indicator has no data loaded.
    /// - `InvalidArg` if the configured window is below two.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "ecolens::analytics::rolling", skip(self), fields(left = %a, right = %b))
    )]
    pub fn rolling(&self, a: Indicator, b: Indicator) -> Result<RollingCorrelation, EcolensError> {
        let left = self.points(a)?;
        let right = self.points(b)?;
        let paired = merge([(a.key(), left.to_vec()), (b.key(), right.to_vec())])
            .paired(a.key(), b.key());
        let window = self.cfg.rolling_window.periods();
        let values = rolling_correlate(&paired.left, &paired.right, window)?;
        Ok(RollingCorrelation {
            left: a,
            right: b,
            window,
            dates: paired.dates,
            values,
        })
    }

    /// Histogram of two indicators' period-over-period percentage changes on a
    /// shared range, ignoring non-finite changes (moves from a zero level).
    ///
    /// # Errors
    /// - `NotFound` if either indicator has no data loaded.
    /// - `InsufficientData` if neither indicator has a finite change.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "ecolens::analytics::return_histogram", skip(self), fields(left = %a, right = %b))
    )]
    pub fn return_histogram(
        &self,
        a: Indicator,
        b: Indicator,
    ) -> Result<Vec<HistogramBin>, EcolensError> {
        let changes = |points: &[DataPoint]| -> Vec<f64> {
            pct_change_series(points)
                .into_iter()
                .map(|p| p.value)
                .filter(|v| v.is_finite())
                .collect()
        };
        let left = changes(self.points(a)?);
        let right = changes(self.points(b)?);
        ecolens_core::histogram(&left, &right, self.cfg.histogram_bins)
    }

    /// Everything a dashboard page shows, recomputed from the current series.
    ///
    /// Never fails: each view that cannot be computed is left empty and its
    /// error is recorded in `warnings`. Rolling correlations are included for
    /// loaded pairs with at least one full window of shared dates.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "ecolens::analytics::report", skip(self))
    )]
    pub fn report(&self) -> DashboardReport {
        let mut warnings = Vec::new();

        let merged = self.merged().unwrap_or_else(|e| {
            warnings.push(e);
            MergedSeries::new()
        });

        let mut summaries = Vec::new();
        for indicator in self.loaded() {
            match self.summary(indicator) {
                Ok(s) => summaries.push(s),
                Err(e) => warnings.push(e),
            }
        }

        let correlations = self.correlations();
        warnings.extend(correlations.warnings.iter().cloned());

        let window = self.cfg.rolling_window.periods();
        let mut rolling = Vec::new();
        for (a, b) in CorrelationMatrix::pairs() {
            if !(self.series.contains_key(&a) && self.series.contains_key(&b)) {
                continue;
            }
            match self.rolling(a, b) {
                Ok(r) if r.dates.len() >= window => rolling.push(r),
                Ok(r) => warnings.push(EcolensError::insufficient(
                    format!("rolling correlation of {a} and {b}"),
                    window,
                    r.dates.len(),
                )),
                Err(e) => warnings.push(e),
            }
        }

        let return_histogram = match self.return_histogram(Indicator::UsdInr, Indicator::Nifty) {
            Ok(bins) => Some(bins),
            Err(e) => {
                warnings.push(e);
                None
            }
        };

        DashboardReport {
            merged,
            summaries,
            correlations,
            rolling,
            return_histogram,
            warnings,
        }
    }
}
