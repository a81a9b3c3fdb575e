//! Deterministic series sources for tests and examples.
//!
//! - [`MockSource`] serves static fixtures for every indicator.
//! - [`DynamicMockSource`] returns whatever each indicator's [`MockBehavior`]
//!   says and counts calls, for exercising source fallback.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use ecolens_core::{DataPoint, EcolensError, Indicator, SeriesSource};

mod fixtures;

/// Fixture series for `indicator`: annual CPI 2014–2023, monthly USD/INR and
/// NIFTY 2019–2023.
#[must_use]
pub fn fixture(indicator: Indicator) -> Vec<DataPoint> {
    fixtures::by_indicator(indicator)
}

/// Mock source for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockSource {
    only: Option<Vec<Indicator>>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// A source serving every indicator.
    #[must_use]
    pub const fn new() -> Self {
        Self { only: None }
    }

    /// A source that supports only the listed indicators.
    #[must_use]
    pub fn only(indicators: &[Indicator]) -> Self {
        Self {
            only: Some(indicators.to_vec()),
        }
    }
}

impl SeriesSource for MockSource {
    fn name(&self) -> &'static str {
        "ecolens-mock"
    }

    fn supports(&self, indicator: Indicator) -> bool {
        self.only.as_ref().is_none_or(|list| list.contains(&indicator))
    }

    fn fetch(&self, indicator: Indicator) -> Result<Vec<DataPoint>, EcolensError> {
        Ok(fixture(indicator))
    }
}

/// Instruction for how a fetch should behave for a given indicator.
#[derive(Clone)]
pub enum MockBehavior {
    /// Return the provided points.
    Return(Vec<DataPoint>),
    /// Return the static fixture.
    Fixture,
    /// Fail with the provided error.
    Fail(EcolensError),
}

/// Scriptable source. Indicators without a rule fail with `NotFound`.
pub struct DynamicMockSource {
    name: &'static str,
    rules: Mutex<HashMap<Indicator, MockBehavior>>,
    calls: AtomicUsize,
}

impl DynamicMockSource {
    /// Create an empty source with the given name.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rules: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Builder-style: set the behavior for one indicator.
    #[must_use]
    pub fn with(self, indicator: Indicator, behavior: MockBehavior) -> Self {
        self.set_behavior(indicator, behavior);
        self
    }

    /// Replace the behavior for one indicator.
    pub fn set_behavior(&self, indicator: Indicator, behavior: MockBehavior) {
        let mut rules = self
            .rules
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        rules.insert(indicator, behavior);
    }

    /// Number of `fetch` calls served so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SeriesSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn fetch(&self, indicator: Indicator) -> Result<Vec<DataPoint>, EcolensError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let behavior = self
            .rules
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .get(&indicator)
            .cloned();
        match behavior {
            Some(MockBehavior::Return(points)) => Ok(points),
            Some(MockBehavior::Fixture) => Ok(fixture(indicator)),
            Some(MockBehavior::Fail(e)) => Err(e),
            None => Err(EcolensError::not_found(format!(
                "series for {indicator} in {}",
                self.name
            ))),
        }
    }
}
