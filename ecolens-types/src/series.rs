//! Series data model: raw observations and date-aligned merged records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single dated observation.
///
/// `date` is an ISO `YYYY-MM-DD` string (annual data uses `YYYY-MM-01`). Within
/// one series points are ascending by date and dates are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// ISO calendar date of the observation.
    pub date: String,
    /// Observed value.
    pub value: f64,
}

impl DataPoint {
    /// Build a point from a date string and a value.
    pub fn new(date: impl Into<String>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
        }
    }
}

/// One date of a merged series: the date plus every variable observed on it.
///
/// Variables without an observation on this date are absent, never zero.
/// Serializes flat, e.g. `{"date":"2024-01-01","cpi":5.1,"nifty":21731.4}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    date: String,
    #[serde(flatten)]
    values: BTreeMap<String, f64>,
}

impl MergedRecord {
    /// Create a record for `date` with no variables present.
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            values: BTreeMap::new(),
        }
    }

    /// Date key of this record.
    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Value of `key`, or `None` when absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Whether `key` is present on this record.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Set `key` to `value`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(key.into(), value)
    }

    /// Remove `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.values.remove(key)
    }

    /// Present variables in key order.
    pub fn values(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of present variables.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.values.len()
    }
}

/// Paired observations of two variables on the dates where both are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairedValues {
    /// Dates on which both variables are present.
    pub dates: Vec<String>,
    /// Values of the first variable.
    pub left: Vec<f64>,
    /// Values of the second variable.
    pub right: Vec<f64>,
}

impl PairedValues {
    /// Number of paired observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True when no date has both variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Date-ordered sequence of merged records.
///
/// Invariant: dates are strictly ascending, so no two records share a date.
/// Every constructor enforces it by sorting and keeping the first record for a
/// repeated date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<MergedRecord>", into = "Vec<MergedRecord>")]
pub struct MergedSeries {
    records: Vec<MergedRecord>,
}

impl MergedSeries {
    /// An empty series.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of records (distinct dates).
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the series has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in ascending date order.
    #[must_use]
    pub fn records(&self) -> &[MergedRecord] {
        &self.records
    }

    /// Mutable access to records. Dates cannot be changed through this view.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, MergedRecord> {
        self.records.iter_mut()
    }

    /// Iterate records in ascending date order.
    pub fn iter(&self) -> std::slice::Iter<'_, MergedRecord> {
        self.records.iter()
    }

    /// Look up the record for an exact date string.
    #[must_use]
    pub fn get(&self, date: &str) -> Option<&MergedRecord> {
        self.records
            .binary_search_by(|r| r.date.as_str().cmp(date))
            .ok()
            .map(|i| &self.records[i])
    }

    /// Per-record value of `key`, `None` where absent. Same length as the series.
    #[must_use]
    pub fn column(&self, key: &str) -> Vec<Option<f64>> {
        self.records.iter().map(|r| r.get(key)).collect()
    }

    /// Defined values of `key` in date order, skipping absent records.
    #[must_use]
    pub fn values(&self, key: &str) -> Vec<f64> {
        self.records.iter().filter_map(|r| r.get(key)).collect()
    }

    /// Every variable name present on at least one record, sorted.
    #[must_use]
    pub fn variables(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .records
            .iter()
            .flat_map(|r| r.values.keys().cloned())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Paired values of `a` and `b` on the dates where both are present.
    #[must_use]
    pub fn paired(&self, a: &str, b: &str) -> PairedValues {
        let mut out = PairedValues::default();
        for r in &self.records {
            if let (Some(x), Some(y)) = (r.get(a), r.get(b)) {
                out.dates.push(r.date.clone());
                out.left.push(x);
                out.right.push(y);
            }
        }
        out
    }
}

impl FromIterator<MergedRecord> for MergedSeries {
    fn from_iter<T: IntoIterator<Item = MergedRecord>>(iter: T) -> Self {
        let mut records: Vec<MergedRecord> = iter.into_iter().collect();
        // Stable sort keeps the first record of a repeated date ahead of later ones.
        records.sort_by(|a, b| a.date.cmp(&b.date));
        records.dedup_by(|later, earlier| later.date == earlier.date);
        Self { records }
    }
}

impl From<Vec<MergedRecord>> for MergedSeries {
    fn from(records: Vec<MergedRecord>) -> Self {
        records.into_iter().collect()
    }
}

impl From<MergedSeries> for Vec<MergedRecord> {
    fn from(series: MergedSeries) -> Self {
        series.records
    }
}

impl<'a> IntoIterator for &'a MergedSeries {
    type Item = &'a MergedRecord;
    type IntoIter = std::slice::Iter<'a, MergedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
