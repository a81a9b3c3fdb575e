use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::types::{DataPoint, MergedRecord, MergedSeries};

/// Merge named series into one record per distinct date.
///
/// - The output holds one record for every date string that appears in any
///   input, sorted ascending.
/// - A record carries the value of each input that has a point on exactly that
///   date string; other variables are absent (never zero, never interpolated).
/// - Inputs may differ in length, date set, and sampling frequency.
/// - If one input repeats a date, its first point for that date wins.
/// - If two inputs share a name, the later input fills only dates the earlier
///   one left absent.
///
/// Empty input yields an empty series.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
pub fn merge<I, K>(series: I) -> MergedSeries
where
    I: IntoIterator<Item = (K, Vec<DataPoint>)>,
    K: Into<String>,
{
    let mut by_date: BTreeMap<String, MergedRecord> = BTreeMap::new();
    for (name, points) in series {
        insert_points(&mut by_date, &name.into(), points);
    }
    by_date.into_values().collect()
}

/// Add one named series to an already-merged series.
///
/// Follows the same rules as [`merge`]: new dates get new records, existing
/// records gain the variable where the series has a point, and values already
/// present for `name` are kept.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip(base, points), fields(base_len = base.len(), points = points.len()))
)]
pub fn merge_into(base: &MergedSeries, name: &str, points: Vec<DataPoint>) -> MergedSeries {
    let mut by_date: BTreeMap<String, MergedRecord> = base
        .iter()
        .map(|r| (r.date().to_string(), r.clone()))
        .collect();
    insert_points(&mut by_date, name, points);
    by_date.into_values().collect()
}

fn insert_points(by_date: &mut BTreeMap<String, MergedRecord>, name: &str, points: Vec<DataPoint>) {
    for p in points {
        let record = match by_date.entry(p.date) {
            Entry::Vacant(v) => {
                let date = v.key().clone();
                v.insert(MergedRecord::new(date))
            }
            Entry::Occupied(o) => o.into_mut(),
        };
        if !record.contains(name) {
            record.insert(name, p.value);
        }
    }
}
