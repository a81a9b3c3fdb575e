//! `date,value` CSV datasets used as a fallback when live sources are down.
//!
//! One file per indicator with a header row:
//!
//! ```text
//! date,value
//! 2019-01-01,70.12
//! 2019-02-01,71.05
//! ```

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use ecolens_core::{DataPoint, EcolensError, Indicator, SeriesSource};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    value: f64,
}

/// Parse a `date,value` CSV into points.
///
/// Dates must be `YYYY-MM-DD` calendar dates, strictly ascending.
///
/// # Errors
/// Returns `EcolensError::Data` for malformed rows, unparseable dates, and
/// out-of-order or duplicate dates.
pub fn read_series<R: Read>(reader: R) -> Result<Vec<DataPoint>, EcolensError> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(::csv::Trim::All)
        .from_reader(reader);

    let mut points: Vec<DataPoint> = Vec::new();
    for (idx, row) in rdr.deserialize::<CsvRow>().enumerate() {
        // The header is line 1.
        let line = idx + 2;
        let row = row.map_err(|e| EcolensError::Data(format!("csv line {line}: {e}")))?;
        NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
            .map_err(|e| EcolensError::Data(format!("csv line {line}: date '{}': {e}", row.date)))?;
        if let Some(prev) = points.last()
            && prev.date >= row.date
        {
            return Err(EcolensError::Data(format!(
                "csv line {line}: date {} does not follow {}",
                row.date, prev.date
            )));
        }
        points.push(DataPoint::new(row.date, row.value));
    }
    Ok(points)
}

/// Read a `date,value` CSV file.
///
/// # Errors
/// Returns `NotFound` if the file does not exist, `Data` if it cannot be read
/// or parsed.
pub fn load_series(path: impl AsRef<Path>) -> Result<Vec<DataPoint>, EcolensError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => EcolensError::not_found(path.display().to_string()),
        _ => EcolensError::Data(format!("{}: {e}", path.display())),
    })?;
    read_series(file)
}

/// A [`SeriesSource`] backed by a directory of `<key>.csv` files
/// (`cpi.csv`, `usdinr.csv`, `nifty.csv`).
#[derive(Debug, Clone)]
pub struct CsvDirSource {
    dir: PathBuf,
}

impl CsvDirSource {
    /// Source reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File backing `indicator`.
    #[must_use]
    pub fn path_for(&self, indicator: Indicator) -> PathBuf {
        self.dir.join(format!("{}.csv", indicator.key()))
    }
}

impl SeriesSource for CsvDirSource {
    fn name(&self) -> &'static str {
        "csv"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "ecolens::csv::fetch", skip(self), fields(indicator = %indicator))
    )]
    fn fetch(&self, indicator: Indicator) -> Result<Vec<DataPoint>, EcolensError> {
        load_series(self.path_for(indicator))
    }
}
