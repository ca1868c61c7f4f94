pub mod errors;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use errors::{Error, Result, ResultExt};

/// A data row of any export: the row label and its count columns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub label: String,
    pub values: Vec<u64>,
}

impl ExportRow {
    pub fn new(label: impl Into<String>, values: Vec<u64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// First count column, 0 when the row has none.
    pub fn count(&self) -> u64 {
        self.values.first().copied().unwrap_or(0)
    }
}

/// One `(label, count)` row of the household income export.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawIncomeRow {
    pub label: String,
    pub count: u64,
}

impl RawIncomeRow {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Annual income interval read from a single export label.
///
/// `None` on one side marks an open-ended ("or less" / "or more") range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedInterval {
    pub low: Option<i64>,
    pub high: Option<i64>,
    pub count: u64,
    /// Position of the source row among the export's data rows
    pub row: usize,
}

/// A run of consecutive intervals merged so its edges sit on thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledBucket {
    pub low: Option<i64>,
    pub high: Option<i64>,
    pub count: u64,
}

impl From<ParsedInterval> for ReconciledBucket {
    fn from(interval: ParsedInterval) -> Self {
        Self {
            low: interval.low,
            high: interval.high,
            count: interval.count,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncomeRow {
    pub label: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncomeTable {
    pub rows: Vec<IncomeRow>,
    pub total: u64,
    /// Labels dropped by the label filter ("Not stated", totals, ...)
    pub excluded: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryRow {
    pub label: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryTable {
    pub title: String,
    pub rows: Vec<CategoryRow>,
    pub total: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgeSexRow {
    pub label: String,
    pub male: u64,
    pub female: u64,
    pub total: u64,
    pub male_pct: f64,
    pub female_pct: f64,
    pub total_pct: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgeSexTable {
    pub rows: Vec<AgeSexRow>,
    pub male_total: u64,
    pub female_total: u64,
    pub total: u64,
    /// Males per 100 females
    pub sex_ratio: Option<f64>,
}

/// Everything one report run produces, ready for a writer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CensusReport {
    pub title: String,
    pub area: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub income: IncomeTable,
    pub education: Option<CategoryTable>,
    pub dwelling: Option<CategoryTable>,
    pub age_sex: Option<AgeSexTable>,
}
