use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::thresholds::Thresholds;

/// Where the data rows sit inside a TableBuilder CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportLayout {
    /// Header lines before the first data row
    #[serde(default = "default_skip_rows")]
    pub skip_rows: usize,

    /// Number of data rows to read after the header
    pub row_count: usize,
}

impl ExportLayout {
    pub const fn new(skip_rows: usize, row_count: usize) -> Self {
        Self {
            skip_rows,
            row_count,
        }
    }

    /// Household income by weekly/annual band, 2021 release
    pub const fn household_income() -> Self {
        Self::new(11, 23)
    }

    /// Highest non-school qualification level
    pub const fn education() -> Self {
        Self::new(11, 12)
    }

    /// Number of bedrooms in private dwelling
    pub const fn dwelling_size() -> Self {
        Self::new(11, 9)
    }

    /// Five-year age groups by sex
    pub const fn age_sex() -> Self {
        Self::new(11, 22)
    }
}

fn default_skip_rows() -> usize {
    11
}

/// Replaces an exact export label before the generic income parser sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSubstitution {
    pub label: String,
    pub replacement: String,
}

impl LabelSubstitution {
    pub fn new(label: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            replacement: replacement.into(),
        }
    }
}

/// "Negative income" becomes an open-low range ending at -1 and
/// "Nil income" the degenerate range 0..0.
pub fn default_substitutions() -> Vec<LabelSubstitution> {
    vec![
        LabelSubstitution::new("Negative income", "less than $0 (-$1 or less)"),
        LabelSubstitution::new("Nil income", "$0 ($0-$0)"),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeSection {
    pub file: PathBuf,

    #[serde(default = "ExportLayout::household_income")]
    pub layout: ExportLayout,

    #[serde(default)]
    pub thresholds: Thresholds,

    #[serde(default = "default_substitutions")]
    pub substitutions: Vec<LabelSubstitution>,
}

impl IncomeSection {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            layout: ExportLayout::household_income(),
            thresholds: Thresholds::default(),
            substitutions: default_substitutions(),
        }
    }
}

/// Labels merged into a single reporting category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub label: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySection {
    pub file: PathBuf,
    pub title: String,
    pub layout: ExportLayout,

    #[serde(default = "default_excluded_labels")]
    pub exclude: Vec<String>,

    #[serde(default)]
    pub groups: Vec<CategoryGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeSexSection {
    pub file: PathBuf,

    #[serde(default = "ExportLayout::age_sex")]
    pub layout: ExportLayout,

    #[serde(default = "default_excluded_labels")]
    pub exclude: Vec<String>,
}

pub fn default_excluded_labels() -> Vec<String> {
    ["Not stated", "Not applicable", "Total"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
