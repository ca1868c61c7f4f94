use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::sections::{AgeSexSection, CategorySection, IncomeSection};
use crate::formatting::RoundingMode;

/// Root configuration structure, read from `census-report.toml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title, area name and rounding shared by every section
    #[serde(default)]
    pub report: ReportSettings,

    /// Household income export (required)
    pub income: IncomeSection,

    /// Highest qualification export
    #[serde(default)]
    pub education: Option<CategorySection>,

    /// Bedrooms per dwelling export
    #[serde(default)]
    pub dwelling: Option<CategorySection>,

    /// Age by sex export
    #[serde(default)]
    pub age_sex: Option<AgeSexSection>,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Directory relative input paths are resolved against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl ReportConfig {
    pub fn new(income: IncomeSection) -> Self {
        Self {
            report: ReportSettings::default(),
            income,
            education: None,
            dwelling: None,
            age_sex: None,
            output: OutputConfig::default(),
            base_dir: PathBuf::new(),
        }
    }

    /// Resolve an input path from the config against `base_dir`.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    pub fn rounding(&self) -> RoundingMode {
        self.report.rounding
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(default = "default_title")]
    pub title: String,

    /// Statistical area the exports describe, shown under the title
    #[serde(default)]
    pub area: Option<String>,

    #[serde(default)]
    pub rounding: RoundingMode,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            area: None,
            rounding: RoundingMode::default(),
        }
    }
}

fn default_title() -> String {
    "Census Community Profile".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}
