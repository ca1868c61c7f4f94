mod core;
mod loader;
mod sections;
mod thresholds;
pub mod validation;

pub use self::core::{OutputConfig, ReportConfig, ReportSettings};
pub use loader::{
    directory_ancestors, find_config, load_config, parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use sections::{
    default_excluded_labels, default_substitutions, AgeSexSection, CategoryGroup,
    CategorySection, ExportLayout, IncomeSection, LabelSubstitution,
};
pub use thresholds::{default_income_thresholds, Thresholds};
