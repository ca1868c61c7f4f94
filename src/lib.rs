// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod income;
pub mod io;
pub mod report;
pub mod summary;

// Re-export commonly used types
pub use crate::core::{
    AgeSexRow, AgeSexTable, CategoryRow, CategoryTable, CensusReport, Error, ExportRow,
    IncomeRow, IncomeTable, ParsedInterval, RawIncomeRow, ReconciledBucket, Result,
};

pub use crate::config::{load_config, ReportConfig, Thresholds};

pub use crate::formatting::RoundingMode;

pub use crate::income::{build_income_table, reconcile, IncomeSettings};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::report::build_report;
