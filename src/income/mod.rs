//! Household income table: parse export labels, coarsen the bands to the
//! configured thresholds, then turn the buckets into percentage rows.

pub mod aggregate;
pub mod parser;
pub mod reconcile;

pub use aggregate::{aggregate, bucket_label};
pub use parser::{parse_row, parse_rows};
pub use reconcile::{absent_thresholds, check_order, partition_runs, reconcile};

use crate::config::{LabelSubstitution, Thresholds};
use crate::core::{IncomeTable, RawIncomeRow, Result};
use crate::formatting::RoundingMode;

/// Inputs that stay fixed for one report run.
#[derive(Debug, Clone, Copy)]
pub struct IncomeSettings<'a> {
    pub thresholds: &'a Thresholds,
    pub substitutions: &'a [LabelSubstitution],
    pub rounding: RoundingMode,
}

/// Run the whole income pipeline over raw export rows.
pub fn build_income_table(rows: &[RawIncomeRow], settings: IncomeSettings<'_>) -> Result<IncomeTable> {
    let (intervals, excluded) = parse_rows(rows, settings.substitutions)?;
    let buckets = reconcile(&intervals, settings.thresholds)?;
    let (rows, total) = aggregate(&buckets, settings.rounding);

    log::info!(
        "Income: {} households in {} buckets ({} summary rows excluded)",
        total,
        rows.len(),
        excluded.len()
    );
    Ok(IncomeTable {
        rows,
        total,
        excluded,
    })
}
