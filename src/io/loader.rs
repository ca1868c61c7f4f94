//! Reading census TableBuilder CSV exports.
//!
//! An export starts with a fixed block of title and header records, then the
//! data rows (label first, counts after), then footnotes. Which records hold
//! data is fixed per table by an [`ExportLayout`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::ExportLayout;
use crate::core::{Error, ExportRow, RawIncomeRow, Result};

/// Read the layout's data rows, each with `value_columns` counts.
pub fn read_export<R: Read>(
    reader: R,
    layout: &ExportLayout,
    value_columns: usize,
    source: &Path,
) -> Result<Vec<ExportRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::with_capacity(layout.row_count);
    for (index, record) in csv_reader
        .records()
        .skip(layout.skip_rows)
        .take(layout.row_count)
        .enumerate()
    {
        let record = record?;
        let line = layout.skip_rows + index + 1;
        rows.push(parse_record(&record, value_columns, line, source)?);
    }

    if rows.len() < layout.row_count {
        return Err(Error::layout(
            source,
            format!(
                "expected {} data rows after {} header rows, found {}",
                layout.row_count,
                layout.skip_rows,
                rows.len()
            ),
        ));
    }
    Ok(rows)
}

fn parse_record(
    record: &csv::StringRecord,
    value_columns: usize,
    line: usize,
    source: &Path,
) -> Result<ExportRow> {
    if record.len() < value_columns + 1 {
        return Err(Error::layout(
            source,
            format!(
                "record {line} has {} fields, expected at least {}",
                record.len(),
                value_columns + 1
            ),
        ));
    }

    let values = (1..=value_columns)
        .map(|i| parse_count(&record[i]).ok_or_else(|| {
            Error::layout(source, format!("record {line}: invalid count '{}'", &record[i]))
        }))
        .collect::<Result<Vec<u64>>>()?;

    Ok(ExportRow::new(&record[0], values))
}

fn parse_count(text: &str) -> Option<u64> {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    cleaned.trim().parse().ok()
}

/// Open and read an export file.
pub fn load_export(path: &Path, layout: &ExportLayout, value_columns: usize) -> Result<Vec<ExportRow>> {
    let file = File::open(path).map_err(|e| Error::from_io(e, path))?;
    let rows = read_export(file, layout, value_columns, path)?;
    log::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load the household income export as `(label, count)` rows.
pub fn load_income_rows(path: &Path, layout: &ExportLayout) -> Result<Vec<RawIncomeRow>> {
    Ok(load_export(path, layout, 1)?
        .into_iter()
        .map(|row| {
            let count = row.count();
            RawIncomeRow::new(row.label, count)
        })
        .collect())
}
