//! Household income label parsing.
//!
//! Export labels look like `$1,000-$1,249 ($52,000-$64,999)`: a weekly band
//! followed by the annual band in parentheses. Only the annual band is kept.
//! Open-ended bands use ` or more` / ` or less` in place of one bound.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::LabelSubstitution;
use crate::core::{Error, ParsedInterval, RawIncomeRow, Result};

/// Rows that carry an income range start with a dollar sign or "less".
static NUMERIC_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\$|less)").unwrap());

/// The last parenthesized group of a label.
static ANNUAL_RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^()]*)\)\s*$").unwrap());

/// `<amount> or more` / `<amount> or less`
static OPEN_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<amount>.+?) or (?P<side>more|less)$").unwrap());

/// Separator between the bounds of a closed range.
static RANGE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"-\$").unwrap());

/// Apply the first matching substitution to an export label.
pub fn substitute<'a>(label: &'a str, substitutions: &'a [LabelSubstitution]) -> &'a str {
    substitutions
        .iter()
        .find(|sub| sub.label == label.trim())
        .map_or(label, |sub| sub.replacement.as_str())
}

/// Whether a (substituted) label describes an income range at all.
pub fn is_income_label(label: &str) -> bool {
    NUMERIC_LABEL.is_match(label.trim())
}

/// Parse one export row; `index` is its position among the data rows.
///
/// Returns `Ok(None)` for summary rows ("Not stated", "Total", ...) and an
/// error for a range label whose amounts cannot be read.
pub fn parse_row(
    row: &RawIncomeRow,
    index: usize,
    substitutions: &[LabelSubstitution],
) -> Result<Option<ParsedInterval>> {
    let label = substitute(&row.label, substitutions).trim();
    if !is_income_label(label) {
        return Ok(None);
    }

    let (low, high) = parse_annual_range(label).map_err(|msg| Error::parse(&row.label, msg))?;
    Ok(Some(ParsedInterval {
        low,
        high,
        count: row.count,
        row: index,
    }))
}

/// Parse every row, keeping source order and the labels that were skipped.
pub fn parse_rows(
    rows: &[RawIncomeRow],
    substitutions: &[LabelSubstitution],
) -> Result<(Vec<ParsedInterval>, Vec<String>)> {
    let mut intervals = Vec::with_capacity(rows.len());
    let mut excluded = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        match parse_row(row, index, substitutions)? {
            Some(interval) => intervals.push(interval),
            None => {
                log::debug!("Skipping non-range income row '{}'", row.label);
                excluded.push(row.label.clone());
            }
        }
    }

    Ok((intervals, excluded))
}

type Bounds = (Option<i64>, Option<i64>);

fn parse_annual_range(label: &str) -> std::result::Result<Bounds, String> {
    let range = ANNUAL_RANGE
        .captures(label)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .ok_or_else(|| "no parenthesized annual range".to_string())?;

    let bounds = if let Some(caps) = OPEN_RANGE.captures(range) {
        let amount = parse_amount(&caps["amount"])?;
        match &caps["side"] {
            "more" => (Some(amount), None),
            _ => (None, Some(amount)),
        }
    } else {
        let mut sides = RANGE_SEPARATOR.splitn(range, 2);
        let low = sides.next().map(parse_amount).transpose()?;
        let high = sides.next().map(parse_amount).transpose()?;
        match (low, high) {
            (Some(low), Some(high)) => (Some(low), Some(high)),
            _ => return Err(format!("'{range}' is not a range")),
        }
    };

    if let (Some(low), Some(high)) = bounds {
        if low > high {
            return Err(format!("low bound {low} exceeds high bound {high}"));
        }
    }
    Ok(bounds)
}

/// Strip currency symbols and thousands separators, then read an integer.
fn parse_amount(text: &str) -> std::result::Result<i64, String> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();
    cleaned
        .parse::<i64>()
        .map_err(|_| format!("invalid amount '{}'", text.trim()))
}
