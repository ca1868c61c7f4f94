use crate::config::CategoryGroup;
use crate::core::{CategoryRow, CategoryTable, ExportRow};
use crate::formatting::RoundingMode;

/// Group label for an export label, or the label itself when ungrouped.
fn group_of<'a>(label: &'a str, groups: &'a [CategoryGroup]) -> &'a str {
    groups
        .iter()
        .find(|group| group.members.iter().any(|m| m == label))
        .map_or(label, |group| group.label.as_str())
}

/// Sum counts per category and compute each category's share.
///
/// Excluded labels are dropped before totalling. Categories keep the order
/// in which their first member appears in the export.
pub fn summarize(
    title: &str,
    rows: &[ExportRow],
    exclude: &[String],
    groups: &[CategoryGroup],
    rounding: RoundingMode,
) -> CategoryTable {
    let mut sums: Vec<(String, u64)> = Vec::new();

    for row in rows {
        let label = row.label.trim();
        if exclude.iter().any(|e| e == label) {
            continue;
        }
        let category = group_of(label, groups);
        match sums.iter_mut().find(|(name, _)| name == category) {
            Some((_, count)) => *count += row.count(),
            None => sums.push((category.to_string(), row.count())),
        }
    }

    let total: u64 = sums.iter().map(|(_, count)| count).sum();
    let rows = sums
        .into_iter()
        .map(|(label, count)| CategoryRow {
            label,
            count,
            percentage: rounding.percent(count, total),
        })
        .collect();

    log::info!("{title}: {total} counted");
    CategoryTable {
        title: title.to_string(),
        rows,
        total,
    }
}
