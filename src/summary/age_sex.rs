use crate::core::{AgeSexRow, AgeSexTable, ExportRow};
use crate::formatting::RoundingMode;

/// Age by sex table; every share is of the grand total of persons.
///
/// Export rows carry `(age, male, female)`.
pub fn summarize_age_sex(rows: &[ExportRow], exclude: &[String], rounding: RoundingMode) -> AgeSexTable {
    let kept: Vec<(&str, u64, u64)> = rows
        .iter()
        .map(|row| {
            let male = row.values.first().copied().unwrap_or(0);
            let female = row.values.get(1).copied().unwrap_or(0);
            (row.label.trim(), male, female)
        })
        .filter(|(label, _, _)| !exclude.iter().any(|e| e == label))
        .collect();

    let male_total: u64 = kept.iter().map(|(_, m, _)| m).sum();
    let female_total: u64 = kept.iter().map(|(_, _, f)| f).sum();
    let total = male_total + female_total;

    let rows = kept
        .into_iter()
        .map(|(label, male, female)| AgeSexRow {
            label: label.to_string(),
            male,
            female,
            total: male + female,
            male_pct: rounding.percent(male, total),
            female_pct: rounding.percent(female, total),
            total_pct: rounding.percent(male + female, total),
        })
        .collect();

    let sex_ratio = (female_total > 0).then(|| rounding.percent(male_total, female_total));

    log::info!("Age and sex: {male_total} males, {female_total} females");
    AgeSexTable {
        rows,
        male_total,
        female_total,
        total,
        sex_ratio,
    }
}
