use crate::core::{IncomeRow, ReconciledBucket};
use crate::formatting::{format_amount, RoundingMode};

/// Display label for a bucket's range.
pub fn bucket_label(bucket: &ReconciledBucket) -> String {
    match (bucket.low, bucket.high) {
        (None, Some(high)) => format!("{} or less", format_amount(high)),
        (Some(low), None) => format!("{} or more", format_amount(low)),
        (Some(low), Some(high)) => format!("{}-{}", format_amount(low), format_amount(high)),
        (None, None) => "All incomes".to_string(),
    }
}

/// Final income rows with each bucket's share of all households.
pub fn aggregate(buckets: &[ReconciledBucket], rounding: RoundingMode) -> (Vec<IncomeRow>, u64) {
    let total: u64 = buckets.iter().map(|b| b.count).sum();
    let rows = buckets
        .iter()
        .map(|bucket| IncomeRow {
            label: bucket_label(bucket),
            count: bucket.count,
            percentage: rounding.percent(bucket.count, total),
        })
        .collect();
    (rows, total)
}
