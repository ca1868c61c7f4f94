//! Coarsening parsed income bands to the configured thresholds.
//!
//! The export's bands are finer than the reporting thresholds. Consecutive
//! bands are merged into runs, in source order:
//!
//! - a band whose low bound is a threshold opens a new run;
//! - otherwise a band whose high bound is a threshold closes the current run
//!   after itself;
//! - every other band joins the current run.
//!
//! A degenerate band (`low == high`, e.g. "Nil income" at 0) on a threshold
//! only opens a run, so the bands above it join it.
//!
//! Thresholds that never appear as a band edge are skipped, which leaves the
//! surrounding bucket coarser than requested.

use std::ops::Range;

use crate::config::Thresholds;
use crate::core::{Error, ParsedInterval, ReconciledBucket, Result};

/// Fail unless the rows are in ascending income order.
///
/// Low bounds must be non-decreasing, only the first row may be open below
/// and only the last row may be open above.
pub fn check_order(intervals: &[ParsedInterval]) -> Result<()> {
    let last = intervals.len().saturating_sub(1);

    for (i, interval) in intervals.iter().enumerate() {
        let row = interval.row;
        match (interval.low, interval.high) {
            (None, None) => {
                return Err(Error::ordering(row, "interval has neither a low nor a high bound"))
            }
            (None, Some(_)) if i != 0 => {
                return Err(Error::ordering(row, "only the first range may be open below"))
            }
            (Some(_), None) if i != last => {
                return Err(Error::ordering(row, "only the last range may be open above"))
            }
            _ => {}
        }
    }

    for pair in intervals.windows(2) {
        // None sorts below every amount, matching an open low bound
        if pair[1].low < pair[0].low {
            return Err(Error::ordering(
                pair[1].row,
                format!(
                    "low bound {:?} is below the previous row's {:?}",
                    pair[1].low, pair[0].low
                ),
            ));
        }
    }
    Ok(())
}

fn opens_run(interval: &ParsedInterval, thresholds: &Thresholds) -> bool {
    interval.low.is_some_and(|low| thresholds.contains(low))
}

fn closes_run(interval: &ParsedInterval, thresholds: &Thresholds) -> bool {
    match interval.high {
        Some(high) => interval.low != Some(high) && thresholds.contains(high),
        None => false,
    }
}

/// Index ranges of the runs that become one bucket each, in source order.
pub fn partition_runs(intervals: &[ParsedInterval], thresholds: &Thresholds) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = 0;

    for (i, interval) in intervals.iter().enumerate() {
        if i > start && opens_run(interval, thresholds) {
            runs.push(start..i);
            start = i;
        }
        if closes_run(interval, thresholds) {
            runs.push(start..i + 1);
            start = i + 1;
        }
    }
    if start < intervals.len() {
        runs.push(start..intervals.len());
    }
    runs
}

fn merge_run(run: &[ParsedInterval]) -> Option<ReconciledBucket> {
    let first = run.first()?;
    let last = run.last()?;
    Some(ReconciledBucket {
        low: first.low,
        high: last.high,
        count: run.iter().map(|interval| interval.count).sum(),
    })
}

/// Thresholds that no interval uses as a low or high bound.
pub fn absent_thresholds(intervals: &[ParsedInterval], thresholds: &Thresholds) -> Vec<i64> {
    thresholds
        .values()
        .iter()
        .copied()
        .filter(|&t| {
            !intervals
                .iter()
                .any(|interval| interval.low == Some(t) || interval.high == Some(t))
        })
        .collect()
}

/// Merge ordered intervals into buckets whose edges sit on thresholds.
pub fn reconcile(
    intervals: &[ParsedInterval],
    thresholds: &Thresholds,
) -> Result<Vec<ReconciledBucket>> {
    check_order(intervals)?;

    for threshold in absent_thresholds(intervals, thresholds) {
        log::debug!("Threshold {threshold} is not a band edge in the export; skipping");
    }

    let buckets: Vec<ReconciledBucket> = partition_runs(intervals, thresholds)
        .into_iter()
        .filter_map(|run| merge_run(&intervals[run]))
        .collect();

    log::debug!(
        "Reconciled {} income bands into {} buckets",
        intervals.len(),
        buckets.len()
    );
    Ok(buckets)
}
