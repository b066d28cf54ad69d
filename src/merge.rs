//! Map/reduce over disjoint blocks of a range.
//!
//! Each worker only knows the minimum witness inside its own block, so the
//! per-block results are not globally minimal until they are reduced with
//! [`merge_by_minimum`]. Unioning the per-block maps without that step lets a
//! later block overwrite the true minimum of an earlier one.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::discovery::{CancelReason, Discovery, LengthRecord, ScanOutcome};
use crate::range::ScanRange;
use crate::scanner::{CancelToken, LengthDiscoveryScanner};
use crate::spell::Speller;
use crate::WordLengthError;

/// Reduce per-block discoveries into one.
///
/// The blocks must tile a contiguous range and share the same ignored
/// threshold. For every length the record with the smallest witness wins,
/// and the discovery order is rebuilt by ascending witness, which is the
/// order one sequential scan of the whole range would have produced.
///
/// If any block was cancelled, the merged outcome is the cancellation of the
/// lowest such block: everything below its `next` was covered without gaps.
/// Records with larger witnesses are minimal only within their own block.
pub fn merge_by_minimum(mut parts: Vec<Discovery>) -> Result<Discovery, WordLengthError> {
    if parts.is_empty() {
        return Err(WordLengthError::Config("no scan results to merge".into()));
    }
    parts.sort_by_key(|d| d.range().start());

    let ignore_up_to = parts[0].ignore_up_to();
    if parts.iter().any(|d| d.ignore_up_to() != ignore_up_to) {
        return Err(WordLengthError::Config(
            "cannot merge scans with different ignored lengths".into(),
        ));
    }
    for pair in parts.windows(2) {
        let (a, b) = (pair[0].range(), pair[1].range());
        if a.stop() != b.start() {
            return Err(WordLengthError::Config(format!(
                "scan blocks are not contiguous: [{}, {}) then [{}, {})",
                a.start(),
                a.stop(),
                b.start(),
                b.stop()
            )));
        }
    }

    let first = parts[0].range();
    let last = parts[parts.len() - 1].range();
    let range = ScanRange::new(first.start(), last.stop())?;

    let mut best: BTreeMap<usize, LengthRecord> = BTreeMap::new();
    for part in &parts {
        for record in part.records().values() {
            match best.entry(record.length) {
                Entry::Occupied(mut e) => {
                    if record.witness < e.get().witness {
                        e.insert(record.clone());
                    }
                }
                Entry::Vacant(v) => {
                    v.insert(record.clone());
                }
            }
        }
    }

    // Each integer has exactly one spelling, so witnesses are unique.
    let mut records: Vec<LengthRecord> = best.into_values().collect();
    records.sort_by_key(|r| r.witness);

    let mut merged = Discovery::new(range, ignore_up_to);
    for record in records {
        merged.push(record);
    }

    let outcome = parts
        .iter()
        .map(|d| d.outcome())
        .find(|o| !o.is_completed())
        .unwrap_or(ScanOutcome::Completed);
    merged.finish(outcome);

    debug!(blocks = parts.len(), found = merged.len(), "merged block results");
    Ok(merged)
}

/// Scan `range` on `config.workers` threads and merge the results.
///
/// The iteration budget applies to the range as a whole; the wall-clock
/// budget and `cancel` apply to every worker.
pub fn scan_parallel<S: Speller + Sync + ?Sized>(
    speller: &S,
    range: ScanRange,
    config: &ScanConfig,
    cancel: &CancelToken,
) -> Result<Discovery, WordLengthError> {
    config.validate()?;

    let stop = config
        .max_iterations
        .map(|max| range.start().saturating_add(max).min(range.stop()))
        .unwrap_or(range.stop());
    let effective = ScanRange::new(range.start(), stop)?;
    let worker_config = ScanConfig {
        max_iterations: None,
        ..config.clone()
    };

    let blocks = effective.split(config.workers);
    info!(
        start = range.start(),
        stop = range.stop(),
        workers = config.workers,
        blocks = blocks.len(),
        "starting parallel scan"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.workers)
        .build()
        .map_err(|e| WordLengthError::Config(format!("cannot build worker pool: {e}")))?;

    let parts = pool.install(|| {
        blocks
            .par_iter()
            .map(|block| {
                LengthDiscoveryScanner::new(speller, worker_config.clone())
                    .with_cancel_token(cancel.clone())
                    .scan(*block)
            })
            .collect::<Result<Vec<_>, _>>()
    })?;

    let mut merged = merge_by_minimum(parts)?;
    if stop < range.stop() {
        // Report against the requested range, not the truncated one.
        let mut full = Discovery::new(range, merged.ignore_up_to());
        let outcome = match merged.outcome() {
            ScanOutcome::Completed => ScanOutcome::Cancelled {
                reason: CancelReason::IterationBudget,
                next: stop,
            },
            cancelled => cancelled,
        };
        for record in merged.ordered_records() {
            full.push(record.clone());
        }
        full.finish(outcome);
        merged = full;
    }
    Ok(merged)
}
