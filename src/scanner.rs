//! Incremental discovery of the smallest integer for each spelled length.
//!
//! The scanner walks a [`ScanRange`] strictly upward, spells every integer,
//! and commits a [`LengthRecord`] the first time a length shows up. Since no
//! smaller integer of the range can appear later, the first witness of a
//! length is the minimum within the range. Anything outside the range is
//! unknown: a length whose smallest witness lies above `stop` is simply
//! absent from the result.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::ScanConfig;
use crate::discovery::{CancelReason, Discovery, LengthRecord, ScanOutcome};
use crate::range::ScanRange;
use crate::spell::{measure, Speller};
use crate::WordLengthError;

/// Shared flag for cooperative cancellation.
///
/// Clones observe the same flag, so one token can stop every worker of a
/// parallel scan.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Lifecycle of a [`LengthDiscoveryScanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    NotStarted,
    Scanning,
    Completed,
    Cancelled,
    /// The speller returned an error.
    Failed,
}

/// Hooks invoked while a scan runs. Both default to doing nothing.
pub trait ScanObserver {
    /// Called at every checkpoint with the next integer to examine.
    fn on_progress(&mut self, _next: u64, _percent: u64) {}

    /// Called right after a record is committed.
    fn on_discovery(&mut self, _record: &LengthRecord, _missing: &[usize]) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

pub struct LengthDiscoveryScanner<'a, S: Speller + ?Sized> {
    speller: &'a S,
    config: ScanConfig,
    cancel: CancelToken,
    phase: ScanPhase,
}

impl<'a, S: Speller + ?Sized> LengthDiscoveryScanner<'a, S> {
    pub fn new(speller: &'a S, config: ScanConfig) -> Self {
        Self {
            speller,
            config,
            cancel: CancelToken::new(),
            phase: ScanPhase::NotStarted,
        }
    }

    /// Use an externally owned cancellation token.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn scan(&mut self, range: ScanRange) -> Result<Discovery, WordLengthError> {
        self.scan_with(range, &mut NoopObserver)
    }

    /// Scan `range` in ascending order, reporting to `observer`.
    ///
    /// Speller failures abort the scan and are returned unchanged; records
    /// committed before the failure are dropped with it.
    pub fn scan_with(
        &mut self,
        range: ScanRange,
        observer: &mut dyn ScanObserver,
    ) -> Result<Discovery, WordLengthError> {
        self.config.validate()?;
        self.phase = ScanPhase::Scanning;

        let result = self.run(range, observer);
        self.phase = match &result {
            Ok(d) if d.outcome().is_completed() => ScanPhase::Completed,
            Ok(_) => ScanPhase::Cancelled,
            Err(_) => ScanPhase::Failed,
        };
        result
    }

    fn run(
        &self,
        range: ScanRange,
        observer: &mut dyn ScanObserver,
    ) -> Result<Discovery, WordLengthError> {
        let ignore_up_to = self.config.ignore_up_to;
        // Lengths up to `ignore_up_to` count as found without being stored.
        let mut found: HashSet<usize> = HashSet::new();
        let mut discovery = Discovery::new(range, ignore_up_to);

        // The iteration budget is exact; the other stop conditions are only
        // polled at checkpoints.
        let budget_stop = self
            .config
            .max_iterations
            .map(|max| range.start().saturating_add(max).min(range.stop()))
            .unwrap_or(range.stop());
        let interval = self.config.interval_for(range.len());

        info!(
            start = range.start(),
            stop = range.stop(),
            ignore_up_to,
            "starting length discovery scan"
        );

        let started = Instant::now();
        let mut last_find = Duration::ZERO;

        for n in range.start()..budget_stop {
            let offset = n - range.start();
            if offset % interval == 0 {
                let percent = percent_complete(offset, range.len());
                debug!(n, percent, "scan progress");
                observer.on_progress(n, percent);

                if let Some(reason) = self.should_stop(started) {
                    info!(n, ?reason, found = discovery.len(), "scan cancelled");
                    discovery.finish(ScanOutcome::Cancelled { reason, next: n });
                    return Ok(discovery);
                }
            }

            let (spelling, length) = measure(self.speller, n)?;
            if length <= ignore_up_to || !found.insert(length) {
                continue;
            }

            let elapsed = started.elapsed();
            let record = LengthRecord {
                length,
                witness: n,
                spelling,
                elapsed,
                since_previous: elapsed.saturating_sub(last_find),
            };
            last_find = elapsed;

            discovery.push(record);
            let missing = discovery.missing_lengths();
            if let Some(record) = discovery.record(length) {
                debug!(
                    length,
                    witness = n,
                    spelling = %record.spelling,
                    elapsed = ?record.elapsed,
                    since_previous = ?record.since_previous,
                    ?missing,
                    "found new length"
                );
                observer.on_discovery(record, &missing);
            }
        }

        if budget_stop < range.stop() {
            info!(next = budget_stop, "iteration budget exhausted");
            discovery.finish(ScanOutcome::Cancelled {
                reason: CancelReason::IterationBudget,
                next: budget_stop,
            });
        } else {
            info!(found = discovery.len(), elapsed = ?started.elapsed(), "scan completed");
            discovery.finish(ScanOutcome::Completed);
        }
        Ok(discovery)
    }

    fn should_stop(&self, started: Instant) -> Option<CancelReason> {
        if self.cancel.is_cancelled() {
            return Some(CancelReason::Requested);
        }
        match self.config.max_duration {
            Some(budget) if started.elapsed() >= budget => Some(CancelReason::TimeBudget),
            _ => None,
        }
    }
}

/// Share of `len` covered by `offset`, in whole percent.
fn percent_complete(offset: u64, len: u64) -> u64 {
    (u128::from(offset) * 100 / u128::from(len)) as u64
}

/// Scan `range` with default settings apart from the ignored lengths.
pub fn scan<S: Speller + ?Sized>(
    speller: &S,
    range: ScanRange,
    ignore_up_to: usize,
) -> Result<Discovery, WordLengthError> {
    let config = ScanConfig::default().with_ignore_up_to(ignore_up_to);
    LengthDiscoveryScanner::new(speller, config).scan(range)
}
