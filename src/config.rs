use std::time::Duration;

use crate::WordLengthError;

/// Lengths `0..=2` cannot be produced by any English cardinal.
pub const DEFAULT_IGNORE_UP_TO: usize = 2;

/// Number of progress checkpoints across a range when no explicit interval
/// is configured.
pub const DEFAULT_CHECKPOINTS: u64 = 100;

/// Runtime configuration for a scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Lengths `0..=ignore_up_to` are treated as already found.
    pub ignore_up_to: usize,
    /// Integers between progress/cancellation checks. `None` means one
    /// percent of the range.
    pub check_interval: Option<u64>,
    /// Wall-clock budget, checked at each checkpoint.
    pub max_duration: Option<Duration>,
    /// Maximum number of integers to examine.
    pub max_iterations: Option<u64>,
    /// Worker count for [`scan_parallel`](crate::scan_parallel).
    pub workers: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ignore_up_to: DEFAULT_IGNORE_UP_TO,
            check_interval: None,
            max_duration: None,
            max_iterations: None,
            workers: 1,
        }
    }
}

impl ScanConfig {
    pub fn with_ignore_up_to(mut self, ignore_up_to: usize) -> Self {
        self.ignore_up_to = ignore_up_to;
        self
    }

    pub fn with_check_interval(mut self, interval: u64) -> Self {
        self.check_interval = Some(interval);
        self
    }

    pub fn with_max_duration(mut self, budget: Duration) -> Self {
        self.max_duration = Some(budget);
        self
    }

    pub fn with_max_iterations(mut self, budget: u64) -> Self {
        self.max_iterations = Some(budget);
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Reject settings the scanner cannot run with.
    pub fn validate(&self) -> Result<(), WordLengthError> {
        if self.workers == 0 {
            return Err(WordLengthError::Config("workers must be at least 1".into()));
        }
        if self.check_interval == Some(0) {
            return Err(WordLengthError::Config(
                "check interval must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Effective checkpoint spacing for a range of `len` integers.
    pub fn interval_for(&self, len: u64) -> u64 {
        self.check_interval
            .unwrap_or(len / DEFAULT_CHECKPOINTS)
            .max(1)
    }
}
