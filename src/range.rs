use serde::Serialize;

use crate::WordLengthError;

/// Half-open interval `[start, stop)` of integers to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanRange {
    start: u64,
    stop: u64,
}

impl ScanRange {
    /// Create a range, rejecting empty or inverted bounds.
    pub fn new(start: u64, stop: u64) -> Result<Self, WordLengthError> {
        if start >= stop {
            return Err(WordLengthError::InvalidRange { start, stop });
        }
        Ok(Self { start, stop })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn stop(&self) -> u64 {
        self.stop
    }

    /// Number of integers covered. Never zero.
    pub fn len(&self) -> u64 {
        self.stop - self.start
    }

    pub fn contains(&self, n: u64) -> bool {
        self.start <= n && n < self.stop
    }

    pub fn iter(&self) -> std::ops::Range<u64> {
        self.start..self.stop
    }

    /// Split into at most `parts` contiguous ascending blocks covering the
    /// range exactly. Earlier blocks absorb the remainder, so block sizes
    /// differ by at most one.
    pub fn split(&self, parts: usize) -> Vec<ScanRange> {
        let parts = (parts.max(1) as u64).min(self.len());
        let base = self.len() / parts;
        let extra = self.len() % parts;
        let mut out = Vec::with_capacity(parts as usize);
        let mut start = self.start;
        for i in 0..parts {
            let size = base + u64::from(i < extra);
            out.push(ScanRange {
                start,
                stop: start + size,
            });
            start += size;
        }
        out
    }
}

impl TryFrom<std::ops::Range<u64>> for ScanRange {
    type Error = WordLengthError;

    fn try_from(r: std::ops::Range<u64>) -> Result<Self, Self::Error> {
        ScanRange::new(r.start, r.end)
    }
}
