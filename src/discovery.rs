//! Results of a length-discovery scan.
//!
//! A [`Discovery`] holds one [`LengthRecord`] per length found, keyed by
//! length, together with the order in which the lengths first appeared.
//! Because a scan walks integers upward, the discovery order is also the
//! order of ascending witnesses. Gaps are derived on demand and never stored.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::range::ScanRange;

/// The smallest integer in a scanned range whose spelling has `length`
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LengthRecord {
    pub length: usize,
    pub witness: u64,
    pub spelling: String,
    /// Time from scan start until this length was found.
    pub elapsed: Duration,
    /// Time since the previous discovery of the same scan.
    pub since_previous: Duration,
}

/// Why a scan stopped before reaching the end of its range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// A [`CancelToken`](crate::CancelToken) was triggered.
    Requested,
    /// The wall-clock budget ran out.
    TimeBudget,
    /// The iteration budget ran out.
    IterationBudget,
}

/// Terminal state of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanOutcome {
    Completed,
    /// Every integer below `next` (and at or above the range start) was
    /// examined. Records found so far keep their minimality guarantee.
    Cancelled { reason: CancelReason, next: u64 },
}

impl ScanOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ScanOutcome::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discovery {
    range: ScanRange,
    ignore_up_to: usize,
    records: BTreeMap<usize, LengthRecord>,
    order: Vec<usize>,
    outcome: ScanOutcome,
}

impl Discovery {
    pub(crate) fn new(range: ScanRange, ignore_up_to: usize) -> Self {
        Self {
            range,
            ignore_up_to,
            records: BTreeMap::new(),
            order: Vec::new(),
            outcome: ScanOutcome::Completed,
        }
    }

    /// Commit a record. Callers guarantee the length is new.
    pub(crate) fn push(&mut self, record: LengthRecord) {
        debug_assert!(!self.records.contains_key(&record.length));
        self.order.push(record.length);
        self.records.insert(record.length, record);
    }

    pub(crate) fn finish(&mut self, outcome: ScanOutcome) {
        self.outcome = outcome;
    }

    pub fn range(&self) -> ScanRange {
        self.range
    }

    pub fn ignore_up_to(&self) -> usize {
        self.ignore_up_to
    }

    pub fn outcome(&self) -> ScanOutcome {
        self.outcome
    }

    /// All records keyed by length.
    pub fn records(&self) -> &BTreeMap<usize, LengthRecord> {
        &self.records
    }

    pub fn record(&self, length: usize) -> Option<&LengthRecord> {
        self.records.get(&length)
    }

    /// Lengths in the order they were first matched.
    pub fn discovery_order(&self) -> &[usize] {
        &self.order
    }

    /// Witnesses aligned with [`discovery_order`](Self::discovery_order).
    pub fn witnesses(&self) -> Vec<u64> {
        self.ordered_records().map(|r| r.witness).collect()
    }

    /// Records in discovery order.
    pub fn ordered_records(&self) -> impl Iterator<Item = &LengthRecord> + '_ {
        self.order.iter().filter_map(move |len| self.records.get(len))
    }

    /// Differences between consecutive lengths in discovery order.
    pub fn gaps(&self) -> Vec<i64> {
        gap_sequence(&self.order)
    }

    /// Largest length found, if any.
    pub fn max_length(&self) -> Option<usize> {
        self.records.keys().next_back().copied()
    }

    /// Lengths above the ignored threshold and below the largest found
    /// length that have no record.
    pub fn missing_lengths(&self) -> Vec<usize> {
        missing_between(self.ignore_up_to, &self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Consecutive differences of `order`. One shorter than the input.
pub fn gap_sequence(order: &[usize]) -> Vec<i64> {
    order
        .windows(2)
        .map(|w| w[1] as i64 - w[0] as i64)
        .collect()
}

pub(crate) fn missing_between<V>(ignore_up_to: usize, found: &BTreeMap<usize, V>) -> Vec<usize> {
    match found.keys().next_back() {
        Some(&max) => (ignore_up_to.saturating_add(1)..max)
            .filter(|len| !found.contains_key(len))
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(length: usize, witness: u64) -> LengthRecord {
        LengthRecord {
            length,
            witness,
            spelling: "x".repeat(length),
            elapsed: Duration::ZERO,
            since_previous: Duration::ZERO,
        }
    }

    #[test]
    fn gaps_are_signed() {
        assert_eq!(gap_sequence(&[4, 3, 5, 13, 19]), vec![-1, 2, 8, 6]);
        assert!(gap_sequence(&[7]).is_empty());
        assert!(gap_sequence(&[]).is_empty());
    }

    #[test]
    fn missing_lengths_below_max() {
        let mut d = Discovery::new(ScanRange::new(0, 10).unwrap(), 2);
        d.push(record(4, 0));
        d.push(record(3, 1));
        d.push(record(7, 5));
        assert_eq!(d.missing_lengths(), vec![5, 6]);
        assert_eq!(d.max_length(), Some(7));
        assert_eq!(d.discovery_order(), &[4, 3, 7]);
        assert_eq!(d.witnesses(), vec![0, 1, 5]);
    }

    #[test]
    fn missing_lengths_with_maximal_threshold() {
        let mut found = BTreeMap::new();
        found.insert(7, ());
        assert!(missing_between(usize::MAX, &found).is_empty());
        assert_eq!(missing_between(4, &found), vec![5, 6]);
    }
}
