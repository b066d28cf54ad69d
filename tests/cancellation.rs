use std::time::Duration;

use wordlength::{
    measure, CancelReason, CancelToken, EnglishSpeller, LengthDiscoveryScanner, LengthRecord,
    ScanConfig, ScanObserver, ScanOutcome, ScanPhase, ScanRange,
};

/// Cancels the scan once a length of at least `trigger` has been found.
struct CancelAfter {
    token: CancelToken,
    trigger: usize,
    checkpoints: Vec<(u64, u64)>,
    discoveries: usize,
}

impl ScanObserver for CancelAfter {
    fn on_progress(&mut self, next: u64, percent: u64) {
        self.checkpoints.push((next, percent));
    }

    fn on_discovery(&mut self, record: &LengthRecord, _missing: &[usize]) {
        self.discoveries += 1;
        if record.length >= self.trigger {
            self.token.cancel();
        }
    }
}

#[test]
fn cancellation_keeps_partial_results_valid() {
    let token = CancelToken::new();
    let config = ScanConfig::default().with_check_interval(50);
    let mut scanner =
        LengthDiscoveryScanner::new(&EnglishSpeller, config).with_cancel_token(token.clone());
    let mut observer = CancelAfter {
        token,
        trigger: 19,
        checkpoints: Vec::new(),
        discoveries: 0,
    };

    let d = scanner
        .scan_with(ScanRange::new(0, 100_000).unwrap(), &mut observer)
        .unwrap();
    assert_eq!(scanner.phase(), ScanPhase::Cancelled);

    // Length 19 first appears at 101; the next checkpoint is 150.
    let next = match d.outcome() {
        ScanOutcome::Cancelled {
            reason: CancelReason::Requested,
            next,
        } => next,
        other => panic!("unexpected outcome {other:?}"),
    };
    assert_eq!(next, 150);
    assert_eq!(d.len(), observer.discoveries);
    assert_eq!(observer.checkpoints.first(), Some(&(0, 0)));
    assert_eq!(observer.checkpoints.last(), Some(&(150, 0)));

    for (len, r) in d.records() {
        assert!(r.witness < next);
        for m in 0..r.witness {
            assert_ne!(measure(&EnglishSpeller, m).unwrap().1, *len);
        }
    }
}

#[test]
fn exhausted_time_budget_stops_at_first_checkpoint() {
    let config = ScanConfig::default().with_max_duration(Duration::ZERO);
    let mut scanner = LengthDiscoveryScanner::new(&EnglishSpeller, config);
    let d = scanner.scan(ScanRange::new(10, 1_000).unwrap()).unwrap();
    assert!(d.is_empty());
    assert_eq!(
        d.outcome(),
        ScanOutcome::Cancelled {
            reason: CancelReason::TimeBudget,
            next: 10
        }
    );
}

#[test]
fn iteration_budget_is_exact() {
    let config = ScanConfig::default().with_max_iterations(74);
    let mut scanner = LengthDiscoveryScanner::new(&EnglishSpeller, config);
    let d = scanner.scan(ScanRange::new(0, 1_000).unwrap()).unwrap();
    assert_eq!(
        d.outcome(),
        ScanOutcome::Cancelled {
            reason: CancelReason::IterationBudget,
            next: 74
        }
    );
    assert_eq!(d.witnesses().last(), Some(&73));
    assert_eq!(scanner.phase(), ScanPhase::Cancelled);
}

#[test]
fn budget_larger_than_range_completes() {
    let config = ScanConfig::default().with_max_iterations(10_000);
    let mut scanner = LengthDiscoveryScanner::new(&EnglishSpeller, config);
    let d = scanner.scan(ScanRange::new(0, 1_000).unwrap()).unwrap();
    assert_eq!(d.outcome(), ScanOutcome::Completed);
    assert_eq!(scanner.phase(), ScanPhase::Completed);
}

#[test]
fn timing_is_recorded_per_discovery() {
    let mut scanner = LengthDiscoveryScanner::new(&EnglishSpeller, ScanConfig::default());
    let d = scanner.scan(ScanRange::new(0, 2_000).unwrap()).unwrap();
    let records: Vec<_> = d.ordered_records().collect();
    for pair in records.windows(2) {
        assert!(pair[0].elapsed <= pair[1].elapsed);
        assert_eq!(pair[1].since_previous, pair[1].elapsed - pair[0].elapsed);
    }
    assert_eq!(records[0].since_previous, records[0].elapsed);
}
