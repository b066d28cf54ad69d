use wordlength::{
    naive_search, scan, EnglishSpeller, ScanOutcome, ScanRange, SpellError, Speller,
    WordLengthError,
};

fn range(start: u64, stop: u64) -> ScanRange {
    ScanRange::new(start, stop).unwrap()
}

#[test]
fn first_thousand_golden_records() {
    let d = scan(&EnglishSpeller, range(0, 1000), 2).unwrap();
    let expected: &[(usize, u64, &str)] = &[
        (3, 1, "one"),
        (4, 0, "zero"),
        (5, 3, "three"),
        (6, 11, "eleven"),
        (7, 15, "fifteen"),
        (8, 13, "thirteen"),
        (9, 17, "seventeen"),
        (10, 21, "twenty-one"),
        (11, 24, "twenty-four"),
        (12, 23, "twenty-three"),
        (13, 73, "seventy-three"),
        (19, 101, "one hundred and one"),
        (20, 104, "one hundred and four"),
        (21, 103, "one hundred and three"),
        (22, 111, "one hundred and eleven"),
        (23, 115, "one hundred and fifteen"),
        (24, 113, "one hundred and thirteen"),
        (25, 117, "one hundred and seventeen"),
        (26, 121, "one hundred and twenty-one"),
        (27, 124, "one hundred and twenty-four"),
        (28, 123, "one hundred and twenty-three"),
        (29, 173, "one hundred and seventy-three"),
        (30, 323, "three hundred and twenty-three"),
        (31, 373, "three hundred and seventy-three"),
    ];
    assert_eq!(d.len(), expected.len());
    for &(len, witness, spelling) in expected {
        let r = d.record(len).unwrap_or_else(|| panic!("missing length {len}"));
        assert_eq!(r.witness, witness, "length {len}");
        assert_eq!(r.spelling, spelling, "length {len}");
    }
    assert_eq!(d.outcome(), ScanOutcome::Completed);
}

#[test]
fn first_thousand_order_and_gaps() {
    let d = scan(&EnglishSpeller, range(0, 1000), 2).unwrap();
    assert_eq!(
        d.discovery_order(),
        &[4, 3, 5, 6, 8, 7, 9, 10, 12, 11, 13, 19, 21, 20, 22, 24, 23, 25, 26, 28, 27, 29, 30, 31]
    );
    assert_eq!(
        d.witnesses(),
        vec![0, 1, 3, 11, 13, 15, 17, 21, 23, 24, 73, 101, 103, 104, 111, 113, 115, 117, 121, 123, 124, 173, 323, 373]
    );
    assert_eq!(
        d.gaps(),
        vec![-1, 2, 1, 2, -1, 2, 1, 2, -1, 2, 6, 2, -1, 2, 2, -1, 2, 1, 2, -1, 2, 1, 1]
    );
    assert_eq!(d.missing_lengths(), vec![14, 15, 16, 17, 18]);
}

#[test]
fn lengths_beyond_the_range_are_absent() {
    // "three thousand" is the smallest 14-character spelling.
    let below = scan(&EnglishSpeller, range(0, 3000), 2).unwrap();
    assert!(below.record(14).is_none());

    let above = scan(&EnglishSpeller, range(0, 3001), 2).unwrap();
    let r = above.record(14).unwrap();
    assert_eq!((r.witness, r.spelling.as_str()), (3000, "three thousand"));
}

#[test]
fn minimality_is_relative_to_range_start() {
    let d = scan(&EnglishSpeller, range(500, 700), 2).unwrap();
    assert_eq!(
        d.discovery_order(),
        &[12, 20, 22, 21, 23, 25, 24, 26, 27, 29, 28, 30, 11, 19]
    );
    assert_eq!(d.record(11).unwrap().spelling, "six hundred");
    assert_eq!(d.record(12).unwrap().witness, 500);
}

#[test]
fn punctuation_is_stripped_before_measuring() {
    let d = scan(&EnglishSpeller, range(1_100, 1_101), 2).unwrap();
    let r = d.records().values().next().unwrap();
    assert_eq!(r.spelling, "one thousand one hundred");
    assert_eq!(r.length, 24);
}

#[test]
fn ignored_lengths_are_never_reported() {
    let speller = |n: u64| -> Result<String, SpellError> { Ok("x".repeat((n % 6) as usize)) };
    let d = scan(&speller, range(0, 12), 2).unwrap();
    assert_eq!(d.discovery_order(), &[3, 4, 5]);
    assert_eq!(d.witnesses(), vec![3, 4, 5]);

    let d = scan(&speller, range(0, 12), 4).unwrap();
    assert_eq!(d.discovery_order(), &[5]);
}

#[test]
fn larger_threshold_skips_small_lengths() {
    let d = scan(&EnglishSpeller, range(0, 1000), 5).unwrap();
    assert_eq!(&d.discovery_order()[..5], &[6, 8, 7, 9, 10]);
    assert!(d.record(3).is_none());
    assert!(d.record(5).is_none());
}

#[test]
fn threshold_at_usize_max_ignores_everything() {
    let d = scan(&EnglishSpeller, range(0, 10), usize::MAX).unwrap();
    assert!(d.is_empty());
    assert_eq!(d.outcome(), ScanOutcome::Completed);
    assert!(d.missing_lengths().is_empty());

    let naive = naive_search(&EnglishSpeller, usize::MAX, 5, 10).unwrap();
    assert!(naive.found.is_empty());
    assert!(naive.unreachable.is_empty());
    assert!(naive.gaps_below_max(usize::MAX).is_empty());
}

#[test]
fn empty_range_is_rejected() {
    let err = ScanRange::new(5, 5).unwrap_err();
    assert!(matches!(err, WordLengthError::InvalidRange { start: 5, stop: 5 }));
    assert!(ScanRange::try_from(7..3).is_err());
}

#[test]
fn scans_are_deterministic() {
    let a = scan(&EnglishSpeller, range(0, 5_000), 2).unwrap();
    let b = scan(&EnglishSpeller, range(0, 5_000), 2).unwrap();
    assert_eq!(a.discovery_order(), b.discovery_order());
    assert_eq!(a.witnesses(), b.witnesses());
    assert_eq!(a.gaps(), b.gaps());
    for (len, r) in a.records() {
        let other = b.record(*len).unwrap();
        assert_eq!((r.witness, &r.spelling), (other.witness, &other.spelling));
    }
}

#[test]
fn failing_speller_aborts_the_scan() {
    let speller = |n: u64| -> Result<String, SpellError> {
        if n >= 40 {
            Err(SpellError::Failed {
                value: n,
                reason: "too large".into(),
            })
        } else {
            EnglishSpeller.spell(n)
        }
    };
    let err = scan(&speller, range(0, 100), 2).unwrap_err();
    match err {
        WordLengthError::Spelling(SpellError::Failed { value, reason }) => {
            assert_eq!(value, 40);
            assert_eq!(reason, "too large");
        }
        other => panic!("unexpected error: {other}"),
    }
}
