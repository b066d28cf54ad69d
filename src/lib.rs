//! Smallest integers by spelled-out length.
//!
//! For each character length `L`, find the smallest non-negative integer
//! whose English cardinal spelling (commas removed) has exactly `L`
//! characters. The core is [`LengthDiscoveryScanner`]: one ascending pass
//! over a [`ScanRange`] that records the first integer reaching each unseen
//! length.
//!
//! ```
//! use wordlength::{scan, EnglishSpeller, ScanRange};
//!
//! let d = scan(&EnglishSpeller, ScanRange::new(0, 100).unwrap(), 2).unwrap();
//! let three = d.record(3).unwrap();
//! assert_eq!((three.witness, three.spelling.as_str()), (1, "one"));
//! assert_eq!(d.record(13).unwrap().spelling, "seventy-three");
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod io_utils;
pub mod merge;
pub mod naive;
pub mod range;
pub mod report;
pub mod scanner;
pub mod spell;

pub use config::{ScanConfig, DEFAULT_IGNORE_UP_TO};
pub use discovery::{gap_sequence, CancelReason, Discovery, LengthRecord, ScanOutcome};
pub use error::WordLengthError;
pub use merge::{merge_by_minimum, scan_parallel};
pub use naive::{first_with_length, naive_search, NaiveResult};
pub use range::ScanRange;
pub use scanner::{
    scan, CancelToken, LengthDiscoveryScanner, NoopObserver, ScanObserver, ScanPhase,
};
pub use spell::{measure, spelled_len, strip_punctuation, EnglishSpeller, SpellError, Speller};
