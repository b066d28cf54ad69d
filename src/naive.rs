//! Restart search: for each target length, walk up from zero again.
//!
//! Quadratic in practice and only useful as an independent oracle for the
//! scanner on small limits.

use std::collections::BTreeMap;

use tracing::debug;

use crate::discovery::missing_between;
use crate::spell::{measure, Speller};
use crate::WordLengthError;

/// First integer in `0..limit` whose stripped spelling has `target`
/// characters.
pub fn first_with_length<S: Speller + ?Sized>(
    speller: &S,
    target: usize,
    limit: u64,
) -> Result<Option<(u64, String)>, WordLengthError> {
    for n in 0..limit {
        let (spelling, len) = measure(speller, n)?;
        if len == target {
            return Ok(Some((n, spelling)));
        }
    }
    Ok(None)
}

/// Outcome of [`naive_search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NaiveResult {
    /// Target length to `(witness, spelling)`.
    pub found: BTreeMap<usize, (u64, String)>,
    /// Targets with no witness below the limit.
    pub unreachable: Vec<usize>,
}

impl NaiveResult {
    /// Targets between the ignored threshold and the largest found length
    /// that were not reached.
    pub fn gaps_below_max(&self, ignore_up_to: usize) -> Vec<usize> {
        missing_between(ignore_up_to, &self.found)
    }
}

/// Search every target above `ignore_up_to` up to `max_length`, restarting
/// from zero for each one.
pub fn naive_search<S: Speller + ?Sized>(
    speller: &S,
    ignore_up_to: usize,
    max_length: usize,
    limit: u64,
) -> Result<NaiveResult, WordLengthError> {
    let mut result = NaiveResult::default();
    for target in ignore_up_to.saturating_add(1)..=max_length {
        match first_with_length(speller, target, limit)? {
            Some((n, spelling)) => {
                debug!(target, witness = n, spelling = %spelling, "naive match");
                result.found.insert(target, (n, spelling));
            }
            None => {
                debug!(target, limit, "no witness below limit");
                result.unreachable.push(target);
            }
        }
    }
    Ok(result)
}
