//! English cardinal spelling of non-negative integers.
//!
//! The scanner only sees the [`Speller`] trait. [`EnglishSpeller`] is the
//! bundled implementation and produces British-style cardinals: groups of
//! three digits are joined with `", "`, hundreds take `"and"` before the
//! remainder, and a trailing group below one hundred is joined with
//! `" and "` instead of a comma:
//!
//! ```
//! use wordlength::{EnglishSpeller, Speller};
//!
//! let words = EnglishSpeller.spell(1_234).unwrap();
//! assert_eq!(words, "one thousand, two hundred and thirty-four");
//! assert_eq!(EnglishSpeller.spell(1_000_050).unwrap(), "one million and fifty");
//! ```

use thiserror::Error;

/// Failure raised by a [`Speller`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpellError {
    /// The value lies outside the range the speller supports.
    #[error("{value} is outside the supported domain")]
    OutOfDomain { value: u64 },

    /// Any other failure of the conversion.
    #[error("cannot spell {value}: {reason}")]
    Failed { value: u64, reason: String },
}

/// Converts an integer into its spelled-out form.
///
/// Implementations must be deterministic. The returned string may contain
/// grouping commas; callers strip them with [`strip_punctuation`] before
/// measuring.
pub trait Speller {
    fn spell(&self, n: u64) -> Result<String, SpellError>;
}

impl<F> Speller for F
where
    F: Fn(u64) -> Result<String, SpellError>,
{
    fn spell(&self, n: u64) -> Result<String, SpellError> {
        self(n)
    }
}

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Short-scale names, indexed by the power of one thousand.
const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// English cardinal speller covering all of `u64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishSpeller;

impl Speller for EnglishSpeller {
    fn spell(&self, n: u64) -> Result<String, SpellError> {
        Ok(english_cardinal(n))
    }
}

fn push_below_hundred(out: &mut String, r: u64) {
    if r < 20 {
        out.push_str(ONES[r as usize]);
    } else {
        out.push_str(TENS[(r / 10) as usize]);
        if r % 10 != 0 {
            out.push('-');
            out.push_str(ONES[(r % 10) as usize]);
        }
    }
}

/// Spell a group of up to three digits (`1..=999`).
fn push_group(out: &mut String, group: u64) {
    let hundreds = group / 100;
    let rest = group % 100;
    if hundreds > 0 {
        out.push_str(ONES[hundreds as usize]);
        out.push_str(" hundred");
        if rest > 0 {
            out.push_str(" and ");
            push_below_hundred(out, rest);
        }
    } else {
        push_below_hundred(out, rest);
    }
}

fn english_cardinal(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    // (group value, scale index), most significant first.
    let mut groups = Vec::with_capacity(SCALES.len());
    let mut rest = n;
    let mut scale = 0usize;
    while rest > 0 {
        let group = rest % 1000;
        if group != 0 {
            groups.push((group, scale));
        }
        rest /= 1000;
        scale += 1;
    }
    groups.reverse();

    let mut out = String::with_capacity(64);
    let last = groups.len() - 1;
    for (i, &(group, scale)) in groups.iter().enumerate() {
        if i > 0 {
            if i == last && scale == 0 && group < 100 {
                out.push_str(" and ");
            } else {
                out.push_str(", ");
            }
        }
        push_group(&mut out, group);
        if scale > 0 {
            out.push(' ');
            out.push_str(SCALES[scale]);
        }
    }
    out
}

/// Remove grouping punctuation. Spaces and hyphens are kept.
pub fn strip_punctuation(words: &str) -> String {
    words.chars().filter(|&c| c != ',').collect()
}

/// Number of characters in a stripped spelling.
pub fn spelled_len(spelling: &str) -> usize {
    spelling.chars().count()
}

/// Spell `n` and strip it, returning the spelling with its length.
pub fn measure<S: Speller + ?Sized>(speller: &S, n: u64) -> Result<(String, usize), SpellError> {
    let spelling = strip_punctuation(&speller.spell(n)?);
    let len = spelled_len(&spelling);
    Ok((spelling, len))
}
