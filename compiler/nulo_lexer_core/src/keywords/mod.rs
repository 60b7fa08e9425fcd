//! Keyword table.
//!
//! Keywords are resolved after the scanner has consumed a maximal
//! identifier span, so lookup is an exact, case-sensitive comparison of the
//! whole span. There is no prefix matching: `func2` and `function` stay
//! identifiers.
//!
//! The length of every entry bounds a first-pass filter, so identifiers
//! longer or shorter than any keyword are rejected without comparing text.

use crate::Keyword;

/// Text to keyword mapping. One row per [`Keyword`] variant.
const KEYWORDS: &[(&str, Keyword)] = &[("func", Keyword::Func)];

/// Shortest and longest keyword spellings, computed from [`KEYWORDS`].
const LEN_BOUNDS: (usize, usize) = {
    let mut min = usize::MAX;
    let mut max = 0;
    let mut i = 0;
    while i < KEYWORDS.len() {
        let len = KEYWORDS[i].0.len();
        if len < min {
            min = len;
        }
        if len > max {
            max = len;
        }
        i += 1;
    }
    (min, max)
};

/// Look up a keyword by the full text of an identifier span.
///
/// Returns `None` for regular identifiers.
#[inline]
pub fn lookup(text: &str) -> Option<Keyword> {
    let (min, max) = LEN_BOUNDS;
    if !(min..=max).contains(&text.len()) {
        return None;
    }
    KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == text)
        .map(|&(_, keyword)| keyword)
}

#[cfg(test)]
mod tests;
