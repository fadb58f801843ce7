//! Factor ↔ word conversion against a family's dictionary key.
//!
//! Encoding is a plain indexed lookup per position. Decoding cannot rely on
//! the poem layout (punctuation and connectives are stripped before
//! matching), so it scans forward through the words for the first window
//! that matches an entry of each position's dictionary in turn.

use crate::core::config::FamilyTable;
use crate::core::word_dictionary::WordMatch;

use super::errors::DecodeError;

/// Looks up the word for every factor, position by position.
///
/// Factors are produced by `factor::factorize` against the family divisor,
/// and every key dictionary holds exactly `divisor` entries, so each lookup
/// is in range.
pub fn encode<'a>(factors: &[usize], table: &'a FamilyTable) -> Vec<&'a str> {
    debug_assert_eq!(factors.len(), table.key().len());

    factors
        .iter()
        .zip(table.key())
        .map(|(&factor, dict)| {
            dict.encode_word(factor)
                .expect("factor within dictionary range")
        })
        .collect()
}

/// Recovers one factor per key position from normalized poem words.
///
/// A cursor walks the words. For each position, the dictionary is tried at
/// the cursor; on a miss the cursor moves one word and the same dictionary is
/// tried again. On a hit the cursor moves past the matched entry and the next
/// position begins. The earliest matching window wins, and within a window
/// the first matching entry in dictionary order wins.
///
/// # Errors
///
/// Returns `DecodeError::MissingWord` with the failing position when the
/// words run out first.
pub fn decode(tokens: &[&str], table: &FamilyTable) -> Result<Vec<usize>, DecodeError> {
    let mut factors = Vec::with_capacity(table.key().len());
    let mut cursor = 0;

    for (position, dict) in table.key().iter().enumerate() {
        loop {
            match dict.match_at(tokens, cursor) {
                WordMatch::Matched { index, span } => {
                    factors.push(index);
                    cursor += span;
                    break;
                }
                WordMatch::NotFound => {
                    cursor += 1;
                    if cursor >= tokens.len() {
                        return Err(DecodeError::missing_word(
                            table.family(),
                            position,
                            dict.name(),
                        ));
                    }
                }
            }
        }
    }

    Ok(factors)
}
