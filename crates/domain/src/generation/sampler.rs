//! Unbiased inclusive-range sampling by rejection.
//!
//! Each draw is one 32-bit word. Reducing a word with `% spread` alone favors
//! low offsets whenever 2^32 is not a multiple of `spread`, so words at or
//! above the largest multiple of `spread` are discarded and redrawn. At most
//! half the word space is ever rejected, so the expected number of draws is
//! below two.

use crate::error::GenerationError;

/// Number of distinct values one entropy draw can take (2^32).
pub const WORD_SPAN: u64 = 1 << 32;

/// Largest multiple of `spread` that fits in the word space.
///
/// Words `>= limit` are rejected. `spread` must be in `1..=WORD_SPAN`.
pub fn rejection_limit(spread: u64) -> u64 {
    (WORD_SPAN / spread) * spread
}

/// Draw a uniformly distributed integer in `min..=max`.
///
/// `draw` yields one fresh random word per call and must be backed by a
/// cryptographically secure source. Its errors are returned unchanged.
///
/// # Errors
/// * `InvalidRange` when `min > max` (no entropy is consumed)
pub fn sample_inclusive<F>(min: i32, max: i32, mut draw: F) -> Result<i32, GenerationError>
where
    F: FnMut() -> Result<u32, GenerationError>,
{
    if min > max {
        return Err(GenerationError::invalid_range(min, max));
    }

    let spread = u64::try_from(i64::from(max) - i64::from(min) + 1)
        .ok()
        .filter(|s| (1..=WORD_SPAN).contains(s))
        .ok_or_else(|| GenerationError::invalid_range(min, max))?;
    let limit = rejection_limit(spread);

    loop {
        let word = u64::from(draw()?);
        if word >= limit {
            continue;
        }
        // offset < spread <= 2^32, so min + offset stays within min..=max
        let offset = (word % spread) as i64;
        return i32::try_from(i64::from(min) + offset)
            .map_err(|_| GenerationError::invalid_range(min, max));
    }
}
