//! Game and batch generation on top of an injected sampler.
//!
//! `sample` is called as `sample(range.min, range.max)` and must return a
//! uniformly distributed value in that range. All validation happens before
//! the first sample is requested.

use std::collections::HashSet;

use crate::entities::{Game, GameBatch};
use crate::error::GenerationError;
use crate::value_objects::LotteryRules;

/// Generate one game of `pick_count` numbers under `rules`.
///
/// # Errors
/// * `InvalidRange` - the rules' range has `min > max`
/// * `PickCountOutOfRange` - `pick_count` outside `rules.picks_allowed`
/// * `InsufficientRange` - unique numbers requested but the range is too small
/// * any error returned by `sample`
pub fn generate_game<F>(
    rules: &LotteryRules,
    pick_count: usize,
    mut sample: F,
) -> Result<Game, GenerationError>
where
    F: FnMut(i32, i32) -> Result<i32, GenerationError>,
{
    let range = rules.range;
    if !range.is_well_formed() {
        return Err(GenerationError::invalid_range(range.min, range.max));
    }

    let bounds = rules.picks_allowed;
    if !bounds.contains(pick_count) {
        return Err(GenerationError::PickCountOutOfRange {
            requested: pick_count,
            min: bounds.min,
            max: bounds.max,
        });
    }

    let available = rules.available_numbers();
    if rules.unique_numbers && pick_count as u64 > available {
        return Err(GenerationError::InsufficientRange {
            requested: pick_count,
            available,
        });
    }

    let mut numbers = Vec::with_capacity(pick_count);
    let mut used = HashSet::new();

    while numbers.len() < pick_count {
        let n = sample(range.min, range.max)?;
        if rules.unique_numbers && !used.insert(n) {
            continue;
        }
        numbers.push(n);
    }

    if rules.sort_ascending {
        numbers.sort_unstable();
    }

    Ok(Game::new(numbers))
}

/// Generate `games_count` independent games of `pick_count` numbers each.
///
/// Fails fast: the first failing game aborts the batch and no games are
/// returned.
pub fn generate_games<F>(
    rules: &LotteryRules,
    games_count: usize,
    pick_count: usize,
    mut sample: F,
) -> Result<GameBatch, GenerationError>
where
    F: FnMut(i32, i32) -> Result<i32, GenerationError>,
{
    if games_count == 0 {
        return Err(GenerationError::invalid_games_count(games_count));
    }

    let games = (0..games_count)
        .map(|_| generate_game(rules, pick_count, &mut sample))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GameBatch::new(games))
}

/// Parse a textual games count (CLI flag, environment variable).
///
/// Zero, negative and non-integer input all map to `InvalidGamesCount`.
pub fn parse_games_count(input: &str) -> Result<usize, GenerationError> {
    match input.trim().parse::<usize>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(GenerationError::invalid_games_count(input.trim())),
    }
}
