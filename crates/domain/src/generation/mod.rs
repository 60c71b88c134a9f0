//! Number generation algorithms.
//!
//! Entropy is injected by the caller: the sampler takes a closure yielding
//! random 32-bit words, and the game generator takes a closure sampling one
//! value from an inclusive range. The engine binds both to its entropy port.

mod game_generator;
mod sampler;

pub use game_generator::{generate_game, generate_games, parse_games_count};
pub use sampler::{rejection_limit, sample_inclusive, WORD_SPAN};
