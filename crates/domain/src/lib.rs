//! Sorzi domain - lottery rules, generated games, and the generation
//! algorithms. Pure: no I/O, no RNG dependency.

pub mod entities;
pub mod error;
pub mod generation;
pub mod value_objects;

pub use entities::{Game, GameBatch};
pub use error::{DomainError, GenerationError};
pub use generation::{
    generate_game, generate_games, parse_games_count, rejection_limit, sample_inclusive,
    WORD_SPAN,
};
pub use value_objects::{Lottery, LotteryKey, LotteryRules, NumberRange, PickBounds, Prize};
