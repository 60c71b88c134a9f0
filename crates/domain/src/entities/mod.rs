//! Entities produced by generation.

mod game;

pub use game::{Game, GameBatch};
