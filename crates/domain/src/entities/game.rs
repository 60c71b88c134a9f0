//! Generated games.

use serde::Serialize;
use std::fmt;

/// One generated set of lottery picks.
///
/// Immutable once built; callers read the numbers through `numbers()` or
/// take ownership with `into_numbers()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Game(Vec<i32>);

impl Game {
    pub(crate) fn new(numbers: Vec<i32>) -> Self {
        Self(numbers)
    }

    pub fn numbers(&self) -> &[i32] {
        &self.0
    }

    pub fn into_numbers(self) -> Vec<i32> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.0.contains(&value)
    }

    /// Numbers formatted for display, zero-padded to two digits ("07").
    pub fn formatted_numbers(&self) -> Vec<String> {
        self.0.iter().map(|n| format!("{:02}", n)).collect()
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted_numbers().join(" - "))
    }
}

impl AsRef<[i32]> for Game {
    fn as_ref(&self) -> &[i32] {
        &self.0
    }
}

/// Independently generated games, in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct GameBatch(Vec<Game>);

impl GameBatch {
    pub(crate) fn new(games: Vec<Game>) -> Self {
        Self(games)
    }

    pub fn games(&self) -> &[Game] {
        &self.0
    }

    pub fn into_games(self) -> Vec<Game> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Game> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a GameBatch {
    type Item = &'a Game;
    type IntoIter = std::slice::Iter<'a, Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for GameBatch {
    type Item = Game;
    type IntoIter = std::vec::IntoIter<Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
