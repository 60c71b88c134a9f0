//! Inclusive numeric bounds used by lottery rules.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Inclusive range of drawable values, e.g. 1..=60 for Mega-Sena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: i32,
    pub max: i32,
}

impl NumberRange {
    /// Create a new range, rejecting `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::validation(format!(
                "range min {} must not exceed max {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Count of admissible values, `max - min + 1`.
    ///
    /// Widened to `i64` so the full `i32` span (2^32 values) cannot overflow.
    /// Zero or negative for a malformed range.
    pub fn spread(&self) -> i64 {
        i64::from(self.max) - i64::from(self.min) + 1
    }

    /// Whether `min <= max`.
    pub fn is_well_formed(&self) -> bool {
        self.min <= self.max
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{}", self.min, self.max)
    }
}

/// Inclusive bounds on how many numbers a single game may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PickBounds {
    pub min: usize,
    pub max: usize,
}

impl PickBounds {
    /// Create new pick bounds. A game always holds at least one number.
    pub fn new(min: usize, max: usize) -> Result<Self, DomainError> {
        if min == 0 {
            return Err(DomainError::validation("pick count minimum must be at least 1"));
        }
        if min > max {
            return Err(DomainError::validation(format!(
                "pick count min {} must not exceed max {}",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    /// Fixed pick count, e.g. Lotomania's 50.
    pub fn exactly(count: usize) -> Result<Self, DomainError> {
        Self::new(count, count)
    }

    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }

    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }
}

impl fmt::Display for PickBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}–{}", self.min, self.max)
        }
    }
}
