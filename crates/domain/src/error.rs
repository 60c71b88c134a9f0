//! Unified error types for the domain layer
//!
//! `DomainError` covers construction and parsing of value objects.
//! `GenerationError` is the taxonomy of the sampler and the game generator:
//! every variant is an input-validation failure except `EntropyUnavailable`,
//! which reports a platform entropy failure passed through from the caller's
//! draw closure.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for violated value-object invariants.
    ///
    /// # Example
    /// ```ignore
    /// if min > max {
    ///     return Err(DomainError::validation("range min must not exceed max"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Errors raised while sampling numbers or generating games.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Sampler called with `min > max`, or with a spread one draw cannot cover
    #[error("Invalid range: {min}..={max}")]
    InvalidRange { min: i64, max: i64 },

    /// Requested pick count outside the rules' allowed bounds
    #[error("Pick count must be between {min} and {max}, got {requested}")]
    PickCountOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// Uniqueness requested but the range holds fewer values than requested
    #[error("Cannot draw {requested} unique numbers from {available} available values")]
    InsufficientRange { requested: usize, available: u64 },

    /// Batch size was zero, negative, or not an integer
    #[error("Invalid games count: {0}")]
    InvalidGamesCount(String),

    /// The entropy source failed to produce a word
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),
}

impl GenerationError {
    pub fn invalid_range(min: impl Into<i64>, max: impl Into<i64>) -> Self {
        Self::InvalidRange {
            min: min.into(),
            max: max.into(),
        }
    }

    pub fn invalid_games_count(input: impl ToString) -> Self {
        Self::InvalidGamesCount(input.to_string())
    }

    pub fn entropy_unavailable(msg: impl Into<String>) -> Self {
        Self::EntropyUnavailable(msg.into())
    }

    /// Whether the error was caused by caller input rather than the platform.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::EntropyUnavailable(_))
    }
}
