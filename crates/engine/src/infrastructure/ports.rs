//! Port traits for infrastructure boundaries.
//!
//! The entropy source is the only abstraction in the engine. Everything else
//! is concrete types. It exists so tests can replay fixed words and so the
//! OS provider can be swapped per platform.

use sorzi_domain::GenerationError;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum EntropyError {
    #[error("Entropy source failed: {0}")]
    Unavailable(String),
}

impl From<EntropyError> for GenerationError {
    fn from(err: EntropyError) -> Self {
        GenerationError::entropy_unavailable(err.to_string())
    }
}

// =============================================================================
// Entropy Port
// =============================================================================

/// Source of uniformly random 32-bit words.
///
/// Implementations must be cryptographically secure: generated numbers are
/// acted on by people as random picks and must not be predictable from
/// earlier output.
///
/// # Implementations
///
/// - `OsEntropy` in `infrastructure::entropy` (production, OS CSPRNG)
/// - `FixedEntropy` in `infrastructure::entropy` (tests, replays words)
/// - `MockEntropyPort` via mockall (tests)
#[cfg_attr(test, mockall::automock)]
pub trait EntropyPort: Send + Sync {
    /// Draw one fresh random word.
    fn next_word(&self) -> Result<u32, EntropyError>;
}
