//! Unbiased number sampling bound to the entropy port.

use std::sync::Arc;

use sorzi_domain::{sample_inclusive, GenerationError};

use crate::infrastructure::ports::EntropyPort;

/// Draws uniformly distributed integers from an inclusive range.
pub struct NumberSampler {
    entropy: Arc<dyn EntropyPort>,
}

impl NumberSampler {
    pub fn new(entropy: Arc<dyn EntropyPort>) -> Self {
        Self { entropy }
    }

    /// Sample one value in `min..=max`.
    ///
    /// # Errors
    /// * `InvalidRange` when `min > max`
    /// * `EntropyUnavailable` when the entropy source fails
    pub fn sample(&self, min: i32, max: i32) -> Result<i32, GenerationError> {
        sample_inclusive(min, max, || Ok(self.entropy.next_word()?))
    }
}
