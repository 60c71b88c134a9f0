//! Use cases - User story orchestration.
//!
//! `sampler` draws single numbers; `generate` builds games and batches on top
//! of it.

pub mod generate;
pub mod sampler;

use std::sync::Arc;

pub use generate::{GenerateGames, GenerationOutcome, GenerationRequest};
pub use sampler::NumberSampler;

use crate::infrastructure::ports::EntropyPort;

/// Container for generation use cases.
pub struct GenerationUseCases {
    pub sampler: Arc<NumberSampler>,
    pub generate: Arc<GenerateGames>,
}

impl GenerationUseCases {
    pub fn new(entropy: Arc<dyn EntropyPort>) -> Self {
        let sampler = Arc::new(NumberSampler::new(entropy));
        let generate = Arc::new(GenerateGames::new(sampler.clone()));
        Self { sampler, generate }
    }
}
