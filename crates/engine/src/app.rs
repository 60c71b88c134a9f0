//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{entropy::OsEntropy, ports::EntropyPort};
use crate::use_cases::GenerationUseCases;

/// Main application state: the use cases wired to one entropy port.
pub struct App {
    pub use_cases: GenerationUseCases,
}

impl App {
    pub fn new(entropy: Arc<dyn EntropyPort>) -> Self {
        Self {
            use_cases: GenerationUseCases::new(entropy),
        }
    }

    /// Production wiring: OS entropy.
    pub fn with_os_entropy() -> Self {
        Self::new(Arc::new(OsEntropy::new()))
    }
}
