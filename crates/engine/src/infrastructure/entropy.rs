//! Entropy implementations.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::infrastructure::ports::{EntropyError, EntropyPort};

/// Operating-system CSPRNG (`getrandom` underneath).
///
/// Stateless, so one instance can be shared across threads without locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl OsEntropy {
    pub fn new() -> Self {
        Self
    }
}

impl EntropyPort for OsEntropy {
    fn next_word(&self) -> Result<u32, EntropyError> {
        let mut buf = [0u8; 4];
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))?;
        Ok(u32::from_le_bytes(buf))
    }
}

/// Fixed entropy for testing.
///
/// Replays the given words in order, cycling when exhausted. An empty
/// sequence reports the source as unavailable.
#[cfg(test)]
#[derive(Debug)]
pub struct FixedEntropy {
    words: Vec<u32>,
    index: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl FixedEntropy {
    pub fn new(words: Vec<u32>) -> Self {
        Self {
            words,
            index: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Number of words drawn so far.
    pub fn draws(&self) -> usize {
        self.index.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl EntropyPort for FixedEntropy {
    fn next_word(&self) -> Result<u32, EntropyError> {
        if self.words.is_empty() {
            return Err(EntropyError::Unavailable("no words configured".into()));
        }
        let idx = self
            .index
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(self.words[idx % self.words.len()])
    }
}
