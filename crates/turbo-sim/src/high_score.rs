//! High score persistence seam.
//!
//! The engine reads the stored value once when it is created and writes it
//! when a finished run beats it. Storage failures never affect gameplay.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("high score storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("high score data is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Backing store for the single persisted high score.
pub trait HighScoreStore: Send {
    /// Read the stored high score. A store with nothing saved returns 0.
    fn load(&self) -> Result<u64, StoreError>;

    /// Replace the stored high score.
    fn save(&mut self, score: u64) -> Result<(), StoreError>;
}

/// In-memory store. Clones share the same value, so a caller can keep a
/// handle and observe what the engine wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryHighScore {
    score: Arc<AtomicU64>,
}

impl MemoryHighScore {
    pub fn new(score: u64) -> Self {
        Self {
            score: Arc::new(AtomicU64::new(score)),
        }
    }

    pub fn get(&self) -> u64 {
        self.score.load(Ordering::SeqCst)
    }
}

impl HighScoreStore for MemoryHighScore {
    fn load(&self) -> Result<u64, StoreError> {
        Ok(self.get())
    }

    fn save(&mut self, score: u64) -> Result<(), StoreError> {
        self.score.store(score, Ordering::SeqCst);
        Ok(())
    }
}
