//! High score persistence
//!
//! One number, stored as plain decimal text:
//! - `LocalStorageStore` in the browser (key kept from earlier web builds)
//! - `FileStore` on native
//! - `MemoryStore` for tests and headless runs

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use thiserror::Error;

/// Storage failures. Callers treat all of them as "no record".
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored value is not a number: {0}")]
    Format(#[from] std::num::ParseFloatError),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Load/save collaborator for the high score
pub trait ScoreStore {
    /// `Ok(None)` when nothing has been stored yet
    fn load_high_score(&mut self) -> Result<Option<f64>, StoreError>;

    fn save_high_score(&mut self, score: f64) -> Result<(), StoreError>;
}

/// Parse stored text; blank means "nothing stored"
pub fn parse_score(text: &str) -> Result<Option<f64>, StoreError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    Ok(Some(text.parse::<f64>()?))
}

/// Shortest text that parses back to exactly `score`
pub fn encode_score(score: f64) -> String {
    score.to_string()
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<f64>,
    saves: usize,
}

impl MemoryStore {
    pub fn with_value(value: f64) -> Self {
        Self {
            value: Some(value),
            saves: 0,
        }
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Number of successful saves
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ScoreStore for MemoryStore {
    fn load_high_score(&mut self) -> Result<Option<f64>, StoreError> {
        Ok(self.value)
    }

    fn save_high_score(&mut self, score: f64) -> Result<(), StoreError> {
        self.value = Some(score);
        self.saves += 1;
        Ok(())
    }
}
