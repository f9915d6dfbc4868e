//! High score record
//!
//! A single best score, persisted through a `ScoreStore`. Stored values that
//! are missing or nonsensical read back as "no record".

use crate::persistence::ScoreStore;

/// Best score across sessions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HighScore {
    best: f64,
}

impl HighScore {
    /// Record from a stored value; negative or non-finite values become 0
    pub fn new(best: f64) -> Self {
        Self {
            best: sanitize(best),
        }
    }

    pub fn best(&self) -> f64 {
        self.best
    }

    /// Check if a score beats the record (ties do not)
    pub fn qualifies(&self, score: f64) -> bool {
        score > self.best
    }

    /// Replace the record if `score` beats it. Returns whether it did.
    pub fn record(&mut self, score: f64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        true
    }

    /// HUD readout, e.g. `HI 00042`
    pub fn display(&self) -> String {
        format!("HI {}", crate::ui::format_score(self.best))
    }

    /// Load the record from a store, falling back to 0
    pub fn load(store: &mut impl ScoreStore) -> Self {
        match store.load_high_score() {
            Ok(Some(value)) => {
                let record = Self::new(value);
                if record.best != value {
                    log::warn!("Ignoring invalid stored high score {value}");
                } else {
                    log::info!("Loaded high score {value:.1}");
                }
                record
            }
            Ok(None) => {
                log::info!("No high score found, starting fresh");
                Self::default()
            }
            Err(err) => {
                log::warn!("Could not read high score: {err}");
                Self::default()
            }
        }
    }

    /// Persist the record; failures are logged, never fatal
    pub fn save(&self, store: &mut impl ScoreStore) {
        match store.save_high_score(self.best) {
            Ok(()) => log::info!("High score saved ({:.1})", self.best),
            Err(err) => log::warn!("Could not save high score: {err}"),
        }
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}
