//! HUD text and overlay state for the display layer

use crate::consts::SCORE_DIGITS;
use crate::sim::{GamePhase, GameState};

/// Whole points, zero-padded, e.g. `00042`
pub fn format_score(score: f64) -> String {
    let whole = if score.is_finite() && score > 0.0 {
        score.floor() as u64
    } else {
        0
    };
    format!("{whole:0width$}", width = SCORE_DIGITS)
}

/// Which full-screen panel is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// "Press space to start"
    StartScreen,
    /// Nothing over the playfield
    None,
    /// Game over panel with the final score
    GameOver { final_score: u64 },
}

/// Everything the HUD shows this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: String,
    pub high_score: String,
    pub overlay: Overlay,
}

impl Hud {
    pub fn from_state<R>(state: &GameState<R>) -> Self {
        let overlay = match state.phase {
            GamePhase::Idle => Overlay::StartScreen,
            GamePhase::Playing => Overlay::None,
            GamePhase::Over => Overlay::GameOver {
                final_score: state.score.max(0.0).floor() as u64,
            },
        };
        Self {
            score: format_score(state.score),
            high_score: state.high_score.display(),
            overlay,
        }
    }
}
