//! Keyboard/touch mapping

use rand::Rng;

use crate::game::Game;
use crate::persistence::ScoreStore;
use crate::sim::Command;

/// What a raw input event means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Start/restart when not running, jump while running
    Primary,
    SlideOn,
    SlideOff,
    ToggleAutopilot,
}

impl InputAction {
    pub fn apply<S: ScoreStore, R: Rng>(self, game: &mut Game<S, R>) {
        match self {
            InputAction::Primary => game.primary_action(),
            InputAction::SlideOn => game.queue(Command::SlideOn),
            InputAction::SlideOff => game.queue(Command::SlideOff),
            InputAction::ToggleAutopilot => {
                let enabled = !game.autopilot();
                game.set_autopilot(enabled);
            }
        }
    }
}

/// `code` is `KeyboardEvent.code`, `key` is `KeyboardEvent.key`
pub fn key_down(code: &str, key: &str) -> Option<InputAction> {
    match (code, key) {
        ("Space" | "ArrowUp", _) => Some(InputAction::Primary),
        ("ArrowDown", _) | (_, "s") => Some(InputAction::SlideOn),
        (_, "i" | "I") => Some(InputAction::ToggleAutopilot),
        _ => None,
    }
}

pub fn key_up(code: &str, key: &str) -> Option<InputAction> {
    match (code, key) {
        ("ArrowDown", _) | (_, "s") => Some(InputAction::SlideOff),
        _ => None,
    }
}

/// Any touch is the primary action
pub fn touch_start() -> InputAction {
    InputAction::Primary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::sim::GamePhase;
    use crate::tuning::Tuning;

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_down("Space", " "), Some(InputAction::Primary));
        assert_eq!(key_down("ArrowUp", "ArrowUp"), Some(InputAction::Primary));
        assert_eq!(key_down("ArrowDown", "ArrowDown"), Some(InputAction::SlideOn));
        assert_eq!(key_down("KeyS", "s"), Some(InputAction::SlideOn));
        assert_eq!(key_down("KeyI", "i"), Some(InputAction::ToggleAutopilot));
        assert_eq!(key_down("KeyX", "x"), None);

        assert_eq!(key_up("ArrowDown", "ArrowDown"), Some(InputAction::SlideOff));
        assert_eq!(key_up("KeyS", "s"), Some(InputAction::SlideOff));
        assert_eq!(key_up("Space", " "), None);
    }

    #[test]
    fn test_slide_keys_drive_the_runner() {
        let mut game = Game::new(MemoryStore::default(), 9, Tuning::default());
        touch_start().apply(&mut game);
        game.step();
        assert_eq!(game.state.phase, GamePhase::Playing);

        InputAction::SlideOn.apply(&mut game);
        game.step();
        assert!(game.state.runner.is_sliding());

        InputAction::SlideOff.apply(&mut game);
        game.step();
        assert!(!game.state.runner.is_sliding());
    }

    #[test]
    fn test_slide_ignored_before_start() {
        let mut game = Game::new(MemoryStore::default(), 9, Tuning::default());
        InputAction::SlideOn.apply(&mut game);
        game.step();
        assert_eq!(game.state.phase, GamePhase::Idle);
        assert!(!game.state.runner.is_sliding());
    }

    #[test]
    fn test_toggle_autopilot() {
        let mut game = Game::new(MemoryStore::default(), 9, Tuning::default());
        InputAction::ToggleAutopilot.apply(&mut game);
        assert!(game.autopilot());
        game.step();
        assert_eq!(game.state.phase, GamePhase::Playing);
        InputAction::ToggleAutopilot.apply(&mut game);
        assert!(!game.autopilot());
    }
}
