//! Demo-mode AI
//!
//! Looks at the nearest obstacle still ahead of the runner and decides whether
//! to jump over it, slide under it, or leave it alone. It reads the same padded
//! hitboxes the collision checker uses, so it never needs to know archetypes.

use glam::Vec2;

use super::body::{Body, Rect};
use super::state::{Command, GameState};
use crate::consts::*;

/// Jump when the obstacle is this many ticks away
const JUMP_LEAD_TICKS: f32 = 8.0;
/// Start sliding this many ticks ahead of a low flyer
const SLIDE_LEAD_TICKS: f32 = 20.0;

/// Pick the command that dodges the next threat, if any
pub fn decide<R>(state: &GameState<R>) -> Option<Command> {
    let runner = &state.runner;
    let padding = state.tuning.hitbox_padding;
    let runner_left = runner.pos.x + padding;

    let next = state
        .obstacles
        .iter()
        .map(|o| o.bounds())
        .filter(|b| b.right() - padding > runner_left)
        .min_by(|a, b| a.left().total_cmp(&b.left()));

    let Some(threat) = next else {
        return runner.is_sliding().then_some(Command::SlideOff);
    };

    let upright = pose_box(runner.ground_y, RUNNER_WIDTH, RUNNER_HEIGHT);
    let sliding = pose_box(
        runner.ground_y,
        RUNNER_WIDTH + RUNNER_SLIDE_EXTRA_WIDTH,
        RUNNER_SLIDE_HEIGHT,
    );

    // Ticks until the threat reaches the runner's front edge
    let distance = threat.left() - (runner.pos.x + runner.size.x);
    let eta = distance / state.speed.max(f32::EPSILON);

    if !vertical_overlap(upright, threat, padding) {
        // Passes overhead
        return runner.is_sliding().then_some(Command::SlideOff);
    }
    if !vertical_overlap(sliding, threat, padding) {
        return (eta <= SLIDE_LEAD_TICKS && !runner.is_sliding()).then_some(Command::SlideOn);
    }
    (eta <= JUMP_LEAD_TICKS && runner.is_grounded()).then_some(Command::Jump)
}

/// Grounded hitbox for a footprint
fn pose_box(ground_y: f32, width: f32, height: f32) -> Rect {
    Rect {
        pos: Vec2::new(RUNNER_X, ground_y - height),
        size: Vec2::new(width, height),
    }
}

fn vertical_overlap(a: Rect, b: Rect, padding: f32) -> bool {
    let (a, b) = (a.inset(padding), b.inset(padding));
    a.top() < b.bottom() && a.bottom() > b.top()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::HighScore;
    use crate::sim::entity::{Obstacle, ObstacleKind};
    use crate::tuning::Tuning;

    fn with_obstacle(kind: ObstacleKind, x: f32, altitude: f32) -> GameState {
        let mut state = GameState::new(1, Tuning::default(), HighScore::default());
        state.start();
        state
            .obstacles
            .push(Obstacle::with_altitude(kind, x, GROUND_Y, altitude));
        state
    }

    #[test]
    fn test_jumps_hazard_in_range() {
        // 15 units ahead at speed 3 -> 5 ticks
        let state = with_obstacle(ObstacleKind::SmallHazard, 120.0, 0.0);
        assert_eq!(decide(&state), Some(Command::Jump));
    }

    #[test]
    fn test_waits_for_far_hazard() {
        let state = with_obstacle(ObstacleKind::LargeHazard, 600.0, 0.0);
        assert_eq!(decide(&state), None);
    }

    #[test]
    fn test_slides_under_low_flyer() {
        let state = with_obstacle(ObstacleKind::Flyer, 150.0, 10.0);
        assert_eq!(decide(&state), Some(Command::SlideOn));
    }

    #[test]
    fn test_ignores_high_flyer() {
        let state = with_obstacle(ObstacleKind::Flyer, 120.0, 50.0);
        assert_eq!(decide(&state), None);
    }

    #[test]
    fn test_stands_up_when_clear() {
        let mut state = GameState::new(1, Tuning::default(), HighScore::default());
        state.start();
        state.runner.set_sliding(true);
        assert_eq!(decide(&state), Some(Command::SlideOff));
    }

    #[test]
    fn test_ignores_obstacles_already_passed() {
        let state = with_obstacle(ObstacleKind::SmallHazard, 20.0, 0.0);
        assert_eq!(decide(&state), None);
    }
}
