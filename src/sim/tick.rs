//! Fixed-step simulation tick
//!
//! Core game loop that advances the session by exactly one frame. The caller
//! owns the timing; nothing in here knows about display refresh.

use rand::Rng;

use super::autopilot;
use super::body::scroll_and_prune;
use super::collision::check_collision;
use super::spawner::maybe_spawn_cloud;
use super::state::{Command, GamePhase, GameState};

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Player commands queued since the last tick, in arrival order
    pub commands: Vec<Command>,
    /// Demo mode - the autopilot plays (and restarts) the game
    pub autopilot: bool,
}

impl TickInput {
    pub fn command(command: Command) -> Self {
        Self {
            commands: vec![command],
            ..Default::default()
        }
    }
}

/// Advance the session by one tick
pub fn tick<R: Rng>(state: &mut GameState<R>, input: &TickInput) {
    for &command in &input.commands {
        state.handle(command);
    }

    if input.autopilot {
        if state.phase != GamePhase::Playing {
            state.handle(Command::StartOrRestart);
        } else if let Some(command) = autopilot::decide(state) {
            state.handle(command);
        }
    }

    // Idle and Over are frozen
    if state.phase != GamePhase::Playing {
        return;
    }

    // Background layer
    if let Some(cloud) = maybe_spawn_cloud(state.view_width, &state.tuning, &mut state.rng) {
        state.clouds.push(cloud);
    }
    scroll_and_prune(&mut state.clouds, state.speed);

    state.runner.tick(state.tuning.gravity);

    let ctx = state.spawn_context();
    if let Some(obstacle) = state.spawner.update(&ctx, &state.tuning, &mut state.rng) {
        state.obstacles.push(obstacle);
    }
    scroll_and_prune(&mut state.obstacles, state.speed);

    if check_collision(&state.runner, &state.obstacles, state.tuning.hitbox_padding) {
        state.game_over();
        return;
    }

    state.score += state.tuning.score_per_tick;
    state.frame += 1;
    state.speed = state.tuning.speed_after(state.frame);
}
