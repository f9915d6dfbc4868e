//! Wolf Runner - A side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, spawning, collisions, game state)
//! - `game`: Fixed-timestep frame driver tying the simulation to persistence
//! - `renderer`: Scene projection into flat draw primitives
//! - `platform`: Browser/native platform abstraction (input mapping)
//! - `persistence`: High score storage backends
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::Game;
pub use highscores::HighScore;
pub use tuning::Tuning;

/// Fixed world geometry (logical units, 300 tall)
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per classic display refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Logical canvas height; the display scales this to the real canvas
    pub const LOGICAL_HEIGHT: f32 = 300.0;
    /// Ground line (y grows downward)
    pub const GROUND_Y: f32 = LOGICAL_HEIGHT - 20.0;
    /// Default logical view width before the first resize
    pub const DEFAULT_VIEW_WIDTH: f32 = 800.0;
    /// Obstacles never spawn closer than this, even on narrow screens
    pub const MIN_OBSTACLE_SPAWN_X: f32 = 800.0;

    /// Runner geometry
    pub const RUNNER_X: f32 = 50.0;
    pub const RUNNER_WIDTH: f32 = 55.0;
    pub const RUNNER_HEIGHT: f32 = 45.0;
    pub const RUNNER_SLIDE_HEIGHT: f32 = 25.0;
    /// Extra length while sliding (the wolf stretches out)
    pub const RUNNER_SLIDE_EXTRA_WIDTH: f32 = 15.0;

    /// Obstacle archetypes
    pub const SMALL_HAZARD_WIDTH: f32 = 17.0;
    pub const SMALL_HAZARD_HEIGHT: f32 = 35.0;
    pub const LARGE_HAZARD_WIDTH: f32 = 25.0;
    pub const LARGE_HAZARD_HEIGHT: f32 = 50.0;
    pub const FLYER_WIDTH: f32 = 46.0;
    pub const FLYER_HEIGHT: f32 = 40.0;
    /// Flyer altitudes above ground-level placement: low, mid, high
    pub const FLYER_ALTITUDES: [f32; 3] = [10.0, 30.0, 50.0];

    /// Cloud geometry
    pub const CLOUD_WIDTH: f32 = 50.0;
    pub const CLOUD_HEIGHT: f32 = 20.0;

    /// Width of zero-padded score readouts
    pub const SCORE_DIGITS: usize = 5;
}
