//! Session state and the top-level phase machine
//!
//! Everything a run mutates lives in `GameState`; there are no globals, so two
//! sessions with the same seed and inputs evolve identically.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Cloud, Obstacle};
use super::runner::Runner;
use super::spawner::{ObstacleSpawner, SpawnContext};
use crate::consts::*;
use crate::highscores::HighScore;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Start screen, nothing simulated yet
    #[default]
    Idle,
    /// Active run
    Playing,
    /// Run ended by a collision; waiting for restart
    Over,
}

/// Player commands. Each is only meaningful in some phases and silently
/// ignored in the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Jump,
    SlideOn,
    SlideOff,
    StartOrRestart,
}

/// Notifications for the display layer
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Show the start prompt
    StartPrompt,
    /// A run began (hide overlays)
    Started,
    /// The runner hit an obstacle
    GameOver {
        final_score: f64,
        high_score: f64,
        new_record: bool,
    },
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R = Pcg32> {
    /// Balance knobs for this session
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Accumulated score for the current run
    pub score: f64,
    /// Best score across runs
    pub high_score: HighScore,
    /// World scroll speed (units per tick)
    pub speed: f32,
    /// Ticks survived this run
    pub frame: u64,
    pub runner: Runner,
    /// Live obstacles (spawn order)
    pub obstacles: Vec<Obstacle>,
    /// Live background clouds
    pub clouds: Vec<Cloud>,
    pub spawner: ObstacleSpawner,
    /// Logical width of the visible world
    pub view_width: f32,
    pub(super) rng: R,
    events: Vec<GameEvent>,
}

impl GameState<Pcg32> {
    /// New idle session with a seeded RNG
    pub fn new(seed: u64, tuning: Tuning, high_score: HighScore) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed), tuning, high_score)
    }
}

impl<R: Rng> GameState<R> {
    /// New idle session drawing randomness from `rng`
    pub fn with_rng(rng: R, tuning: Tuning, high_score: HighScore) -> Self {
        Self {
            phase: GamePhase::Idle,
            score: 0.0,
            high_score,
            speed: tuning.start_speed,
            frame: 0,
            runner: Runner::new(GROUND_Y),
            obstacles: Vec::new(),
            clouds: Vec::new(),
            spawner: ObstacleSpawner::new(&tuning),
            view_width: DEFAULT_VIEW_WIDTH,
            tuning,
            rng,
            events: vec![GameEvent::StartPrompt],
        }
    }

    /// Update the logical view width (canvas resize)
    pub fn set_view_width(&mut self, width: f32) {
        self.view_width = width.max(0.0);
    }

    /// Apply a player command if the current phase accepts it.
    /// Returns whether it was accepted.
    pub fn handle(&mut self, command: Command) -> bool {
        match (self.phase, command) {
            (GamePhase::Idle | GamePhase::Over, Command::StartOrRestart) => {
                self.start();
                true
            }
            (GamePhase::Playing, Command::Jump) => self.runner.jump(self.tuning.jump_impulse),
            (GamePhase::Playing, Command::SlideOn) => {
                self.runner.set_sliding(true);
                true
            }
            (GamePhase::Playing, Command::SlideOff) => {
                self.runner.set_sliding(false);
                true
            }
            _ => false,
        }
    }

    /// Reset everything run-scoped and enter `Playing`
    pub fn start(&mut self) {
        self.score = 0.0;
        self.speed = self.tuning.start_speed;
        self.obstacles.clear();
        self.clouds.clear();
        self.spawner.reset(&self.tuning);
        self.frame = 0;
        self.runner.reset(GROUND_Y);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Started);
        log::info!("Run started (best so far {:.0})", self.high_score.best());
    }

    /// Freeze the run after a collision and settle the high score
    pub fn game_over(&mut self) {
        self.phase = GamePhase::Over;
        let new_record = self.high_score.record(self.score);
        if new_record {
            log::info!("New high score: {:.1}", self.score);
        }
        log::info!(
            "Game over at {:.1} after {} ticks (speed {:.2})",
            self.score,
            self.frame,
            self.speed
        );
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
            high_score: self.high_score.best(),
            new_record,
        });
    }

    /// Values the spawners read this tick
    pub fn spawn_context(&self) -> SpawnContext {
        SpawnContext {
            score: self.score,
            speed: self.speed,
            view_width: self.view_width,
            ground_y: self.runner.ground_y,
        }
    }

    /// Take pending display notifications
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
