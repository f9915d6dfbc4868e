//! Frame driver
//!
//! Owns a session plus its high score store, turns variable frame times into
//! fixed ticks, and persists new records as they happen. Platform entry points
//! only forward input and draw.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::highscores::HighScore;
use crate::persistence::ScoreStore;
use crate::sim::{Command, GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;
use crate::ui::Hud;

/// Game instance holding all state
pub struct Game<S, R = Pcg32> {
    pub state: GameState<R>,
    store: S,
    accumulator: f32,
    input: TickInput,
}

impl<S: ScoreStore> Game<S> {
    /// Load the stored record and open an idle session
    pub fn new(mut store: S, seed: u64, tuning: Tuning) -> Self {
        let high_score = HighScore::load(&mut store);
        log::info!("Game initialized with seed: {}", seed);
        Self::from_state(store, GameState::new(seed, tuning, high_score))
    }
}

impl<S: ScoreStore, R: Rng> Game<S, R> {
    pub fn from_state(store: S, state: GameState<R>) -> Self {
        Self {
            state,
            store,
            accumulator: 0.0,
            input: TickInput::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Queue a command for the next tick
    pub fn queue(&mut self, command: Command) {
        self.input.commands.push(command);
    }

    /// Space/tap: start when not running, jump while running
    pub fn primary_action(&mut self) {
        let command = match self.state.phase {
            GamePhase::Playing => Command::Jump,
            GamePhase::Idle | GamePhase::Over => Command::StartOrRestart,
        };
        self.queue(command);
    }

    /// Canvas resized; spawn positions follow the visible width
    pub fn set_view_width(&mut self, width: f32) {
        self.state.set_view_width(width);
    }

    pub fn autopilot(&self) -> bool {
        self.input.autopilot
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.input.autopilot = enabled;
        log::info!("Autopilot: {}", enabled);
    }

    /// Run as many fixed ticks as `dt` seconds cover
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let dt = dt.clamp(0.0, 0.1);
        self.accumulator += dt;

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(self.step());
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Too far behind; drop the backlog instead of fast-forwarding
            self.accumulator = 0.0;
        }
        events
    }

    /// Exactly one tick, consuming queued commands
    pub fn step(&mut self) -> Vec<GameEvent> {
        tick(&mut self.state, &self.input);
        self.input.commands.clear();

        let events = self.state.drain_events();
        for event in &events {
            if let GameEvent::GameOver {
                new_record: true, ..
            } = event
            {
                self.state.high_score.save(&mut self.store);
            }
        }
        events
    }

    /// Take events raised outside a tick (e.g. the initial start prompt)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    pub fn hud(&self) -> Hud {
        Hud::from_state(&self.state)
    }
}
