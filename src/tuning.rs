//! Data-driven game balance
//!
//! Every number that shapes difficulty lives here so it can be tweaked from
//! JSON without recompiling. Missing fields fall back to the shipped defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected tuning values
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be {expected} (got {value})")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },
}

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Runner ===
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_impulse: f32,

    // === World ===
    /// Scroll speed at the start of each session
    pub start_speed: f32,
    /// Scroll speed cap
    pub max_speed: f32,
    /// Speed gained per tick
    pub acceleration: f32,
    /// Score gained per surviving tick
    pub score_per_tick: f64,

    // === Obstacle spawning ===
    /// Countdown (ticks) before the first obstacle
    pub initial_spawn_countdown: f32,
    /// Distance between consecutive obstacles, in world units
    pub min_gap: f32,
    pub max_gap: f32,
    /// Large hazards need score above this and a roll above `large_hazard_roll`
    pub large_hazard_score: f64,
    pub large_hazard_roll: f64,
    /// Flyers need score above this and a roll above `flyer_roll`
    pub flyer_score: f64,
    pub flyer_roll: f64,

    // === Clouds ===
    /// Per-tick cloud spawn probability
    pub cloud_chance: f64,
    pub cloud_min_speed: f32,
    pub cloud_speed_spread: f32,
    pub cloud_min_altitude: f32,
    pub cloud_altitude_spread: f32,

    // === Collision ===
    /// Inward padding applied to every hitbox side
    pub hitbox_padding: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_impulse: -10.0,

            start_speed: 3.0,
            max_speed: 20.0,
            acceleration: 0.0002,
            score_per_tick: 0.1,

            initial_spawn_countdown: 200.0,
            min_gap: 400.0,
            max_gap: 900.0,
            large_hazard_score: 100.0,
            large_hazard_roll: 0.6,
            flyer_score: 300.0,
            flyer_roll: 0.8,

            cloud_chance: 0.005,
            cloud_min_speed: 1.0,
            cloud_speed_spread: 1.0,
            cloud_min_altitude: 20.0,
            cloud_altitude_spread: 100.0,

            hitbox_padding: 10.0,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON (partial objects allowed)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Scroll speed after `ticks` ticks of play, capped at `max_speed`.
    /// Closed form in f64; summing `acceleration` into an f32 drifts.
    pub fn speed_after(&self, ticks: u64) -> f32 {
        let ramp = f64::from(self.start_speed) + f64::from(self.acceleration) * ticks as f64;
        ramp.min(f64::from(self.max_speed)) as f32
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        fn check(
            ok: bool,
            field: &'static str,
            expected: &'static str,
            value: f64,
        ) -> Result<(), TuningError> {
            if ok {
                Ok(())
            } else {
                Err(TuningError::OutOfRange {
                    field,
                    expected,
                    value,
                })
            }
        }

        check(self.gravity > 0.0, "gravity", "positive", self.gravity.into())?;
        check(
            self.jump_impulse < 0.0,
            "jump_impulse",
            "negative",
            self.jump_impulse.into(),
        )?;
        check(
            self.start_speed > 0.0,
            "start_speed",
            "positive",
            self.start_speed.into(),
        )?;
        check(
            self.max_speed >= self.start_speed,
            "max_speed",
            "at least start_speed",
            self.max_speed.into(),
        )?;
        check(
            self.acceleration >= 0.0,
            "acceleration",
            "non-negative",
            self.acceleration.into(),
        )?;
        check(
            self.score_per_tick >= 0.0,
            "score_per_tick",
            "non-negative",
            self.score_per_tick,
        )?;
        check(
            self.min_gap > 0.0,
            "min_gap",
            "positive",
            self.min_gap.into(),
        )?;
        check(
            self.max_gap >= self.min_gap,
            "max_gap",
            "at least min_gap",
            self.max_gap.into(),
        )?;
        check(
            (0.0..=1.0).contains(&self.cloud_chance),
            "cloud_chance",
            "a probability",
            self.cloud_chance,
        )?;
        check(
            self.cloud_min_speed > 0.0,
            "cloud_min_speed",
            "positive",
            self.cloud_min_speed.into(),
        )?;
        check(
            self.cloud_speed_spread >= 0.0,
            "cloud_speed_spread",
            "non-negative",
            self.cloud_speed_spread.into(),
        )?;
        check(
            self.hitbox_padding >= 0.0,
            "hitbox_padding",
            "non-negative",
            self.hitbox_padding.into(),
        )?;
        Ok(())
    }
}
