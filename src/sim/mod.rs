//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Injected, seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod body;
pub mod collision;
pub mod entity;
pub mod runner;
pub mod spawner;
pub mod state;
pub mod tick;

pub use body::{Body, BodyKind, Rect, Scroller, scroll_and_prune};
pub use collision::{check_collision, first_hit, padded_overlap};
pub use entity::{Cloud, Obstacle, ObstacleKind};
pub use runner::{Pose, Runner};
pub use spawner::{ObstacleSpawner, SpawnContext, choose_kind, maybe_spawn_cloud};
pub use state::{Command, GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
