//! Axis-aligned boxes and the capability traits every entity shares
//!
//! Collision and lifecycle code only sees `Body`/`Scroller`, never the
//! concrete archetype, so adding a new obstacle kind touches one match arm.

use glam::Vec2;

use super::entity::ObstacleKind;
use super::runner::Pose;

/// Axis-aligned rectangle, top-left origin, y grows downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Shrink every side by `padding`.
    ///
    /// Sizes are not clamped: a box narrower than `2 * padding` ends up with a
    /// negative extent, which the overlap test still handles consistently.
    pub fn inset(&self, padding: f32) -> Self {
        Self {
            pos: self.pos + Vec2::splat(padding),
            size: self.size - Vec2::splat(padding * 2.0),
        }
    }

    /// Strict AABB overlap (touching edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Tag identifying what an entity is, for rendering and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Runner(Pose),
    Obstacle(ObstacleKind),
    Cloud,
}

/// Anything with a bounding box in the world
pub trait Body {
    fn kind(&self) -> BodyKind;

    fn bounds(&self) -> Rect;

    /// True once the entity has left the world and should be dropped
    fn is_expired(&self) -> bool {
        false
    }
}

/// Entities that drift left across the screen
pub trait Scroller: Body {
    /// Move one tick. `world_speed` is the shared scroll speed; entities with
    /// their own drift may ignore it.
    fn scroll(&mut self, world_speed: f32);
}

/// Advance every scroller one tick, then drop the ones that expired
pub fn scroll_and_prune<T: Scroller>(items: &mut Vec<T>, world_speed: f32) {
    for item in items.iter_mut() {
        item.scroll(world_speed);
    }
    items.retain(|item| !item.is_expired());
}
