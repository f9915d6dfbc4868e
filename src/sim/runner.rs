//! The player's wolf: vertical kinematics and the upright/sliding pose
//!
//! The runner never moves horizontally; the world scrolls past it. Grounded vs
//! airborne is derived from the position, never stored.

use glam::Vec2;

use super::body::{Body, BodyKind, Rect};
use crate::consts::*;

/// Runner pose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pose {
    #[default]
    Upright,
    Sliding,
}

/// The player character
#[derive(Debug, Clone)]
pub struct Runner {
    /// Top-left corner
    pub pos: Vec2,
    /// Vertical velocity (negative is up)
    pub vel_y: f32,
    /// Current footprint (depends on pose)
    pub size: Vec2,
    pub pose: Pose,
    /// Hard floor for the bottom edge
    pub ground_y: f32,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(GROUND_Y)
    }
}

impl Runner {
    /// Upright and standing on `ground_y`
    pub fn new(ground_y: f32) -> Self {
        let size = Self::size_for(Pose::Upright);
        Self {
            pos: Vec2::new(RUNNER_X, ground_y - size.y),
            vel_y: 0.0,
            size,
            pose: Pose::Upright,
            ground_y,
        }
    }

    /// Put the runner back on the ground, upright and at rest
    pub fn reset(&mut self, ground_y: f32) {
        *self = Self::new(ground_y);
    }

    fn size_for(pose: Pose) -> Vec2 {
        match pose {
            Pose::Upright => Vec2::new(RUNNER_WIDTH, RUNNER_HEIGHT),
            Pose::Sliding => Vec2::new(
                RUNNER_WIDTH + RUNNER_SLIDE_EXTRA_WIDTH,
                RUNNER_SLIDE_HEIGHT,
            ),
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Feet on (or within one unit above) the ground line
    pub fn is_grounded(&self) -> bool {
        self.pos.y >= self.ground_y - self.size.y - 1.0
    }

    pub fn is_sliding(&self) -> bool {
        self.pose == Pose::Sliding
    }

    /// Jump if grounded. A slide is cancelled first so the jump starts from the
    /// upright footprint. No double jumps.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.set_sliding(false);
        self.vel_y = impulse;
        true
    }

    /// Switch pose, keeping the bottom edge on the ground line
    pub fn set_sliding(&mut self, enable: bool) {
        let pose = if enable { Pose::Sliding } else { Pose::Upright };
        if self.pose == pose {
            return;
        }
        self.pose = pose;
        self.size = Self::size_for(pose);
        self.pos.y = self.ground_y - self.size.y;
    }

    /// Semi-implicit step: position first, then gravity, then the ground clamp
    pub fn tick(&mut self, gravity: f32) {
        self.pos.y += self.vel_y;
        self.vel_y += gravity;

        if self.bottom() > self.ground_y {
            self.pos.y = self.ground_y - self.size.y;
            self.vel_y = 0.0;
        }
    }
}

impl Body for Runner {
    fn kind(&self) -> BodyKind {
        BodyKind::Runner(self.pose)
    }

    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}
