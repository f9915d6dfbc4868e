//! Scrolling entities: obstacles (the things that end a run) and clouds

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::body::{Body, BodyKind, Rect, Scroller};
use crate::consts::*;

/// Obstacle archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Small cactus
    SmallHazard,
    /// Tall cactus with arms
    LargeHazard,
    /// Bird, flying at one of three altitudes
    Flyer,
}

impl ObstacleKind {
    /// Fixed footprint for this archetype
    pub fn size(self) -> Vec2 {
        match self {
            ObstacleKind::SmallHazard => Vec2::new(SMALL_HAZARD_WIDTH, SMALL_HAZARD_HEIGHT),
            ObstacleKind::LargeHazard => Vec2::new(LARGE_HAZARD_WIDTH, LARGE_HAZARD_HEIGHT),
            ObstacleKind::Flyer => Vec2::new(FLYER_WIDTH, FLYER_HEIGHT),
        }
    }
}

/// An obstacle moving left at the world scroll speed
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub pos: Vec2,
    pub size: Vec2,
    /// Height above ground-level placement (flyers only, zero otherwise)
    pub altitude: f32,
    expired: bool,
}

impl Obstacle {
    /// Place an obstacle resting on `ground_y`. Flyers roll their altitude here,
    /// once, and keep it for their whole life.
    pub fn spawn<R: Rng + ?Sized>(kind: ObstacleKind, x: f32, ground_y: f32, rng: &mut R) -> Self {
        let altitude = match kind {
            ObstacleKind::Flyer => FLYER_ALTITUDES.choose(rng).copied().unwrap_or(0.0),
            _ => 0.0,
        };
        Self::with_altitude(kind, x, ground_y, altitude)
    }

    /// Deterministic placement for a known altitude
    pub fn with_altitude(kind: ObstacleKind, x: f32, ground_y: f32, altitude: f32) -> Self {
        let size = kind.size();
        Self {
            kind,
            pos: Vec2::new(x, ground_y - size.y - altitude),
            size,
            altitude,
            expired: false,
        }
    }
}

impl Body for Obstacle {
    fn kind(&self) -> BodyKind {
        BodyKind::Obstacle(self.kind)
    }

    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    fn is_expired(&self) -> bool {
        self.expired
    }
}

impl Scroller for Obstacle {
    fn scroll(&mut self, world_speed: f32) {
        self.pos.x -= world_speed;
        if self.pos.x + self.size.x < 0.0 {
            self.expired = true;
        }
    }
}

/// Decorative background cloud with its own drift speed
#[derive(Debug, Clone)]
pub struct Cloud {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    expired: bool,
}

impl Cloud {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            size: Vec2::new(CLOUD_WIDTH, CLOUD_HEIGHT),
            speed,
            expired: false,
        }
    }
}

impl Body for Cloud {
    fn kind(&self) -> BodyKind {
        BodyKind::Cloud
    }

    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    fn is_expired(&self) -> bool {
        self.expired
    }
}

impl Scroller for Cloud {
    /// Clouds ignore the world speed (parallax)
    fn scroll(&mut self, _world_speed: f32) {
        self.pos.x -= self.speed;
        if self.pos.x + self.size.x < 0.0 {
            self.expired = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::scroll_and_prune;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_archetype_geometry() {
        let small = Obstacle::with_altitude(ObstacleKind::SmallHazard, 800.0, GROUND_Y, 0.0);
        assert_eq!(small.bounds(), Rect::new(800.0, 245.0, 17.0, 35.0));

        let large = Obstacle::with_altitude(ObstacleKind::LargeHazard, 800.0, GROUND_Y, 0.0);
        assert_eq!(large.bounds(), Rect::new(800.0, 230.0, 25.0, 50.0));

        let flyer = Obstacle::with_altitude(ObstacleKind::Flyer, 800.0, GROUND_Y, 30.0);
        assert_eq!(flyer.bounds(), Rect::new(800.0, 210.0, 46.0, 40.0));
    }

    #[test]
    fn test_flyer_altitude_from_fixed_set() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..50 {
            let flyer = Obstacle::spawn(ObstacleKind::Flyer, 800.0, GROUND_Y, &mut rng);
            assert!(FLYER_ALTITUDES.contains(&flyer.altitude));
            assert_eq!(flyer.pos.y, GROUND_Y - FLYER_HEIGHT - flyer.altitude);
        }
    }

    #[test]
    fn test_hazards_sit_on_ground() {
        let mut rng = Pcg32::seed_from_u64(7);
        let hazard = Obstacle::spawn(ObstacleKind::LargeHazard, 800.0, GROUND_Y, &mut rng);
        assert_eq!(hazard.altitude, 0.0);
        assert_eq!(hazard.bounds().bottom(), GROUND_Y);
    }

    #[test]
    fn test_obstacle_expires_exactly_past_left_edge() {
        // Right edge lands exactly on 0: still alive
        let mut obstacle = Obstacle::with_altitude(ObstacleKind::SmallHazard, -14.0, GROUND_Y, 0.0);
        obstacle.scroll(3.0);
        assert_eq!(obstacle.bounds().right(), 0.0);
        assert!(!obstacle.is_expired());

        obstacle.scroll(3.0);
        assert!(obstacle.is_expired());
    }

    #[test]
    fn test_cloud_uses_own_speed() {
        let mut cloud = Cloud::new(Vec2::new(100.0, 40.0), 1.5);
        cloud.scroll(20.0);
        assert_eq!(cloud.pos.x, 98.5);
    }

    #[test]
    fn test_prune_removes_on_the_expiring_tick() {
        let mut clouds = vec![
            Cloud::new(Vec2::new(-49.0, 40.0), 1.0),
            Cloud::new(Vec2::new(-48.0, 40.0), 1.0),
            Cloud::new(Vec2::new(300.0, 40.0), 1.0),
        ];
        scroll_and_prune(&mut clouds, 3.0);
        // -49 -> -50 (right edge 0, kept); -48 -> -49 (kept)
        assert_eq!(clouds.len(), 3);

        scroll_and_prune(&mut clouds, 3.0);
        assert_eq!(clouds.len(), 2);
        assert_eq!(clouds[0].pos.x, -50.0);
    }
}
