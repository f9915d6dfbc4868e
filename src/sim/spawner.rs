//! Procedural obstacle and cloud generation
//!
//! Obstacle gaps are drawn in distance and converted to ticks at the current
//! speed, so on-screen spacing stays the same while the timing tightens.

use glam::Vec2;
use rand::Rng;

use super::entity::{Cloud, Obstacle, ObstacleKind};
use crate::consts::MIN_OBSTACLE_SPAWN_X;
use crate::tuning::Tuning;

/// Countdown-driven obstacle generator
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    /// Ticks until the next obstacle
    pub countdown: f64,
}

impl ObstacleSpawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            countdown: f64::from(tuning.initial_spawn_countdown),
        }
    }

    pub fn reset(&mut self, tuning: &Tuning) {
        self.countdown = f64::from(tuning.initial_spawn_countdown);
    }

    /// Count down one tick, emitting an obstacle when the timer runs out
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        ctx: &SpawnContext,
        tuning: &Tuning,
        rng: &mut R,
    ) -> Option<Obstacle> {
        self.countdown -= 1.0;
        if self.countdown > 0.0 {
            return None;
        }

        let roll: f64 = rng.random();
        let kind = choose_kind(ctx.score, roll, tuning);
        let x = ctx.view_width.max(MIN_OBSTACLE_SPAWN_X);
        let obstacle = Obstacle::spawn(kind, x, ctx.ground_y, rng);

        self.countdown = gap_distance(tuning, rng) / f64::from(ctx.speed);

        log::debug!(
            "Spawned {:?} at x={} (score {:.1}, next in {:.1} ticks)",
            kind,
            x,
            ctx.score,
            self.countdown
        );
        Some(obstacle)
    }
}

/// Uniform gap in `[min_gap, max_gap)`
fn gap_distance<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> f64 {
    let (min, max) = (f64::from(tuning.min_gap), f64::from(tuning.max_gap));
    let gap = min + rng.random::<f64>() * (max - min);
    if gap < max {
        return gap;
    }
    // Rounding landed on `max`; step to the next float below it
    f64::from_bits(max.to_bits() - 1).max(min)
}

/// World values the spawners read each tick
#[derive(Debug, Clone, Copy)]
pub struct SpawnContext {
    pub score: f64,
    pub speed: f32,
    pub view_width: f32,
    pub ground_y: f32,
}

/// Pick an archetype from a single uniform roll.
///
/// Both gates test the same roll, so anything that passes the flyer gate also
/// passed the large-hazard gate; the flyer wins.
pub fn choose_kind(score: f64, roll: f64, tuning: &Tuning) -> ObstacleKind {
    let mut kind = ObstacleKind::SmallHazard;
    if score > tuning.large_hazard_score && roll > tuning.large_hazard_roll {
        kind = ObstacleKind::LargeHazard;
    }
    if score > tuning.flyer_score && roll > tuning.flyer_roll {
        kind = ObstacleKind::Flyer;
    }
    kind
}

/// Roll for a new background cloud
pub fn maybe_spawn_cloud<R: Rng + ?Sized>(
    view_width: f32,
    tuning: &Tuning,
    rng: &mut R,
) -> Option<Cloud> {
    if !rng.random_bool(tuning.cloud_chance) {
        return None;
    }
    let y = tuning.cloud_min_altitude + rng.random::<f32>() * tuning.cloud_altitude_spread;
    let speed = tuning.cloud_min_speed + rng.random::<f32>() * tuning.cloud_speed_spread;
    Some(Cloud::new(Vec2::new(view_width, y), speed))
}

#[cfg(test)]
pub(crate) mod test_rng {
    use rand::RngCore;

    /// Returns the same bits forever; `random::<f64>()` yields `value`
    pub struct ConstRng(u64);

    impl ConstRng {
        pub fn new(value: f64) -> Self {
            Self(((value * (1u64 << 53) as f64) as u64) << 11)
        }
    }

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            (self.0 >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for (i, byte) in dst.iter_mut().enumerate() {
                *byte = (self.0 >> ((i % 8) * 8)) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_rng::ConstRng;
    use super::*;
    use crate::consts::GROUND_Y;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ctx(score: f64, speed: f32) -> SpawnContext {
        SpawnContext {
            score,
            speed,
            view_width: 640.0,
            ground_y: GROUND_Y,
        }
    }

    #[test]
    fn test_kind_thresholds() {
        let t = Tuning::default();
        // Early game: always small
        assert_eq!(choose_kind(50.0, 0.99, &t), ObstacleKind::SmallHazard);
        // Past 100: large needs roll > 0.6
        assert_eq!(choose_kind(150.0, 0.5, &t), ObstacleKind::SmallHazard);
        assert_eq!(choose_kind(150.0, 0.7, &t), ObstacleKind::LargeHazard);
        assert_eq!(choose_kind(150.0, 0.95, &t), ObstacleKind::LargeHazard);
        // Past 300: flyer needs roll > 0.8
        assert_eq!(choose_kind(350.0, 0.7, &t), ObstacleKind::LargeHazard);
        assert_eq!(choose_kind(350.0, 0.85, &t), ObstacleKind::Flyer);
        // Thresholds are strict
        assert_eq!(choose_kind(100.0, 0.99, &t), ObstacleKind::SmallHazard);
        assert_eq!(choose_kind(300.0, 0.99, &t), ObstacleKind::LargeHazard);
    }

    #[test]
    fn test_waits_for_countdown() {
        let t = Tuning::default();
        let mut spawner = ObstacleSpawner::new(&t);
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..199 {
            assert!(spawner.update(&ctx(0.0, 3.0), &t, &mut rng).is_none());
        }
        let obstacle = spawner.update(&ctx(0.0, 3.0), &t, &mut rng).unwrap();
        assert_eq!(obstacle.kind, ObstacleKind::SmallHazard);
    }

    #[test]
    fn test_spawns_offscreen_right_never_closer_than_minimum() {
        let t = Tuning::default();
        let mut spawner = ObstacleSpawner { countdown: 1.0 };
        let mut rng = Pcg32::seed_from_u64(1);
        let obstacle = spawner.update(&ctx(0.0, 3.0), &t, &mut rng).unwrap();
        assert_eq!(obstacle.pos.x, 800.0);

        let mut spawner = ObstacleSpawner { countdown: 1.0 };
        let wide = SpawnContext {
            view_width: 1200.0,
            ..ctx(0.0, 3.0)
        };
        let obstacle = spawner.update(&wide, &t, &mut rng).unwrap();
        assert_eq!(obstacle.pos.x, 1200.0);
    }

    #[test]
    fn test_exact_outcome_with_fixed_rolls() {
        let t = Tuning::default();
        let mut spawner = ObstacleSpawner { countdown: 1.0 };
        let mut rng = ConstRng::new(0.9);
        let obstacle = spawner.update(&ctx(400.0, 5.0), &t, &mut rng).unwrap();
        assert_eq!(obstacle.kind, ObstacleKind::Flyer);
        // gap = 400 + 0.9 * 500 = 850
        assert!((spawner.countdown - 170.0).abs() < 1e-3);
    }

    #[test]
    fn test_gap_stays_below_max_on_highest_roll() {
        let t = Tuning::default();
        // Largest f64 below 1.0; 400 + u * 500 rounds to 900 here
        let mut rng = ConstRng::new(1.0 - f64::EPSILON / 2.0);
        let gap = gap_distance(&t, &mut rng);
        assert!(gap < 900.0);
        assert!(gap > 899.999);

        let mut spawner = ObstacleSpawner { countdown: 1.0 };
        spawner.update(&ctx(0.0, 1.0), &t, &mut rng).unwrap();
        assert!(spawner.countdown < 900.0);
    }

    #[test]
    fn test_degenerate_gap_range_is_fixed() {
        let t = Tuning {
            min_gap: 600.0,
            max_gap: 600.0,
            ..Tuning::default()
        };
        let mut rng = ConstRng::new(0.5);
        assert_eq!(gap_distance(&t, &mut rng), 600.0);
    }

    #[test]
    fn test_cloud_spawn_layout() {
        let t = Tuning {
            cloud_chance: 1.0,
            ..Tuning::default()
        };
        let mut rng = ConstRng::new(0.5);
        let cloud = maybe_spawn_cloud(640.0, &t, &mut rng).unwrap();
        assert_eq!(cloud.pos.x, 640.0);
        assert!((cloud.pos.y - 70.0).abs() < 1e-3);
        assert!((cloud.speed - 1.5).abs() < 1e-3);
    }

    #[test]
    fn test_clouds_are_rare() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(42);
        let spawned = (0..10_000)
            .filter(|_| maybe_spawn_cloud(800.0, &t, &mut rng).is_some())
            .count();
        // Expect ~50
        assert!((10..150).contains(&spawned));
    }

    proptest! {
        #[test]
        fn prop_countdown_is_gap_over_speed(seed in any::<u64>()) {
            let t = Tuning::default();
            let mut spawner = ObstacleSpawner { countdown: 1.0 };
            let mut rng = Pcg32::seed_from_u64(seed);
            spawner.update(&ctx(0.0, 3.0), &t, &mut rng).unwrap();
            prop_assert!(spawner.countdown >= 400.0 / 3.0 - 1e-3);
            prop_assert!(spawner.countdown < 300.0);
        }

        #[test]
        fn prop_cloud_ranges(seed in any::<u64>()) {
            let t = Tuning { cloud_chance: 1.0, ..Tuning::default() };
            let mut rng = Pcg32::seed_from_u64(seed);
            let cloud = maybe_spawn_cloud(800.0, &t, &mut rng).unwrap();
            prop_assert!((20.0..120.0).contains(&cloud.pos.y));
            prop_assert!((1.0..2.0).contains(&cloud.speed));
        }
    }
}
