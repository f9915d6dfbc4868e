//! Padded AABB collision between the runner and obstacles
//!
//! Both boxes shrink inward by a fixed padding before the overlap test, so
//! near misses that look close on screen do not end the run. The padding is
//! absolute: small hazards lose proportionally more of their hitbox.

use super::body::{Body, Rect};

/// True if the two boxes overlap once each is inset by `padding`
#[inline]
pub fn padded_overlap(a: Rect, b: Rect, padding: f32) -> bool {
    a.inset(padding).overlaps(&b.inset(padding))
}

/// First obstacle the subject collides with, if any
pub fn first_hit<'a, B: Body>(subject: &impl Body, others: &'a [B], padding: f32) -> Option<&'a B> {
    let bounds = subject.bounds();
    others
        .iter()
        .find(|other| padded_overlap(bounds, other.bounds(), padding))
}

/// Whether the subject collides with any of `others`
pub fn check_collision<B: Body>(subject: &impl Body, others: &[B], padding: f32) -> bool {
    first_hit(subject, others, padding).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GROUND_Y;
    use crate::sim::entity::{Obstacle, ObstacleKind};
    use crate::sim::runner::Runner;
    use proptest::prelude::*;

    const PADDING: f32 = 10.0;

    #[test]
    fn test_fixture_overlap() {
        let runner = Rect::new(50.0, 255.0, 55.0, 45.0);
        let obstacle = Rect::new(60.0, 260.0, 17.0, 35.0);
        assert!(padded_overlap(runner, obstacle, PADDING));
    }

    #[test]
    fn test_fixture_far_obstacle() {
        let runner = Rect::new(50.0, 255.0, 55.0, 45.0);
        let obstacle = Rect::new(500.0, 260.0, 17.0, 35.0);
        assert!(!padded_overlap(runner, obstacle, PADDING));
    }

    #[test]
    fn test_padding_forgives_corner_graze() {
        // Raw boxes overlap by 5 units on each axis; padding removes it
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let b = Rect::new(45.0, 45.0, 50.0, 50.0);
        assert!(a.overlaps(&b));
        assert!(!padded_overlap(a, b, PADDING));
    }

    #[test]
    fn test_runner_vs_obstacles() {
        let runner = Runner::new(GROUND_Y);
        let far = Obstacle::with_altitude(ObstacleKind::SmallHazard, 400.0, GROUND_Y, 0.0);
        let near = Obstacle::with_altitude(ObstacleKind::LargeHazard, 70.0, GROUND_Y, 0.0);

        assert!(!check_collision(&runner, std::slice::from_ref(&far), PADDING));
        let obstacles = vec![far, near];
        let hit = first_hit(&runner, &obstacles, PADDING).unwrap();
        assert_eq!(hit.kind, ObstacleKind::LargeHazard);
    }

    #[test]
    fn test_slide_ducks_low_flyer() {
        let mut runner = Runner::new(GROUND_Y);
        let flyer = Obstacle::with_altitude(ObstacleKind::Flyer, 60.0, GROUND_Y, 10.0);
        let obstacles = [flyer];
        assert!(check_collision(&runner, &obstacles, PADDING));

        runner.set_sliding(true);
        assert!(!check_collision(&runner, &obstacles, PADDING));
    }

    #[test]
    fn test_empty_world_never_hits() {
        let runner = Runner::new(GROUND_Y);
        let none: [Obstacle; 0] = [];
        assert!(!check_collision(&runner, &none, PADDING));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -100.0f32..900.0, ay in 0.0f32..300.0,
            aw in 1.0f32..80.0, ah in 1.0f32..80.0,
            bx in -100.0f32..900.0, by in 0.0f32..300.0,
            bw in 1.0f32..80.0, bh in 1.0f32..80.0,
            padding in 0.0f32..15.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(padded_overlap(a, b, padding), padded_overlap(b, a, padding));
        }

        #[test]
        fn prop_separated_boxes_never_hit(
            x in 0.0f32..500.0, gap in 1.0f32..200.0, padding in 0.0f32..15.0,
        ) {
            let a = Rect::new(x, 200.0, 40.0, 40.0);
            let b = Rect::new(x + 40.0 + gap, 200.0, 40.0, 40.0);
            prop_assert!(!padded_overlap(a, b, padding));
        }
    }
}
