//! Scene generation: game state to flat 2D draw primitives
//!
//! Everything is in logical units (300 tall, y down). The painter scales once.

use glam::Vec2;
use std::f32::consts::PI;

use crate::consts::{GROUND_Y, LOGICAL_HEIGHT};
use crate::sim::{Body, Cloud, GameState, Obstacle, ObstacleKind, Rect, Runner};

/// Opaque sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WOLF: Color = Color(0x4a, 0x4a, 0x4a);
    pub const INK: Color = Color(0x53, 0x53, 0x53);
    pub const CLOUD: Color = Color(0xe0, 0xe0, 0xe0);
    pub const WHITE: Color = Color(0xff, 0xff, 0xff);

    /// `#rrggbb` for canvas fill/stroke styles
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// One draw call
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled axis-aligned rectangle
    Rect { rect: Rect, color: Color },
    /// Filled polygon (implicitly closed)
    Polygon { points: Vec<Vec2>, color: Color },
    /// Filled circular arc, angles in radians clockwise from +x (y down)
    Arc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        color: Color,
    },
    /// Stroked segment
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
}

fn rect(x: f32, y: f32, w: f32, h: f32, color: Color) -> Shape {
    Shape::Rect {
        rect: Rect::new(x, y, w, h),
        color,
    }
}

fn polygon(points: &[(f32, f32)], color: Color) -> Shape {
    Shape::Polygon {
        points: points.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
        color,
    }
}

fn disc(center: Vec2, radius: f32, color: Color) -> Shape {
    Shape::Arc {
        center,
        radius,
        start: 0.0,
        end: 2.0 * PI,
        color,
    }
}

/// Upper half-disc (rounded cactus tops)
fn dome(center: Vec2, radius: f32, color: Color) -> Shape {
    Shape::Arc {
        center,
        radius,
        start: PI,
        end: 2.0 * PI,
        color,
    }
}

/// Build the full frame, back to front
pub fn build_scene<R>(state: &GameState<R>) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(64);

    for cloud in &state.clouds {
        shapes.extend(cloud_shapes(cloud));
    }
    shapes.extend(ground_shapes(state.view_width, state.frame, state.speed));
    shapes.extend(runner_shapes(&state.runner, state.frame));
    for obstacle in &state.obstacles {
        shapes.extend(obstacle_shapes(obstacle, state.frame));
    }

    shapes
}

/// Three overlapping puffs
pub fn cloud_shapes(cloud: &Cloud) -> Vec<Shape> {
    let Vec2 { x, y } = cloud.pos;
    vec![
        disc(Vec2::new(x, y), 14.0, Color::CLOUD),
        disc(Vec2::new(x + 15.0, y - 8.0), 18.0, Color::CLOUD),
        disc(Vec2::new(x + 30.0, y), 14.0, Color::CLOUD),
    ]
}

/// Ground line plus texture that scrolls with the world
pub fn ground_shapes(view_width: f32, frame: u64, speed: f32) -> Vec<Shape> {
    let mut shapes = vec![Shape::Line {
        from: Vec2::new(0.0, GROUND_Y),
        to: Vec2::new(view_width, GROUND_Y),
        width: 2.0,
        color: Color::INK,
    }];

    if view_width <= 0.0 {
        return shapes;
    }

    let offset = (frame as f32 * speed) % view_width;
    for i in 0..30u32 {
        let mut x = i as f32 * 100.0 - offset;
        if x < 0.0 {
            x += view_width + 100.0;
        }
        if i % 3 == 0 {
            shapes.push(rect(x, LOGICAL_HEIGHT - 15.0, 2.0, 2.0, Color::INK));
        }
        if i % 5 == 0 {
            shapes.push(rect(x + 20.0, LOGICAL_HEIGHT - 10.0, 4.0, 1.0, Color::INK));
        }
    }

    shapes
}

/// The wolf: stretched out while sliding, trotting otherwise
pub fn runner_shapes(runner: &Runner, frame: u64) -> Vec<Shape> {
    let Rect { pos, size } = runner.bounds();
    let (x, y, w, h) = (pos.x, pos.y, size.x, size.y);
    let c = Color::WOLF;

    if runner.is_sliding() {
        return vec![
            // Body
            rect(x, y + 10.0, w, h - 10.0, c),
            // Head and snout, low
            rect(x + w - 15.0, y + 10.0, 20.0, 15.0, c),
            rect(x + w + 5.0, y + 15.0, 8.0, 8.0, c),
            // Ears folded back
            polygon(
                &[(x + w - 5.0, y + 10.0), (x + w - 15.0, y + 10.0), (x + w - 10.0, y + 2.0)],
                c,
            ),
            // Tail streaming behind
            polygon(&[(x, y + 15.0), (x - 15.0, y + 10.0), (x, y + 20.0)], c),
            rect(x + w - 5.0, y + 12.0, 3.0, 3.0, Color::WHITE),
        ];
    }

    let mut shapes = vec![
        rect(x, y + 15.0, w - 10.0, h - 15.0, c),
        rect(x + w - 20.0, y, 20.0, 25.0, c),
        rect(x + w, y + 5.0, 10.0, 10.0, c),
        polygon(&[(x + w - 15.0, y), (x + w - 5.0, y - 10.0), (x + w, y)], c),
        polygon(&[(x + w - 20.0, y), (x + w - 25.0, y - 8.0), (x + w - 10.0, y)], c),
        polygon(&[(x, y + 20.0), (x - 12.0, y + 15.0), (x, y + 35.0)], c),
    ];

    // Legs swap every 10 ticks
    let (back, front) = if (frame / 10) % 2 == 0 {
        (x + 5.0, x + w - 15.0)
    } else {
        (x + 10.0, x + w - 20.0)
    };
    shapes.push(rect(back, y + h, 5.0, 5.0, c));
    shapes.push(rect(front, y + h, 5.0, 5.0, c));

    shapes.push(rect(x + w - 8.0, y + 5.0, 3.0, 3.0, Color::WHITE));
    shapes
}

pub fn obstacle_shapes(obstacle: &Obstacle, frame: u64) -> Vec<Shape> {
    match obstacle.kind {
        ObstacleKind::Flyer => flyer_shapes(obstacle.pos, frame),
        ObstacleKind::SmallHazard | ObstacleKind::LargeHazard => {
            cactus_shapes(obstacle.kind, obstacle.pos, obstacle.size)
        }
    }
}

fn flyer_shapes(pos: Vec2, frame: u64) -> Vec<Shape> {
    let (x, y) = (pos.x, pos.y);
    let c = Color::INK;

    // Wings flap every 15 ticks
    let wing_tip = if (frame / 15) % 2 == 0 { (y, y + 5.0) } else { (y + 35.0, y + 30.0) };

    vec![
        // Body, back curve flattened to one vertex
        polygon(
            &[
                (x, y + 20.0),
                (x + 10.0, y + 13.0),
                (x + 30.0, y + 15.0),
                (x + 45.0, y + 20.0),
                (x + 30.0, y + 25.0),
                (x + 10.0, y + 25.0),
            ],
            c,
        ),
        rect(x + 32.0, y + 16.0, 3.0, 3.0, Color::WHITE),
        polygon(
            &[
                (x + 15.0, y + 15.0),
                (x + 15.0, wing_tip.0),
                (x + 25.0, wing_tip.1),
                (x + 25.0, y + 15.0),
            ],
            c,
        ),
    ]
}

fn cactus_shapes(kind: ObstacleKind, pos: Vec2, size: Vec2) -> Vec<Shape> {
    let (x, y, w, h) = (pos.x, pos.y, size.x, size.y);
    let c = Color::INK;

    let stem_w = w * 0.5;
    let stem_x = x + (w - stem_w) / 2.0;

    let mut shapes = vec![
        rect(stem_x, y + 3.0, stem_w, h - 3.0, c),
        dome(Vec2::new(stem_x + stem_w / 2.0, y + 3.0), stem_w / 2.0, c),
        // Spikes
        rect(stem_x + 1.0, y + 10.0, 2.0, 2.0, Color::WHITE),
        rect(stem_x + stem_w - 3.0, y + 20.0, 2.0, 2.0, Color::WHITE),
        rect(stem_x + 2.0, y + 28.0, 2.0, 2.0, Color::WHITE),
    ];

    if kind == ObstacleKind::LargeHazard {
        shapes.extend([
            rect(x, y + 20.0, 6.0, 4.0, c),
            rect(x, y + 10.0, 6.0, 14.0, c),
            dome(Vec2::new(x + 3.0, y + 10.0), 3.0, c),
            rect(x + w - 6.0, y + 25.0, 6.0, 4.0, c),
            rect(x + w - 6.0, y + 15.0, 6.0, 14.0, c),
            dome(Vec2::new(x + w - 3.0, y + 15.0), 3.0, c),
        ]);
    } else {
        shapes.extend([
            rect(x, y + 15.0, 4.0, 3.0, c),
            rect(x, y + 10.0, 4.0, 8.0, c),
            rect(x + w - 4.0, y + 18.0, 4.0, 3.0, c),
            rect(x + w - 4.0, y + 12.0, 4.0, 8.0, c),
        ]);
    }

    shapes
}
