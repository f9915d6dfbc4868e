//! Canvas 2D painter for the browser build

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scene::Shape;
use crate::consts::LOGICAL_HEIGHT;

/// Paints scene primitives, scaling logical units to canvas pixels
pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    scale: f64,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d, canvas_height: u32) -> Self {
        let mut painter = Self { ctx, scale: 1.0 };
        painter.resize(canvas_height);
        painter
    }

    /// Recompute the logical-to-pixel scale after the canvas changed size
    pub fn resize(&mut self, canvas_height: u32) {
        self.scale = f64::from(canvas_height) / f64::from(LOGICAL_HEIGHT);
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn paint(&self, shapes: &[Shape], view_width: f32) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        ctx.set_transform(self.scale, 0.0, 0.0, self.scale, 0.0, 0.0)?;
        ctx.clear_rect(0.0, 0.0, f64::from(view_width), f64::from(LOGICAL_HEIGHT));

        for shape in shapes {
            match shape {
                Shape::Rect { rect, color } => {
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.fill_rect(
                        f64::from(rect.pos.x),
                        f64::from(rect.pos.y),
                        f64::from(rect.size.x),
                        f64::from(rect.size.y),
                    );
                }
                Shape::Polygon { points, color } => {
                    let Some((first, rest)) = points.split_first() else {
                        continue;
                    };
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.begin_path();
                    ctx.move_to(f64::from(first.x), f64::from(first.y));
                    for p in rest {
                        ctx.line_to(f64::from(p.x), f64::from(p.y));
                    }
                    ctx.close_path();
                    ctx.fill();
                }
                Shape::Arc {
                    center,
                    radius,
                    start,
                    end,
                    color,
                } => {
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.begin_path();
                    ctx.arc(
                        f64::from(center.x),
                        f64::from(center.y),
                        f64::from(*radius),
                        f64::from(*start),
                        f64::from(*end),
                    )?;
                    ctx.fill();
                }
                Shape::Line {
                    from,
                    to,
                    width,
                    color,
                } => {
                    ctx.set_stroke_style_str(&color.to_css());
                    ctx.set_line_width(f64::from(*width));
                    ctx.begin_path();
                    ctx.move_to(f64::from(from.x), f64::from(from.y));
                    ctx.line_to(f64::from(to.x), f64::from(to.y));
                    ctx.stroke();
                }
            }
        }

        Ok(())
    }
}
