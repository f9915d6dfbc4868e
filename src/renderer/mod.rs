//! Rendering module
//!
//! `scene` turns a session into flat draw primitives (platform independent,
//! unit tested); `canvas` paints them with the browser's 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use scene::{Color, Shape, build_scene};
