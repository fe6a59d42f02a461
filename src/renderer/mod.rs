//! Rendering module
//!
//! `scene` projects a simulation snapshot into shapes; `canvas` draws them
//! with the Canvas 2D API.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{Fill, Shape, Stroke, build_scene};
