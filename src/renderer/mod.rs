//! Presenters for the render hook
//!
//! Canvas 2D in the browser, a text grid everywhere else.

pub mod ascii;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use ascii::AsciiRenderer;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
