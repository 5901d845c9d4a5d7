//! plotink render core.
//!
//! This crate owns the render-context adapter that translates the abstract,
//! resolution-independent drawing protocol used by the plot model into
//! concrete draw calls against a [`canvas::Canvas`] backend.

pub mod canvas;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod text;
