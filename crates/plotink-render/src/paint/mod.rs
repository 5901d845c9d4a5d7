//! Paint model consumed by canvas backends.
//!
//! Scope:
//! - color representation (straight-alpha RGBA bytes)
//! - the flyweight draw-style state mutated per primitive
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod style;

pub use color::Color;
pub use style::{FilterQuality, LineJoin, Paint, PaintStyle};
