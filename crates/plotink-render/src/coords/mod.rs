//! Coordinate and geometry types shared across the drawing protocol.
//!
//! Two spaces exist side by side:
//! - Device-independent units (DIPs, `f64`): the currency of the abstract
//!   drawing protocol. Origin top-left, +X right, +Y down.
//! - Device pixels (`f32`): what the canvas backend consumes, produced by
//!   DPI scaling (and optional pixel snapping) in `render::convert`.

mod device;
mod point;
mod rect;
mod size;

pub use device::{DevicePoint, DeviceRect};
pub use point::Point;
pub use rect::Rect;
pub use size::Size;
