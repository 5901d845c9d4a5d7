//! The render-context adapter.
//!
//! [`RenderContext`] owns the attached canvas handle, DPI scale, target kind
//! and the font/shaper caches. It validates visibility preconditions,
//! converts device-independent geometry to device pixels (with snapping
//! where the edge rendering mode and target allow), resolves flyweight
//! style state and issues canvas calls.

pub mod convert;

mod context;
mod error;

pub use context::{EdgeRenderingMode, RenderContext, RenderTarget};
pub use convert::DipTransform;
pub use error::RenderError;
