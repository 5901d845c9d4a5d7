//! Font resources, text shaping and line layout.
//!
//! The render context caches one [`fontdue::Font`] and one [`Shaper`] per
//! [`FontDescriptor`]; both persist for the context's lifetime. Layout math
//! (line splitting, alignment anchors) is pure and lives in [`layout`].

mod fonts;
mod run;
mod shaper;

pub mod layout;

pub use fonts::{FontDescriptor, FontId, FontLoadError, FontMetrics, FontStore, weight_name};
pub use run::{PlacedGlyph, TextRun};
pub use shaper::{SHAPING_UNITS, Shaper};
