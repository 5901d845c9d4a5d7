use crate::coords::DevicePoint;
use crate::text::FontId;

/// A single positioned glyph within a [`TextRun`].
///
/// `x` is the pen offset from the run origin; glyphs sit on the run's
/// baseline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlacedGlyph {
    pub index: u16,
    pub x: f32,
}

/// One laid-out line of text, ready for a canvas backend.
///
/// `origin` is the baseline start of the line in the current transform
/// frame, with the horizontal/vertical alignment offsets already applied.
/// Raster backends rasterize `glyphs` via the resolved font; vector backends
/// may emit `text` as-is. `glyphs` is empty when no font could be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub font: Option<FontId>,
    /// Font size in device pixels.
    pub px_size: f32,
    pub origin: DevicePoint,
    pub glyphs: Vec<PlacedGlyph>,
}
