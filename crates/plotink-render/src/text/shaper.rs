use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::text::PlacedGlyph;

/// Internal pixel size the shaping engine works at.
///
/// Widths are measured once at this size and scaled by
/// `px_size / SHAPING_UNITS`, so a line measures identically at every
/// requested size instead of drifting with per-size advance rounding.
pub const SHAPING_UNITS: f32 = 512.0;

/// Text-shaping engine instance, cached per font descriptor.
///
/// Wraps a reusable [`fontdue::layout::Layout`], which resolves ligatures,
/// kerning and script-specific positioning that the simple
/// advance-summing path cannot.
pub struct Shaper {
    layout: Layout<()>,
}

impl Shaper {
    pub fn new() -> Self {
        Self {
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }

    /// Width of `text` shaped at [`SHAPING_UNITS`] pixels.
    ///
    /// The extent is the pen position after each glyph
    /// (`x - xmin + advance_width`), not the bitmap right edge, so the value
    /// is usable as a layout width without spurious truncation.
    pub fn shape_width(&mut self, font: &fontdue::Font, text: &str) -> f32 {
        self.layout.reset(&LayoutSettings::default());
        self.layout
            .append(&[font], &TextStyle::new(text, SHAPING_UNITS, 0));

        self.layout
            .glyphs()
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, SHAPING_UNITS);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max)
    }

    /// Pen-positioned glyphs for a single line at `px_size`, relative to the
    /// line's baseline origin.
    pub fn shape_line(&mut self, font: &fontdue::Font, text: &str, px_size: f32) -> Vec<PlacedGlyph> {
        self.layout.reset(&LayoutSettings::default());
        self.layout.append(&[font], &TextStyle::new(text, px_size, 0));

        self.layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize())
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, px_size);
                PlacedGlyph {
                    index: g.key.glyph_index,
                    x: g.x - m.xmin as f32,
                }
            })
            .collect()
    }
}

impl Default for Shaper {
    fn default() -> Self {
        Self::new()
    }
}
