use crate::paint::Color;

/// Whether a draw call fills or strokes its geometry.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
}

/// Join applied where two stroked segments meet.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Sampling filter used when an image is scaled into its destination rect.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FilterQuality {
    /// Nearest-neighbour; keeps hard pixel edges.
    #[default]
    Nearest,
    /// Smoothing filter for interpolated scaling.
    High,
}

/// Draw-style state consumed by the canvas at draw time.
///
/// The render context owns a single `Paint` and mutates it per primitive
/// (a flyweight). Backends must read everything they need during the draw
/// call and never retain the reference; the next primitive overwrites it.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    pub anti_alias: bool,
    pub stroke_width: f32,
    pub stroke_join: LineJoin,
    pub miter_limit: f32,
    /// Alternating on/off lengths in device pixels, already scaled by the
    /// stroke width. `None` draws a solid stroke.
    pub dash: Option<Vec<f32>>,
    pub filter_quality: FilterQuality,
    /// Glyph hinting, enabled for screen targets only.
    pub hinting: bool,
    pub subpixel_text: bool,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            style: PaintStyle::Fill,
            anti_alias: true,
            stroke_width: 1.0,
            stroke_join: LineJoin::Miter,
            miter_limit: 10.0,
            dash: None,
            filter_quality: FilterQuality::Nearest,
            hinting: false,
            subpixel_text: false,
        }
    }
}
