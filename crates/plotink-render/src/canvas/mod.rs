//! Canvas backend seam.
//!
//! The render context performs coordinate conversion, pixel snapping and
//! resource lookup, then issues calls against this trait. Everything a
//! backend receives is in device pixels; style state arrives as a borrowed
//! [`Paint`] that is only valid for the duration of the call.

mod path;
mod recording;

pub use path::{Path, PathVerb};
pub use recording::{CanvasOp, RecordingCanvas};

use crate::coords::{DevicePoint, DeviceRect};
use crate::paint::{Color, Paint};
use crate::text::TextRun;

/// Raster or vector drawing surface driven by the render context.
///
/// The canvas is owned by the hosting surface and attached to the context
/// for the duration of one frame; the context never keeps it across frames.
/// `save`/`restore` must nest; `clip_rect` intersects with the current clip
/// inside the innermost saved state.
pub trait Canvas {
    /// Replaces the whole surface with `color` (which may be transparent).
    fn clear(&mut self, color: Color);

    fn draw_oval(&mut self, rect: DeviceRect, paint: &Paint);

    fn draw_rect(&mut self, rect: DeviceRect, paint: &Paint);

    fn draw_path(&mut self, path: &Path, paint: &Paint);

    /// Draws consecutive point pairs (0-1, 2-3, …) as independent segments.
    fn draw_line_segments(&mut self, points: &[DevicePoint], paint: &Paint);

    /// Scales `src` (source pixel coordinates of `image`) into `dst`.
    /// Opacity arrives in the paint's alpha channel, the smoothing filter in
    /// its `filter_quality`.
    fn draw_image(&mut self, image: &image::RgbaImage, src: DeviceRect, dst: DeviceRect, paint: &Paint);

    /// Draws one laid-out line of text in the current transform frame.
    ///
    /// Raster backends blit `run.glyphs`; vector backends may emit
    /// `run.text` directly at `run.origin`.
    fn draw_text_run(&mut self, run: &TextRun, paint: &Paint);

    fn save(&mut self);

    fn restore(&mut self);

    fn clip_rect(&mut self, rect: DeviceRect);

    fn translate(&mut self, dx: f32, dy: f32);

    fn rotate_degrees(&mut self, degrees: f32);
}
