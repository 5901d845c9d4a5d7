//! Conversion between device-independent units and device pixels, plus the
//! pixel-snapping policy.
//!
//! Snapping exists to keep axis-aligned strokes crisp: an anti-aliased 1px
//! line centered on a pixel boundary smears across two pixel rows. Strokes
//! of odd thickness must land on pixel centers (offset 0.5) and strokes of
//! even thickness on pixel boundaries (offset 0).

use crate::coords::{DevicePoint, DeviceRect, Point, Rect};

/// DPI scaling between device-independent units and device pixels.
///
/// `dpi_scale == 1.0` is the reference density. Copyable so callers can
/// capture it once and convert without holding a context borrow.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DipTransform {
    pub dpi_scale: f32,
}

impl DipTransform {
    #[inline]
    pub const fn new(dpi_scale: f32) -> Self {
        Self { dpi_scale }
    }

    #[inline]
    pub fn convert(self, value: f64) -> f32 {
        value as f32 * self.dpi_scale
    }

    #[inline]
    pub fn convert_back(self, value: f32) -> f64 {
        (value / self.dpi_scale) as f64
    }

    #[inline]
    pub fn convert_point(self, p: Point) -> DevicePoint {
        DevicePoint::new(self.convert(p.x), self.convert(p.y))
    }

    #[inline]
    pub fn convert_rect(self, r: Rect) -> DeviceRect {
        DeviceRect::new(
            self.convert(r.left),
            self.convert(r.top),
            self.convert(r.right),
            self.convert(r.bottom),
        )
    }

    #[inline]
    pub fn convert_snap(self, value: f64, offset: f32) -> f32 {
        snap(self.convert(value), offset)
    }

    #[inline]
    pub fn convert_snap_point(self, p: Point, offset: f32) -> DevicePoint {
        DevicePoint::new(self.convert_snap(p.x, offset), self.convert_snap(p.y, offset))
    }

    /// Converts a rectangle, snapping each of the four edges independently
    /// with the same offset.
    #[inline]
    pub fn convert_snap_rect(self, r: Rect, offset: f32) -> DeviceRect {
        DeviceRect::new(
            self.convert_snap(r.left, offset),
            self.convert_snap(r.top, offset),
            self.convert_snap(r.right, offset),
            self.convert_snap(r.bottom, offset),
        )
    }
}

/// Snaps a device-pixel value to the grid defined by `offset`.
///
/// `f32::round` rounds half away from zero, which is the required midpoint
/// behavior.
#[inline]
pub fn snap(value: f32, offset: f32) -> f32 {
    (value + offset).round() - offset
}

/// Pixel offset a stroke of the given (device-pixel) thickness snaps to.
///
/// The stroke is "odd" when `thickness mod 2` falls in `[0.5, 1.5)`; odd
/// strokes snap to pixel centers, even ones to pixel boundaries.
#[inline]
pub fn snap_offset(thickness: f32) -> f32 {
    let m = thickness % 2.0;
    if (0.5..1.5).contains(&m) { 0.5 } else { 0.0 }
}

/// Whether the segment is axis-aligned.
#[inline]
pub fn is_straight_segment(a: Point, b: Point) -> bool {
    a.x == b.x || a.y == b.y
}

/// Whether every consecutive segment of the polyline is axis-aligned.
pub fn is_straight_line(points: &[Point]) -> bool {
    points
        .windows(2)
        .all(|pair| is_straight_segment(pair[0], pair[1]))
}
