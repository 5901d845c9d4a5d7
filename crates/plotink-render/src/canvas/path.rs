use crate::coords::{DevicePoint, DeviceRect};

/// One element of a [`Path`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathVerb {
    MoveTo(DevicePoint),
    LineTo(DevicePoint),
    Close,
    Oval(DeviceRect),
    Rect(DeviceRect),
}

/// Reusable compound geometry path in device pixels.
///
/// The render context keeps a single `Path` and rebuilds it per primitive,
/// so batched draws (multiple ellipses, rectangles or polygons) reach the
/// canvas as one `draw_path` call instead of many.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    verbs: Vec<PathVerb>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.verbs.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    #[inline]
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    #[inline]
    pub fn move_to(&mut self, p: DevicePoint) {
        self.verbs.push(PathVerb::MoveTo(p));
    }

    #[inline]
    pub fn line_to(&mut self, p: DevicePoint) {
        self.verbs.push(PathVerb::LineTo(p));
    }

    #[inline]
    pub fn close(&mut self) {
        self.verbs.push(PathVerb::Close);
    }

    #[inline]
    pub fn add_oval(&mut self, rect: DeviceRect) {
        self.verbs.push(PathVerb::Oval(rect));
    }

    #[inline]
    pub fn add_rect(&mut self, rect: DeviceRect) {
        self.verbs.push(PathVerb::Rect(rect));
    }

    /// Appends the points as a connected open polyline. Empty input appends
    /// nothing.
    pub fn add_polyline(&mut self, points: &[DevicePoint]) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.move_to(*first);
        for p in rest {
            self.line_to(*p);
        }
    }
}
