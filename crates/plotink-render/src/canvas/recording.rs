use crate::canvas::{Canvas, Path, PathVerb};
use crate::coords::{DevicePoint, DeviceRect};
use crate::paint::{Color, Paint};
use crate::text::TextRun;

/// One recorded canvas call, with arguments cloned at call time.
///
/// Paints are snapshotted because the context mutates its flyweight paint
/// between calls; the recording must reflect the state at draw time.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    Clear(Color),
    DrawOval(DeviceRect, Paint),
    DrawRect(DeviceRect, Paint),
    DrawPath(Vec<PathVerb>, Paint),
    DrawLineSegments(Vec<DevicePoint>, Paint),
    DrawImage {
        width: u32,
        height: u32,
        src: DeviceRect,
        dst: DeviceRect,
        paint: Paint,
    },
    DrawTextRun(TextRun, Paint),
    Save,
    Restore,
    ClipRect(DeviceRect),
    Translate(f32, f32),
    RotateDegrees(f32),
}

/// Canvas that records every call instead of rasterizing.
///
/// Backs the test suite and is useful to embedders for headless inspection
/// of what a render pass would emit.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn take_ops(&mut self) -> Vec<CanvasOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.ops.push(CanvasOp::Clear(color));
    }

    fn draw_oval(&mut self, rect: DeviceRect, paint: &Paint) {
        self.ops.push(CanvasOp::DrawOval(rect, paint.clone()));
    }

    fn draw_rect(&mut self, rect: DeviceRect, paint: &Paint) {
        self.ops.push(CanvasOp::DrawRect(rect, paint.clone()));
    }

    fn draw_path(&mut self, path: &Path, paint: &Paint) {
        self.ops
            .push(CanvasOp::DrawPath(path.verbs().to_vec(), paint.clone()));
    }

    fn draw_line_segments(&mut self, points: &[DevicePoint], paint: &Paint) {
        self.ops
            .push(CanvasOp::DrawLineSegments(points.to_vec(), paint.clone()));
    }

    fn draw_image(&mut self, image: &image::RgbaImage, src: DeviceRect, dst: DeviceRect, paint: &Paint) {
        self.ops.push(CanvasOp::DrawImage {
            width: image.width(),
            height: image.height(),
            src,
            dst,
            paint: paint.clone(),
        });
    }

    fn draw_text_run(&mut self, run: &TextRun, paint: &Paint) {
        self.ops.push(CanvasOp::DrawTextRun(run.clone(), paint.clone()));
    }

    fn save(&mut self) {
        self.ops.push(CanvasOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(CanvasOp::Restore);
    }

    fn clip_rect(&mut self, rect: DeviceRect) {
        self.ops.push(CanvasOp::ClipRect(rect));
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.ops.push(CanvasOp::Translate(dx, dy));
    }

    fn rotate_degrees(&mut self, degrees: f32) {
        self.ops.push(CanvasOp::RotateDegrees(degrees));
    }
}
