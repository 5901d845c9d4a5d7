use std::collections::HashMap;

use crate::canvas::{Canvas, Path};
use crate::coords::{DevicePoint, DeviceRect, Point, Rect, Size};
use crate::paint::{Color, FilterQuality, LineJoin, Paint, PaintStyle};
use crate::render::convert::{self, DipTransform};
use crate::render::error::RenderError;
use crate::text::layout::{
    self, HorizontalAlignment, VerticalAlignment, horizontal_anchor, vertical_anchor,
};
use crate::text::{
    FontDescriptor, FontId, FontMetrics, FontStore, PlacedGlyph, SHAPING_UNITS, Shaper, TextRun,
};

/// What kind of surface the context is drawing to.
///
/// Vector-graphic targets produce continuous output and must never be
/// snapped to a pixel grid; screen targets get snapping, hinting and
/// subpixel text.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum RenderTarget {
    #[default]
    Screen,
    VectorGraphic,
}

/// Hint controlling anti-aliasing and pixel snapping per primitive.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum EdgeRenderingMode {
    /// Snap axis-aligned geometry on pixel targets.
    #[default]
    Automatic,
    /// Same policy as `Automatic`.
    Adaptive,
    /// Snap whenever the target has pixels, and snap the stroke thickness
    /// itself to an integer.
    PreferSharpness,
    /// No snapping and no anti-aliasing.
    PreferSpeed,
}

const NO_CANVAS: &str = "no canvas attached";

/// Adapter between the abstract drawing protocol and a [`Canvas`] backend.
///
/// Constructed once per rendering surface and reused across frames; the
/// canvas handle is attached before a frame and detached (returned, never
/// dropped) afterwards. Font and shaper resources are cached per
/// [`FontDescriptor`] for the context's lifetime.
///
/// Not internally thread-safe: the flyweight paint/path state and the
/// attached canvas require callers to serialize whole frames externally.
pub struct RenderContext<C: Canvas> {
    canvas: Option<C>,
    dpi_scale: f32,
    target: RenderTarget,
    use_text_shaping: bool,
    miter_limit: f32,
    fonts: FontStore,
    shapers: HashMap<FontDescriptor, Shaper>,
    // Flyweight style/geometry state, reset at the start of each primitive.
    paint: Paint,
    path: Path,
    clip_depth: usize,
}

impl<C: Canvas> RenderContext<C> {
    pub fn new() -> Self {
        Self {
            canvas: None,
            dpi_scale: 1.0,
            target: RenderTarget::Screen,
            use_text_shaping: true,
            miter_limit: 10.0,
            fonts: FontStore::new(),
            shapers: HashMap::new(),
            paint: Paint::default(),
            path: Path::new(),
            clip_depth: 0,
        }
    }

    // ── lifecycle ──────────────────────────────────────────────────────────

    /// Attaches the canvas for the coming frame. Must be called before any
    /// draw call; replaces a previously attached canvas.
    pub fn attach_canvas(&mut self, canvas: C) {
        self.canvas = Some(canvas);
    }

    /// Detaches and returns the frame's canvas. The context never keeps a
    /// canvas past the frame that attached it.
    pub fn detach_canvas(&mut self) -> Option<C> {
        self.canvas.take()
    }

    pub fn has_canvas(&self) -> bool {
        self.canvas.is_some()
    }

    /// Releases all cached font and shaper resources. Idempotent; the
    /// context remains usable (caches refill on demand).
    pub fn dispose(&mut self) {
        self.shapers.clear();
        self.fonts.clear();
        self.canvas = None;
    }

    // ── configuration ──────────────────────────────────────────────────────

    /// DPI scaling factor; 1.0 is the reference density.
    pub fn dpi_scale(&self) -> f32 {
        self.dpi_scale
    }

    pub fn set_dpi_scale(&mut self, scale: f32) {
        debug_assert!(scale.is_finite() && scale > 0.0, "dpi scale must be positive");
        self.dpi_scale = scale;
    }

    pub fn render_target(&self) -> RenderTarget {
        self.target
    }

    pub fn set_render_target(&mut self, target: RenderTarget) {
        self.target = target;
    }

    pub fn renders_to_screen(&self) -> bool {
        self.target == RenderTarget::Screen
    }

    fn renders_to_pixels(&self) -> bool {
        self.target != RenderTarget::VectorGraphic
    }

    /// Whether text goes through the shaping engine. Governs both
    /// `draw_text` and `measure_text` so measured and rendered widths agree.
    pub fn use_text_shaping(&self) -> bool {
        self.use_text_shaping
    }

    pub fn set_use_text_shaping(&mut self, enabled: bool) {
        self.use_text_shaping = enabled;
    }

    /// Maximum ratio between miter length and stroke thickness before a
    /// join falls back to bevel.
    pub fn miter_limit(&self) -> f32 {
        self.miter_limit
    }

    pub fn set_miter_limit(&mut self, limit: f32) {
        self.miter_limit = limit;
    }

    pub fn fonts(&self) -> &FontStore {
        &self.fonts
    }

    pub fn fonts_mut(&mut self) -> &mut FontStore {
        &mut self.fonts
    }

    /// Number of cached shaping-engine instances (one per distinct
    /// descriptor that reached the shaped path).
    pub fn shaper_count(&self) -> usize {
        self.shapers.len()
    }

    fn transform(&self) -> DipTransform {
        DipTransform::new(self.dpi_scale)
    }

    // ── clipping ───────────────────────────────────────────────────────────

    /// Pushes a canvas state snapshot with the clip intersected by `rect`.
    pub fn push_clip(&mut self, rect: Rect) -> Result<(), RenderError> {
        let device = self.transform().convert_rect(rect);
        let Some(canvas) = self.canvas.as_mut() else {
            return Err(RenderError::InvalidState(NO_CANVAS));
        };
        canvas.save();
        canvas.clip_rect(device);
        self.clip_depth += 1;
        Ok(())
    }

    /// Pops the innermost clip scope. Popping with no scope pushed is a
    /// caller bug.
    pub fn pop_clip(&mut self) -> Result<(), RenderError> {
        if self.clip_depth == 0 {
            return Err(RenderError::InvalidState("unbalanced pop_clip"));
        }
        let Some(canvas) = self.canvas.as_mut() else {
            return Err(RenderError::InvalidState(NO_CANVAS));
        };
        canvas.restore();
        self.clip_depth -= 1;
        Ok(())
    }

    /// Number of currently pushed clip scopes.
    pub fn clip_count(&self) -> usize {
        self.clip_depth
    }

    /// Clears the whole surface to `color` (the view's background step;
    /// transparent is a valid clear color).
    pub fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        let Some(canvas) = self.canvas.as_mut() else {
            return Err(RenderError::InvalidState(NO_CANVAS));
        };
        canvas.clear(color);
        Ok(())
    }

    // ── primitives ─────────────────────────────────────────────────────────

    /// Draws an ellipse inscribed in `extents`: filled oval, then stroked
    /// oval, each only if visible.
    pub fn draw_ellipse(
        &mut self,
        extents: Rect,
        fill: Color,
        stroke: Color,
        thickness: f64,
        mode: EdgeRenderingMode,
    ) -> Result<(), RenderError> {
        if !has_visible_content(fill, stroke, thickness) {
            return Ok(());
        }

        let rect = self.transform().convert_rect(extents);

        if fill.is_visible() {
            self.set_fill_paint(fill, mode);
            let Some(canvas) = self.canvas.as_mut() else {
                return Err(RenderError::InvalidState(NO_CANVAS));
            };
            canvas.draw_oval(rect, &self.paint);
        }

        if stroke.is_visible() && thickness > 0.0 {
            self.set_stroke_paint(stroke, thickness, mode);
            let Some(canvas) = self.canvas.as_mut() else {
                return Err(RenderError::InvalidState(NO_CANVAS));
            };
            canvas.draw_oval(rect, &self.paint);
        }

        Ok(())
    }

    /// Batches all ellipses into one compound path, filled and/or stroked
    /// once.
    pub fn draw_ellipses(
        &mut self,
        extents: &[Rect],
        fill: Color,
        stroke: Color,
        thickness: f64,
        mode: EdgeRenderingMode,
    ) -> Result<(), RenderError> {
        if !has_visible_content(fill, stroke, thickness) || extents.is_empty() {
            return Ok(());
        }

        let t = self.transform();
        self.path.clear();
        for extent in extents {
            self.path.add_oval(t.convert_rect(*extent));
        }

        self.fill_and_stroke_path(fill, stroke, thickness, mode, None, LineJoin::Miter)
    }

    /// Draws a closed polygon from the (snapped/converted) points.
    pub fn draw_polygon(
        &mut self,
        points: &[Point],
        fill: Color,
        stroke: Color,
        thickness: f64,
        mode: EdgeRenderingMode,
        dash: Option<&[f64]>,
        join: LineJoin,
    ) -> Result<(), RenderError> {
        if !has_visible_content(fill, stroke, thickness) || points.len() < 2 {
            return Ok(());
        }

        let device_points = self.actual_points(points, thickness, mode);
        self.path.clear();
        self.path.add_polyline(&device_points);
        self.path.close();

        self.fill_and_stroke_path(fill, stroke, thickness, mode, dash, join)
    }

    /// Batches several closed polygons into one compound path. Polygons
    /// with fewer than two points are skipped.
    pub fn draw_polygons(
        &mut self,
        polygons: &[Vec<Point>],
        fill: Color,
        stroke: Color,
        thickness: f64,
        mode: EdgeRenderingMode,
        dash: Option<&[f64]>,
        join: LineJoin,
    ) -> Result<(), RenderError> {
        if !has_visible_content(fill, stroke, thickness) || polygons.is_empty() {
            return Ok(());
        }

        self.path.clear();
        for polygon in polygons {
            if polygon.len() < 2 {
                continue;
            }
            let device_points = self.actual_points(polygon, thickness, mode);
            self.path.add_polyline(&device_points);
            self.path.close();
        }
        if self.path.is_empty() {
            return Ok(());
        }

        self.fill_and_stroke_path(fill, stroke, thickness, mode, dash, join)
    }

    /// Draws a single rectangle with the canvas rect fast path.
    pub fn draw_rectangle(
        &mut self,
        rect: Rect,
        fill: Color,
        stroke: Color,
        thickness: f64,
        mode: EdgeRenderingMode,
    ) -> Result<(), RenderError> {
        if !has_visible_content(fill, stroke, thickness) {
            return Ok(());
        }

        let device = self.actual_rect(rect, thickness, mode);

        if fill.is_visible() {
            self.set_fill_paint(fill, mode);
            let Some(canvas) = self.canvas.as_mut() else {
                return Err(RenderError::InvalidState(NO_CANVAS));
            };
            canvas.draw_rect(device, &self.paint);
        }

        if stroke.is_visible() && thickness > 0.0 {
            self.set_stroke_paint(stroke, thickness, mode);
            let Some(canvas) = self.canvas.as_mut() else {
                return Err(RenderError::InvalidState(NO_CANVAS));
            };
            canvas.draw_rect(device, &self.paint);
        }

        Ok(())
    }

    /// Batches all rectangles into one compound path.
    pub fn draw_rectangles(
        &mut self,
        rects: &[Rect],
        fill: Color,
        stroke: Color,
        thickness: f64,
        mode: EdgeRenderingMode,
    ) -> Result<(), RenderError> {
        if !has_visible_content(fill, stroke, thickness) || rects.is_empty() {
            return Ok(());
        }

        self.path.clear();
        for rect in rects {
            let device = self.actual_rect(*rect, thickness, mode);
            self.path.add_rect(device);
        }

        self.fill_and_stroke_path(fill, stroke, thickness, mode, None, LineJoin::Miter)
    }

    /// Draws one connected (open) polyline.
    pub fn draw_line(
        &mut self,
        points: &[Point],
        stroke: Color,
        thickness: f64,
        mode: EdgeRenderingMode,
        dash: Option<&[f64]>,
        join: LineJoin,
    ) -> Result<(), RenderError> {
        if points.len() < 2 || !stroke.is_visible() || thickness <= 0.0 {
            return Ok(());
        }

        let device_points = self.actual_points(points, thickness, mode);
        self.path.clear();
        self.path.add_polyline(&device_points);

        self.set_line_paint(stroke, thickness, mode, dash, join);
        let Some(canvas) = self.canvas.as_mut() else {
            return Err(RenderError::InvalidState(NO_CANVAS));
        };
        canvas.draw_path(&self.path, &self.paint);
        Ok(())
    }

    /// Draws the points as disjoint segments (pairs 0-1, 2-3, …) in one
    /// batched canvas call. Each pair is independently eligible for
    /// axis-aligned snapping; a trailing unpaired point is dropped.
    pub fn draw_line_segments(
        &mut self,
        points: &[Point],
        stroke: Color,
        thickness: f64,
        mode: EdgeRenderingMode,
        dash: Option<&[f64]>,
        join: LineJoin,
    ) -> Result<(), RenderError> {
        if points.len() < 2 || !stroke.is_visible() || thickness <= 0.0 {
            return Ok(());
        }

        let t = self.transform();
        let snap_eligible = self.renders_to_pixels()
            && matches!(
                mode,
                EdgeRenderingMode::Automatic
                    | EdgeRenderingMode::Adaptive
                    | EdgeRenderingMode::PreferSharpness
            );
        let offset = convert::snap_offset(self.actual_thickness(thickness, mode));

        let mut device_points = Vec::with_capacity(points.len() & !1);
        for pair in points.chunks_exact(2) {
            if snap_eligible && convert::is_straight_segment(pair[0], pair[1]) {
                device_points.push(t.convert_snap_point(pair[0], offset));
                device_points.push(t.convert_snap_point(pair[1], offset));
            } else {
                device_points.push(t.convert_point(pair[0]));
                device_points.push(t.convert_point(pair[1]));
            }
        }

        self.set_line_paint(stroke, thickness, mode, dash, join);
        let Some(canvas) = self.canvas.as_mut() else {
            return Err(RenderError::InvalidState(NO_CANVAS));
        };
        canvas.draw_line_segments(&device_points, &self.paint);
        Ok(())
    }

    /// Decodes `data` (one decode per call) and scales the source sub-rect
    /// into the destination rect. `src` is in source pixel coordinates and
    /// is not DPI-scaled; `dst` is device-independent.
    pub fn draw_image(
        &mut self,
        data: &[u8],
        src: Rect,
        dst: Rect,
        opacity: f64,
        interpolate: bool,
    ) -> Result<(), RenderError> {
        if !opacity.is_finite() {
            return Err(RenderError::InvalidArgument(format!(
                "image opacity must be finite, got {opacity}"
            )));
        }
        if opacity <= 0.0 {
            return Ok(());
        }

        let decoded = image::load_from_memory(data)
            .map_err(|e| RenderError::InvalidInput(format!("image decode failed: {e}")))?
            .to_rgba8();

        let source = DeviceRect::new(
            src.left as f32,
            src.top as f32,
            src.right as f32,
            src.bottom as f32,
        );
        let dest = self.transform().convert_rect(dst);

        self.set_image_paint(opacity, interpolate);
        let Some(canvas) = self.canvas.as_mut() else {
            return Err(RenderError::InvalidState(NO_CANVAS));
        };
        canvas.draw_image(&decoded, source, dest, &self.paint);
        Ok(())
    }

    // ── text ───────────────────────────────────────────────────────────────

    /// Lays out and draws a (possibly multi-line) text block anchored at
    /// `p`, rotated by `rotation` degrees around the anchor.
    ///
    /// A font family that cannot be resolved degrades to the default face or
    /// to estimated metrics; it never fails the call. When `max_size` is
    /// given the block is clipped to it in the rotated frame.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        p: Point,
        text: &str,
        fill: Color,
        font_family: &str,
        font_size: f64,
        font_weight: u16,
        rotation: f64,
        halign: HorizontalAlignment,
        valign: VerticalAlignment,
        max_size: Option<Size>,
    ) -> Result<(), RenderError> {
        if text.is_empty() || !fill.is_visible() {
            return Ok(());
        }
        if !rotation.is_finite() {
            return Err(RenderError::InvalidArgument(format!(
                "text rotation must be finite, got {rotation}"
            )));
        }

        let t = self.transform();
        let px_size = t.convert(font_size);
        let descriptor = FontDescriptor::new(font_family, font_weight);
        let font_id = self.fonts.resolve(&descriptor);
        let metrics = self.metrics_for(font_id, px_size);

        let lines = layout::split_lines(text);
        let first_baseline = vertical_anchor(valign, metrics, lines.len());

        // Resolve widths and glyphs before touching the canvas; shaping
        // needs the caches mutably.
        let mut runs = Vec::with_capacity(lines.len());
        let mut baseline = first_baseline;
        for line in &lines {
            let width = self.line_width(&descriptor, font_id, line, px_size);
            let dx = horizontal_anchor(halign, width);
            let glyphs = self.place_line(&descriptor, font_id, line, px_size);
            runs.push(TextRun {
                text: (*line).to_string(),
                font: font_id,
                px_size,
                origin: DevicePoint::new(dx, baseline),
                glyphs,
            });
            baseline += metrics.line_height;
        }

        self.set_text_paint(fill);
        let Some(canvas) = self.canvas.as_mut() else {
            return Err(RenderError::InvalidState(NO_CANVAS));
        };

        canvas.save();
        canvas.translate(t.convert(p.x), t.convert(p.y));
        canvas.rotate_degrees(rotation as f32);

        if let Some(max) = max_size {
            let left = runs.iter().map(|r| r.origin.x).fold(0.0f32, f32::min);
            let top = first_baseline - metrics.ascent;
            canvas.clip_rect(DeviceRect::new(
                left,
                top,
                left + t.convert(max.width),
                top + t.convert(max.height),
            ));
        }

        for run in &runs {
            canvas.draw_text_run(run, &self.paint);
        }
        canvas.restore();
        Ok(())
    }

    /// Device-independent extent of the laid-out text, using the same
    /// measurement path (shaped or simple) as `draw_text`. An empty string
    /// measures as one empty line: zero width, one line height.
    pub fn measure_text(
        &mut self,
        text: &str,
        font_family: &str,
        font_size: f64,
        font_weight: u16,
    ) -> Size {
        let t = self.transform();
        let px_size = t.convert(font_size);
        let descriptor = FontDescriptor::new(font_family, font_weight);
        let font_id = self.fonts.resolve(&descriptor);
        let metrics = self.metrics_for(font_id, px_size);

        let lines = layout::split_lines(text);
        let width = lines
            .iter()
            .map(|line| self.line_width(&descriptor, font_id, line, px_size))
            .fold(0.0f32, f32::max);
        let height = metrics.line_height * lines.len() as f32;

        Size::new(t.convert_back(width), t.convert_back(height))
    }

    // ── geometry helpers ───────────────────────────────────────────────────

    /// Stroke thickness in device pixels; `PreferSharpness` additionally
    /// snaps it to a whole pixel on pixel targets.
    fn actual_thickness(&self, thickness: f64, mode: EdgeRenderingMode) -> f32 {
        let scaled = self.transform().convert(thickness);
        if mode == EdgeRenderingMode::PreferSharpness && self.renders_to_pixels() {
            convert::snap(scaled, 0.0)
        } else {
            scaled
        }
    }

    /// Converts a point list, snapping when the mode, target and geometry
    /// allow. `Automatic`/`Adaptive` snap only fully axis-aligned polylines;
    /// `PreferSharpness` snaps unconditionally on pixel targets.
    fn actual_points(
        &self,
        points: &[Point],
        thickness: f64,
        mode: EdgeRenderingMode,
    ) -> Vec<DevicePoint> {
        let t = self.transform();
        let snap_points = match mode {
            EdgeRenderingMode::Automatic | EdgeRenderingMode::Adaptive => {
                self.renders_to_pixels() && convert::is_straight_line(points)
            }
            EdgeRenderingMode::PreferSharpness => self.renders_to_pixels(),
            EdgeRenderingMode::PreferSpeed => false,
        };

        if snap_points {
            let offset = convert::snap_offset(self.actual_thickness(thickness, mode));
            points
                .iter()
                .map(|p| t.convert_snap_point(*p, offset))
                .collect()
        } else {
            points.iter().map(|p| t.convert_point(*p)).collect()
        }
    }

    /// Converts a rectangle, snapping all four edges on pixel targets
    /// (rectangle edges are always axis-aligned).
    fn actual_rect(&self, rect: Rect, thickness: f64, mode: EdgeRenderingMode) -> DeviceRect {
        let t = self.transform();
        match mode {
            EdgeRenderingMode::Automatic
            | EdgeRenderingMode::Adaptive
            | EdgeRenderingMode::PreferSharpness
                if self.renders_to_pixels() =>
            {
                let offset = convert::snap_offset(self.actual_thickness(thickness, mode));
                t.convert_snap_rect(rect, offset)
            }
            _ => t.convert_rect(rect),
        }
    }

    /// Fills and/or strokes the flyweight path, assuming it has been built
    /// by the caller.
    fn fill_and_stroke_path(
        &mut self,
        fill: Color,
        stroke: Color,
        thickness: f64,
        mode: EdgeRenderingMode,
        dash: Option<&[f64]>,
        join: LineJoin,
    ) -> Result<(), RenderError> {
        if fill.is_visible() {
            self.set_fill_paint(fill, mode);
            let Some(canvas) = self.canvas.as_mut() else {
                return Err(RenderError::InvalidState(NO_CANVAS));
            };
            canvas.draw_path(&self.path, &self.paint);
        }

        if stroke.is_visible() && thickness > 0.0 {
            self.set_line_paint(stroke, thickness, mode, dash, join);
            let Some(canvas) = self.canvas.as_mut() else {
                return Err(RenderError::InvalidState(NO_CANVAS));
            };
            canvas.draw_path(&self.path, &self.paint);
        }

        Ok(())
    }

    // ── text helpers ───────────────────────────────────────────────────────

    fn metrics_for(&self, font_id: Option<FontId>, px_size: f32) -> FontMetrics {
        font_id
            .and_then(|id| self.fonts.line_metrics(id, px_size))
            .unwrap_or_else(|| FontMetrics::synthetic(px_size))
    }

    /// Width of one line in device pixels, via the shaped or simple path.
    /// Shared by `draw_text` and `measure_text` so alignment offsets and
    /// measured widths cannot diverge.
    fn line_width(
        &mut self,
        descriptor: &FontDescriptor,
        font_id: Option<FontId>,
        line: &str,
        px_size: f32,
    ) -> f32 {
        let Some(font) = font_id.and_then(|id| self.fonts.get(id)) else {
            return estimated_advance(line, px_size);
        };

        if self.use_text_shaping {
            let shaper = self
                .shapers
                .entry(descriptor.clone())
                .or_insert_with(Shaper::new);
            shaper.shape_width(font, line) * px_size / SHAPING_UNITS
        } else {
            line.chars()
                .map(|ch| font.metrics(ch, px_size).advance_width)
                .sum()
        }
    }

    /// Pen-positioned glyphs for one line, baseline-relative. Empty when no
    /// face resolved.
    fn place_line(
        &mut self,
        descriptor: &FontDescriptor,
        font_id: Option<FontId>,
        line: &str,
        px_size: f32,
    ) -> Vec<PlacedGlyph> {
        let Some(font) = font_id.and_then(|id| self.fonts.get(id)) else {
            return Vec::new();
        };

        if self.use_text_shaping {
            let shaper = self
                .shapers
                .entry(descriptor.clone())
                .or_insert_with(Shaper::new);
            shaper.shape_line(font, line, px_size)
        } else {
            let mut pen = 0.0f32;
            let mut glyphs = Vec::with_capacity(line.len());
            for ch in line.chars() {
                let index = font.lookup_glyph_index(ch);
                glyphs.push(PlacedGlyph { index, x: pen });
                pen += font.metrics(ch, px_size).advance_width;
            }
            glyphs
        }
    }

    // ── flyweight paint setters ────────────────────────────────────────────

    fn set_fill_paint(&mut self, color: Color, mode: EdgeRenderingMode) {
        self.paint.color = color;
        self.paint.style = PaintStyle::Fill;
        self.paint.anti_alias = use_anti_aliasing(mode);
        self.paint.dash = None;
        self.paint.hinting = false;
        self.paint.subpixel_text = false;
    }

    fn set_stroke_paint(&mut self, color: Color, thickness: f64, mode: EdgeRenderingMode) {
        self.paint.color = color;
        self.paint.style = PaintStyle::Stroke;
        self.paint.anti_alias = use_anti_aliasing(mode);
        self.paint.stroke_width = self.actual_thickness(thickness, mode);
        self.paint.stroke_join = LineJoin::Miter;
        self.paint.miter_limit = self.miter_limit;
        self.paint.dash = None;
        self.paint.hinting = false;
        self.paint.subpixel_text = false;
    }

    fn set_line_paint(
        &mut self,
        color: Color,
        thickness: f64,
        mode: EdgeRenderingMode,
        dash: Option<&[f64]>,
        join: LineJoin,
    ) {
        self.set_stroke_paint(color, thickness, mode);
        if let Some(dash) = dash {
            let t = self.transform();
            let width = self.paint.stroke_width;
            // Dash lengths are relative to the stroke width.
            self.paint.dash = Some(dash.iter().map(|v| t.convert(*v) * width).collect());
        }
        self.paint.stroke_join = join;
    }

    fn set_image_paint(&mut self, opacity: f64, interpolate: bool) {
        let alpha = (255.0 * opacity.clamp(0.0, 1.0)).round() as u8;
        self.paint.color = Color::rgba(0, 0, 0, alpha);
        self.paint.style = PaintStyle::Fill;
        self.paint.anti_alias = true;
        self.paint.filter_quality = if interpolate {
            FilterQuality::High
        } else {
            FilterQuality::Nearest
        };
        self.paint.dash = None;
        self.paint.hinting = false;
        self.paint.subpixel_text = false;
    }

    fn set_text_paint(&mut self, color: Color) {
        self.paint.color = color;
        self.paint.style = PaintStyle::Fill;
        self.paint.anti_alias = true;
        self.paint.dash = None;
        self.paint.hinting = self.renders_to_screen();
        self.paint.subpixel_text = self.renders_to_screen();
    }
}

impl<C: Canvas> Default for RenderContext<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared precondition: something must be drawable, either a visible fill
/// or a visible stroke with positive thickness.
fn has_visible_content(fill: Color, stroke: Color, thickness: f64) -> bool {
    fill.is_visible() || (stroke.is_visible() && thickness > 0.0)
}

fn use_anti_aliasing(mode: EdgeRenderingMode) -> bool {
    mode != EdgeRenderingMode::PreferSpeed
}

/// Advance estimate used when no font face resolves at all, so measurement
/// and alignment stay non-degenerate.
fn estimated_advance(line: &str, px_size: f32) -> f32 {
    line.chars().count() as f32 * px_size * 0.6
}
