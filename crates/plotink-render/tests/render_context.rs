//! End-to-end protocol tests: every primitive drives a [`RecordingCanvas`]
//! and the recorded calls are checked against the conversion, snapping and
//! layout policies.

use std::io::Cursor;

use plotink_render::canvas::{CanvasOp, PathVerb, RecordingCanvas};
use plotink_render::coords::{DevicePoint, DeviceRect, Point, Rect, Size};
use plotink_render::paint::{Color, LineJoin, PaintStyle};
use plotink_render::render::{EdgeRenderingMode, RenderContext, RenderError, RenderTarget};
use plotink_render::text::layout::{HorizontalAlignment, VerticalAlignment};

const BLUE: Color = Color::rgb(0, 0, 255);
const RED: Color = Color::rgb(255, 0, 0);

fn context() -> RenderContext<RecordingCanvas> {
    let mut ctx = RenderContext::new();
    ctx.attach_canvas(RecordingCanvas::new());
    ctx
}

fn ops(ctx: &mut RenderContext<RecordingCanvas>) -> Vec<CanvasOp> {
    ctx.detach_canvas()
        .expect("canvas should still be attached")
        .take_ops()
}

// ── visibility preconditions ──────────────────────────────────────────────

#[test]
fn transparent_colors_draw_nothing() {
    let mut ctx = context();
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
    let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];

    ctx.draw_ellipse(rect, Color::TRANSPARENT, Color::TRANSPARENT, 1.0, EdgeRenderingMode::Automatic)
        .unwrap();
    ctx.draw_rectangle(rect, Color::TRANSPARENT, Color::TRANSPARENT, 1.0, EdgeRenderingMode::Automatic)
        .unwrap();
    ctx.draw_polygon(&pts, Color::TRANSPARENT, Color::TRANSPARENT, 1.0, EdgeRenderingMode::Automatic, None, LineJoin::Miter)
        .unwrap();
    ctx.draw_line(&pts, Color::TRANSPARENT, 1.0, EdgeRenderingMode::Automatic, None, LineJoin::Miter)
        .unwrap();
    ctx.draw_line_segments(&pts, Color::TRANSPARENT, 1.0, EdgeRenderingMode::Automatic, None, LineJoin::Miter)
        .unwrap();
    ctx.draw_text(
        Point::zero(),
        "hi",
        Color::TRANSPARENT,
        "Inter",
        10.0,
        400,
        0.0,
        HorizontalAlignment::Left,
        VerticalAlignment::Top,
        None,
    )
    .unwrap();

    assert!(ops(&mut ctx).is_empty());
}

#[test]
fn invisible_stroke_with_zero_thickness_draws_nothing() {
    let mut ctx = context();
    let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

    ctx.draw_ellipse(rect, Color::TRANSPARENT, BLUE, 0.0, EdgeRenderingMode::Automatic)
        .unwrap();
    ctx.draw_rectangle(rect, Color::TRANSPARENT, BLUE, -1.0, EdgeRenderingMode::Automatic)
        .unwrap();

    assert!(ops(&mut ctx).is_empty());
}

#[test]
fn short_point_lists_draw_nothing() {
    let mut ctx = context();
    let dot = [Point::new(3.0, 3.0)];

    ctx.draw_line(&dot, BLUE, 1.0, EdgeRenderingMode::Automatic, None, LineJoin::Miter)
        .unwrap();
    ctx.draw_line(&[], BLUE, 1.0, EdgeRenderingMode::Automatic, None, LineJoin::Miter)
        .unwrap();
    ctx.draw_polygon(&dot, BLUE, BLUE, 1.0, EdgeRenderingMode::Automatic, None, LineJoin::Miter)
        .unwrap();
    ctx.draw_line_segments(&dot, BLUE, 1.0, EdgeRenderingMode::Automatic, None, LineJoin::Miter)
        .unwrap();

    assert!(ops(&mut ctx).is_empty());
}

// ── lifecycle ─────────────────────────────────────────────────────────────

#[test]
fn drawing_without_a_canvas_is_invalid_state() {
    let mut ctx: RenderContext<RecordingCanvas> = RenderContext::new();
    let err = ctx
        .draw_rectangle(
            Rect::new(0.0, 0.0, 1.0, 1.0),
            BLUE,
            Color::TRANSPARENT,
            0.0,
            EdgeRenderingMode::Automatic,
        )
        .unwrap_err();
    assert!(matches!(err, RenderError::InvalidState(_)));
}

#[test]
fn detach_returns_the_attached_canvas() {
    let mut ctx = context();
    assert!(ctx.has_canvas());
    assert!(ctx.detach_canvas().is_some());
    assert!(!ctx.has_canvas());
    assert!(ctx.detach_canvas().is_none());
}

#[test]
fn dispose_is_idempotent_and_leaves_the_context_usable() {
    let mut ctx = context();
    ctx.measure_text("x", "Nope", 10.0, 400);
    ctx.dispose();
    ctx.dispose();
    assert_eq!(ctx.fonts().cached_descriptor_count(), 0);

    ctx.attach_canvas(RecordingCanvas::new());
    let size = ctx.measure_text("x", "Nope", 10.0, 400);
    assert!(size.height > 0.0);
}

// ── clipping ──────────────────────────────────────────────────────────────

#[test]
fn clip_stack_balances() {
    let mut ctx = context();
    for _ in 0..3 {
        ctx.push_clip(Rect::new(0.0, 0.0, 50.0, 50.0)).unwrap();
    }
    assert_eq!(ctx.clip_count(), 3);
    for _ in 0..3 {
        ctx.pop_clip().unwrap();
    }
    assert_eq!(ctx.clip_count(), 0);

    let err = ctx.pop_clip().unwrap_err();
    assert!(matches!(err, RenderError::InvalidState(_)));
}

#[test]
fn push_clip_saves_then_clips_in_device_pixels() {
    let mut ctx = context();
    ctx.set_dpi_scale(2.0);
    ctx.push_clip(Rect::new(1.0, 2.0, 11.0, 12.0)).unwrap();

    let recorded = ops(&mut ctx);
    assert_eq!(
        recorded,
        vec![
            CanvasOp::Save,
            CanvasOp::ClipRect(DeviceRect::new(2.0, 4.0, 22.0, 24.0)),
        ]
    );
}

// ── ellipses and rectangles ───────────────────────────────────────────────

#[test]
fn ellipse_fills_then_strokes() {
    let mut ctx = context();
    ctx.draw_ellipse(
        Rect::new(0.0, 0.0, 10.0, 20.0),
        BLUE,
        RED,
        2.0,
        EdgeRenderingMode::Automatic,
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    assert_eq!(recorded.len(), 2);
    let CanvasOp::DrawOval(rect, fill_paint) = &recorded[0] else {
        panic!("expected fill oval, got {:?}", recorded[0]);
    };
    assert_eq!(*rect, DeviceRect::new(0.0, 0.0, 10.0, 20.0));
    assert_eq!(fill_paint.style, PaintStyle::Fill);
    assert_eq!(fill_paint.color, BLUE);

    let CanvasOp::DrawOval(_, stroke_paint) = &recorded[1] else {
        panic!("expected stroke oval, got {:?}", recorded[1]);
    };
    assert_eq!(stroke_paint.style, PaintStyle::Stroke);
    assert_eq!(stroke_paint.stroke_width, 2.0);
}

#[test]
fn ellipses_batch_into_one_compound_path() {
    let mut ctx = context();
    ctx.draw_ellipses(
        &[Rect::new(0.0, 0.0, 4.0, 4.0), Rect::new(5.0, 5.0, 9.0, 9.0)],
        BLUE,
        Color::TRANSPARENT,
        0.0,
        EdgeRenderingMode::Automatic,
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    assert_eq!(recorded.len(), 1);
    let CanvasOp::DrawPath(verbs, _) = &recorded[0] else {
        panic!("expected path, got {:?}", recorded[0]);
    };
    assert_eq!(verbs.iter().filter(|v| matches!(v, PathVerb::Oval(_))).count(), 2);
}

#[test]
fn rectangle_snaps_each_edge_with_the_parity_offset() {
    let mut ctx = context();
    // Thickness 1 is odd, so edges snap to pixel centers (offset 0.5).
    ctx.draw_rectangle(
        Rect::new(0.2, 0.2, 10.2, 20.2),
        Color::TRANSPARENT,
        BLUE,
        1.0,
        EdgeRenderingMode::Automatic,
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    let CanvasOp::DrawRect(rect, _) = &recorded[0] else {
        panic!("expected rect, got {:?}", recorded[0]);
    };
    assert_eq!(*rect, DeviceRect::new(0.5, 0.5, 10.5, 20.5));
}

#[test]
fn vector_targets_never_snap() {
    let mut ctx = context();
    ctx.set_render_target(RenderTarget::VectorGraphic);
    ctx.draw_rectangle(
        Rect::new(0.2, 0.2, 10.2, 20.2),
        Color::TRANSPARENT,
        BLUE,
        1.0,
        EdgeRenderingMode::Automatic,
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    let CanvasOp::DrawRect(rect, _) = &recorded[0] else {
        panic!("expected rect, got {:?}", recorded[0]);
    };
    assert_eq!(*rect, DeviceRect::new(0.2, 0.2, 10.2, 20.2));
}

#[test]
fn rectangles_batch_into_one_path_per_style() {
    let mut ctx = context();
    ctx.draw_rectangles(
        &[
            Rect::new(0.0, 0.0, 4.0, 4.0),
            Rect::new(6.0, 6.0, 9.0, 9.0),
        ],
        BLUE,
        RED,
        2.0,
        EdgeRenderingMode::PreferSpeed,
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    assert_eq!(recorded.len(), 2); // one fill pass, one stroke pass
    for op in &recorded {
        let CanvasOp::DrawPath(verbs, paint) = op else {
            panic!("expected path, got {op:?}");
        };
        assert_eq!(verbs.len(), 2);
        assert!(!paint.anti_alias, "PreferSpeed must disable anti-aliasing");
    }
}

// ── lines ─────────────────────────────────────────────────────────────────

#[test]
fn straight_line_snaps_to_pixel_centers_for_odd_thickness() {
    let mut ctx = context();
    ctx.draw_line(
        &[Point::new(0.2, 5.1), Point::new(20.4, 5.1)],
        BLUE,
        1.0,
        EdgeRenderingMode::Automatic,
        None,
        LineJoin::Miter,
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    let CanvasOp::DrawPath(verbs, _) = &recorded[0] else {
        panic!("expected path, got {:?}", recorded[0]);
    };
    assert_eq!(
        verbs,
        &vec![
            PathVerb::MoveTo(DevicePoint::new(0.5, 5.5)),
            PathVerb::LineTo(DevicePoint::new(20.5, 5.5)),
        ]
    );
}

#[test]
fn diagonal_line_is_not_snapped() {
    let mut ctx = context();
    ctx.draw_line(
        &[Point::new(0.2, 0.2), Point::new(10.4, 7.7)],
        BLUE,
        1.0,
        EdgeRenderingMode::Automatic,
        None,
        LineJoin::Miter,
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    let CanvasOp::DrawPath(verbs, _) = &recorded[0] else {
        panic!("expected path, got {:?}", recorded[0]);
    };
    assert_eq!(
        verbs,
        &vec![
            PathVerb::MoveTo(DevicePoint::new(0.2, 0.2)),
            PathVerb::LineTo(DevicePoint::new(10.4, 7.7)),
        ]
    );
}

#[test]
fn dash_lengths_scale_with_stroke_width() {
    let mut ctx = context();
    ctx.draw_line(
        &[Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
        BLUE,
        2.0,
        EdgeRenderingMode::PreferSpeed,
        Some(&[2.0, 3.0]),
        LineJoin::Round,
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    let CanvasOp::DrawPath(_, paint) = &recorded[0] else {
        panic!("expected path, got {:?}", recorded[0]);
    };
    assert_eq!(paint.dash.as_deref(), Some(&[4.0f32, 6.0][..]));
    assert_eq!(paint.stroke_join, LineJoin::Round);
}

#[test]
fn prefer_sharpness_snaps_the_thickness_itself() {
    let mut ctx = context();
    ctx.draw_line(
        &[Point::new(0.0, 1.0), Point::new(9.0, 1.0)],
        BLUE,
        1.4,
        EdgeRenderingMode::PreferSharpness,
        None,
        LineJoin::Miter,
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    let CanvasOp::DrawPath(_, paint) = &recorded[0] else {
        panic!("expected path, got {:?}", recorded[0]);
    };
    assert_eq!(paint.stroke_width, 1.0);
}

// ── line segments ─────────────────────────────────────────────────────────

#[test]
fn line_segments_pair_points_and_drop_a_trailing_odd_point() {
    let mut ctx = context();
    ctx.draw_line_segments(
        &[
            Point::new(0.2, 1.0),
            Point::new(9.2, 1.0),
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(99.0, 99.0), // unpaired, must be dropped
        ],
        BLUE,
        1.0,
        EdgeRenderingMode::Automatic,
        None,
        LineJoin::Miter,
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    let CanvasOp::DrawLineSegments(points, _) = &recorded[0] else {
        panic!("expected segments, got {:?}", recorded[0]);
    };
    // First pair is axis-aligned and snapped; second is diagonal and only
    // converted.
    assert_eq!(
        points,
        &vec![
            DevicePoint::new(0.5, 1.5),
            DevicePoint::new(9.5, 1.5),
            DevicePoint::new(0.0, 0.0),
            DevicePoint::new(3.0, 4.0),
        ]
    );
}

// ── images ────────────────────────────────────────────────────────────────

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgba8(image::RgbaImage::new(width, height));
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .expect("in-memory png encode");
    buf
}

#[test]
fn image_decodes_once_and_scales_the_destination() {
    let mut ctx = context();
    ctx.set_dpi_scale(2.0);
    ctx.draw_image(
        &png_bytes(4, 2),
        Rect::new(0.0, 0.0, 4.0, 2.0),
        Rect::new(10.0, 10.0, 30.0, 20.0),
        0.5,
        true,
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    let CanvasOp::DrawImage { width, height, src, dst, paint } = &recorded[0] else {
        panic!("expected image, got {:?}", recorded[0]);
    };
    assert_eq!((*width, *height), (4, 2));
    // Source rect is in source pixels, never DPI-scaled.
    assert_eq!(*src, DeviceRect::new(0.0, 0.0, 4.0, 2.0));
    assert_eq!(*dst, DeviceRect::new(20.0, 20.0, 60.0, 40.0));
    assert_eq!(paint.color.a, 128);
}

#[test]
fn undecodable_image_bytes_are_invalid_input() {
    let mut ctx = context();
    let err = ctx
        .draw_image(
            b"definitely not an image",
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(0.0, 0.0, 1.0, 1.0),
            1.0,
            false,
        )
        .unwrap_err();
    assert!(matches!(err, RenderError::InvalidInput(_)));
    assert!(ops(&mut ctx).is_empty());
}

#[test]
fn zero_opacity_image_is_a_noop() {
    let mut ctx = context();
    ctx.draw_image(
        &png_bytes(1, 1),
        Rect::new(0.0, 0.0, 1.0, 1.0),
        Rect::new(0.0, 0.0, 1.0, 1.0),
        0.0,
        false,
    )
    .unwrap();
    assert!(ops(&mut ctx).is_empty());
}

#[test]
fn non_finite_opacity_is_invalid_argument() {
    let mut ctx = context();
    let err = ctx
        .draw_image(
            &png_bytes(1, 1),
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Rect::new(0.0, 0.0, 1.0, 1.0),
            f64::NAN,
            false,
        )
        .unwrap_err();
    assert!(matches!(err, RenderError::InvalidArgument(_)));
}

// ── text ──────────────────────────────────────────────────────────────────

#[test]
fn unknown_font_family_never_fails_and_measures_positively() {
    let mut ctx = context();
    ctx.draw_text(
        Point::new(5.0, 5.0),
        "hello",
        Color::BLACK,
        "NoSuchFamily",
        10.0,
        400,
        0.0,
        HorizontalAlignment::Left,
        VerticalAlignment::Top,
        None,
    )
    .unwrap();

    let size = ctx.measure_text("hello", "NoSuchFamily", 10.0, 400);
    assert!(size.width.is_finite());
    assert!(size.height.is_finite());
    assert!(size.height > 0.0);
}

#[test]
fn text_draws_inside_a_saved_translated_rotated_frame() {
    let mut ctx = context();
    ctx.draw_text(
        Point::new(40.0, 50.0),
        "hi",
        Color::BLACK,
        "NoSuchFamily",
        10.0,
        400,
        90.0,
        HorizontalAlignment::Left,
        VerticalAlignment::Top,
        None,
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    assert!(matches!(recorded[0], CanvasOp::Save));
    assert!(matches!(recorded[1], CanvasOp::Translate(x, y) if x == 40.0 && y == 50.0));
    assert!(matches!(recorded[2], CanvasOp::RotateDegrees(d) if d == 90.0));
    assert!(matches!(recorded[3], CanvasOp::DrawTextRun(_, _)));
    assert!(matches!(recorded.last(), Some(CanvasOp::Restore)));
}

#[test]
fn center_alignment_offset_matches_measured_width() {
    let mut ctx = context();
    let measured = ctx.measure_text("AB", "NoSuchFamily", 10.0, 400);

    ctx.draw_text(
        Point::zero(),
        "AB",
        Color::BLACK,
        "NoSuchFamily",
        10.0,
        400,
        0.0,
        HorizontalAlignment::Center,
        VerticalAlignment::Top,
        None,
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    let run = recorded
        .iter()
        .find_map(|op| match op {
            CanvasOp::DrawTextRun(run, _) => Some(run.clone()),
            _ => None,
        })
        .expect("a text run must be drawn");
    // dpi scale is 1, so the measured DIP width equals the device width.
    assert!((run.origin.x - (-(measured.width as f32) / 2.0)).abs() < 1e-4);
}

#[test]
fn vertical_anchor_offsets_for_two_lines() {
    // Estimated metrics at size 10: ascent 8, descent 2, line height 12.
    let baselines = |valign: VerticalAlignment| {
        let mut ctx = context();
        ctx.draw_text(
            Point::zero(),
            "A\nB",
            Color::BLACK,
            "NoSuchFamily",
            10.0,
            400,
            0.0,
            HorizontalAlignment::Left,
            valign,
            None,
        )
        .unwrap();
        ops(&mut ctx)
            .into_iter()
            .filter_map(|op| match op {
                CanvasOp::DrawTextRun(run, _) => Some(run.origin.y),
                _ => None,
            })
            .collect::<Vec<_>>()
    };

    let top = baselines(VerticalAlignment::Top);
    let middle = baselines(VerticalAlignment::Middle);
    let bottom = baselines(VerticalAlignment::Bottom);

    assert_eq!(top, vec![8.0, 20.0]); // first baseline at +ascent
    assert_eq!(bottom, vec![-14.0, -2.0]); // last baseline at -descent
    assert_eq!(middle, vec![-3.0, 9.0]);
    assert!((top[0] + bottom[0] - 2.0 * middle[0]).abs() < 1e-5);
}

#[test]
fn empty_text_measures_one_empty_line() {
    let mut ctx = context();
    let size = ctx.measure_text("", "NoSuchFamily", 10.0, 400);
    assert_eq!(size.width, 0.0);
    // One line of the estimated 1.2x line height.
    assert!((size.height - 12.0).abs() < 1e-6);
}

#[test]
fn measure_text_scales_back_to_dips() {
    let mut ctx = context();
    ctx.set_dpi_scale(2.0);
    let size = ctx.measure_text("A\nBB", "NoSuchFamily", 10.0, 400);

    // Widest line "BB": 2 chars * 20px * 0.6 = 24 device px = 12 DIPs.
    assert!((size.width - 12.0).abs() < 1e-6);
    // Two lines * 24px line height = 48 device px = 24 DIPs.
    assert!((size.height - 24.0).abs() < 1e-6);
}

#[test]
fn max_size_clips_the_text_block() {
    let mut ctx = context();
    ctx.draw_text(
        Point::zero(),
        "hello",
        Color::BLACK,
        "NoSuchFamily",
        10.0,
        400,
        0.0,
        HorizontalAlignment::Left,
        VerticalAlignment::Top,
        Some(Size::new(20.0, 12.0)),
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    let clip = recorded.iter().find_map(|op| match op {
        CanvasOp::ClipRect(rect) => Some(*rect),
        _ => None,
    });
    assert_eq!(clip, Some(DeviceRect::new(0.0, 0.0, 20.0, 12.0)));
}

// ── shaped text against a real face ───────────────────────────────────────

fn context_with_face() -> RenderContext<RecordingCanvas> {
    let mut ctx = context();
    ctx.fonts_mut()
        .register_face("DejaVu Serif", 400, include_bytes!("fixtures/DejaVuSerif.ttf"))
        .expect("fixture font parses");
    ctx
}

#[test]
fn shaped_text_places_real_glyphs() {
    let mut ctx = context_with_face();
    ctx.draw_text(
        Point::zero(),
        "Vex",
        Color::BLACK,
        "DejaVu Serif",
        16.0,
        400,
        0.0,
        HorizontalAlignment::Left,
        VerticalAlignment::Top,
        None,
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    let run = recorded
        .iter()
        .find_map(|op| match op {
            CanvasOp::DrawTextRun(run, _) => Some(run.clone()),
            _ => None,
        })
        .expect("a text run must be drawn");
    assert!(run.font.is_some());
    assert_eq!(run.glyphs.len(), 3);
    let first = run.glyphs.first().unwrap().x;
    let last = run.glyphs.last().unwrap().x;
    assert!(last > first, "pen must advance across the line");
    // Real line metrics, not the estimated fallback.
    assert!(run.origin.y > 0.0);
}

#[test]
fn shaped_right_alignment_matches_measured_width() {
    let mut ctx = context_with_face();
    let measured = ctx.measure_text("Vex", "DejaVu Serif", 16.0, 400);
    assert!(measured.width > 0.0);

    ctx.draw_text(
        Point::zero(),
        "Vex",
        Color::BLACK,
        "DejaVu Serif",
        16.0,
        400,
        0.0,
        HorizontalAlignment::Right,
        VerticalAlignment::Top,
        None,
    )
    .unwrap();

    let recorded = ops(&mut ctx);
    let run = recorded
        .iter()
        .find_map(|op| match op {
            CanvasOp::DrawTextRun(run, _) => Some(run.clone()),
            _ => None,
        })
        .expect("a text run must be drawn");
    // dpi scale is 1, so the measured DIP width equals the device width.
    assert!((run.origin.x + measured.width as f32).abs() < 1e-3);
}

#[test]
fn repeated_shaped_text_builds_one_shaper() {
    let mut ctx = context_with_face();
    for _ in 0..5 {
        ctx.draw_text(
            Point::zero(),
            "Vex",
            Color::BLACK,
            "DejaVu Serif",
            12.0,
            400,
            0.0,
            HorizontalAlignment::Left,
            VerticalAlignment::Top,
            None,
        )
        .unwrap();
        ctx.measure_text("Vex", "DejaVu Serif", 12.0, 400);
    }
    assert_eq!(ctx.shaper_count(), 1);
    assert_eq!(ctx.fonts().cached_descriptor_count(), 1);
}

// ── caching ───────────────────────────────────────────────────────────────

#[test]
fn repeated_descriptors_resolve_at_most_once() {
    let mut ctx = context();
    for _ in 0..5 {
        ctx.draw_text(
            Point::zero(),
            "x",
            Color::BLACK,
            "SomeFamily",
            10.0,
            700,
            0.0,
            HorizontalAlignment::Left,
            VerticalAlignment::Top,
            None,
        )
        .unwrap();
        ctx.measure_text("x", "SomeFamily", 10.0, 700);
    }
    assert_eq!(ctx.fonts().cached_descriptor_count(), 1);

    ctx.measure_text("x", "SomeFamily", 10.0, 400);
    assert_eq!(ctx.fonts().cached_descriptor_count(), 2);
}

// ── background clear ──────────────────────────────────────────────────────

#[test]
fn clear_reaches_the_canvas_even_when_transparent() {
    let mut ctx = context();
    ctx.clear(Color::TRANSPARENT).unwrap();
    assert_eq!(ops(&mut ctx), vec![CanvasOp::Clear(Color::TRANSPARENT)]);
}
