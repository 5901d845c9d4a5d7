//! Pure text-block layout math: line splitting and alignment anchors.
//!
//! The vertical anchor is computed once for the whole block; the horizontal
//! offset is resolved per line from that line's measured width. All values
//! are in device pixels, y-down, relative to the text anchor position.

use crate::text::FontMetrics;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum VerticalAlignment {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Splits text into lines on `\n`, stripping a trailing `\r` from each line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Baseline offset of the block's first line below the anchor point.
pub fn vertical_anchor(
    alignment: VerticalAlignment,
    metrics: FontMetrics,
    line_count: usize,
) -> f32 {
    let extra = metrics.line_height * line_count.saturating_sub(1) as f32;
    match alignment {
        // First baseline sits just below the top of the block.
        VerticalAlignment::Top => metrics.ascent,
        VerticalAlignment::Middle => (metrics.ascent - metrics.descent - extra) / 2.0,
        // Last baseline sits just above the bottom of the block.
        VerticalAlignment::Bottom => -metrics.descent - extra,
    }
}

/// Horizontal offset of one line from the anchor, given its measured width.
pub fn horizontal_anchor(alignment: HorizontalAlignment, line_width: f32) -> f32 {
    match alignment {
        HorizontalAlignment::Left => 0.0,
        HorizontalAlignment::Center => -line_width / 2.0,
        HorizontalAlignment::Right => -line_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> FontMetrics {
        FontMetrics {
            ascent: 8.0,
            descent: 2.0,
            line_height: 12.0,
        }
    }

    // ── line splitting ────────────────────────────────────────────────────

    #[test]
    fn split_plain_text_is_one_line() {
        assert_eq!(split_lines("hello"), vec!["hello"]);
    }

    #[test]
    fn split_handles_unix_and_windows_breaks() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
    }

    #[test]
    fn split_empty_text_is_one_empty_line() {
        assert_eq!(split_lines(""), vec![""]);
    }

    // ── vertical anchors ──────────────────────────────────────────────────

    #[test]
    fn top_anchor_is_ascent() {
        assert_eq!(vertical_anchor(VerticalAlignment::Top, metrics(), 2), 8.0);
    }

    #[test]
    fn bottom_anchor_places_last_baseline_above_bottom() {
        // First-line offset; the last line lands at -descent.
        let first = vertical_anchor(VerticalAlignment::Bottom, metrics(), 2);
        assert_eq!(first, -14.0);
        assert_eq!(first + metrics().line_height, -2.0);
    }

    #[test]
    fn middle_anchor_centers_the_block() {
        assert_eq!(vertical_anchor(VerticalAlignment::Middle, metrics(), 2), -3.0);
    }

    #[test]
    fn anchor_identity_top_plus_bottom_is_twice_middle() {
        for line_count in 1..=4 {
            let top = vertical_anchor(VerticalAlignment::Top, metrics(), line_count);
            let middle = vertical_anchor(VerticalAlignment::Middle, metrics(), line_count);
            let bottom = vertical_anchor(VerticalAlignment::Bottom, metrics(), line_count);
            assert!((top + bottom - 2.0 * middle).abs() < 1e-6);
        }
    }

    // ── horizontal anchors ────────────────────────────────────────────────

    #[test]
    fn horizontal_offsets() {
        assert_eq!(horizontal_anchor(HorizontalAlignment::Left, 40.0), 0.0);
        assert_eq!(horizontal_anchor(HorizontalAlignment::Center, 40.0), -20.0);
        assert_eq!(horizontal_anchor(HorizontalAlignment::Right, 40.0), -40.0);
    }
}
