//! Bar and outlined-text rendering.

use aegis_common::{BarRect, ColorSet, Rgba};
use glam::Vec2;

use crate::sink::DrawSink;

/// Outline offsets, drawn in this order before the foreground pass.
const OUTLINE_OFFSETS: [Vec2; 8] = [
    Vec2::new(-1.0, 1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(-1.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(-1.0, -1.0),
    Vec2::new(0.0, -1.0),
    Vec2::new(1.0, -1.0),
];

/// Width of the proportional fill for a bar.
#[must_use]
pub fn fill_width(rect: &BarRect, fill_ratio: f32) -> f32 {
    rect.width() * fill_ratio
}

/// Draw a bar: background, left-to-right gradient fill, border.
///
/// `fill_ratio` is expected in `[0, 1]` and is not re-validated. A ratio at or
/// below zero draws background and border only.
pub fn draw_bar(sink: &mut dyn DrawSink, rect: BarRect, fill_ratio: f32, colors: &ColorSet) {
    sink.fill_rect(rect, colors.background);

    let width = fill_width(&rect, fill_ratio);
    if width > 0.0 {
        sink.fill_rect_gradient(
            rect.with_width(width),
            [
                colors.gradient_left,
                colors.gradient_right,
                colors.gradient_right,
                colors.gradient_left,
            ],
        );
    }

    sink.stroke_rect(rect, colors.border);
}

/// Draw white text with a 1px black outline.
pub fn draw_outlined_text(sink: &mut dyn DrawSink, text: &str, pos: Vec2) {
    draw_outlined_text_colored(sink, text, pos, Rgba::WHITE, Rgba::BLACK);
}

/// Draw text eight times at unit offsets in the outline color, then once in
/// the foreground color.
pub fn draw_outlined_text_colored(
    sink: &mut dyn DrawSink,
    text: &str,
    pos: Vec2,
    color: Rgba,
    outline: Rgba,
) {
    for offset in OUTLINE_OFFSETS {
        sink.text(pos + offset, outline, text);
    }
    sink.text(pos, color, text);
}
