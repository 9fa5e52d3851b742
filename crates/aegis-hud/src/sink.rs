//! The drawing surface the HUD paints onto.

use aegis_common::{BarRect, Rgba};
use glam::Vec2;

/// Immediate-mode drawing primitives.
///
/// Implementations must not fail: a primitive that cannot be drawn is dropped.
pub trait DrawSink {
    /// Solid filled rectangle.
    fn fill_rect(&mut self, rect: BarRect, color: Rgba);

    /// Rectangle with one color per corner, clockwise from top-left.
    fn fill_rect_gradient(&mut self, rect: BarRect, corners: [Rgba; 4]);

    /// 1px rectangle outline.
    fn stroke_rect(&mut self, rect: BarRect, color: Rgba);

    /// Text with its top-left corner at `pos`.
    fn text(&mut self, pos: Vec2, color: Rgba, text: &str);

    /// Size the text would occupy.
    fn text_size(&self, text: &str) -> Vec2;
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Solid fill.
    Fill {
        /// Area
        rect: BarRect,
        /// Color
        color: Rgba,
    },
    /// Four-corner gradient fill.
    Gradient {
        /// Area
        rect: BarRect,
        /// Corner colors clockwise from top-left
        corners: [Rgba; 4],
    },
    /// Outline.
    Stroke {
        /// Area
        rect: BarRect,
        /// Color
        color: Rgba,
    },
    /// Text.
    Text {
        /// Top-left corner
        pos: Vec2,
        /// Color
        color: Rgba,
        /// Content
        text: String,
    },
}

/// A sink that records every call, measuring text with a fixed-width metric.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    /// Recorded commands, in call order.
    pub commands: Vec<DrawCommand>,
    /// Width of one character.
    pub glyph_width: f32,
    /// Height of one line.
    pub line_height: f32,
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSink {
    /// Create an empty recorder with a 7x13 glyph metric.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            glyph_width: 7.0,
            line_height: 13.0,
        }
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every recorded text string, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Every recorded gradient fill, in order.
    pub fn gradients(&self) -> impl Iterator<Item = &BarRect> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Gradient { rect, .. } => Some(rect),
            _ => None,
        })
    }

    /// Every recorded outline, in order.
    pub fn strokes(&self) -> impl Iterator<Item = &BarRect> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Stroke { rect, .. } => Some(rect),
            _ => None,
        })
    }
}

impl DrawSink for RecordingSink {
    fn fill_rect(&mut self, rect: BarRect, color: Rgba) {
        self.commands.push(DrawCommand::Fill { rect, color });
    }

    fn fill_rect_gradient(&mut self, rect: BarRect, corners: [Rgba; 4]) {
        self.commands.push(DrawCommand::Gradient { rect, corners });
    }

    fn stroke_rect(&mut self, rect: BarRect, color: Rgba) {
        self.commands.push(DrawCommand::Stroke { rect, color });
    }

    fn text(&mut self, pos: Vec2, color: Rgba, text: &str) {
        self.commands.push(DrawCommand::Text {
            pos,
            color,
            text: text.to_string(),
        });
    }

    fn text_size(&self, text: &str) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * self.glyph_width, self.line_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_records_in_order() {
        let mut sink = RecordingSink::new();
        let rect = BarRect::new(Vec2::ZERO, Vec2::new(10.0, 5.0));
        sink.fill_rect(rect, Rgba::BLACK);
        sink.stroke_rect(rect, Rgba::WHITE);
        sink.text(Vec2::ONE, Rgba::WHITE, "hi");

        assert_eq!(sink.len(), 3);
        assert!(matches!(sink.commands[0], DrawCommand::Fill { .. }));
        assert!(matches!(sink.commands[1], DrawCommand::Stroke { .. }));
        assert_eq!(sink.texts().collect::<Vec<_>>(), vec!["hi"]);
    }

    #[test]
    fn test_fixed_width_metric() {
        let sink = RecordingSink::new();
        assert_eq!(sink.text_size("100"), Vec2::new(21.0, 13.0));
        assert_eq!(sink.text_size(""), Vec2::new(0.0, 13.0));
    }

    #[test]
    fn test_clear() {
        let mut sink = RecordingSink::new();
        sink.text(Vec2::ZERO, Rgba::WHITE, "x");
        sink.clear();
        assert!(sink.is_empty());
    }
}
