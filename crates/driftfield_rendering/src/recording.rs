//! Recording canvas.
//!
//! Captures every canvas call as a [`DrawCommand`]. Used by tests to assert
//! draw order and by headless hosts that ship command lists elsewhere.

use driftfield_core::{ColorStop, Rgb};

use crate::canvas::{Canvas, LinearGradient, Rect};

/// A recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Surface cleared.
    Clear {
        /// Cleared width.
        width: f32,
        /// Cleared height.
        height: f32,
    },
    /// State pushed.
    Save,
    /// State popped.
    Restore,
    /// Transform translated.
    Translate {
        /// X offset.
        x: f32,
        /// Y offset.
        y: f32,
    },
    /// Transform rotated.
    Rotate {
        /// Angle in radians.
        radians: f32,
    },
    /// Global alpha set.
    GlobalAlpha(f32),
    /// Line width set.
    LineWidth(f32),
    /// Stroke color set.
    StrokeColor(Rgb),
    /// Fill color set.
    FillColor(Rgb),
    /// New path.
    BeginPath,
    /// Subpath start.
    MoveTo {
        /// X.
        x: f32,
        /// Y.
        y: f32,
    },
    /// Straight segment.
    LineTo {
        /// X.
        x: f32,
        /// Y.
        y: f32,
    },
    /// Circular arc.
    Arc {
        /// Center x.
        x: f32,
        /// Center y.
        y: f32,
        /// Radius.
        radius: f32,
        /// Start angle.
        start: f32,
        /// End angle.
        end: f32,
    },
    /// Subpath closed.
    ClosePath,
    /// Path stroked.
    Stroke,
    /// Path filled.
    Fill,
    /// Rectangle outline stroked.
    StrokeRect(Rect),
    /// Rectangle filled with a gradient.
    FillRectGradient {
        /// Filled area.
        rect: Rect,
        /// Gradient start.
        from: [f32; 2],
        /// Gradient end.
        to: [f32; 2],
        /// Stops as drawn.
        stops: Vec<ColorStop>,
    },
}

/// Canvas that records calls instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    /// Recorded commands.
    commands: Vec<DrawCommand>,
    /// Drop earlier commands whenever the surface is cleared.
    frame_scoped: bool,
    /// Number of clears seen.
    clears: u64,
}

impl RecordingCanvas {
    /// Creates a canvas that keeps every command.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(4096),
            frame_scoped: false,
            clears: 0,
        }
    }

    /// Creates a canvas that only keeps the latest frame (since the last clear).
    #[must_use]
    pub fn frame_scoped() -> Self {
        Self {
            frame_scoped: true,
            ..Self::new()
        }
    }

    /// Recorded commands, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of clears (one per rendered frame).
    #[must_use]
    pub fn clears(&self) -> u64 {
        self.clears
    }

    /// Counts commands matching a predicate.
    pub fn count_where(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }

    /// Index of the first command matching a predicate.
    pub fn position(&self, pred: impl Fn(&DrawCommand) -> bool) -> Option<usize> {
        self.commands.iter().position(pred)
    }

    /// Commands recorded since the last clear (inclusive).
    #[must_use]
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }

    /// Takes the recorded commands, leaving the canvas empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, width: f32, height: f32) {
        if self.frame_scoped {
            self.commands.clear();
        }
        self.clears += 1;
        self.push(DrawCommand::Clear { width, height });
    }

    fn save(&mut self) {
        self.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.push(DrawCommand::Restore);
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::Translate { x, y });
    }

    fn rotate(&mut self, radians: f32) {
        self.push(DrawCommand::Rotate { radians });
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.push(DrawCommand::GlobalAlpha(alpha));
    }

    fn set_line_width(&mut self, width: f32) {
        self.push(DrawCommand::LineWidth(width));
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.push(DrawCommand::StrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.push(DrawCommand::FillColor(color));
    }

    fn begin_path(&mut self) {
        self.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(DrawCommand::LineTo { x, y });
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) {
        self.push(DrawCommand::Arc { x, y, radius, start, end });
    }

    fn close_path(&mut self) {
        self.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self) {
        self.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.push(DrawCommand::Fill);
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.push(DrawCommand::StrokeRect(rect));
    }

    fn fill_rect_gradient(&mut self, rect: Rect, gradient: &LinearGradient<'_>) {
        self.push(DrawCommand::FillRectGradient {
            rect,
            from: gradient.from,
            to: gradient.to,
            stops: gradient.stops.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut canvas = RecordingCanvas::new();
        canvas.clear(10.0, 10.0);
        canvas.begin_path();
        canvas.move_to(1.0, 2.0);
        canvas.stroke();

        assert_eq!(
            canvas.commands(),
            &[
                DrawCommand::Clear { width: 10.0, height: 10.0 },
                DrawCommand::BeginPath,
                DrawCommand::MoveTo { x: 1.0, y: 2.0 },
                DrawCommand::Stroke,
            ]
        );
    }

    #[test]
    fn test_frame_scoped_keeps_last_frame() {
        let mut canvas = RecordingCanvas::frame_scoped();
        canvas.clear(1.0, 1.0);
        canvas.stroke();
        canvas.clear(1.0, 1.0);
        canvas.fill();

        assert_eq!(canvas.len(), 2);
        assert_eq!(canvas.clears(), 2);
        assert_eq!(canvas.last_frame(), canvas.commands());
    }

    #[test]
    fn test_last_frame_slice() {
        let mut canvas = RecordingCanvas::new();
        canvas.clear(1.0, 1.0);
        canvas.stroke();
        canvas.clear(1.0, 1.0);
        canvas.fill();

        assert_eq!(canvas.len(), 4);
        assert_eq!(canvas.last_frame().len(), 2);
        assert_eq!(canvas.last_frame()[1], DrawCommand::Fill);
    }
}
