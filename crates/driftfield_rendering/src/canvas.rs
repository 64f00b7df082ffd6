//! The 2D drawing surface the renderers paint on.
//!
//! Mirrors the small subset of an HTML canvas 2D context the engine uses:
//! transform stack, global alpha, path stroking/filling and gradient fills.
//! Hosts implement it over whatever they have (a browser context, a
//! software rasterizer, a GPU batcher); [`RecordingCanvas`](crate::RecordingCanvas)
//! implements it for tests and headless runs.

use driftfield_core::{ColorStop, Rgb};

/// Axis-aligned rectangle in the current transform's space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// A linear gradient from `from` to `to` through ordered stops.
#[derive(Debug, Clone, Copy)]
pub struct LinearGradient<'a> {
    /// Start point (offset 0).
    pub from: [f32; 2],
    /// End point (offset 1).
    pub to: [f32; 2],
    /// Stops in order.
    pub stops: &'a [ColorStop],
}

/// A 2D immediate-mode drawing context.
pub trait Canvas {
    /// Clears `[0, width) x [0, height)` to transparent.
    fn clear(&mut self, width: f32, height: f32);

    /// Pushes the transform, alpha, colors and line width.
    fn save(&mut self);
    /// Pops state pushed by [`Canvas::save`].
    fn restore(&mut self);
    /// Translates the current transform.
    fn translate(&mut self, x: f32, y: f32);
    /// Rotates the current transform (radians, clockwise on screen).
    fn rotate(&mut self, radians: f32);

    /// Sets the alpha applied to everything drawn next.
    fn set_global_alpha(&mut self, alpha: f32);
    /// Sets the stroke width.
    fn set_line_width(&mut self, width: f32);
    /// Sets the stroke color.
    fn set_stroke_color(&mut self, color: Rgb);
    /// Sets the solid fill color.
    fn set_fill_color(&mut self, color: Rgb);

    /// Starts a new path.
    fn begin_path(&mut self);
    /// Starts a subpath at a point.
    fn move_to(&mut self, x: f32, y: f32);
    /// Adds a straight segment.
    fn line_to(&mut self, x: f32, y: f32);
    /// Adds a circular arc centered at `(x, y)`.
    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32);
    /// Closes the current subpath.
    fn close_path(&mut self);
    /// Strokes the current path.
    fn stroke(&mut self);
    /// Fills the current path with the fill color.
    fn fill(&mut self);

    /// Strokes a rectangle outline.
    fn stroke_rect(&mut self, rect: Rect);
    /// Fills a rectangle with a linear gradient.
    fn fill_rect_gradient(&mut self, rect: Rect, gradient: &LinearGradient<'_>);
}
