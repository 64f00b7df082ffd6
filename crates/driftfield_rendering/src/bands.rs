//! Wave band rendering.
//!
//! Every band is redrawn from scratch each frame as a row of narrow
//! vertical strips, each filled with a top-to-bottom gradient through the
//! band's color stops. The stop alphas are scaled by a slow horizontal
//! shimmer, which is what makes the curtain look like it breathes.

use driftfield_core::{ColorStop, Viewport, WaveCompositor};

use crate::canvas::{Canvas, LinearGradient, Rect};

/// Paints a [`WaveCompositor`]'s bands. Keep one per engine instance.
#[derive(Debug, Default)]
pub struct BandRenderer {
    /// Shimmer-scaled stops for the column being drawn.
    scratch: Vec<ColorStop>,
}

impl BandRenderer {
    /// Creates a renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scratch: Vec::with_capacity(8),
        }
    }

    /// Draws all bands back to front. Returns the number of strips filled.
    pub fn draw<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        compositor: &WaveCompositor,
        viewport: &Viewport,
        tick: u64,
    ) -> usize {
        let mut strips = 0;

        for band in compositor.bands() {
            for column in band.columns(viewport, tick) {
                self.scratch.clear();
                self.scratch.extend(
                    band.stops()
                        .iter()
                        .map(|stop| ColorStop::new(stop.offset, stop.color.scale_alpha(column.shimmer))),
                );

                let gradient = LinearGradient {
                    from: [column.x, column.top],
                    to: [column.x, column.bottom],
                    stops: &self.scratch,
                };
                let rect = Rect::new(column.x, column.top, column.width, column.bottom - column.top);
                canvas.fill_rect_gradient(rect, &gradient);
                strips += 1;
            }
        }

        tracing::trace!(strips, tick, "bands drawn");
        strips
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawCommand, RecordingCanvas};
    use driftfield_core::{Band, Harmonic, Rgba};

    fn marker_band(base_y: f32, r: u8) -> Band {
        Band::new(
            base_y,
            vec![Harmonic::new(0.05, 0.002, 0.01, 0.0)],
            0.1,
            vec![
                ColorStop::new(0.0, Rgba::new(r, 0, 0, 0.0)),
                ColorStop::new(0.5, Rgba::new(r, 0, 0, 0.5)),
                ColorStop::new(1.0, Rgba::new(r, 0, 0, 0.0)),
            ],
        )
    }

    fn first_red(cmd: &DrawCommand) -> Option<u8> {
        match cmd {
            DrawCommand::FillRectGradient { stops, .. } => stops.first().map(|s| s.color.r),
            _ => None,
        }
    }

    #[test]
    fn test_strip_count() {
        let compositor = WaveCompositor::with_default_bands();
        let mut renderer = BandRenderer::new();
        let mut canvas = RecordingCanvas::new();
        let strips = renderer.draw(&mut canvas, &compositor, &Viewport::new(800, 600), 0);
        assert_eq!(strips, 4 * 200);
        assert_eq!(canvas.len(), 800);
    }

    #[test]
    fn test_bands_drawn_in_list_order() {
        let compositor = WaveCompositor::new(vec![marker_band(0.3, 1), marker_band(0.6, 2)]);
        let mut renderer = BandRenderer::new();
        let mut canvas = RecordingCanvas::new();
        renderer.draw(&mut canvas, &compositor, &Viewport::new(40, 100), 7);

        let order: Vec<u8> = canvas.commands().iter().filter_map(first_red).collect();
        assert_eq!(order.len(), 20);
        assert!(order[..10].iter().all(|&r| r == 1));
        assert!(order[10..].iter().all(|&r| r == 2));
    }

    #[test]
    fn test_shimmer_scales_stop_alpha() {
        let band = marker_band(0.5, 9);
        let compositor = WaveCompositor::new(vec![band.clone()]);
        let mut renderer = BandRenderer::new();
        let mut canvas = RecordingCanvas::new();
        let viewport = Viewport::new(8, 100);
        renderer.draw(&mut canvas, &compositor, &viewport, 3);

        for (cmd, column) in canvas.commands().iter().zip(band.columns(&viewport, 3)) {
            let DrawCommand::FillRectGradient { rect, from, to, stops } = cmd else {
                panic!("expected a gradient fill");
            };
            assert!((stops[1].color.a - 0.5 * column.shimmer).abs() < 1e-6);
            assert_eq!(*from, [column.x, column.top]);
            assert_eq!(*to, [column.x, column.bottom]);
            assert!((rect.height - (column.bottom - column.top)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_empty_viewport_draws_nothing() {
        let compositor = WaveCompositor::with_default_bands();
        let mut renderer = BandRenderer::new();
        let mut canvas = RecordingCanvas::new();
        assert_eq!(renderer.draw(&mut canvas, &compositor, &Viewport::new(0, 0), 0), 0);
        assert!(canvas.is_empty());
    }
}
