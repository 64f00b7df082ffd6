//! One wave band: a harmonic spine with a gradient cross-section.
//!
//! ```text
//!   spine(x, t) = baseY·H + Σ amp·H·sin(freq·x + phase + speed·t)
//!
//!        top ─┐      ░░▒▒▓▓▒▒░░   <- color stops, top to bottom
//!     spine ──┤      ░▒▓████▓▒░
//!     bottom ─┘      ░░▒▒▓▓▒▒░░
//!                    |4px|       <- one column per stride
//! ```

use crate::color::Rgba;
use crate::viewport::Viewport;

/// Horizontal sampling stride (pixels).
pub const COLUMN_STRIDE: f32 = 4.0;
/// Shimmer spatial frequency.
pub const SHIMMER_FREQ: f32 = 0.008;
/// Shimmer drift per tick.
pub const SHIMMER_TIME: f32 = 0.0004;

/// One sinusoidal term of a band's spine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Harmonic {
    /// Amplitude as a fraction of surface height.
    pub amplitude: f32,
    /// Spatial frequency (radians per pixel).
    pub frequency: f32,
    /// Phase drift per tick (radians).
    pub speed: f32,
    /// Phase offset (radians).
    pub phase: f32,
}

impl Harmonic {
    /// Creates a harmonic term.
    #[must_use]
    pub const fn new(amplitude: f32, frequency: f32, speed: f32, phase: f32) -> Self {
        Self { amplitude, frequency, speed, phase }
    }
}

/// A gradient stop across the band's thickness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    /// Position from top (0) to bottom (1).
    pub offset: f32,
    /// Color at this stop.
    pub color: Rgba,
}

impl ColorStop {
    /// Creates a stop.
    #[must_use]
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// One vertical strip of a band, ready to fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandColumn {
    /// Left edge (pixels).
    pub x: f32,
    /// Strip width (pixels). Overlaps the next strip by one pixel.
    pub width: f32,
    /// Top of the band at this column.
    pub top: f32,
    /// Bottom of the band at this column.
    pub bottom: f32,
    /// Alpha multiplier for every stop in this column.
    pub shimmer: f32,
}

/// A layered, translucent, wavy curtain. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    base_y: f32,
    harmonics: Vec<Harmonic>,
    thickness: f32,
    stops: Vec<ColorStop>,
}

impl Band {
    /// Creates a band.
    ///
    /// Stop offsets are clamped to `[0, 1]`; their order is kept as given.
    #[must_use]
    pub fn new(base_y: f32, harmonics: Vec<Harmonic>, thickness: f32, mut stops: Vec<ColorStop>) -> Self {
        for stop in &mut stops {
            stop.offset = stop.offset.clamp(0.0, 1.0);
        }
        Self { base_y, harmonics, thickness, stops }
    }

    /// Vertical anchor as a fraction of height.
    #[must_use]
    pub fn base_y(&self) -> f32 {
        self.base_y
    }

    /// The harmonic terms, in summation order.
    #[must_use]
    pub fn harmonics(&self) -> &[Harmonic] {
        &self.harmonics
    }

    /// Band thickness as a fraction of height.
    #[must_use]
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Gradient stops, top to bottom.
    #[must_use]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Phase of the first harmonic; seeds the shimmer.
    #[must_use]
    pub fn phase0(&self) -> f32 {
        self.harmonics.first().map_or(0.0, |h| h.phase)
    }

    /// Spine y at column `x` and tick `tick` for a surface `height` tall.
    ///
    /// Pure: identical arguments give identical results.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn spine_y(&self, x: f32, tick: u64, height: f32) -> f32 {
        // f64 keeps speed·t precise over long sessions
        let t = tick as f64;
        let h = f64::from(height);
        let x = f64::from(x);

        let mut y = f64::from(self.base_y) * h;
        for harmonic in &self.harmonics {
            let angle = f64::from(harmonic.frequency) * x
                + f64::from(harmonic.phase)
                + f64::from(harmonic.speed) * t;
            y += f64::from(harmonic.amplitude) * h * angle.sin();
        }
        y as f32
    }

    /// Half the band thickness in pixels.
    #[must_use]
    pub fn half_thickness(&self, height: f32) -> f32 {
        self.thickness * height * 0.5
    }

    /// Horizontal brightness variation, in `[0.7, 1.0]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn shimmer(&self, x: f32, tick: u64) -> f32 {
        let angle = f64::from(SHIMMER_FREQ) * f64::from(x)
            + f64::from(SHIMMER_TIME) * tick as f64
            + f64::from(self.phase0());
        0.85 + 0.15 * angle.sin() as f32
    }

    /// Samples the band across the viewport at [`COLUMN_STRIDE`].
    ///
    /// Yields nothing for an empty viewport. Never allocates.
    #[must_use]
    pub fn columns(&self, viewport: &Viewport, tick: u64) -> BandColumns<'_> {
        let count = if viewport.is_empty() {
            0
        } else {
            viewport.width().div_ceil(4)
        };
        BandColumns {
            band: self,
            width: viewport.w(),
            height: viewport.h(),
            tick,
            count,
            next: 0,
        }
    }
}

/// Iterator over a band's columns. See [`Band::columns`].
#[derive(Debug, Clone)]
pub struct BandColumns<'a> {
    band: &'a Band,
    width: f32,
    height: f32,
    tick: u64,
    count: u32,
    next: u32,
}

impl Iterator for BandColumns<'_> {
    type Item = BandColumn;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<BandColumn> {
        if self.next >= self.count {
            return None;
        }
        let i = self.next;
        self.next += 1;

        let n = self.count as f32;
        let x = (i as f32 / n) * self.width;
        let spine = self.band.spine_y(x, self.tick, self.height);
        let half = self.band.half_thickness(self.height);

        Some(BandColumn {
            x,
            width: self.width / n + 1.0,
            top: spine - half,
            bottom: spine + half,
            shimmer: self.band.shimmer(x, self.tick),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.count - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for BandColumns<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_band() -> Band {
        Band::new(
            0.5,
            vec![Harmonic::new(0.1, 0.01, 0.05, 0.0)],
            0.2,
            vec![
                ColorStop::new(0.0, Rgba::new(0, 0, 0, 0.0)),
                ColorStop::new(1.5, Rgba::new(255, 255, 255, 1.0)),
            ],
        )
    }

    #[test]
    fn test_spine_deterministic() {
        let band = flat_band();
        let a = band.spine_y(123.0, 4567, 720.0);
        let b = band.spine_y(123.0, 4567, 720.0);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_spine_at_origin() {
        let band = flat_band();
        assert!((band.spine_y(0.0, 0, 400.0) - 200.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_offsets_clamped() {
        assert!((flat_band().stops()[1].offset - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_columns_cover_width() {
        let band = flat_band();
        let vp = Viewport::new(401, 100);
        let cols: Vec<_> = band.columns(&vp, 0).collect();
        assert_eq!(cols.len(), 101);
        assert!(cols[0].x.abs() < f32::EPSILON);
        let last = cols[cols.len() - 1];
        assert!(last.x + last.width >= 401.0);
        for c in &cols {
            assert!((c.bottom - c.top - 20.0).abs() < 1e-3);
            assert!((0.7..=1.0).contains(&c.shimmer));
        }
    }

    #[test]
    fn test_columns_empty_viewport() {
        let band = flat_band();
        assert_eq!(band.columns(&Viewport::new(0, 300), 5).count(), 0);
        assert_eq!(band.columns(&Viewport::new(300, 0), 5).count(), 0);
    }
}
