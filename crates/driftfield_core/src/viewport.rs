//! # Viewport
//!
//! Pixel dimensions of the drawable surface, taken from the host
//! container's content box. Mutated only on resize.
//!
//! Resizing never remaps existing particles or bands: anything left outside
//! the new bounds is pulled back by the field's wrap and respawn rules over
//! the following frames.

/// Width and height of the drawable surface, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Creates a viewport of the given pixel size.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Creates a viewport from a (possibly fractional) content-box size.
    ///
    /// Fractions are truncated like a canvas backing store; negative,
    /// NaN and infinite sizes collapse to zero.
    #[must_use]
    pub fn from_content_box(width: f32, height: f32) -> Self {
        Self::new(Self::to_pixels(width), Self::to_pixels(height))
    }

    /// Recomputes the size after a host resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        *self = Self::from_content_box(width, height);
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Width as a float, for simulation math.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn w(&self) -> f32 {
        self.width as f32
    }

    /// Height as a float, for simulation math.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn h(&self) -> f32 {
        self.height as f32
    }

    /// True when either dimension is zero (nothing can be drawn).
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn to_pixels(value: f32) -> u32 {
        if value.is_finite() && value > 0.0 {
            // `as` saturates at u32::MAX
            value.trunc() as u32
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_box_truncates() {
        let vp = Viewport::from_content_box(800.9, 600.2);
        assert_eq!((vp.width(), vp.height()), (800, 600));
    }

    #[test]
    fn test_invalid_sizes_collapse() {
        assert!(Viewport::from_content_box(-5.0, 10.0).is_empty());
        assert!(Viewport::from_content_box(f32::NAN, 10.0).is_empty());
        assert!(Viewport::from_content_box(10.0, f32::INFINITY).is_empty());
    }

    #[test]
    fn test_resize() {
        let mut vp = Viewport::new(100, 100);
        vp.resize(1920.0, 1080.0);
        assert_eq!(vp, Viewport::new(1920, 1080));
        assert!((vp.w() - 1920.0).abs() < f32::EPSILON);
    }
}
