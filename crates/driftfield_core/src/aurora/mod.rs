//! # Wave Band Compositor
//!
//! Layered harmonic curtains. The compositor holds an ordered, immutable
//! list of bands; the only thing that changes between frames is the tick
//! passed in by the loop driver, so every frame is recomputed from scratch.
//!
//! Bands share no mutable state, so a host could sample them in parallel;
//! the engine samples them in list order on its single frame thread.

mod band;
mod presets;

pub use band::{Band, BandColumn, BandColumns, ColorStop, Harmonic, COLUMN_STRIDE, SHIMMER_FREQ, SHIMMER_TIME};
pub use presets::default_bands;

/// Ordered set of bands, painted back to front.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveCompositor {
    bands: Vec<Band>,
}

impl WaveCompositor {
    /// Creates a compositor from bands in draw order.
    #[must_use]
    pub fn new(bands: Vec<Band>) -> Self {
        Self { bands }
    }

    /// Creates the built-in four-band aurora.
    #[must_use]
    pub fn with_default_bands() -> Self {
        Self::new(default_bands())
    }

    /// Bands in draw order.
    #[inline]
    #[must_use]
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Number of bands.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    /// True when there is nothing to draw.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}

impl Default for WaveCompositor {
    fn default() -> Self {
        Self::with_default_bands()
    }
}
