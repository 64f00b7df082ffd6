//! The built-in aurora: four blue-green curtains and a warm undertone.

use super::band::{Band, ColorStop, Harmonic};
use crate::color::Rgba;

const MAIN_HARMONICS: [Harmonic; 3] = [
    Harmonic::new(0.09, 0.0018, 0.0555, 0.0),
    Harmonic::new(0.06, 0.003, 0.0875, 1.2),
    Harmonic::new(0.05, 0.0055, 0.1375, 2.5),
];

const MAIN_STOPS: [ColorStop; 6] = [
    ColorStop::new(0.0, Rgba::new(120, 220, 190, 0.0)),
    ColorStop::new(0.25, Rgba::new(80, 210, 180, 0.38)),
    ColorStop::new(0.45, Rgba::new(60, 190, 200, 0.55)),
    ColorStop::new(0.6, Rgba::new(100, 230, 160, 0.42)),
    ColorStop::new(0.8, Rgba::new(140, 215, 175, 0.18)),
    ColorStop::new(1.0, Rgba::new(120, 220, 190, 0.0)),
];

const HIGH_HARMONICS: [Harmonic; 3] = [
    Harmonic::new(0.07, 0.0022, 0.0218, 1.0),
    Harmonic::new(0.05, 0.004, 0.0328, 2.3),
    Harmonic::new(0.04, 0.007, 0.0845, 4.1),
];

const HIGH_STOPS: [ColorStop; 5] = [
    ColorStop::new(0.0, Rgba::new(60, 180, 220, 0.0)),
    ColorStop::new(0.2, Rgba::new(50, 170, 240, 0.28)),
    ColorStop::new(0.5, Rgba::new(80, 200, 230, 0.45)),
    ColorStop::new(0.75, Rgba::new(100, 215, 210, 0.22)),
    ColorStop::new(1.0, Rgba::new(60, 180, 220, 0.0)),
];

const LOW_HARMONICS: [Harmonic; 3] = [
    Harmonic::new(0.06, 0.0016, 0.000_25, 2.0),
    Harmonic::new(0.04, 0.0028, 0.0004, 0.5),
    Harmonic::new(0.035, 0.005, 0.0006, 3.3),
];

const LOW_STOPS: [ColorStop; 5] = [
    ColorStop::new(0.0, Rgba::new(100, 240, 170, 0.0)),
    ColorStop::new(0.3, Rgba::new(80, 230, 160, 0.30)),
    ColorStop::new(0.55, Rgba::new(60, 220, 185, 0.48)),
    ColorStop::new(0.8, Rgba::new(120, 235, 195, 0.20)),
    ColorStop::new(1.0, Rgba::new(100, 240, 170, 0.0)),
];

// Warm undertone
const UNDERTONE_HARMONICS: [Harmonic; 3] = [
    Harmonic::new(0.05, 0.0012, 0.000_15, 3.5),
    Harmonic::new(0.03, 0.002, 0.000_22, 1.8),
    Harmonic::new(0.025, 0.004, 0.000_38, 0.2),
];

const UNDERTONE_STOPS: [ColorStop; 4] = [
    ColorStop::new(0.0, Rgba::new(160, 230, 180, 0.0)),
    ColorStop::new(0.35, Rgba::new(130, 225, 200, 0.20)),
    ColorStop::new(0.6, Rgba::new(110, 240, 210, 0.32)),
    ColorStop::new(1.0, Rgba::new(160, 230, 180, 0.0)),
];

/// The four default bands, back to front.
#[must_use]
pub fn default_bands() -> Vec<Band> {
    vec![
        Band::new(0.42, MAIN_HARMONICS.to_vec(), 0.28, MAIN_STOPS.to_vec()),
        Band::new(0.35, HIGH_HARMONICS.to_vec(), 0.20, HIGH_STOPS.to_vec()),
        Band::new(0.52, LOW_HARMONICS.to_vec(), 0.22, LOW_STOPS.to_vec()),
        Band::new(0.47, UNDERTONE_HARMONICS.to_vec(), 0.16, UNDERTONE_STOPS.to_vec()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_band_table() {
        let bands = default_bands();
        assert_eq!(bands.len(), 4);
        assert!(bands.iter().all(|b| b.harmonics().len() == 3));
        assert_eq!(bands[0].stops().len(), 6);
        // Stops start and end fully transparent
        for band in &bands {
            assert!(band.stops().first().map_or(false, |s| s.color.a == 0.0));
            assert!(band.stops().last().map_or(false, |s| s.color.a == 0.0));
        }
    }
}
