//! Particle silhouettes.

use rand::Rng;

/// The closed set of particle silhouettes.
///
/// Only the first four are drawn by the spawner; triangle and cross are
/// available to hosts that pin shapes explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleShape {
    /// Filled disc with an outline.
    Circle,
    /// Outline-only circle.
    Ring,
    /// Outlined axis-aligned square (before rotation).
    Square,
    /// Outlined rhombus, narrower than tall.
    Diamond,
    /// Outlined triangle, apex up.
    Triangle,
    /// Plus sign.
    Cross,
}

impl ParticleShape {
    /// Every shape.
    pub const ALL: [Self; 6] = [
        Self::Circle,
        Self::Ring,
        Self::Square,
        Self::Diamond,
        Self::Triangle,
        Self::Cross,
    ];

    /// Shapes the spawner chooses from.
    pub const SPAWNABLE: [Self; 4] = [Self::Circle, Self::Ring, Self::Square, Self::Diamond];

    /// Picks a spawnable shape uniformly.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::SPAWNABLE[rng.gen_range(0..Self::SPAWNABLE.len())]
    }

    /// Lowercase name, for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Ring => "ring",
            Self::Square => "square",
            Self::Diamond => "diamond",
            Self::Triangle => "triangle",
            Self::Cross => "cross",
        }
    }
}
