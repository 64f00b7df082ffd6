//! Seeds for the particle field's random stream.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed for a particle field. Same seed + same inputs = same field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSeed(u64);

impl FieldSeed {
    /// Seed used when the platform has no entropy source.
    pub const FALLBACK: Self = Self(0x0D21_F7F1_E1D5_EED5);

    /// Creates a seed from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Draws a seed from the OS (or the browser's crypto API).
    ///
    /// Falls back to [`Self::FALLBACK`] if no entropy is available.
    #[must_use]
    pub fn from_entropy() -> Self {
        getrandom::u64().map_or(Self::FALLBACK, Self)
    }

    /// Raw seed value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Builds the field's random stream.
    #[must_use]
    pub fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }
}

impl From<u64> for FieldSeed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
