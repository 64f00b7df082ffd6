//! # Particle Field
//!
//! Fixed-size particle arena. The population is allocated once at spawn;
//! after that, a particle leaving through the top is redrawn in the same
//! slot, so a tick never allocates or frees.
//!
//! ```text
//! spawn(N) ──► [p0][p1][p2] ... [pN-1]   (contiguous, never resized)
//!                    │
//!   step():  integrate ─► wrap x ─► y < -30 ? respawn in place
//! ```

use rand_chacha::ChaCha8Rng;

use super::particle::{Particle, SpawnEntry};
use crate::pointer::PointerState;
use crate::seed::FieldSeed;
use crate::viewport::Viewport;

/// Outcome of one field tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Slots recycled this tick.
    pub respawned: u32,
}

/// The particle population of one engine instance.
pub struct ParticleField {
    /// The arena. Length fixed for the field's lifetime.
    particles: Box<[Particle]>,
    /// Random stream for spawns.
    rng: ChaCha8Rng,
    /// Seed the stream was built from.
    seed: FieldSeed,
}

impl ParticleField {
    /// Spawns `count` particles scattered over the viewport.
    #[must_use]
    pub fn spawn(count: usize, viewport: &Viewport, seed: FieldSeed) -> Self {
        let mut rng = seed.rng();
        let particles: Vec<Particle> = (0..count)
            .map(|_| Particle::spawn(&mut rng, viewport, SpawnEntry::Scattered))
            .collect();

        Self {
            particles: particles.into_boxed_slice(),
            rng,
            seed,
        }
    }

    /// Advances every particle by one tick, recycling those that exited.
    ///
    /// This is **O(N)** with **zero heap allocations**.
    pub fn step(&mut self, viewport: &Viewport, pointer: PointerState) -> StepReport {
        let mut report = StepReport::default();

        for particle in self.particles.iter_mut() {
            if particle.step(viewport, pointer) {
                particle.respawn(&mut self.rng, viewport);
                report.respawned += 1;
            }
        }

        report
    }

    /// The population, in slot order.
    #[inline]
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable access to the population (pinning particles for tools and
    /// tests). The slice cannot be resized.
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Population size.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// True for an empty population.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The seed this field was spawned with.
    #[must_use]
    pub const fn seed(&self) -> FieldSeed {
        self.seed
    }
}

impl std::fmt::Debug for ParticleField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleField")
            .field("len", &self.particles.len())
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}
