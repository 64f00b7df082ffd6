//! # Particle Field Simulation
//!
//! Upward-drifting particles with wobble, breathing size, slow rotation and
//! pointer repulsion.
//!
//! - `ParticleField` - the fixed-size arena and per-tick driver
//! - `Particle` - one particle and its integration step
//! - `ParticleShape` - the closed set of silhouettes

mod particle;
mod shape;
mod simulator;

pub use particle::{
    Particle, SpawnEntry, EXIT_Y, HORIZONTAL_DAMPING, PULSE_DEPTH, REENTRY_OFFSET,
    REPULSION_RADIUS, REPULSION_X, REPULSION_Y, WOBBLE_FORCE, WRAP_MARGIN,
};
pub use shape::ParticleShape;
pub use simulator::{ParticleField, StepReport};
