//! # DRIFTFIELD Core
//!
//! Simulation kernel for the generative background engine:
//! - A fixed-size particle field drifting upward, repelled by the pointer
//! - Layered harmonic wave bands ("aurora curtains")
//!
//! ## Architecture Rules
//!
//! 1. **No heap allocations per tick** - the particle arena is sized once at spawn
//! 2. **Slots are recycled** - a particle leaving the top is respawned in place
//! 3. **Time is the tick counter** - never the wall clock
//!
//! ## Example
//!
//! ```rust
//! use driftfield_core::{FieldSeed, ParticleField, PointerState, Viewport};
//!
//! let viewport = Viewport::new(800, 600);
//! let mut field = ParticleField::spawn(500, &viewport, FieldSeed::new(7));
//! field.step(&viewport, PointerState::Absent);
//! assert_eq!(field.len(), 500);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod aurora;
pub mod color;
pub mod field;
pub mod pointer;
pub mod seed;
pub mod viewport;

pub use aurora::{default_bands, Band, BandColumn, ColorStop, Harmonic, WaveCompositor};
pub use color::{ColorError, Rgb, Rgba};
pub use field::{Particle, ParticleField, ParticleShape, SpawnEntry, StepReport};
pub use pointer::{PointerState, PointerTracker};
pub use seed::FieldSeed;
pub use viewport::Viewport;
