//! # Engine Configuration
//!
//! Copied into the engine at construction and never mutated afterwards.
//! Changing any value means unmounting and building a new engine.
//!
//! ```toml
//! particle_count = 500
//! color = "#2d7a45"
//! opacity = 0.55
//! aurora = false
//! ```
//!
//! Invalid values never fail the engine; [`EngineConfig::resolve`] swaps
//! them for the defaults and logs a warning.

use std::path::Path;
use std::time::Duration;

use driftfield_core::{FieldSeed, Rgb};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default particle population.
pub const DEFAULT_PARTICLE_COUNT: usize = 500;
/// Default particle and link color.
pub const DEFAULT_COLOR: &str = "#1a6b3a";
/// Default global opacity.
pub const DEFAULT_OPACITY: f32 = 0.55;
/// Default number of pointer moves queued between frames.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;
/// Default slow-frame threshold (60 FPS).
pub const DEFAULT_FRAME_BUDGET_US: u64 = 16_666;

/// Engine configuration as written by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Particle population. Must be positive.
    pub particle_count: usize,
    /// Particle and link color (`#rgb`, `#rrggbb` or `rgb(r, g, b)`).
    pub color: String,
    /// Global opacity in `[0, 1]`.
    pub opacity: f32,
    /// RNG seed. Entropy when absent.
    pub seed: Option<u64>,
    /// Draw the particle layer.
    pub particles: bool,
    /// Draw the wave band layer.
    pub aurora: bool,
    /// Pointer moves queued between frames before they start coalescing.
    pub event_capacity: usize,
    /// Frames slower than this are counted and logged (microseconds).
    pub frame_budget_us: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            color: DEFAULT_COLOR.to_owned(),
            opacity: DEFAULT_OPACITY,
            seed: None,
            particles: true,
            aurora: true,
            event_capacity: DEFAULT_EVENT_CAPACITY,
            frame_budget_us: DEFAULT_FRAME_BUDGET_US,
        }
    }
}

/// Validated configuration the engine actually runs with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedConfig {
    /// Particle population (> 0).
    pub particle_count: usize,
    /// Parsed color.
    pub color: Rgb,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Concrete seed.
    pub seed: FieldSeed,
    /// Particle layer on.
    pub particles: bool,
    /// Band layer on.
    pub aurora: bool,
    /// Pointer moves queued between frames (> 0).
    pub event_capacity: usize,
    /// Slow-frame threshold.
    pub frame_budget: Duration,
}

impl EngineConfig {
    /// Parses configuration from TOML text. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if the text is not valid TOML or a
    /// key has the wrong type.
    pub fn from_toml_str(text: &str) -> EngineResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Io`] if the file cannot be read, or
    /// [`EngineError::Config`] if it does not parse.
    pub fn from_toml(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Validates every field, substituting defaults for invalid values.
    #[must_use]
    pub fn resolve(&self) -> ResolvedConfig {
        let particle_count = if self.particle_count == 0 {
            tracing::warn!(default = DEFAULT_PARTICLE_COUNT, "particle_count must be positive, using default");
            DEFAULT_PARTICLE_COUNT
        } else {
            self.particle_count
        };

        let color = Rgb::parse(&self.color).unwrap_or_else(|err| {
            tracing::warn!(color = %self.color, %err, "unusable color, using default");
            Rgb::FOREST
        });

        let opacity = if (0.0..=1.0).contains(&self.opacity) {
            self.opacity
        } else {
            tracing::warn!(opacity = self.opacity, "opacity outside [0, 1], using default");
            DEFAULT_OPACITY
        };

        let seed = self.seed.map_or_else(FieldSeed::from_entropy, FieldSeed::new);

        let event_capacity = if self.event_capacity == 0 {
            tracing::warn!(default = DEFAULT_EVENT_CAPACITY, "event_capacity must be positive, using default");
            DEFAULT_EVENT_CAPACITY
        } else {
            self.event_capacity
        };

        let frame_budget_us = if self.frame_budget_us == 0 {
            tracing::warn!(default = DEFAULT_FRAME_BUDGET_US, "frame_budget_us must be positive, using default");
            DEFAULT_FRAME_BUDGET_US
        } else {
            self.frame_budget_us
        };

        if !self.particles && !self.aurora {
            tracing::warn!("both layers disabled, frames will only clear the surface");
        }

        ResolvedConfig {
            particle_count,
            color,
            opacity,
            seed,
            particles: self.particles,
            aurora: self.aurora,
            event_capacity,
            frame_budget: Duration::from_micros(frame_budget_us),
        }
    }
}
