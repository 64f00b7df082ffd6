//! A single drifting particle.
//!
//! Forces are stylized, not unit-correct: one tick is one frame, velocities
//! are pixels per tick.

use std::f32::consts::TAU;

use rand::Rng;

use super::shape::ParticleShape;
use crate::pointer::PointerState;
use crate::viewport::Viewport;

// ============================================================================
// TUNING
// ============================================================================

/// Horizontal wobble force scale.
pub const WOBBLE_FORCE: f32 = 0.008;
/// Per-tick horizontal velocity damping.
pub const HORIZONTAL_DAMPING: f32 = 0.995;
/// Pointer repulsion radius (pixels).
pub const REPULSION_RADIUS: f32 = 120.0;
/// Horizontal repulsion scale.
pub const REPULSION_X: f32 = 0.4;
/// Vertical repulsion scale.
pub const REPULSION_Y: f32 = 0.2;
/// Size breathing depth as a fraction of base size.
pub const PULSE_DEPTH: f32 = 0.18;
/// Off-screen margin before a particle wraps horizontally.
pub const WRAP_MARGIN: f32 = 20.0;
/// A particle above this y is recycled.
pub const EXIT_Y: f32 = -30.0;
/// Respawned particles enter this far below the bottom edge.
pub const REENTRY_OFFSET: f32 = 20.0;

/// How a particle enters the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEntry {
    /// Anywhere over the surface height (initial population).
    Scattered,
    /// Just below the bottom edge (recycled slots).
    FromBelow,
}

/// One particle. Owned by the [`ParticleField`](super::ParticleField) arena.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// X position (pixels).
    pub x: f32,
    /// Y position (pixels, down is positive).
    pub y: f32,
    /// Horizontal velocity.
    pub vx: f32,
    /// Vertical velocity. Negative right after spawn.
    pub vy: f32,
    /// Size before breathing.
    pub base_size: f32,
    /// Current drawn size.
    pub size: f32,
    /// Opacity (0-1) before the global opacity.
    pub alpha: f32,
    /// Silhouette.
    pub shape: ParticleShape,
    /// Rotation (radians).
    pub rotation: f32,
    /// Rotation per tick.
    pub rotation_speed: f32,
    /// Wobble phase (radians).
    pub wobble: f32,
    /// Wobble phase per tick.
    pub wobble_speed: f32,
    /// Wobble amplitude.
    pub wobble_amp: f32,
    /// Breathing phase (radians).
    pub pulse: f32,
    /// Breathing phase per tick.
    pub pulse_speed: f32,
}

#[inline]
fn uniform<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

impl Particle {
    /// Draws a fresh particle from the spawn distribution.
    pub fn spawn<R: Rng>(rng: &mut R, viewport: &Viewport, entry: SpawnEntry) -> Self {
        let shape = ParticleShape::random(rng);
        let mut particle = Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: -0.18,
            base_size: 0.0,
            size: 0.0,
            alpha: 0.0,
            shape,
            rotation: 0.0,
            rotation_speed: 0.0,
            wobble: 0.0,
            wobble_speed: 0.0,
            wobble_amp: 0.0,
            pulse: 0.0,
            pulse_speed: 0.0,
        };
        particle.redraw(rng, viewport, entry);
        particle
    }

    /// Recycles this slot: every field is redrawn except the shape.
    pub fn respawn<R: Rng>(&mut self, rng: &mut R, viewport: &Viewport) {
        self.redraw(rng, viewport, SpawnEntry::FromBelow);
    }

    fn redraw<R: Rng>(&mut self, rng: &mut R, viewport: &Viewport, entry: SpawnEntry) {
        self.x = uniform(rng, 0.0, viewport.w());
        self.y = match entry {
            SpawnEntry::Scattered => uniform(rng, 0.0, viewport.h()),
            SpawnEntry::FromBelow => viewport.h() + REENTRY_OFFSET,
        };
        self.base_size = uniform(rng, 2.5, 11.5);
        self.size = self.base_size;
        self.vx = uniform(rng, -0.2, 0.2);
        self.vy = uniform(rng, -0.73, -0.18);
        self.alpha = uniform(rng, 0.08, 0.46);
        self.wobble = uniform(rng, 0.0, TAU);
        self.wobble_speed = uniform(rng, 0.008, 0.026);
        self.wobble_amp = uniform(rng, 0.25, 0.85);
        self.rotation = uniform(rng, 0.0, TAU);
        self.rotation_speed = uniform(rng, -0.0075, 0.0075);
        self.pulse = uniform(rng, 0.0, TAU);
        self.pulse_speed = uniform(rng, 0.02, 0.05);
    }

    /// Velocity change the pointer applies this tick.
    ///
    /// Zero when the pointer is absent, out of range, or exactly on the
    /// particle (no direction to push in).
    #[must_use]
    pub fn repulsion(&self, pointer: PointerState) -> [f32; 2] {
        let Some([px, py]) = pointer.position() else {
            return [0.0, 0.0];
        };

        let dx = self.x - px;
        let dy = self.y - py;
        let dist = (dx * dx + dy * dy).sqrt();
        if !(dist > 0.0 && dist < REPULSION_RADIUS) {
            return [0.0, 0.0];
        }

        let force = (REPULSION_RADIUS - dist) / REPULSION_RADIUS;
        [
            (dx / dist) * force * REPULSION_X,
            (dy / dist) * force * REPULSION_Y,
        ]
    }

    /// Advances one tick. Returns `true` if the particle left through the
    /// top and its slot must be respawned.
    pub fn step(&mut self, viewport: &Viewport, pointer: PointerState) -> bool {
        self.wobble += self.wobble_speed;
        self.pulse += self.pulse_speed;
        self.rotation += self.rotation_speed;

        self.vx += self.wobble.sin() * WOBBLE_FORCE;
        self.vx *= HORIZONTAL_DAMPING;

        let [fx, fy] = self.repulsion(pointer);
        self.vx += fx;
        self.vy += fy;

        self.x += self.vx;
        self.y += self.vy;

        self.size = self.base_size + self.pulse.sin() * (self.base_size * PULSE_DEPTH);

        let right = viewport.w() + WRAP_MARGIN;
        if self.x < -WRAP_MARGIN {
            self.x = right;
        } else if self.x > right {
            self.x = -WRAP_MARGIN;
        }

        self.y < EXIT_Y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldSeed;

    fn still_particle(x: f32, y: f32) -> Particle {
        let mut rng = FieldSeed::new(1).rng();
        let mut p = Particle::spawn(&mut rng, &Viewport::new(400, 400), SpawnEntry::Scattered);
        p.x = x;
        p.y = y;
        p
    }

    #[test]
    fn test_spawn_ranges() {
        let mut rng = FieldSeed::new(9).rng();
        let vp = Viewport::new(640, 480);
        for _ in 0..2000 {
            let p = Particle::spawn(&mut rng, &vp, SpawnEntry::Scattered);
            assert!(p.vy < 0.0);
            assert!((0.0..=640.0).contains(&p.x));
            assert!((0.0..=480.0).contains(&p.y));
            assert!((2.5..=11.5).contains(&p.base_size));
            assert!((-0.2..=0.2).contains(&p.vx));
            assert!((0.08..=0.46).contains(&p.alpha));
            assert!(ParticleShape::SPAWNABLE.contains(&p.shape));
        }
    }

    #[test]
    fn test_respawn_enters_below_and_keeps_shape() {
        let mut rng = FieldSeed::new(5).rng();
        let vp = Viewport::new(300, 200);
        let mut p = Particle::spawn(&mut rng, &vp, SpawnEntry::Scattered);
        p.shape = ParticleShape::Cross;
        p.respawn(&mut rng, &vp);
        assert!((p.y - 220.0).abs() < f32::EPSILON);
        assert!(p.vy < 0.0);
        assert_eq!(p.shape, ParticleShape::Cross);
    }

    #[test]
    fn test_repulsion_absent_is_zero() {
        let p = still_particle(-9999.0, -9999.0);
        assert_eq!(p.repulsion(PointerState::Absent), [0.0, 0.0]);
    }

    #[test]
    fn test_repulsion_zero_distance_is_zero() {
        let p = still_particle(50.0, 50.0);
        let force = p.repulsion(PointerState::At { x: 50.0, y: 50.0 });
        assert_eq!(force, [0.0, 0.0]);
    }

    #[test]
    fn test_repulsion_pushes_away() {
        let p = still_particle(110.0, 100.0);
        let [fx, fy] = p.repulsion(PointerState::At { x: 100.0, y: 100.0 });
        // d = 10, force = 110/120
        assert!((fx - (110.0 / 120.0) * REPULSION_X).abs() < 1e-6);
        assert!(fy.abs() < 1e-6);
    }

    #[test]
    fn test_repulsion_out_of_range() {
        let p = still_particle(300.0, 100.0);
        assert_eq!(p.repulsion(PointerState::At { x: 100.0, y: 100.0 }), [0.0, 0.0]);
    }

    #[test]
    fn test_wrap_left_lands_right() {
        let vp = Viewport::new(500, 500);
        let mut p = still_particle(-20.0, 250.0);
        p.vx = -1.0;
        p.wobble_speed = 0.0;
        p.wobble = 0.0;
        p.step(&vp, PointerState::Absent);
        assert!((p.x - 520.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_wrap_right_lands_left() {
        let vp = Viewport::new(500, 500);
        let mut p = still_particle(520.0, 250.0);
        p.vx = 1.0;
        p.wobble_speed = 0.0;
        p.wobble = 0.0;
        p.step(&vp, PointerState::Absent);
        assert!((p.x + 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_step_reports_exit() {
        let vp = Viewport::new(500, 500);
        let mut p = still_particle(100.0, -29.9);
        p.vy = -0.5;
        assert!(p.step(&vp, PointerState::Absent));
    }
}
