//! Particle silhouettes.
//!
//! Each particle is drawn in its own transform: translate to the particle,
//! rotate by its angle, then trace the shape around the origin at the
//! particle's current (breathing) size.

use std::f32::consts::TAU;

use driftfield_core::{Particle, ParticleShape, Rgb};

use crate::canvas::{Canvas, Rect};

/// Outline width for every shape.
pub const SHAPE_LINE_WIDTH: f32 = 1.2;
/// Circle fill alpha relative to its outline.
pub const CIRCLE_FILL_RATIO: f32 = 0.25;

/// Draws particles in one color at one global opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeRenderer {
    color: Rgb,
    opacity: f32,
}

impl ShapeRenderer {
    /// Creates a renderer.
    #[must_use]
    pub const fn new(color: Rgb, opacity: f32) -> Self {
        Self { color, opacity }
    }

    /// Particle color.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Global opacity.
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Draws every particle in slot order.
    pub fn draw_all<C: Canvas + ?Sized>(&self, canvas: &mut C, particles: &[Particle]) {
        for particle in particles {
            self.draw(canvas, particle);
        }
    }

    /// Draws one particle.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, particle: &Particle) {
        let alpha = particle.alpha * self.opacity;
        let s = particle.size;

        canvas.save();
        canvas.set_global_alpha(alpha);
        canvas.set_stroke_color(self.color);
        canvas.set_fill_color(self.color);
        canvas.set_line_width(SHAPE_LINE_WIDTH);
        canvas.translate(particle.x, particle.y);
        canvas.rotate(particle.rotation);

        match particle.shape {
            ParticleShape::Circle => {
                canvas.begin_path();
                canvas.arc(0.0, 0.0, s, 0.0, TAU);
                canvas.set_global_alpha(alpha * CIRCLE_FILL_RATIO);
                canvas.fill();
                canvas.set_global_alpha(alpha);
                canvas.stroke();
            }
            ParticleShape::Ring => {
                canvas.begin_path();
                canvas.arc(0.0, 0.0, s, 0.0, TAU);
                canvas.stroke();
            }
            ParticleShape::Square => {
                canvas.stroke_rect(Rect::new(-s * 0.7, -s * 0.7, s * 1.4, s * 1.4));
            }
            ParticleShape::Diamond => {
                canvas.begin_path();
                canvas.move_to(0.0, -s);
                canvas.line_to(s * 0.65, 0.0);
                canvas.line_to(0.0, s);
                canvas.line_to(-s * 0.65, 0.0);
                canvas.close_path();
                canvas.stroke();
            }
            ParticleShape::Triangle => {
                canvas.begin_path();
                canvas.move_to(0.0, -s);
                canvas.line_to(s * 0.87, s * 0.5);
                canvas.line_to(-s * 0.87, s * 0.5);
                canvas.close_path();
                canvas.stroke();
            }
            ParticleShape::Cross => {
                canvas.begin_path();
                canvas.move_to(-s, 0.0);
                canvas.line_to(s, 0.0);
                canvas.move_to(0.0, -s);
                canvas.line_to(0.0, s);
                canvas.stroke();
            }
        }

        canvas.restore();
    }
}
