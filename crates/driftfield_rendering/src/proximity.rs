//! # Proximity Graph
//!
//! Faint links between every pair of particles closer than
//! [`LINK_DISTANCE`]. Rebuilt from scratch each frame, drawn under the
//! particle shapes.
//!
//! Cost is **O(N²)** pair tests; default populations stay at or below ~600.
//! A spatial grid is the upgrade path if populations grow.
//!
//! Edges land in a reusable `Pod` buffer first, so a GPU host can upload
//! the whole frame's link list with one `bytemuck` cast.

use bytemuck::{Pod, Zeroable};
use driftfield_core::{Particle, Rgb};

use crate::canvas::Canvas;

/// Pairs closer than this are linked (pixels).
pub const LINK_DISTANCE: f32 = 110.0;
/// Alpha of a zero-length link before the global opacity.
pub const LINK_FAINTNESS: f32 = 0.07;
/// Link stroke width.
pub const LINK_LINE_WIDTH: f32 = 0.8;

/// One link between two particles.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Edge {
    /// First endpoint.
    pub from: [f32; 2],
    /// Second endpoint.
    pub to: [f32; 2],
    /// Stroke alpha, global opacity included.
    pub alpha: f32,
}

impl Edge {
    /// Size in bytes (GPU upload stride).
    pub const SIZE: usize = std::mem::size_of::<Self>();
}

/// Link alpha for a pair at distance `dist`, or `None` when out of range.
#[inline]
#[must_use]
pub fn link_alpha(dist: f32, opacity: f32) -> Option<f32> {
    if dist < LINK_DISTANCE {
        Some(((LINK_DISTANCE - dist) / LINK_DISTANCE) * LINK_FAINTNESS * opacity)
    } else {
        None
    }
}

/// Per-frame edge set. Keep one per engine instance; the buffer is reused.
#[derive(Debug, Default)]
pub struct ProximityGraph {
    edges: Vec<Edge>,
}

impl ProximityGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes links for the current particle positions.
    ///
    /// Returns the number of links found.
    pub fn rebuild(&mut self, particles: &[Particle], opacity: f32) -> usize {
        self.edges.clear();
        let max_sq = LINK_DISTANCE * LINK_DISTANCE;

        for (i, a) in particles.iter().enumerate() {
            for b in &particles[i + 1..] {
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let dist_sq = dx * dx + dy * dy;
                if dist_sq >= max_sq {
                    continue;
                }
                if let Some(alpha) = link_alpha(dist_sq.sqrt(), opacity) {
                    self.edges.push(Edge {
                        from: [a.x, a.y],
                        to: [b.x, b.y],
                        alpha,
                    });
                }
            }
        }

        self.edges.len()
    }

    /// Links from the last rebuild.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Links from the last rebuild as raw bytes.
    #[must_use]
    pub fn edges_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.edges)
    }

    /// Strokes every link.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, color: Rgb) {
        for edge in &self.edges {
            canvas.save();
            canvas.set_global_alpha(edge.alpha);
            canvas.set_stroke_color(color);
            canvas.set_line_width(LINK_LINE_WIDTH);
            canvas.begin_path();
            canvas.move_to(edge.from[0], edge.from[1]);
            canvas.line_to(edge.to[0], edge.to[1]);
            canvas.stroke();
            canvas.restore();
        }
    }
}
