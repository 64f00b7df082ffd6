//! # DRIFTFIELD Rendering
//!
//! Turns simulation state into immediate-mode 2D canvas calls.
//!
//! ## Layer Order
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ONE FRAME                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  clear → wave bands → proximity links → particle shapes     │
//! │            (backdrop)      (faint)          (on top)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//!
//! - Renderers read simulation state, they never mutate it
//! - Every per-element draw is bracketed by `save`/`restore`
//! - Scratch buffers live in the renderer and are reused across frames

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod bands;
pub mod canvas;
pub mod proximity;
pub mod recording;
pub mod shapes;

pub use bands::BandRenderer;
pub use canvas::{Canvas, LinearGradient, Rect};
pub use proximity::{link_alpha, Edge, ProximityGraph, LINK_DISTANCE, LINK_FAINTNESS, LINK_LINE_WIDTH};
pub use recording::{DrawCommand, RecordingCanvas};
pub use shapes::{ShapeRenderer, CIRCLE_FILL_RATIO, SHAPE_LINE_WIDTH};
