//! Pointer tracking.
//!
//! Converts host pointer events (screen space) into surface-local
//! coordinates. When the pointer leaves the surface the state becomes
//! [`PointerState::Absent`], which the field treats as "no repulsion".

/// Where the pointer is, as seen by the particle field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    /// No pointer over the surface.
    #[default]
    Absent,
    /// Surface-local pointer position.
    At {
        /// X in surface pixels.
        x: f32,
        /// Y in surface pixels.
        y: f32,
    },
}

impl PointerState {
    /// Coordinates reported for an absent pointer: far outside any surface.
    pub const SENTINEL: [f32; 2] = [-9999.0, -9999.0];

    /// Returns the live position, or `None` when absent.
    #[inline]
    #[must_use]
    pub const fn position(self) -> Option<[f32; 2]> {
        match self {
            Self::Absent => None,
            Self::At { x, y } => Some([x, y]),
        }
    }

    /// Returns the coordinate pair, using [`Self::SENTINEL`] when absent.
    #[inline]
    #[must_use]
    pub const fn coords(self) -> [f32; 2] {
        match self {
            Self::Absent => Self::SENTINEL,
            Self::At { x, y } => [x, y],
        }
    }

    /// True when no pointer is over the surface.
    #[inline]
    #[must_use]
    pub const fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Tracks the pointer relative to the surface's screen-space origin.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// Screen-space top-left of the surface.
    origin: [f32; 2],
    /// Current state.
    state: PointerState,
}

impl PointerTracker {
    /// Creates a tracker with the pointer absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the surface's screen-space origin (on mount and resize).
    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.origin = [x, y];
    }

    /// Records a pointer move given in screen coordinates.
    pub fn on_pointer_move(&mut self, global_x: f32, global_y: f32) {
        self.state = PointerState::At {
            x: global_x - self.origin[0],
            y: global_y - self.origin[1],
        };
    }

    /// Records the pointer leaving the surface.
    pub fn on_pointer_leave(&mut self) {
        self.state = PointerState::Absent;
    }

    /// Returns the current state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> PointerState {
        self.state
    }
}
