//! # Host Collaborators
//!
//! Everything the engine needs from the page (or window, or test harness)
//! comes in through these handles. Nothing is looked up globally.
//!
//! ```text
//! ┌──────────────┐  content_box()   ┌─────────────────┐
//! │  Container   │─────────────────>│                 │
//! ├──────────────┤  request/cancel  │                 │
//! │  Scheduler   │<────────────────>│  AnimationLoop  │
//! ├──────────────┤  EventSink       │                 │
//! │ EventSource  │─────────────────>│                 │
//! ├──────────────┤  draw calls      │                 │
//! │   Canvas     │<─────────────────│                 │
//! └──────────────┘                  └─────────────────┘
//! ```

pub mod headless;
pub mod sink;

use driftfield_rendering::Canvas;

use crate::error::HostError;

pub use headless::{HeadlessHost, SharedCanvas};
pub use sink::{event_channel, Delivery, Drained, EventQueue, EventSink, PointerUpdate};

/// The container's content box in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentBox {
    /// Content width in pixels.
    pub width: f32,
    /// Content height in pixels.
    pub height: f32,
    /// Screen-space x of the top-left corner.
    pub origin_x: f32,
    /// Screen-space y of the top-left corner.
    pub origin_y: f32,
}

/// Opaque token for one scheduled frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Opaque token for one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Kinds of host events a listener can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTopic {
    /// Pointer moved over the surface.
    PointerMove,
    /// Pointer left the surface.
    PointerLeave,
    /// Container size changed.
    Resize,
}

impl EventTopic {
    /// Every topic, in registration order.
    pub const ALL: [Self; 3] = [Self::Resize, Self::PointerMove, Self::PointerLeave];
}

/// An event delivered from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// Pointer position in global (screen) coordinates.
    PointerMove {
        /// Global x.
        x: f32,
        /// Global y.
        y: f32,
    },
    /// Pointer left the surface.
    PointerLeave,
    /// Container resized; re-read the content box.
    Resize,
}

impl HostEvent {
    /// The topic this event is delivered under.
    #[must_use]
    pub const fn topic(&self) -> EventTopic {
        match self {
            Self::PointerMove { .. } => EventTopic::PointerMove,
            Self::PointerLeave => EventTopic::PointerLeave,
            Self::Resize => EventTopic::Resize,
        }
    }
}

/// The element the surface fills.
pub trait Container {
    /// Current content box, or `None` once the container is detached.
    fn content_box(&self) -> Option<ContentBox>;
}

/// Display-refresh scheduling.
pub trait FrameScheduler {
    /// Requests one callback at the next refresh.
    fn request_frame(&mut self) -> FrameHandle;
    /// Cancels a requested callback. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Pointer and resize event delivery.
pub trait EventSource {
    /// Registers a listener that forwards `topic` events into `sink`.
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] when the host cannot register listeners,
    /// for example because the container is not attached yet.
    fn subscribe(&mut self, topic: EventTopic, sink: EventSink) -> Result<ListenerId, HostError>;
    /// Removes a listener. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: ListenerId);
}

/// All host services one engine instance uses.
pub struct HostHandles {
    /// Surface container.
    pub container: Box<dyn Container>,
    /// Frame scheduler.
    pub scheduler: Box<dyn FrameScheduler>,
    /// Event source.
    pub events: Box<dyn EventSource>,
    /// Drawing surface, owned exclusively by the engine.
    pub canvas: Box<dyn Canvas>,
}

impl std::fmt::Debug for HostHandles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostHandles")
            .field("content_box", &self.container.content_box())
            .finish_non_exhaustive()
    }
}
