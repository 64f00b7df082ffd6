//! # Headless Host
//!
//! An in-process host with no display. The engine owns boxed clones of the
//! handles; the test (or soak binary) keeps its own clone and drives the
//! world from outside: resize the container, move the pointer, fire frames.
//!
//! All clones share one `Arc<Mutex<_>>`. The engine is single-threaded, so
//! the lock is never contended; it only makes shared mutation safe.

use std::sync::Arc;

use driftfield_core::Rgb;
use driftfield_rendering::{Canvas, DrawCommand, LinearGradient, RecordingCanvas, Rect};
use parking_lot::Mutex;

use super::{
    Container, ContentBox, Delivery, EventSink, EventSource, EventTopic, FrameHandle, FrameScheduler, HostEvent,
    HostHandles, ListenerId,
};
use crate::driver::AnimationLoop;
use crate::error::HostError;

// ============================================================================
// SHARED CANVAS
// ============================================================================

/// A [`RecordingCanvas`] shared between the engine and an observer.
#[derive(Debug, Clone, Default)]
pub struct SharedCanvas {
    inner: Arc<Mutex<RecordingCanvas>>,
}

impl SharedCanvas {
    /// Wraps a recording canvas.
    #[must_use]
    pub fn new(canvas: RecordingCanvas) -> Self {
        Self {
            inner: Arc::new(Mutex::new(canvas)),
        }
    }

    /// Runs `f` against the recorded commands.
    pub fn inspect<R>(&self, f: impl FnOnce(&RecordingCanvas) -> R) -> R {
        f(&self.inner.lock())
    }

    /// Takes every recorded command.
    pub fn take(&self) -> Vec<DrawCommand> {
        self.inner.lock().take()
    }
}

impl Canvas for SharedCanvas {
    fn clear(&mut self, width: f32, height: f32) {
        self.inner.lock().clear(width, height);
    }

    fn save(&mut self) {
        self.inner.lock().save();
    }

    fn restore(&mut self) {
        self.inner.lock().restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.inner.lock().translate(x, y);
    }

    fn rotate(&mut self, radians: f32) {
        self.inner.lock().rotate(radians);
    }

    fn set_global_alpha(&mut self, alpha: f32) {
        self.inner.lock().set_global_alpha(alpha);
    }

    fn set_line_width(&mut self, width: f32) {
        self.inner.lock().set_line_width(width);
    }

    fn set_stroke_color(&mut self, color: Rgb) {
        self.inner.lock().set_stroke_color(color);
    }

    fn set_fill_color(&mut self, color: Rgb) {
        self.inner.lock().set_fill_color(color);
    }

    fn begin_path(&mut self) {
        self.inner.lock().begin_path();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.inner.lock().move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.inner.lock().line_to(x, y);
    }

    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) {
        self.inner.lock().arc(x, y, radius, start, end);
    }

    fn close_path(&mut self) {
        self.inner.lock().close_path();
    }

    fn stroke(&mut self) {
        self.inner.lock().stroke();
    }

    fn fill(&mut self) {
        self.inner.lock().fill();
    }

    fn stroke_rect(&mut self, rect: Rect) {
        self.inner.lock().stroke_rect(rect);
    }

    fn fill_rect_gradient(&mut self, rect: Rect, gradient: &LinearGradient<'_>) {
        self.inner.lock().fill_rect_gradient(rect, gradient);
    }
}

// ============================================================================
// HOST STATE
// ============================================================================

#[derive(Debug)]
struct Listener {
    id: ListenerId,
    topic: EventTopic,
    sink: EventSink,
}

#[derive(Debug, Default)]
struct HostState {
    content_box: Option<ContentBox>,
    pending: Option<FrameHandle>,
    next_frame: u64,
    frames_requested: u64,
    frames_cancelled: u64,
    listeners: Vec<Listener>,
    next_listener: u64,
    refuse_listeners: bool,
    moves_coalesced: u64,
}

impl HostState {
    fn dispatch(&mut self, event: HostEvent) {
        let topic = event.topic();
        for listener in self.listeners.iter().filter(|l| l.topic == topic) {
            match listener.sink.send(event) {
                Delivery::Queued | Delivery::Latched => {}
                Delivery::Overflowed => {
                    self.moves_coalesced += 1;
                    tracing::trace!(?topic, "move channel full, keeping latest position");
                }
                Delivery::Closed => {
                    tracing::trace!(?topic, "listener queue closed");
                }
            }
        }
    }
}

// ============================================================================
// HEADLESS HOST
// ============================================================================

/// In-process host with a recording canvas.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    state: Arc<Mutex<HostState>>,
    canvas: SharedCanvas,
}

impl HeadlessHost {
    /// Creates an attached host whose canvas keeps only the latest frame.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_canvas(width, height, RecordingCanvas::frame_scoped())
    }

    /// Creates an attached host drawing into `canvas`.
    #[must_use]
    pub fn with_canvas(width: f32, height: f32, canvas: RecordingCanvas) -> Self {
        let state = HostState {
            content_box: Some(ContentBox {
                width,
                height,
                origin_x: 0.0,
                origin_y: 0.0,
            }),
            ..HostState::default()
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            canvas: SharedCanvas::new(canvas),
        }
    }

    /// Boxed handles for an engine. May be called more than once.
    #[must_use]
    pub fn handles(&self) -> HostHandles {
        HostHandles {
            container: Box::new(self.clone()),
            scheduler: Box::new(self.clone()),
            events: Box::new(self.clone()),
            canvas: Box::new(self.canvas.clone()),
        }
    }

    /// The shared recording canvas.
    #[must_use]
    pub fn canvas(&self) -> &SharedCanvas {
        &self.canvas
    }

    // ------------------------------------------------------------------
    // Driving the world
    // ------------------------------------------------------------------

    /// Resizes the container and notifies resize listeners.
    /// Ignored while detached.
    pub fn resize(&self, width: f32, height: f32) {
        let mut state = self.state.lock();
        let Some(content_box) = state.content_box.as_mut() else {
            return;
        };
        content_box.width = width;
        content_box.height = height;
        state.dispatch(HostEvent::Resize);
    }

    /// Moves the container's screen-space origin.
    pub fn move_origin(&self, origin_x: f32, origin_y: f32) {
        if let Some(content_box) = self.state.lock().content_box.as_mut() {
            content_box.origin_x = origin_x;
            content_box.origin_y = origin_y;
        }
    }

    /// Delivers a pointer move in global coordinates.
    pub fn pointer_move(&self, x: f32, y: f32) {
        self.state.lock().dispatch(HostEvent::PointerMove { x, y });
    }

    /// Delivers a pointer leave.
    pub fn pointer_leave(&self) {
        self.state.lock().dispatch(HostEvent::PointerLeave);
    }

    /// Detaches the container. Frames that fire afterwards see no content box.
    pub fn detach(&self) {
        self.state.lock().content_box = None;
    }

    /// Makes subsequent listener registrations fail.
    pub fn refuse_listeners(&self, refuse: bool) {
        self.state.lock().refuse_listeners = refuse;
    }

    /// Takes the pending frame, as if the display refreshed.
    pub fn fire_frame(&self) -> Option<FrameHandle> {
        self.state.lock().pending.take()
    }

    /// Fires up to `frames` frames into `engine`. Returns how many fired.
    ///
    /// Stops early when the engine leaves nothing scheduled.
    pub fn pump(&self, engine: &mut AnimationLoop, frames: usize) -> usize {
        let mut fired = 0;
        while fired < frames {
            let Some(handle) = self.fire_frame() else {
                break;
            };
            engine.on_frame(handle);
            fired += 1;
        }
        fired
    }

    // ------------------------------------------------------------------
    // Observation
    // ------------------------------------------------------------------

    /// The frame currently scheduled, if any.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.state.lock().pending
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.state.lock().listeners.len()
    }

    /// Total frames requested.
    #[must_use]
    pub fn frames_requested(&self) -> u64 {
        self.state.lock().frames_requested
    }

    /// Total frames cancelled while pending.
    #[must_use]
    pub fn frames_cancelled(&self) -> u64 {
        self.state.lock().frames_cancelled
    }

    /// Pointer moves that found a listener's channel full and were folded
    /// into its latest-value slot.
    #[must_use]
    pub fn moves_coalesced(&self) -> u64 {
        self.state.lock().moves_coalesced
    }
}

impl Container for HeadlessHost {
    fn content_box(&self) -> Option<ContentBox> {
        self.state.lock().content_box
    }
}

impl FrameScheduler for HeadlessHost {
    fn request_frame(&mut self) -> FrameHandle {
        let mut state = self.state.lock();
        state.next_frame += 1;
        state.frames_requested += 1;
        let handle = FrameHandle(state.next_frame);
        state.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let mut state = self.state.lock();
        if state.pending == Some(handle) {
            state.pending = None;
            state.frames_cancelled += 1;
        }
    }
}

impl EventSource for HeadlessHost {
    fn subscribe(&mut self, topic: EventTopic, sink: EventSink) -> Result<ListenerId, HostError> {
        let mut state = self.state.lock();
        if state.refuse_listeners {
            return Err(HostError::Refused(format!("{topic:?} listeners disabled")));
        }
        if state.content_box.is_none() {
            return Err(HostError::Detached);
        }
        state.next_listener += 1;
        let id = ListenerId(state.next_listener);
        state.listeners.push(Listener { id, topic, sink });
        Ok(id)
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.state.lock().listeners.retain(|l| l.id != id);
    }
}
