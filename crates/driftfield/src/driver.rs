//! # Animation Loop Driver
//!
//! Owns every piece of mutable engine state and advances it one tick per
//! display refresh.
//!
//! ```text
//!            mount()                  unmount()
//!   ┌──────┐ ───────> ┌─────────┐ ─────────────> ┌─────────┐
//!   │ Idle │          │ Running │                │ Stopped │
//!   └──────┘          └────┬────┘                └─────────┘
//!                          │  ▲
//!                on_frame()└──┘ (reschedules itself)
//!
//! Frame N:
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ 1. GUARD        stale handle or detached container → stop here      │
//! │ 2. EVENTS       drain queue: newest pointer change, pending resize  │
//! │ 3. CLEAR        whole surface                                       │
//! │ 4. BANDS        backdrop layer, if enabled                          │
//! │ 5. LINKS        proximity graph over pre-step positions             │
//! │ 6. PARTICLES    integrate, then draw shapes over the links          │
//! │ 7. TICK         advance, record stats, request next frame           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use driftfield_core::{Particle, ParticleField, PointerState, PointerTracker, Viewport, WaveCompositor};
use driftfield_rendering::{BandRenderer, ProximityGraph, ShapeRenderer};

use crate::config::{EngineConfig, ResolvedConfig};
use crate::error::HostError;
use crate::host::{
    event_channel, ContentBox, EventQueue, EventTopic, FrameHandle, HostHandles, ListenerId, PointerUpdate,
};
use crate::stats::{FrameStats, FrameStatsAccumulator};

/// Lifecycle state of an [`AnimationLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Constructed, not mounted.
    #[default]
    Idle,
    /// Mounted; frames are (or were) scheduled.
    Running,
    /// Unmounted. Terminal.
    Stopped,
}

/// The engine: one surface, one particle field, one set of bands.
pub struct AnimationLoop {
    config: ResolvedConfig,
    handles: HostHandles,
    state: LoopState,

    viewport: Viewport,
    pointer: PointerTracker,
    field: Option<ParticleField>,
    compositor: WaveCompositor,

    graph: ProximityGraph,
    shapes: ShapeRenderer,
    bands: BandRenderer,

    tick: u64,
    pending: Option<FrameHandle>,
    listeners: Vec<ListenerId>,
    events: Option<EventQueue>,
    parked: bool,
    degraded: Option<HostError>,

    last_frame: FrameStats,
    stats: FrameStatsAccumulator,
}

impl AnimationLoop {
    /// Creates an idle engine. `config` is validated and copied.
    #[must_use]
    pub fn new(config: &EngineConfig, handles: HostHandles) -> Self {
        let config = config.resolve();
        Self {
            shapes: ShapeRenderer::new(config.color, config.opacity),
            stats: FrameStatsAccumulator::with_budget(config.frame_budget),
            config,
            handles,
            state: LoopState::Idle,
            viewport: Viewport::default(),
            pointer: PointerTracker::new(),
            field: None,
            compositor: WaveCompositor::default(),
            graph: ProximityGraph::new(),
            bands: BandRenderer::new(),
            tick: 0,
            pending: None,
            listeners: Vec::new(),
            events: None,
            parked: false,
            degraded: None,
            last_frame: FrameStats::default(),
        }
    }

    /// Replaces the band set. Only effective before [`mount`](Self::mount).
    #[must_use]
    pub fn with_compositor(mut self, compositor: WaveCompositor) -> Self {
        if self.state == LoopState::Idle {
            self.compositor = compositor;
        }
        self
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Idle → Running: size the surface, spawn the field, register
    /// listeners and request the first frame.
    ///
    /// If listeners cannot be registered the engine draws one static frame
    /// and schedules nothing. Calling this in any state but Idle does nothing.
    pub fn mount(&mut self) {
        if self.state != LoopState::Idle {
            tracing::debug!(state = ?self.state, "mount ignored");
            return;
        }
        self.state = LoopState::Running;

        match self.handles.container.content_box() {
            Some(content_box) => self.apply_content_box(content_box),
            None => tracing::warn!("container detached at mount, surface is empty"),
        }

        if self.config.particles {
            self.field = Some(ParticleField::spawn(
                self.config.particle_count,
                &self.viewport,
                self.config.seed,
            ));
        }

        tracing::info!(
            width = self.viewport.width(),
            height = self.viewport.height(),
            particles = self.config.particle_count,
            seed = self.config.seed.value(),
            aurora = self.config.aurora,
            "engine mounted"
        );

        if let Err(err) = self.register_listeners() {
            tracing::warn!(%err, "listener registration failed, drawing a static frame");
            self.degraded = Some(err);
            self.render_frame(0);
            return;
        }

        self.pending = Some(self.handles.scheduler.request_frame());
    }

    /// Running → Stopped: cancel the pending frame, remove every listener
    /// and drop simulation state. Idempotent.
    pub fn unmount(&mut self) {
        if self.state != LoopState::Running {
            return;
        }

        if let Some(handle) = self.pending.take() {
            self.handles.scheduler.cancel_frame(handle);
        }
        for id in self.listeners.drain(..) {
            self.handles.events.unsubscribe(id);
        }
        self.events = None;
        self.field = None;
        self.state = LoopState::Stopped;

        tracing::info!(frames = self.stats.frames_recorded, tick = self.tick, "engine unmounted");
    }

    /// Frame callback from the scheduler.
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if self.state != LoopState::Running {
            tracing::debug!(?handle, state = ?self.state, "frame after teardown ignored");
            return;
        }
        if self.pending != Some(handle) {
            tracing::debug!(?handle, pending = ?self.pending, "stale frame ignored");
            return;
        }
        self.pending = None;

        let Some(content_box) = self.handles.container.content_box() else {
            if !self.parked {
                tracing::debug!(tick = self.tick, "container detached, loop parked");
            }
            self.parked = true;
            return;
        };
        self.pointer.set_origin(content_box.origin_x, content_box.origin_y);

        let events = self.drain_events(content_box);
        self.render_frame(events);

        self.pending = Some(self.handles.scheduler.request_frame());
    }

    // ========================================================================
    // FRAME
    // ========================================================================

    fn register_listeners(&mut self) -> Result<(), HostError> {
        let (sink, queue) = event_channel(self.config.event_capacity);

        for topic in EventTopic::ALL {
            match self.handles.events.subscribe(topic, sink.clone()) {
                Ok(id) => self.listeners.push(id),
                Err(err) => {
                    for id in self.listeners.drain(..) {
                        self.handles.events.unsubscribe(id);
                    }
                    return Err(err);
                }
            }
        }

        self.events = Some(queue);
        Ok(())
    }

    fn apply_content_box(&mut self, content_box: ContentBox) {
        self.viewport.resize(content_box.width, content_box.height);
        self.pointer.set_origin(content_box.origin_x, content_box.origin_y);
    }

    fn drain_events(&mut self, content_box: ContentBox) -> u32 {
        let Some(queue) = &self.events else {
            return 0;
        };
        let drained = queue.drain();

        match drained.pointer {
            Some(PointerUpdate::Move { x, y }) => self.pointer.on_pointer_move(x, y),
            Some(PointerUpdate::Leave) => self.pointer.on_pointer_leave(),
            None => {}
        }
        if drained.resized {
            // Existing particles and bands are not remapped.
            self.viewport.resize(content_box.width, content_box.height);
            tracing::debug!(
                width = self.viewport.width(),
                height = self.viewport.height(),
                "surface resized"
            );
        }
        drained.count
    }

    fn render_frame(&mut self, events_processed: u32) {
        let start = Instant::now();
        let canvas = &mut *self.handles.canvas;
        let mut stats = FrameStats {
            frame: self.tick,
            events_processed,
            ..FrameStats::default()
        };

        canvas.clear(self.viewport.w(), self.viewport.h());

        if self.config.aurora {
            let strips = self.bands.draw(canvas, &self.compositor, &self.viewport, self.tick);
            stats.strips = u32::try_from(strips).unwrap_or(u32::MAX);
        }

        if let Some(field) = self.field.as_mut() {
            let edges = self.graph.rebuild(field.particles(), self.config.opacity);
            self.graph.draw(canvas, self.config.color);
            stats.edges = u32::try_from(edges).unwrap_or(u32::MAX);

            let step_start = Instant::now();
            let report = field.step(&self.viewport, self.pointer.state());
            stats.step_us = elapsed_us(step_start);
            stats.respawned = report.respawned;

            self.shapes.draw_all(canvas, field.particles());
            tracing::trace!(tick = self.tick, respawned = report.respawned, edges, "particles drawn");
        }

        stats.total_us = elapsed_us(start);
        stats.render_us = stats.total_us.saturating_sub(stats.step_us);

        if self.stats.record(stats) {
            tracing::warn!(
                tick = self.tick,
                frame_us = stats.total_us,
                budget_us = u64::try_from(self.config.frame_budget.as_micros()).unwrap_or(u64::MAX),
                "frame over budget"
            );
        }
        self.last_frame = stats;
        self.tick += 1;
    }

    // ========================================================================
    // DIAGNOSTICS
    // ========================================================================

    /// Lifecycle state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames rendered so far. The next frame renders this tick.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// True once a frame found the container detached.
    #[must_use]
    pub fn is_parked(&self) -> bool {
        self.parked
    }

    /// Why the engine fell back to a static frame, if it did.
    #[must_use]
    pub fn degraded(&self) -> Option<&HostError> {
        self.degraded.as_ref()
    }

    /// Frame currently requested from the scheduler.
    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Listeners currently registered.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Current surface size.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current pointer state in surface coordinates.
    #[must_use]
    pub fn pointer(&self) -> PointerState {
        self.pointer.state()
    }

    /// Live particles. Empty when the particle layer is off or unmounted.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        match &self.field {
            Some(field) => field.particles(),
            None => &[],
        }
    }

    /// Band set.
    #[must_use]
    pub fn compositor(&self) -> &WaveCompositor {
        &self.compositor
    }

    /// Configuration in effect.
    #[must_use]
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Stats of the most recent frame.
    #[must_use]
    pub fn last_frame(&self) -> FrameStats {
        self.last_frame
    }

    /// Running frame statistics.
    #[must_use]
    pub fn stats(&self) -> &FrameStatsAccumulator {
        &self.stats
    }
}

impl std::fmt::Debug for AnimationLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationLoop")
            .field("state", &self.state)
            .field("tick", &self.tick)
            .field("viewport", &self.viewport)
            .field("particles", &self.particles().len())
            .field("pending", &self.pending)
            .field("listeners", &self.listeners.len())
            .field("parked", &self.parked)
            .finish_non_exhaustive()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn elapsed_us(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_micros()).unwrap_or(u64::MAX)
}
