//! # DRIFTFIELD
//!
//! Generative background engine: a drifting particle field linked by faint
//! proximity lines, over optional layered wave bands.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          DRIFTFIELD                                  │
//! ├─────────────────────────────────────────────────────────────────────┤
//! │                                                                      │
//! │  ┌─────────────────┐   state    ┌─────────────────┐                  │
//! │  │ driftfield_core │──────────>│ driftfield_      │                  │
//! │  │  • Particles    │           │   rendering      │                  │
//! │  │  • Wave bands   │           │  • Links/Shapes  │                  │
//! │  │  • Pointer      │           │  • Band strips   │                  │
//! │  └────────┬────────┘           └────────┬─────────┘                  │
//! │           │                             │                            │
//! │           │      ┌──────────────────┐   │                            │
//! │           └─────>│  AnimationLoop   │<──┘                            │
//! │                  │  (this crate)    │<──── HostHandles (injected)    │
//! │                  └──────────────────┘                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use driftfield::{AnimationLoop, EngineConfig, HeadlessHost};
//!
//! let host = HeadlessHost::new(800.0, 600.0);
//! let config = EngineConfig { seed: Some(1), ..EngineConfig::default() };
//! let mut engine = AnimationLoop::new(&config, host.handles());
//!
//! engine.mount();
//! host.pump(&mut engine, 3);
//! assert_eq!(engine.tick(), 3);
//!
//! engine.unmount();
//! assert_eq!(host.listener_count(), 0);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod driver;
pub mod error;
pub mod host;
pub mod stats;

// Re-export the layers
pub use driftfield_core as core;
pub use driftfield_rendering as rendering;

pub use config::{EngineConfig, ResolvedConfig};
pub use driver::{AnimationLoop, LoopState};
pub use error::{EngineError, EngineResult, HostError};
pub use host::{
    event_channel, Container, ContentBox, Delivery, EventQueue, EventSink, EventSource, EventTopic, FrameHandle,
    FrameScheduler, HeadlessHost, HostEvent, HostHandles, ListenerId, SharedCanvas,
};
pub use stats::{FrameStats, FrameStatsAccumulator, TARGET_FRAME_TIME};
