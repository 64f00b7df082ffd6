//! # Event Sink
//!
//! Delivery path from host listeners to the engine.
//!
//! ```text
//!   host listener                               engine, once per frame
//! ┌──────────────┐  PointerMove  ┌──────────┐
//! │              │──────────────>│ channel  │──┐
//! │  EventSink   │   (bounded)   └──────────┘  │   ┌────────────┐
//! │   (clone     │                             ├──>│ EventQueue │──> Drained
//! │  per topic)  │  Leave/Resize ┌──────────┐  │   └────────────┘
//! │              │──────────────>│  latest  │──┘
//! └──────────────┘  move overflow│  slot    │
//!                   ────────────>└──────────┘
//! ```
//!
//! Pointer and size are last-value state. Moves queue in the bounded
//! channel; a move that finds the channel full replaces the slot's
//! overflow move instead of being lost. Leave and resize never touch the
//! channel. Every delivery takes a sequence number so the drain can tell
//! whether the newest pointer event was a move or a leave.

use std::sync::Arc;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::Mutex;

use super::HostEvent;

/// What happened to one delivered event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Queued in the channel.
    Queued,
    /// Stored in the latest-value slot.
    Latched,
    /// Channel full; replaced the slot's overflow move.
    Overflowed,
    /// The engine side is gone.
    Closed,
}

/// Newest pointer change since the previous drain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerUpdate {
    /// Pointer at global coordinates.
    Move {
        /// Global x.
        x: f32,
        /// Global y.
        y: f32,
    },
    /// Pointer left the surface.
    Leave,
}

/// Everything one drain collected, already coalesced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Drained {
    /// Newest pointer change, if any arrived.
    pub pointer: Option<PointerUpdate>,
    /// At least one resize arrived.
    pub resized: bool,
    /// Events delivered since the previous drain, overflowed moves included.
    pub count: u32,
}

#[derive(Debug, Clone, Copy)]
struct PointerSample {
    seq: u64,
    x: f32,
    y: f32,
}

#[derive(Debug, Default)]
struct Latest {
    seq: u64,
    overflow: Option<PointerSample>,
    leave: Option<u64>,
    resized: bool,
    latched: u32,
    closed: bool,
}

/// Host-side end. Cheap to clone; every clone feeds the same queue.
#[derive(Debug, Clone)]
pub struct EventSink {
    moves: Sender<PointerSample>,
    latest: Arc<Mutex<Latest>>,
}

/// Engine-side end. Closes the sink when dropped.
#[derive(Debug)]
pub struct EventQueue {
    moves: Receiver<PointerSample>,
    latest: Arc<Mutex<Latest>>,
}

/// Creates a connected sink and queue holding up to `capacity` queued moves.
#[must_use]
pub fn event_channel(capacity: usize) -> (EventSink, EventQueue) {
    let (tx, rx) = bounded(capacity.max(1));
    let latest = Arc::new(Mutex::new(Latest::default()));
    (
        EventSink {
            moves: tx,
            latest: Arc::clone(&latest),
        },
        EventQueue { moves: rx, latest },
    )
}

impl EventSink {
    /// Delivers one event. Never blocks.
    #[must_use]
    pub fn send(&self, event: HostEvent) -> Delivery {
        let mut latest = self.latest.lock();
        if latest.closed {
            return Delivery::Closed;
        }
        latest.seq += 1;
        let seq = latest.seq;

        match event {
            HostEvent::PointerMove { x, y } => match self.moves.try_send(PointerSample { seq, x, y }) {
                Ok(()) => Delivery::Queued,
                Err(TrySendError::Full(sample)) => {
                    latest.overflow = Some(sample);
                    latest.latched = latest.latched.saturating_add(1);
                    Delivery::Overflowed
                }
                Err(TrySendError::Disconnected(_)) => Delivery::Closed,
            },
            HostEvent::PointerLeave => {
                latest.leave = Some(seq);
                latest.latched = latest.latched.saturating_add(1);
                Delivery::Latched
            }
            HostEvent::Resize => {
                latest.resized = true;
                latest.latched = latest.latched.saturating_add(1);
                Delivery::Latched
            }
        }
    }

    /// True once the engine side has been closed or dropped.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.latest.lock().closed
    }
}

impl EventQueue {
    /// Takes everything delivered since the previous drain.
    #[must_use]
    pub fn drain(&self) -> Drained {
        // Senders hold the slot lock across `try_send`, so holding it here
        // makes the channel and the slot one consistent snapshot.
        let mut latest = self.latest.lock();

        let mut count = 0u32;
        let mut newest_move: Option<PointerSample> = None;
        for sample in self.moves.try_iter() {
            count = count.saturating_add(1);
            newest_move = Some(sample);
        }
        if let Some(overflow) = latest.overflow.take() {
            if newest_move.map(|queued| queued.seq) < Some(overflow.seq) {
                newest_move = Some(overflow);
            }
        }

        let pointer = match (newest_move, latest.leave.take()) {
            (Some(sample), Some(leave)) if leave > sample.seq => Some(PointerUpdate::Leave),
            (Some(sample), _) => Some(PointerUpdate::Move {
                x: sample.x,
                y: sample.y,
            }),
            (None, Some(_)) => Some(PointerUpdate::Leave),
            (None, None) => None,
        };

        Drained {
            pointer,
            resized: std::mem::take(&mut latest.resized),
            count: count.saturating_add(std::mem::take(&mut latest.latched)),
        }
    }

    /// Stops accepting events. Later sends report [`Delivery::Closed`].
    pub fn close(&self) {
        let mut latest = self.latest.lock();
        latest.closed = true;
        latest.overflow = None;
        latest.leave = None;
        latest.resized = false;
        latest.latched = 0;
    }
}

impl Drop for EventQueue {
    fn drop(&mut self) {
        self.close();
    }
}
