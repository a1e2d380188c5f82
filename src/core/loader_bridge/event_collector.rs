//=========================================================================
// Loader Event Collector
//=========================================================================
//
// Drains loader completion events with a per-tick bound and detects
// loader shutdown.
//
// Architecture:
//   Receiver<LoaderEvent> → collect_tick() → pending → TickControl
//
// Bounded draining keeps one tick from starving the caller when the
// loader floods the channel; leftovers are picked up next tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::LoaderEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    /// The loader dropped its sender; no further events will arrive.
    Exit,
}

//=== LoaderEventCollector ================================================

/// Collects loader events without blocking.
pub(crate) struct LoaderEventCollector {
    receiver: Receiver<LoaderEvent>,
    pending: Vec<LoaderEvent>,
    max_events_per_tick: usize,
}

impl LoaderEventCollector {
    pub(crate) fn new(receiver: Receiver<LoaderEvent>, max_events_per_tick: usize) -> Self {
        Self {
            receiver,
            pending: Vec::with_capacity(max_events_per_tick.min(16)),
            max_events_per_tick,
        }
    }

    /// Collects pending events, at most `max_events_per_tick` of them.
    ///
    /// Events received before a disconnect is observed are kept, so the
    /// caller should still dispatch `take_events()` on `Exit`.
    pub(crate) fn collect_tick(&mut self) -> TickControl {
        self.pending.clear();

        while self.pending.len() < self.max_events_per_tick {
            match self.receiver.try_recv() {
                Ok(event) => self.pending.push(event),
                Err(TryRecvError::Empty) => return TickControl::Continue,
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
            }
        }

        if !self.receiver.is_empty() {
            warn!(
                target: "scene::loader",
                "Loader event backlog: drained {} events this tick, {} still queued",
                self.pending.len(),
                self.receiver.len()
            );
        }

        TickControl::Continue
    }

    /// Takes ownership of collected events, leaving an empty vec.
    pub(crate) fn take_events(&mut self) -> Vec<LoaderEvent> {
        std::mem::take(&mut self.pending)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
