//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::{EventKind, SimulationEvent};

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &SimulationEvent);

    /// Called when the simulation ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Event buffer shared between a [`VecSink`] and its owner.
pub type SharedEvents = Arc<Mutex<Vec<SimulationEvent>>>;

/// A sink that collects events into a shared `Vec` for tests and HUDs.
///
/// Keep the handle from [`VecSink::events`] before boxing the sink
/// into the bus.
pub struct VecSink {
    events: SharedEvents,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns a handle to the collected events.
    pub fn events(&self) -> SharedEvents {
        Arc::clone(&self.events)
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &SimulationEvent) {
        // A poisoned buffer only means a reader panicked; keep collecting.
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        events.push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
///
/// Per-frame bookkeeping (tick begin/end, retirements) goes to `trace`,
/// everything a user would notice goes to `info`.
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &SimulationEvent) {
        match event.kind {
            EventKind::TickBegin { .. }
            | EventKind::TickEnd { .. }
            | EventKind::ParticleEmitted { .. }
            | EventKind::ParticleRetired { .. } => {
                tracing::trace!(tick = event.tick, event = ?event.kind, "simulation_event");
            }
            _ => {
                tracing::info!(tick = event.tick, event = ?event.kind, "simulation_event");
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
