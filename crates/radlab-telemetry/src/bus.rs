//! Event bus: broadcast-style event dispatch with pluggable sinks.
//!
//! The bus uses `std::sync::mpsc` so producers only need `&self`.
//! Sinks are registered once and receive events on `flush()`.

use std::sync::mpsc;

use crate::events::SimulationEvent;
use crate::sinks::EventSink;

/// Broadcast event bus for simulation telemetry.
pub struct EventBus {
    sender: mpsc::Sender<SimulationEvent>,
    receiver: mpsc::Receiver<SimulationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    /// Disabled bus drops events silently.
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emit an event. If the bus is disabled, this is a no-op.
    pub fn emit(&self, event: SimulationEvent) {
        if !self.enabled {
            return;
        }
        // The receiver lives in the same struct, so send cannot fail.
        let _ = self.sender.send(event);
    }

    /// Flush all pending events to registered sinks.
    ///
    /// The engine calls this at the end of every tick.
    pub fn flush(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
        }
    }

    /// Calls `finalize` on every sink.
    pub fn finalize(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
