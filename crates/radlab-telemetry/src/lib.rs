//! # radlab-telemetry
//!
//! Event bus for simulation telemetry. The engine emits structured events
//! (emissions, detections, ionizations, decay steps) that are consumed
//! by pluggable sinks (tracing, in-memory buffers for tests and HUDs).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, RetireReason, SimulationEvent};
pub use sinks::{EventSink, SharedEvents, TracingSink, VecSink};
