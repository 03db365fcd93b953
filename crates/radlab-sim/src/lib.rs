//! # radlab-sim
//!
//! The simulation engine. One [`Simulation`] owns every piece of lab
//! state (configuration, particle pool, score, projector, clock, RNG);
//! nothing lives in statics, so independent instances can run side by side.
//!
//! Each [`Simulation::tick`] reads the [`SimulationClock`] once, runs the
//! transport frame, then advances the decay projector with the same reading.

pub mod clock;
pub mod engine;

pub use clock::{ClockReading, SimulationClock};
pub use engine::{DetectionCue, Simulation, TickSummary};
