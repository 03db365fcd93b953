//! Simulation event types.
//!
//! Events are lightweight value types tagged with the tick (frame) index
//! in which they happened.

use radlab_types::{AtomId, DecayKind, ParticleId, ParticleKind, TransientId};
use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Tick number (0-indexed).
    pub tick: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Why a particle left the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RetireReason {
    /// Ran out of life in the medium.
    Expired,
    /// Intensity fell to the absorption limit inside a shield.
    Absorbed,
    /// Consumed by the detector.
    Detected,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Tick started.
    TickBegin {
        /// Shared clock reading for this tick (seconds).
        sim_time: f64,
    },

    /// The source emitted a particle.
    ParticleEmitted {
        id: ParticleId,
        particle: ParticleKind,
    },

    /// A gamma photon knocked on a secondary electron.
    SecondarySpawned {
        id: ParticleId,
        parent: ParticleId,
    },

    /// The detector scored a count.
    Detection {
        id: ParticleId,
        particle: ParticleKind,
        dose: f64,
        counts: u64,
    },

    /// A particle was removed from the pool.
    ParticleRetired {
        id: ParticleId,
        reason: RetireReason,
        had_trail: bool,
    },

    /// The projector started a decay run.
    DecayStarted { decay: DecayKind },

    /// A decay step was executed (or skipped when its precondition failed).
    DecayStep {
        decay: DecayKind,
        step: u32,
        applied: bool,
    },

    /// An electron was removed from a nearby atom.
    Ionization {
        atom: AtomId,
        electrons_left: u32,
    },

    /// A projector transient reached its end pose.
    TransientCompleted { id: TransientId },

    /// The projector was rebuilt.
    ProjectorReset,

    /// Counts and dose were cleared.
    ScoreReset,

    /// Tick completed.
    TickEnd {
        /// Live particles after retirement.
        live_particles: u32,
        /// Active projector transients.
        transients: u32,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given tick.
    pub fn new(tick: u64, kind: EventKind) -> Self {
        Self { tick, kind }
    }
}
