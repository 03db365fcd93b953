//! # radlab-transport
//!
//! The per-frame particle transport loop: emission, kinematics (with
//! magnetic deflection in cloud mode), shielding attenuation, detector
//! scoring and retirement.
//!
//! ## Key Types
//!
//! - [`SimulationConfig`]: UI-driven source and medium settings
//! - [`TransportConstants`]: tunable demonstration constants
//! - [`ParticlePool`]: owns every live [`Particle`] and runs one frame
//! - [`Scorer`]: detection probability, counts and dose

pub mod config;
pub mod geometry;
pub mod particle;
pub mod pool;
pub mod scoring;

pub use config::{ConfigPatch, MediumDecay, PerKind, SimulationConfig, TransportConstants};
pub use geometry::{EmissionSource, LabGeometry};
pub use particle::{Particle, ParticleShape, Trail};
pub use pool::{ParticlePool, RetiredParticle, TransportStep};
pub use scoring::{DetectionEvent, ScoreOutcome, ScoreState, Scorer, ScoringConstants};
