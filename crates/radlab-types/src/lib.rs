//! # radlab-types
//!
//! Shared identifiers, particle/material kinds, error types and
//! simulation defaults for the radlab radiation lab.
//!
//! This crate has zero domain logic: it defines the vocabulary
//! that all other radlab crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod kinds;

pub use error::{RadlabError, RadlabResult};
pub use ids::{AtomId, ParticleId, ShieldId, TransientId};
pub use kinds::{DecayKind, Medium, NucleonKind, ParticleKind, ShieldKind};
