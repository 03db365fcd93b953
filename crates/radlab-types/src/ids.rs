//! Strongly-typed identifiers for simulation entities.
//!
//! Renderers key their own handles (meshes, trail lines) by these ids,
//! so the core never stores rendering resources.

use serde::{Deserialize, Serialize};

/// Identifier of a live particle in the transport pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticleId(pub u64);

/// Identifier of a placed shield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShieldId(pub u32);

/// Identifier of a projector transient (ejecta, electron, photon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransientId(pub u64);

/// Index of a nearby atom in the projector's atom cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AtomId(pub u32);

impl ShieldId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl AtomId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u64> for ParticleId {
    fn from(val: u64) -> Self {
        Self(val)
    }
}

impl From<u64> for TransientId {
    fn from(val: u64) -> Self {
        Self(val)
    }
}

impl From<u32> for ShieldId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}
