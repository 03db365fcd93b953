//! Closed sets of kinds shared across the lab.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Radiation type emitted by the source (and carried by a particle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleKind {
    Alpha,
    Beta,
    Gamma,
}

impl ParticleKind {
    /// Returns all particle kinds.
    pub fn all() -> &'static [ParticleKind] {
        &[ParticleKind::Alpha, ParticleKind::Beta, ParticleKind::Gamma]
    }

    /// Returns a lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            ParticleKind::Alpha => "alpha",
            ParticleKind::Beta => "beta",
            ParticleKind::Gamma => "gamma",
        }
    }

    /// Parses a lowercase name. Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "alpha" => Some(ParticleKind::Alpha),
            "beta" => Some(ParticleKind::Beta),
            "gamma" => Some(ParticleKind::Gamma),
            _ => None,
        }
    }

    /// Gamma photons travel as straight segments and never curve.
    pub fn is_photon(&self) -> bool {
        matches!(self, ParticleKind::Gamma)
    }
}

impl fmt::Display for ParticleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Medium filling the lab between source and detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medium {
    Air,
    Water,
    Vacuum,
}

impl Medium {
    pub fn name(&self) -> &'static str {
        match self {
            Medium::Air => "air",
            Medium::Water => "water",
            Medium::Vacuum => "vacuum",
        }
    }
}

/// Shield material family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShieldKind {
    Paper,
    Aluminum,
    Lead,
}

impl ShieldKind {
    pub fn name(&self) -> &'static str {
        match self {
            ShieldKind::Paper => "paper",
            ShieldKind::Aluminum => "aluminum",
            ShieldKind::Lead => "lead",
        }
    }
}

/// Decay procedure played by the projector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecayKind {
    Alpha,
    Beta,
    Gamma,
}

impl DecayKind {
    pub fn name(&self) -> &'static str {
        match self {
            DecayKind::Alpha => "alpha",
            DecayKind::Beta => "beta",
            DecayKind::Gamma => "gamma",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ParticleKind::from_name(name).map(Self::from)
    }
}

impl From<ParticleKind> for DecayKind {
    fn from(kind: ParticleKind) -> Self {
        match kind {
            ParticleKind::Alpha => DecayKind::Alpha,
            ParticleKind::Beta => DecayKind::Beta,
            ParticleKind::Gamma => DecayKind::Gamma,
        }
    }
}

impl fmt::Display for DecayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Nucleon flavour inside the projector nucleus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NucleonKind {
    Proton,
    Neutron,
}
