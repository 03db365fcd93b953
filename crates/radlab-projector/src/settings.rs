//! Projector layout and procedure timings.
//!
//! Durations and delays are in seconds at speed multiplier 1.

use radlab_math::Vec3;
use serde::{Deserialize, Serialize};

/// Nucleus composition and cluster layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NucleusLayout {
    pub protons: usize,
    pub neutrons: usize,
    /// Nucleus centre in projector space.
    pub origin: Vec3,
    /// Random extra angle per nucleon, in radians.
    pub angle_jitter: f32,
    pub min_radius: f32,
    /// Random extra radius per nucleon.
    pub radius_jitter: f32,
    /// Full height of the random vertical offset.
    pub height_jitter: f32,
}

impl Default for NucleusLayout {
    fn default() -> Self {
        Self {
            protons: 6,
            neutrons: 6,
            origin: Vec3::new(0.0, 0.82, 0.06),
            angle_jitter: 0.12,
            min_radius: 0.06,
            radius_jitter: 0.04,
            height_jitter: 0.04,
        }
    }
}

/// One electron shell: `count` electrons on an ellipse around the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellLayout {
    pub count: usize,
    pub radius: f32,
    /// Vertical amplitude of the tilted orbit.
    pub tilt: f32,
    pub height: f32,
}

/// Positions of the nearby atoms and their electron shells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtomLayout {
    pub cores: Vec<Vec3>,
    pub shells: Vec<ShellLayout>,
}

impl Default for AtomLayout {
    fn default() -> Self {
        Self {
            cores: vec![
                Vec3::new(0.6, 0.82, 0.0),
                Vec3::new(-0.6, 0.82, 0.0),
                Vec3::new(0.0, 0.82, 0.5),
                Vec3::new(0.0, 0.82, -0.5),
            ],
            shells: vec![
                ShellLayout { count: 2, radius: 0.09, tilt: 0.05, height: 0.01 },
                ShellLayout { count: 4, radius: 0.15, tilt: 0.03, height: -0.03 },
            ],
        }
    }
}

impl AtomLayout {
    /// Electrons per atom when fully populated.
    pub fn electrons_per_atom(&self) -> usize {
        self.shells.iter().map(|s| s.count).sum()
    }
}

/// Alpha: two protons and two neutrons leave as one ejecta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlphaProcedure {
    pub duration: f32,
    pub target: Vec3,
    pub ionization_delay: f32,
}

impl Default for AlphaProcedure {
    fn default() -> Self {
        Self {
            duration: 1.6,
            target: Vec3::new(0.0, 1.6, -1.6),
            ionization_delay: 0.9,
        }
    }
}

/// Beta: a neutron turns into a proton and an electron flies off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BetaProcedure {
    pub duration: f32,
    /// Distance the electron travels.
    pub range: f32,
    pub electron_scale: f32,
    pub ionization_delay: f32,
}

impl Default for BetaProcedure {
    fn default() -> Self {
        Self {
            duration: 1.1,
            range: 1.5,
            electron_scale: 0.2,
            ionization_delay: 0.4,
        }
    }
}

/// Gamma: an expanding photon ring at the nucleus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GammaProcedure {
    pub duration: f32,
    pub start_scale: f32,
    pub end_scale: f32,
    pub ionization_delay: f32,
}

impl Default for GammaProcedure {
    fn default() -> Self {
        Self {
            duration: 0.8,
            start_scale: 0.2,
            end_scale: 3.0,
            ionization_delay: 0.35,
        }
    }
}

/// Everything the projector needs to rebuild itself and run a decay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectorSettings {
    pub nucleus: NucleusLayout,
    pub atoms: AtomLayout,
    pub alpha: AlphaProcedure,
    pub beta: BetaProcedure,
    pub gamma: GammaProcedure,
}
