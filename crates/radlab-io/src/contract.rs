//! Lab setup contract.
//!
//! A [`LabSetup`] is everything needed to build a simulation: the UI
//! configuration, every demonstration constant, the scene placement and
//! the RNG seed. It loads from TOML or JSON; missing fields take the
//! values of the default lab.

use std::path::Path;

use radlab_math::Vec3;
use radlab_projector::ProjectorSettings;
use radlab_shielding::DemonstrationAttenuation;
use radlab_transport::{ScoringConstants, SimulationConfig, TransportConstants};
use radlab_types::{RadlabError, RadlabResult};
use serde::{Deserialize, Serialize};

/// Where the source sits and where it fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SourcePlacement {
    pub position: Vec3,
    pub axis: Vec3,
}

impl Default for SourcePlacement {
    fn default() -> Self {
        Self {
            position: Vec3::new(-2.0, 1.0, 0.0),
            axis: Vec3::X,
        }
    }
}

/// A shield slab, by material name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShieldPlacement {
    pub material: String,
    pub position: Vec3,
}

impl ShieldPlacement {
    pub fn new(material: impl Into<String>, position: Vec3) -> Self {
        Self {
            material: material.into(),
            position,
        }
    }
}

/// The Geiger counter's box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectorPlacement {
    pub center: Vec3,
    pub size: Vec3,
}

impl Default for DetectorPlacement {
    fn default() -> Self {
        Self {
            center: Vec3::new(3.2, 0.6, 0.0),
            size: Vec3::new(0.6, 0.4, 0.4),
        }
    }
}

/// Complete description of one lab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabSetup {
    /// RNG seed for emission, scoring and the projector.
    pub seed: u64,
    pub config: SimulationConfig,
    pub source: SourcePlacement,
    pub detector: DetectorPlacement,
    pub shields: Vec<ShieldPlacement>,
    pub transport: TransportConstants,
    pub attenuation: DemonstrationAttenuation,
    pub scoring: ScoringConstants,
    pub projector: ProjectorSettings,
}

impl Default for LabSetup {
    fn default() -> Self {
        Self {
            seed: 0,
            config: SimulationConfig::default(),
            source: SourcePlacement::default(),
            detector: DetectorPlacement::default(),
            shields: vec![
                ShieldPlacement::new("paper", Vec3::new(0.5, 0.8, 1.1)),
                ShieldPlacement::new("aluminum", Vec3::new(2.2, 0.8, 1.1)),
                ShieldPlacement::new("lead", Vec3::new(4.2, 0.8, 1.1)),
            ],
            transport: TransportConstants::default(),
            attenuation: DemonstrationAttenuation::default(),
            scoring: ScoringConstants::default(),
            projector: ProjectorSettings::default(),
        }
    }
}

impl LabSetup {
    /// The default lab with no shields.
    pub fn empty_bench() -> Self {
        Self {
            shields: Vec::new(),
            ..Self::default()
        }
    }

    pub fn from_toml_str(text: &str) -> RadlabResult<Self> {
        toml::from_str(text).map_err(|e| RadlabError::Serialization(e.to_string()))
    }

    pub fn from_json_str(text: &str) -> RadlabResult<Self> {
        serde_json::from_str(text).map_err(|e| RadlabError::Serialization(e.to_string()))
    }

    pub fn to_toml_string(&self) -> RadlabResult<String> {
        toml::to_string(self).map_err(|e| RadlabError::Serialization(e.to_string()))
    }

    pub fn to_json_string(&self) -> RadlabResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RadlabError::Serialization(e.to_string()))
    }

    /// Loads a setup file, choosing the format by extension (`.toml` or `.json`).
    pub fn load(path: impl AsRef<Path>) -> RadlabResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => Err(RadlabError::InvalidConfig(format!(
                "Unsupported setup format: {} (use .toml or .json)",
                path.display()
            ))),
        }
    }
}
