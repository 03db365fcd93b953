//! Benchmark scenarios: a lab setup and a tick count for each case.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Alpha bench**: alpha source, detector enclosing the forward path
//! 2. **Beta cloud**: cloud chamber with a strong magnetic field
//! 3. **Gamma lead**: gamma through a lead slab in front of the detector

use radlab_io::{DetectorPlacement, LabSetup, ShieldPlacement};
use radlab_math::Vec3;
use radlab_transport::SimulationConfig;
use radlab_types::{Medium, ParticleKind};
use serde::{Deserialize, Serialize};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    AlphaBench,
    BetaCloud,
    GammaLead,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::AlphaBench,
            ScenarioKind::BetaCloud,
            ScenarioKind::GammaLead,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::AlphaBench => "alpha_bench",
            ScenarioKind::BetaCloud => "beta_cloud",
            ScenarioKind::GammaLead => "gamma_lead",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A fully specified benchmark scenario.
pub struct Scenario {
    pub kind: ScenarioKind,
    pub setup: LabSetup,
    /// Number of default frames to run.
    pub ticks: u64,
}

impl Scenario {
    /// Alpha at intensity 8, energy 5 in air, 1000 ticks, with the detector
    /// box enclosing the whole forward path of the source.
    pub fn alpha_bench() -> Self {
        let mut setup = LabSetup::empty_bench();
        setup.seed = 1;
        setup.config = SimulationConfig {
            particle_type: ParticleKind::Alpha,
            energy: 5.0,
            intensity: 8.0,
            medium: Medium::Air,
            cloud_mode: false,
            ..SimulationConfig::default()
        };
        setup.detector = DetectorPlacement {
            center: Vec3::new(-0.5, 1.0, 0.0),
            size: Vec3::new(3.2, 1.0, 1.0),
        };
        Self {
            kind: ScenarioKind::AlphaBench,
            setup,
            ticks: 1000,
        }
    }

    /// Beta in cloud mode with a strong field: curved tracks and trails.
    pub fn beta_cloud() -> Self {
        let mut setup = LabSetup::default();
        setup.seed = 2;
        setup.config = SimulationConfig {
            particle_type: ParticleKind::Beta,
            cloud_mode: true,
            magnetic_field_strength: 5.0,
            ..SimulationConfig::default()
        };
        Self {
            kind: ScenarioKind::BetaCloud,
            setup,
            ticks: 1200,
        }
    }

    /// Gamma in cloud mode through a lead slab placed just before the detector.
    pub fn gamma_lead() -> Self {
        let mut setup = LabSetup::empty_bench();
        setup.seed = 3;
        setup.config = SimulationConfig {
            particle_type: ParticleKind::Gamma,
            cloud_mode: true,
            ..SimulationConfig::default()
        };
        setup.detector = DetectorPlacement {
            center: Vec3::new(1.5, 1.0, 0.0),
            size: Vec3::new(0.6, 0.6, 0.6),
        };
        setup.shields = vec![ShieldPlacement::new("lead", Vec3::new(0.6, 1.0, 0.0))];
        Self {
            kind: ScenarioKind::GammaLead,
            setup,
            ticks: 1000,
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::AlphaBench => Self::alpha_bench(),
            ScenarioKind::BetaCloud => Self::beta_cloud(),
            ScenarioKind::GammaLead => Self::gamma_lead(),
        }
    }

    /// Overrides the tick count.
    pub fn with_ticks(mut self, ticks: u64) -> Self {
        self.ticks = ticks;
        self
    }
}
