//! Transport configuration.
//!
//! [`SimulationConfig`] is what the UI edits between ticks; the engine
//! only ever sees sanitized values. [`TransportConstants`] holds the
//! demonstration constants of the emission and kinematics model.

use radlab_types::constants::MIN_ENERGY;
use radlab_types::{Medium, ParticleKind};
use serde::{Deserialize, Serialize};

/// Source and medium settings, mutated by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Radiation type emitted by the source.
    pub particle_type: ParticleKind,
    /// Source energy (> 0). Scales speed, life, curvature and knock-on rate.
    pub energy: f32,
    /// Source intensity (>= 0). Scales emission probability.
    pub intensity: f32,
    /// Medium between source and detector.
    pub medium: Medium,
    /// Cloud chamber mode: trails, beta curvature, gamma knock-on electrons.
    pub cloud_mode: bool,
    /// Vertical magnetic field strength used in cloud mode.
    pub magnetic_field_strength: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            particle_type: ParticleKind::Alpha,
            energy: 5.0,
            intensity: 8.0,
            medium: Medium::Air,
            cloud_mode: false,
            magnetic_field_strength: 1.0,
        }
    }
}

impl SimulationConfig {
    /// Applies a partial update, clamping values into their valid range.
    ///
    /// Non-finite numbers are ignored and the previous value is kept.
    pub fn apply(&mut self, patch: &ConfigPatch) {
        if let Some(kind) = patch.particle_type {
            self.particle_type = kind;
        }
        if let Some(energy) = patch.energy.filter(|v| v.is_finite()) {
            self.energy = energy.max(MIN_ENERGY);
        }
        if let Some(intensity) = patch.intensity.filter(|v| v.is_finite()) {
            self.intensity = intensity.max(0.0);
        }
        if let Some(medium) = patch.medium {
            self.medium = medium;
        }
        if let Some(cloud) = patch.cloud_mode {
            self.cloud_mode = cloud;
        }
        if let Some(field) = patch.magnetic_field_strength.filter(|v| v.is_finite()) {
            self.magnetic_field_strength = field;
        }
    }

    /// Returns a copy with every field clamped into its valid range.
    pub fn sanitized(&self) -> Self {
        let mut clean = Self {
            energy: if self.energy.is_finite() { self.energy } else { 5.0 },
            intensity: if self.intensity.is_finite() { self.intensity } else { 0.0 },
            magnetic_field_strength: if self.magnetic_field_strength.is_finite() {
                self.magnetic_field_strength
            } else {
                0.0
            },
            ..self.clone()
        };
        clean.energy = clean.energy.max(MIN_ENERGY);
        clean.intensity = clean.intensity.max(0.0);
        clean
    }
}

/// Partial configuration update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigPatch {
    pub particle_type: Option<ParticleKind>,
    pub energy: Option<f32>,
    pub intensity: Option<f32>,
    pub medium: Option<Medium>,
    pub cloud_mode: Option<bool>,
    pub magnetic_field_strength: Option<f32>,
}

/// One value per particle kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerKind<T> {
    pub alpha: T,
    pub beta: T,
    pub gamma: T,
}

impl<T: Copy> PerKind<T> {
    pub fn get(&self, kind: ParticleKind) -> T {
        match kind {
            ParticleKind::Alpha => self.alpha,
            ParticleKind::Beta => self.beta,
            ParticleKind::Gamma => self.gamma,
        }
    }
}

/// Extra life lost per tick in each medium.
///
/// The ordering water > air > vacuum must hold for any tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MediumDecay {
    pub air: f32,
    pub water: f32,
    pub vacuum: f32,
}

impl MediumDecay {
    pub fn rate(&self, medium: Medium) -> f32 {
        match medium {
            Medium::Air => self.air,
            Medium::Water => self.water,
            Medium::Vacuum => self.vacuum,
        }
    }

    /// True if water > air > vacuum >= 0.
    pub fn is_ordered(&self) -> bool {
        self.water > self.air && self.air > self.vacuum && self.vacuum >= 0.0
    }
}

impl Default for MediumDecay {
    fn default() -> Self {
        Self {
            air: 1.0,
            water: 2.0,
            vacuum: 0.3,
        }
    }
}

/// Demonstration constants of the emission and kinematics model.
///
/// Velocities are in scene units per frame and lives in frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConstants {
    /// Emission probability per tick per unit of intensity.
    pub emission_rate: f32,
    /// Speed floor shared by every kind.
    pub base_speed: f32,
    /// Speed gained per unit of energy, before the per-kind factor.
    pub speed_per_energy: f32,
    pub speed_factor: PerKind<f32>,
    /// Life at zero energy (frames).
    pub life_base: PerKind<f32>,
    pub life_per_energy: PerKind<f32>,
    /// Life lost every tick regardless of medium.
    pub aging_per_tick: f32,
    pub medium_decay: MediumDecay,
    /// Field vector is `(0, strength * field_scale, 0)`.
    pub field_scale: f32,
    /// Gain applied to `v x B` for beta curvature.
    pub deflection_gain: f32,
    /// Energy at which curvature and knock-on rates are unscaled.
    pub reference_energy: f32,
    /// Trail capacity in points.
    pub trail_length: usize,
    /// Half-width of the random jitter on the two axes across the beam.
    pub direction_spread: f32,
    /// Knock-on electron probability per gamma per tick at reference energy.
    pub knock_on_rate: f32,
    /// Fraction of the photon velocity inherited by a knock-on electron.
    pub knock_on_speed_fraction: f32,
    /// Half-width of the random velocity kick of a knock-on electron.
    pub knock_on_jitter: f32,
    pub knock_on_life: f32,
    pub knock_on_intensity: f32,
    /// Rendered gamma segment length, in velocities.
    pub gamma_render_length: f32,
}

impl Default for TransportConstants {
    fn default() -> Self {
        Self {
            emission_rate: 0.02,
            base_speed: 0.05,
            speed_per_energy: 0.02,
            speed_factor: PerKind { alpha: 0.2, beta: 0.6, gamma: 1.0 },
            life_base: PerKind { alpha: 40.0, beta: 100.0, gamma: 220.0 },
            life_per_energy: PerKind { alpha: 6.0, beta: 10.0, gamma: 0.0 },
            aging_per_tick: 1.0,
            medium_decay: MediumDecay::default(),
            field_scale: 0.002,
            deflection_gain: 0.01,
            reference_energy: 5.0,
            trail_length: 24,
            direction_spread: 0.1,
            knock_on_rate: 0.005,
            knock_on_speed_fraction: 0.18,
            knock_on_jitter: 0.04,
            knock_on_life: 150.0,
            knock_on_intensity: 2.0,
            gamma_render_length: 100.0,
        }
    }
}

impl TransportConstants {
    /// Speed (units per frame) of a freshly emitted particle.
    pub fn base_speed(&self, kind: ParticleKind, energy: f32) -> f32 {
        self.base_speed + energy * self.speed_per_energy * self.speed_factor.get(kind)
    }

    /// Initial life (frames) of a freshly emitted particle.
    pub fn initial_life(&self, kind: ParticleKind, energy: f32) -> f32 {
        self.life_base.get(kind) + energy * self.life_per_energy.get(kind)
    }

    /// Life lost per tick in `medium`.
    pub fn life_decrement(&self, medium: Medium) -> f32 {
        self.aging_per_tick + self.medium_decay.rate(medium)
    }

    /// `energy / reference_energy`, the scale of curvature and knock-on rate.
    pub fn energy_scale(&self, energy: f32) -> f32 {
        energy / self.reference_energy
    }
}
