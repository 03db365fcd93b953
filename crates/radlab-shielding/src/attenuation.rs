//! Attenuation models: how much intensity survives a path segment.
//!
//! The model is applied per frame to the segment a particle travelled,
//! starting from the particle's own intensity. Per-shield factors commute,
//! so the result does not depend on crossing order; hits are still applied
//! nearest-first for reproducibility.

use radlab_math::Vec3;
use radlab_types::ParticleKind;
use serde::{Deserialize, Serialize};

use crate::registry::{ShieldHit, ShieldRegistry};

/// Outcome of attenuating one path segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    /// Surviving intensity, never negative.
    pub remaining: f32,
    /// Whether the particle should be expired.
    pub absorbed: bool,
    /// Number of shields crossed by the segment.
    pub shields_crossed: u32,
}

/// Trait for shield attenuation models.
///
/// # Implementations
/// - [`DemonstrationAttenuation`]: the lab's ad hoc linear/exponential rules
/// - [`NullAttenuation`]: shields are transparent (benchmarks, tests)
pub trait AttenuationModel: Send {
    /// Intensity left after crossing `hits`, clamped to `[0, inf)`.
    fn remaining_intensity(&self, kind: ParticleKind, intensity: f32, hits: &[ShieldHit]) -> f32;

    /// Whether `remaining` is low enough to expire a particle of `kind`.
    fn is_absorbed(&self, kind: ParticleKind, remaining: f32) -> bool;

    /// Returns the model name.
    fn name(&self) -> &str;

    /// Attenuate a particle of `kind` moving from `from` to `to`.
    fn attenuate(
        &self,
        kind: ParticleKind,
        intensity: f32,
        from: Vec3,
        to: Vec3,
        shields: &ShieldRegistry,
    ) -> Attenuation {
        let hits = shields.intersect_segment(from, to);
        let remaining = self.remaining_intensity(kind, intensity, &hits).max(0.0);
        Attenuation {
            remaining,
            absorbed: self.is_absorbed(kind, remaining),
            shields_crossed: hits.len() as u32,
        }
    }
}

/// Demonstration constants of the lab.
///
/// - gamma: `remaining *= exp(-exponential_numerator / coefficient)`
/// - alpha/beta: `remaining -= coefficient * linear_scale`
///
/// Gamma expires below `gamma_expiry_threshold`; alpha/beta at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemonstrationAttenuation {
    pub linear_scale: f32,
    pub exponential_numerator: f32,
    pub gamma_expiry_threshold: f32,
}

impl Default for DemonstrationAttenuation {
    fn default() -> Self {
        Self {
            linear_scale: 0.8,
            exponential_numerator: 1.0,
            gamma_expiry_threshold: 0.05,
        }
    }
}

impl DemonstrationAttenuation {
    /// Multiplicative survival factor of one shield for gamma.
    pub fn gamma_factor(&self, coefficient: f32) -> f32 {
        (-self.exponential_numerator / coefficient).exp()
    }

    /// Intensity removed by one shield for alpha/beta.
    pub fn linear_loss(&self, coefficient: f32) -> f32 {
        coefficient * self.linear_scale
    }
}

impl AttenuationModel for DemonstrationAttenuation {
    fn remaining_intensity(&self, kind: ParticleKind, intensity: f32, hits: &[ShieldHit]) -> f32 {
        let remaining = hits.iter().fold(intensity, |acc, hit| {
            if kind.is_photon() {
                acc * self.gamma_factor(hit.coefficient)
            } else {
                (acc - self.linear_loss(hit.coefficient)).max(0.0)
            }
        });
        remaining.max(0.0)
    }

    fn is_absorbed(&self, kind: ParticleKind, remaining: f32) -> bool {
        if kind.is_photon() {
            remaining < self.gamma_expiry_threshold
        } else {
            remaining <= 0.0
        }
    }

    fn name(&self) -> &str {
        "demonstration_attenuation"
    }
}

/// Transparent shields. Nothing is ever absorbed.
pub struct NullAttenuation;

impl AttenuationModel for NullAttenuation {
    fn remaining_intensity(&self, _kind: ParticleKind, intensity: f32, _hits: &[ShieldHit]) -> f32 {
        intensity.max(0.0)
    }

    fn is_absorbed(&self, _kind: ParticleKind, _remaining: f32) -> bool {
        false
    }

    fn name(&self) -> &str {
        "null_attenuation"
    }
}
