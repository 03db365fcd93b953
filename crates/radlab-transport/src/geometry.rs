//! The lab scene as seen by the transport loop: where particles come
//! from, what stands in their way and what counts them.

use rand::Rng;
use radlab_math::Vec3;
use radlab_shielding::{DetectorVolume, ShieldRegistry};

/// Point source firing along an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionSource {
    pub position: Vec3,
    /// Beam axis. Need not be normalized; a zero axis falls back to +X.
    pub axis: Vec3,
}

impl EmissionSource {
    pub fn new(position: Vec3, axis: Vec3) -> Self {
        Self { position, axis }
    }

    /// Unit beam axis.
    pub fn direction(&self) -> Vec3 {
        let axis = self.axis.normalize_or_zero();
        if axis == Vec3::ZERO {
            Vec3::X
        } else {
            axis
        }
    }

    /// Beam axis jittered by up to `spread` on both perpendicular axes.
    pub fn sample_direction<R: Rng + ?Sized>(&self, spread: f32, rng: &mut R) -> Vec3 {
        let axis = self.direction();
        let (u, v) = axis.any_orthonormal_pair();
        let ju = (rng.gen::<f32>() - 0.5) * 2.0 * spread;
        let jv = (rng.gen::<f32>() - 0.5) * 2.0 * spread;
        (axis + u * ju + v * jv).normalize()
    }
}

impl Default for EmissionSource {
    fn default() -> Self {
        Self::new(Vec3::new(-2.0, 1.0, 0.0), Vec3::X)
    }
}

/// Source, shields and detector of one lab.
#[derive(Debug, Clone)]
pub struct LabGeometry {
    pub source: EmissionSource,
    pub shields: ShieldRegistry,
    pub detector: DetectorVolume,
}

impl LabGeometry {
    pub fn new(source: EmissionSource, shields: ShieldRegistry, detector: DetectorVolume) -> Self {
        Self {
            source,
            shields,
            detector,
        }
    }
}
