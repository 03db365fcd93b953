//! Shield material properties.
//!
//! A shield is a vertical slab: `thickness` along X (the beam axis of the
//! default lab), fixed height and depth. The attenuation coefficient is a
//! demonstration value, not a physical cross-section.

use radlab_math::Vec3;
use radlab_types::ShieldKind;
use serde::{Deserialize, Serialize};

/// Physical description of a shield slab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShieldMaterial {
    /// Lookup name (e.g., "lead").
    pub name: String,

    /// Material family.
    pub kind: ShieldKind,

    /// Slab thickness along X.
    pub thickness: f32,

    /// Slab height (Y).
    pub height: f32,

    /// Slab depth (Z).
    pub depth: f32,

    /// Attenuation coefficient (> 0). Alpha/beta lose `coefficient * 0.8`
    /// intensity per crossing; gamma keeps `exp(-1 / coefficient)`.
    pub attenuation_coefficient: f32,
}

impl ShieldMaterial {
    /// Full box extents of one slab.
    pub fn size(&self) -> Vec3 {
        Vec3::new(self.thickness, self.height, self.depth)
    }

    /// Returns true if all dimensions and the coefficient are positive and finite.
    pub fn is_valid(&self) -> bool {
        [self.thickness, self.height, self.depth, self.attenuation_coefficient]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}
