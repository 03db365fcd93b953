//! Placed shields and the detector volume.
//!
//! Shields are immutable after placement except for their position,
//! which the UI may drag between ticks. The detector is fixed once built.

use radlab_math::{Aabb, Vec3};
use radlab_types::{RadlabError, RadlabResult, ShieldId, ShieldKind};
use serde::{Deserialize, Serialize};

use crate::properties::ShieldMaterial;

/// A shield placed in the lab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shield {
    pub id: ShieldId,
    pub kind: ShieldKind,
    pub attenuation_coefficient: f32,
    pub bounds: Aabb,
}

impl Shield {
    /// Builds a shield slab from a material, centred at `position`.
    pub fn from_material(id: ShieldId, material: &ShieldMaterial, position: Vec3) -> Self {
        Self {
            id,
            kind: material.kind,
            attenuation_coefficient: material.attenuation_coefficient,
            bounds: Aabb::from_center_size(position, material.size()),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.bounds.center()
    }
}

/// One shield crossed by a path segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShieldHit {
    pub shield: ShieldId,
    pub kind: ShieldKind,
    pub coefficient: f32,
    /// Distance from the segment start to the first contact.
    pub distance: f32,
}

/// All placed shields, in placement order.
#[derive(Debug, Clone, Default)]
pub struct ShieldRegistry {
    shields: Vec<Shield>,
    next_id: u32,
}

impl ShieldRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a new shield of `material` centred at `position`.
    pub fn place(&mut self, material: &ShieldMaterial, position: Vec3) -> ShieldId {
        let id = ShieldId(self.next_id);
        self.next_id += 1;
        self.shields.push(Shield::from_material(id, material, position));
        id
    }

    /// Moves a shield (drag). Only the position changes.
    pub fn move_to(&mut self, id: ShieldId, position: Vec3) -> RadlabResult<()> {
        let shield = self
            .shields
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RadlabError::UnknownShield(id.0))?;
        shield.bounds = shield.bounds.with_center(position);
        Ok(())
    }

    /// Removes a shield and returns it.
    pub fn remove(&mut self, id: ShieldId) -> RadlabResult<Shield> {
        let index = self
            .shields
            .iter()
            .position(|s| s.id == id)
            .ok_or(RadlabError::UnknownShield(id.0))?;
        Ok(self.shields.remove(index))
    }

    pub fn get(&self, id: ShieldId) -> Option<&Shield> {
        self.shields.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shield> {
        self.shields.iter()
    }

    pub fn len(&self) -> usize {
        self.shields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shields.is_empty()
    }

    /// Every shield touched by the segment `[from, to]`, nearest first.
    ///
    /// Ties on distance are broken by shield id so the order is deterministic.
    pub fn intersect_segment(&self, from: Vec3, to: Vec3) -> Vec<ShieldHit> {
        let mut hits: Vec<ShieldHit> = self
            .shields
            .iter()
            .filter_map(|s| {
                s.bounds.segment_hit(from, to).map(|distance| ShieldHit {
                    shield: s.id,
                    kind: s.kind,
                    coefficient: s.attenuation_coefficient,
                    distance,
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then(a.shield.0.cmp(&b.shield.0))
        });
        hits
    }
}

/// The detector's fixed bounding volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectorVolume {
    pub bounds: Aabb,
}

impl DetectorVolume {
    pub fn new(bounds: Aabb) -> Self {
        Self { bounds }
    }

    /// Detector box centred at `center` with full extents `size`.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        Self::new(Aabb::from_center_size(center, size))
    }

    pub fn contains(&self, point: Vec3) -> bool {
        self.bounds.contains_point(point)
    }

    /// True if a forward ray of bounded length touches the detector.
    pub fn ray_hits(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> bool {
        let len = direction.length();
        if len <= 0.0 || !len.is_finite() {
            return self.contains(origin);
        }
        self.bounds
            .ray_hit(origin, direction / len, max_distance)
            .is_some()
    }
}
