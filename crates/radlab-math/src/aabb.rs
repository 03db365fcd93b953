//! Axis-Aligned Bounding Box (AABB) queries.
//!
//! Shields and the detector are boxes. The transport engine asks three
//! questions of them: does a point lie inside, does the segment travelled
//! this frame cross the box, and does a bounded forward ray hit it.
//! Segment and ray tests use the slab method.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Direction components below this magnitude are treated as parallel to a slab.
const PARALLEL_EPSILON: f32 = 1.0e-9;

/// Axis-aligned box given by its two extreme corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Creates a box from two corners in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a box centred at `center` with full extents `size`.
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns true if any extent is zero (or not finite).
    pub fn is_degenerate(&self) -> bool {
        let s = self.size();
        !(s.is_finite() && s.x > 0.0 && s.y > 0.0 && s.z > 0.0)
    }

    /// Returns the same box moved so its centre sits at `center`.
    pub fn with_center(&self, center: Vec3) -> Self {
        Self::from_center_size(center, self.size())
    }

    /// Inclusive point containment.
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Distance along a ray at which it first touches the box, limited to
    /// `[0, max_distance]`. `direction` must be unit length.
    ///
    /// A ray starting inside the box hits at distance 0.
    pub fn ray_hit(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<f32> {
        let mut t_enter = 0.0_f32;
        let mut t_exit = max_distance;

        for axis in 0..3 {
            let o = origin[axis];
            let d = direction[axis];
            let lo = self.min[axis];
            let hi = self.max[axis];

            if d.abs() < PARALLEL_EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let mut t0 = (lo - o) * inv;
            let mut t1 = (hi - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        Some(t_enter)
    }

    /// Distance from `from` at which the segment `[from, to]` first touches
    /// the box, or `None` if the segment misses it.
    pub fn segment_hit(&self, from: Vec3, to: Vec3) -> Option<f32> {
        let delta = to - from;
        let length = delta.length();
        if length < PARALLEL_EPSILON {
            return self.contains_point(from).then_some(0.0);
        }
        self.ray_hit(from, delta / length, length)
    }
}
