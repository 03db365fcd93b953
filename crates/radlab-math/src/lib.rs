//! # radlab-math
//!
//! Geometry primitives for the radlab transport engine.
//!
//! Provides:
//! - Re-export of `glam::Vec3`
//! - [`Aabb`]: axis-aligned box with point, segment and ray queries

pub mod aabb;

pub use aabb::Aabb;

// Canonical vector type for radlab.
pub use glam::Vec3;
