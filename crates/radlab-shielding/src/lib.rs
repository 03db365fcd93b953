//! # radlab-shielding
//!
//! Everything the transport engine needs to know about the objects that
//! sit between the source and the detector.
//!
//! ## Key Types
//!
//! - [`ShieldMaterial`] / [`ShieldDatabase`]: named slab presets (paper, aluminum, lead)
//! - [`ShieldRegistry`]: placed shields with segment intersection queries
//! - [`DetectorVolume`]: the Geiger counter's bounding box
//! - [`AttenuationModel`]: pluggable intensity reduction across crossed shields

pub mod attenuation;
pub mod database;
pub mod properties;
pub mod registry;

pub use attenuation::{Attenuation, AttenuationModel, DemonstrationAttenuation, NullAttenuation};
pub use database::ShieldDatabase;
pub use properties::ShieldMaterial;
pub use registry::{DetectorVolume, Shield, ShieldHit, ShieldRegistry};
