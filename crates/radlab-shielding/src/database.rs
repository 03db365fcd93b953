//! Shield material database with the lab's three presets.
//!
//! Materials are looked up by name ("paper", "aluminum", "lead").
//! Custom materials can be registered at runtime.

use std::collections::HashMap;

use radlab_types::{RadlabError, RadlabResult, ShieldKind};

use crate::properties::ShieldMaterial;

/// Standard slab height (Y) for all presets.
const SLAB_HEIGHT: f32 = 1.0;

/// Standard slab depth (Z) for all presets.
const SLAB_DEPTH: f32 = 1.2;

/// A named collection of shield presets.
#[derive(Debug, Clone)]
pub struct ShieldDatabase {
    materials: HashMap<String, ShieldMaterial>,
}

impl ShieldDatabase {
    /// Creates a new database with the paper, aluminum and lead presets.
    pub fn with_defaults() -> Self {
        let mut db = Self::empty();
        db.register(paper());
        db.register(aluminum());
        db.register(lead());
        db
    }

    /// Creates an empty database.
    pub fn empty() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// Registers a material. Overwrites if the name already exists.
    pub fn register(&mut self, material: ShieldMaterial) {
        self.materials.insert(material.name.clone(), material);
    }

    /// Looks up a material by name. Returns `None` if not found.
    pub fn get(&self, name: &str) -> Option<&ShieldMaterial> {
        self.materials.get(name)
    }

    /// Looks up a material by name, failing with `UnknownMaterial`.
    pub fn require(&self, name: &str) -> RadlabResult<&ShieldMaterial> {
        self.get(name)
            .ok_or_else(|| RadlabError::UnknownMaterial(name.to_string()))
    }

    /// Returns all registered material names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.materials.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl Default for ShieldDatabase {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── Built-in Presets ─────────────────────────────────────────────────

/// Paper: thin sheet, stops alpha outright.
fn paper() -> ShieldMaterial {
    ShieldMaterial {
        name: "paper".into(),
        kind: ShieldKind::Paper,
        thickness: 0.05,
        height: SLAB_HEIGHT,
        depth: SLAB_DEPTH,
        attenuation_coefficient: 100.0,
    }
}

/// Aluminum: medium plate, stops most beta.
fn aluminum() -> ShieldMaterial {
    ShieldMaterial {
        name: "aluminum".into(),
        kind: ShieldKind::Aluminum,
        thickness: 0.2,
        height: SLAB_HEIGHT,
        depth: SLAB_DEPTH,
        attenuation_coefficient: 6.0,
    }
}

/// Lead: thick block, the strongest gamma absorber of the set.
fn lead() -> ShieldMaterial {
    ShieldMaterial {
        name: "lead".into(),
        kind: ShieldKind::Lead,
        thickness: 0.6,
        height: SLAB_HEIGHT,
        depth: SLAB_DEPTH,
        attenuation_coefficient: 0.6,
    }
}
