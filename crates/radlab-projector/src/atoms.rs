//! Nearby atoms and their electron shells.

use std::f32::consts::TAU;

use rand::seq::SliceRandom;
use rand::Rng;
use radlab_math::Vec3;
use radlab_types::AtomId;
use serde::{Deserialize, Serialize};

use crate::settings::AtomLayout;

/// An atom core with its remaining electrons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyAtom {
    pub id: AtomId,
    pub core_position: Vec3,
    /// Electron offsets from the core, inner shell first.
    electrons: Vec<Vec3>,
}

impl NearbyAtom {
    pub fn electrons(&self) -> &[Vec3] {
        &self.electrons
    }

    pub fn electron_count(&self) -> usize {
        self.electrons.len()
    }

    pub fn has_electrons(&self) -> bool {
        !self.electrons.is_empty()
    }

    /// Knocks off the outermost electron.
    pub fn ionize(&mut self) -> Option<Vec3> {
        self.electrons.pop()
    }
}

/// The atoms around the projected nucleus, in layout order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomCluster {
    atoms: Vec<NearbyAtom>,
}

impl AtomCluster {
    /// Builds every atom of `layout` with full shells.
    pub fn build(layout: &AtomLayout) -> Self {
        let electrons: Vec<Vec3> = layout
            .shells
            .iter()
            .flat_map(|shell| {
                (0..shell.count).map(move |e| {
                    let angle = e as f32 / shell.count as f32 * TAU;
                    Vec3::new(
                        shell.radius * angle.cos(),
                        shell.height + shell.tilt * angle.sin(),
                        shell.radius * angle.sin(),
                    )
                })
            })
            .collect();

        let atoms = layout
            .cores
            .iter()
            .enumerate()
            .map(|(i, &core)| NearbyAtom {
                id: AtomId(i as u32),
                core_position: core,
                electrons: electrons.clone(),
            })
            .collect();
        Self { atoms }
    }

    pub fn atoms(&self) -> &[NearbyAtom] {
        &self.atoms
    }

    pub fn get(&self, id: AtomId) -> Option<&NearbyAtom> {
        self.atoms.get(id.index())
    }

    pub fn get_mut(&mut self, id: AtomId) -> Option<&mut NearbyAtom> {
        self.atoms.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn total_electrons(&self) -> usize {
        self.atoms.iter().map(|a| a.electron_count()).sum()
    }

    /// First atom in layout order that still has electrons.
    pub fn first_with_electrons(&self) -> Option<AtomId> {
        self.atoms.iter().find(|a| a.has_electrons()).map(|a| a.id)
    }

    /// Uniform choice among atoms that still have electrons.
    pub fn random_with_electrons<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<AtomId> {
        let candidates: Vec<AtomId> = self
            .atoms
            .iter()
            .filter(|a| a.has_electrons())
            .map(|a| a.id)
            .collect();
        candidates.choose(rng).copied()
    }
}
