//! Nucleus model.
//!
//! Nucleon positions are relative to the nucleus origin. Protons and
//! neutrons are kept in two ordered lists; decays take from the front.

use std::f32::consts::TAU;

use rand::Rng;
use radlab_math::Vec3;
use radlab_types::NucleonKind;
use serde::{Deserialize, Serialize};

use crate::settings::NucleusLayout;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nucleon {
    pub kind: NucleonKind,
    /// Offset from the nucleus origin.
    pub position: Vec3,
}

/// A small nucleus of protons and neutrons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nucleus {
    pub origin: Vec3,
    protons: Vec<Nucleon>,
    neutrons: Vec<Nucleon>,
}

impl Nucleus {
    /// Lays out `layout.protons + layout.neutrons` nucleons on a jittered ring.
    pub fn build<R: Rng + ?Sized>(layout: &NucleusLayout, rng: &mut R) -> Self {
        let total = (layout.protons + layout.neutrons).max(1) as f32;
        let mut place = |i: usize, kind: NucleonKind| {
            let angle = i as f32 * TAU / total + rng.gen::<f32>() * layout.angle_jitter;
            let r = layout.min_radius + rng.gen::<f32>() * layout.radius_jitter;
            let y = (rng.gen::<f32>() - 0.5) * layout.height_jitter;
            Nucleon {
                kind,
                position: Vec3::new(angle.cos() * r, y, angle.sin() * r),
            }
        };

        let protons = (0..layout.protons)
            .map(|i| place(i, NucleonKind::Proton))
            .collect();
        let neutrons = (0..layout.neutrons)
            .map(|i| place(layout.protons + i, NucleonKind::Neutron))
            .collect();

        Self {
            origin: layout.origin,
            protons,
            neutrons,
        }
    }

    /// Nucleus with explicit nucleon lists.
    pub fn from_nucleons(origin: Vec3, protons: Vec<Vec3>, neutrons: Vec<Vec3>) -> Self {
        Self {
            origin,
            protons: protons
                .into_iter()
                .map(|position| Nucleon { kind: NucleonKind::Proton, position })
                .collect(),
            neutrons: neutrons
                .into_iter()
                .map(|position| Nucleon { kind: NucleonKind::Neutron, position })
                .collect(),
        }
    }

    pub fn protons(&self) -> &[Nucleon] {
        &self.protons
    }

    pub fn neutrons(&self) -> &[Nucleon] {
        &self.neutrons
    }

    pub fn proton_count(&self) -> usize {
        self.protons.len()
    }

    pub fn neutron_count(&self) -> usize {
        self.neutrons.len()
    }

    /// Mass number.
    pub fn nucleon_count(&self) -> usize {
        self.protons.len() + self.neutrons.len()
    }

    /// Removes the first two protons and the first two neutrons.
    ///
    /// Returns `None` and leaves the nucleus untouched if either list is short.
    pub fn emit_alpha(&mut self) -> Option<Vec<Nucleon>> {
        if self.protons.len() < 2 || self.neutrons.len() < 2 {
            return None;
        }
        let mut cluster: Vec<Nucleon> = self.protons.drain(..2).collect();
        cluster.extend(self.neutrons.drain(..2));
        Some(cluster)
    }

    /// Turns the first neutron into a proton at the same spot.
    ///
    /// Returns the new proton, or `None` if there are no neutrons.
    pub fn convert_neutron(&mut self) -> Option<Nucleon> {
        if self.neutrons.is_empty() {
            return None;
        }
        let neutron = self.neutrons.remove(0);
        let proton = Nucleon {
            kind: NucleonKind::Proton,
            position: neutron.position,
        };
        self.protons.push(proton);
        Some(proton)
    }
}
