//! Particles and their cloud-chamber trails.
//!
//! A particle carries no rendering resources. Renderers key their meshes
//! and trail lines by [`ParticleId`] and drop them when the pool reports
//! the id as retired.

use std::collections::VecDeque;

use radlab_math::Vec3;
use radlab_telemetry::RetireReason;
use radlab_types::{ParticleId, ParticleKind};

/// Fixed-capacity FIFO of recent positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    points: VecDeque<Vec3>,
    capacity: usize,
}

impl Trail {
    /// Creates a trail of `capacity` points, all at `origin`.
    pub fn filled(origin: Vec3, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: std::iter::repeat(origin).take(capacity).collect(),
            capacity,
        }
    }

    /// Appends the newest point, dropping the oldest when full.
    pub fn push(&mut self, point: Vec3) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// Points from oldest to newest.
    pub fn points(&self) -> impl Iterator<Item = &Vec3> {
        self.points.iter()
    }

    pub fn newest(&self) -> Option<Vec3> {
        self.points.back().copied()
    }

    pub fn oldest(&self) -> Option<Vec3> {
        self.points.front().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// How a renderer should draw a particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleShape {
    /// Alpha and beta: a head at the current position.
    Point(Vec3),
    /// Gamma: a directed line from the current position.
    Segment { start: Vec3, end: Vec3 },
}

/// A live particle owned by the pool.
#[derive(Debug, Clone)]
pub struct Particle {
    pub id: ParticleId,
    pub kind: ParticleKind,
    pub position: Vec3,
    /// Position at the start of the last tick.
    pub previous_position: Vec3,
    /// Units per frame.
    pub velocity: Vec3,
    /// Frames left; the particle is retired at or below zero.
    pub remaining_life: f32,
    /// Intensity carried from the source.
    pub intensity: f32,
    /// Intensity left after the shields crossed during the last tick.
    pub remaining_intensity: f32,
    /// Cloud-chamber trail, present only for trail-drawing particles.
    pub trail: Option<Trail>,
    /// Photon that knocked this electron on, if any.
    pub parent: Option<ParticleId>,
    pub(crate) fate: Option<RetireReason>,
}

impl Particle {
    pub fn new(
        id: ParticleId,
        kind: ParticleKind,
        position: Vec3,
        velocity: Vec3,
        life: f32,
        intensity: f32,
    ) -> Self {
        Self {
            id,
            kind,
            position,
            previous_position: position,
            velocity,
            remaining_life: life,
            intensity,
            remaining_intensity: intensity,
            trail: None,
            parent: None,
            fate: None,
        }
    }

    /// Attaches a trail pre-filled with the current position.
    pub fn with_trail(mut self, capacity: usize) -> Self {
        self.trail = Some(Trail::filled(self.position, capacity));
        self
    }

    pub fn is_alive(&self) -> bool {
        self.remaining_life > 0.0
    }

    /// Forces retirement at the end of the current tick.
    pub fn expire(&mut self, reason: RetireReason) {
        self.remaining_life = self.remaining_life.min(0.0);
        self.fate.get_or_insert(reason);
    }

    /// Drawing primitive; gamma segments extend `render_length` velocities ahead.
    pub fn shape(&self, render_length: f32) -> ParticleShape {
        if self.kind.is_photon() {
            ParticleShape::Segment {
                start: self.position,
                end: self.position + self.velocity * render_length,
            }
        } else {
            ParticleShape::Point(self.position)
        }
    }

    /// Gamma line opacity: fades with the intensity left after shielding.
    pub fn opacity(&self, source_intensity: f32) -> f32 {
        if source_intensity <= 0.0 {
            return 1.0;
        }
        (self.remaining_intensity / source_intensity + 0.05).min(1.0)
    }
}
