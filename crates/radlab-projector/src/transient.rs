//! Transients: short-lived presentational objects of a decay.
//!
//! A transient owns no simulation data. It only interpolates a pose from
//! `start` to `end` over `duration / speed` seconds of unpaused time:
//!
//! ```text
//! fraction = min(1, elapsed / (duration / speed))
//! pose     = lerp(start, end, fraction)
//! ```

use radlab_math::Vec3;
use radlab_types::constants::MIN_DECAY_SPEED;
use radlab_types::TransientId;
use serde::{Deserialize, Serialize};

use crate::nucleus::Nucleon;

/// Position and uniform scale of a transient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub scale: f32,
}

impl Pose {
    pub fn new(position: Vec3, scale: f32) -> Self {
        Self { position, scale }
    }

    pub fn lerp(&self, other: &Pose, t: f32) -> Pose {
        Pose {
            position: self.position.lerp(other.position, t),
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }
}

/// What a transient depicts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransientKind {
    /// Two protons and two neutrons leaving the nucleus together.
    AlphaEjecta { nucleons: Vec<Nucleon> },
    /// Electron emitted by a beta decay.
    Electron,
    /// Expanding gamma ring.
    Photon,
}

/// An in-flight decay animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transient {
    pub id: TransientId,
    pub kind: TransientKind,
    pub start: Pose,
    pub end: Pose,
    /// Seconds at speed multiplier 1.
    pub duration: f32,
    /// Unpaused seconds accumulated so far.
    pub elapsed: f32,
    pub paused: bool,
}

impl Transient {
    pub fn new(id: TransientId, kind: TransientKind, start: Pose, end: Pose, duration: f32) -> Self {
        Self {
            id,
            kind,
            start,
            end,
            duration,
            elapsed: 0.0,
            paused: false,
        }
    }

    /// Accumulates `dt` seconds unless paused.
    pub fn advance(&mut self, dt: f32) {
        if !self.paused {
            self.elapsed += dt.max(0.0);
        }
    }

    /// Completed share of the animation at `speed`, in `[0, 1]`.
    pub fn fraction(&self, speed: f32) -> f32 {
        let span = self.duration / speed.max(MIN_DECAY_SPEED);
        if span <= 0.0 {
            return 1.0;
        }
        (self.elapsed / span).clamp(0.0, 1.0)
    }

    /// Interpolated pose at `speed`.
    pub fn pose(&self, speed: f32) -> Pose {
        self.start.lerp(&self.end, self.fraction(speed))
    }

    pub fn is_complete(&self, speed: f32) -> bool {
        self.fraction(speed) >= 1.0
    }
}
