//! Detection and dose scoring.
//!
//! Alpha and beta are tested by point containment in the detector volume;
//! gamma by a short forward ray. A hit is scored with probability
//! `min(1, remaining / source_intensity * type_factor)`.

use rand::Rng;
use radlab_math::Vec3;
use radlab_shielding::DetectorVolume;
use radlab_types::constants::{EPSILON, MIN_DOSE_WINDOW, SECONDS_PER_HOUR};
use radlab_types::{ParticleId, ParticleKind};
use serde::{Deserialize, Serialize};

use crate::config::PerKind;
use crate::particle::Particle;

/// Demonstration constants of the detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConstants {
    /// Detection efficiency per kind.
    pub type_factor: PerKind<f32>,
    /// Dose added per detection per kind, before intensity scaling.
    pub dose_constant: PerKind<f64>,
    /// Dose scales with `particle.intensity / dose_intensity_divisor`.
    pub dose_intensity_divisor: f64,
    /// Length of the forward ray used for gamma.
    pub gamma_probe_length: f32,
}

impl Default for ScoringConstants {
    fn default() -> Self {
        Self {
            type_factor: PerKind { alpha: 0.3, beta: 0.6, gamma: 0.9 },
            dose_constant: PerKind { alpha: 0.002, beta: 0.005, gamma: 0.02 },
            dose_intensity_divisor: 10.0,
            gamma_probe_length: 1.5,
        }
    }
}

/// Counts and dose, reset only from outside the tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreState {
    pub counts: u64,
    pub accumulated_dose: f64,
    /// Clock reading of the last dose-rate sample (seconds).
    pub last_sample_time: f64,
}

impl ScoreState {
    /// Clears counts and dose; the next dose-rate window starts at `now`.
    pub fn reset(&mut self, now: f64) {
        self.counts = 0;
        self.accumulated_dose = 0.0;
        self.last_sample_time = now;
    }

    /// `accumulated_dose / window * 3600` over the window since the last sample.
    pub fn dose_rate(&self, now: f64) -> f64 {
        let window = (now - self.last_sample_time).max(MIN_DOSE_WINDOW);
        self.accumulated_dose / window * SECONDS_PER_HOUR
    }

    /// Computes the dose rate and starts a new window at `now`.
    pub fn sample_dose_rate(&mut self, now: f64) -> f64 {
        let rate = self.dose_rate(now);
        self.last_sample_time = now;
        rate
    }
}

/// One scored count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionEvent {
    pub particle: ParticleId,
    pub kind: ParticleKind,
    /// Dose added by this event.
    pub dose: f64,
    /// Probability the count was scored with.
    pub probability: f32,
    pub position: Vec3,
}

/// Result of testing one particle against the detector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreOutcome {
    pub event: Option<DetectionEvent>,
    /// The particle must be retired this tick.
    pub consumed: bool,
}

/// Tests particles against the detector and accumulates the score.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub state: ScoreState,
    constants: ScoringConstants,
}

impl Scorer {
    pub fn new(constants: ScoringConstants) -> Self {
        Self {
            state: ScoreState::default(),
            constants,
        }
    }

    pub fn constants(&self) -> &ScoringConstants {
        &self.constants
    }

    /// Detection probability, always within `[0, 1]`.
    pub fn detection_probability(&self, kind: ParticleKind, remaining: f32, source_intensity: f32) -> f32 {
        let ratio = remaining / source_intensity.max(EPSILON);
        let p = ratio * self.constants.type_factor.get(kind);
        if p.is_nan() {
            0.0
        } else {
            p.clamp(0.0, 1.0)
        }
    }

    /// Dose one detection of `particle` adds.
    pub fn dose_for(&self, particle: &Particle) -> f64 {
        self.constants.dose_constant.get(particle.kind) * particle.intensity as f64
            / self.constants.dose_intensity_divisor
    }

    /// Tests `particle` against `detector` and scores it stochastically.
    ///
    /// Alpha/beta inside the detector are always consumed, scored or not.
    /// Gamma is never consumed and may score again on later frames.
    pub fn score<R: Rng + ?Sized>(
        &mut self,
        particle: &Particle,
        remaining: f32,
        source_intensity: f32,
        detector: &DetectorVolume,
        rng: &mut R,
    ) -> ScoreOutcome {
        let reached = if particle.kind.is_photon() {
            detector.ray_hits(particle.position, particle.velocity, self.constants.gamma_probe_length)
        } else {
            detector.contains(particle.position)
        };
        if !reached {
            return ScoreOutcome::default();
        }

        let probability = self.detection_probability(particle.kind, remaining, source_intensity);
        let scored = rng.gen::<f32>() < probability;
        let event = scored.then(|| self.record(particle, probability));

        ScoreOutcome {
            event,
            consumed: !particle.kind.is_photon(),
        }
    }

    /// Adds one count and its dose.
    pub fn record(&mut self, particle: &Particle, probability: f32) -> DetectionEvent {
        let dose = self.dose_for(particle);
        self.state.counts += 1;
        self.state.accumulated_dose += dose;
        DetectionEvent {
            particle: particle.id,
            kind: particle.kind,
            dose,
            probability,
            position: particle.position,
        }
    }
}
