//! Particle pool: owns every live particle and runs the transport frame.
//!
//! One call to [`ParticlePool::step`] is one logical frame:
//!
//! ```text
//! spawn → kinematics → attenuation → scoring → retirement
//! ```
//!
//! Knock-on electrons produced during the frame join the pool after
//! retirement and move from the next frame on.

use rand::Rng;
use radlab_math::Vec3;
use radlab_shielding::AttenuationModel;
use radlab_telemetry::RetireReason;
use radlab_types::{ParticleId, ParticleKind};

use crate::config::{SimulationConfig, TransportConstants};
use crate::geometry::{EmissionSource, LabGeometry};
use crate::particle::Particle;
use crate::scoring::{DetectionEvent, Scorer};

/// A particle removed from the pool during a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetiredParticle {
    pub id: ParticleId,
    pub kind: ParticleKind,
    pub reason: RetireReason,
    /// Renderer must also drop the trail line keyed by this id.
    pub had_trail: bool,
}

/// Everything that happened in one transport frame.
#[derive(Debug, Clone, Default)]
pub struct TransportStep {
    /// Particles emitted by the source.
    pub emitted: Vec<ParticleId>,
    /// Knock-on electrons as `(electron, parent photon)`.
    pub secondaries: Vec<(ParticleId, ParticleId)>,
    /// Scored counts, in pool order.
    pub detections: Vec<DetectionEvent>,
    pub retired: Vec<RetiredParticle>,
}

/// Pool of live particles.
pub struct ParticlePool {
    particles: Vec<Particle>,
    next_id: u64,
    constants: TransportConstants,
}

impl ParticlePool {
    /// Creates an empty pool.
    pub fn new(constants: TransportConstants) -> Self {
        Self {
            particles: Vec::new(),
            next_id: 0,
            constants,
        }
    }

    pub fn constants(&self) -> &TransportConstants {
        &self.constants
    }

    /// Live particles, oldest first.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    fn allocate_id(&mut self) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emits one particle from `source` with the current configuration.
    pub fn emit<R: Rng + ?Sized>(
        &mut self,
        config: &SimulationConfig,
        source: &EmissionSource,
        rng: &mut R,
    ) -> ParticleId {
        let id = self.allocate_id();
        let c = &self.constants;
        let kind = config.particle_type;
        let direction = source.sample_direction(c.direction_spread, rng);
        let velocity = direction * c.base_speed(kind, config.energy);
        let life = c.initial_life(kind, config.energy);

        let mut particle = Particle::new(id, kind, source.position, velocity, life, config.intensity);
        if config.cloud_mode && !kind.is_photon() {
            particle = particle.with_trail(c.trail_length);
        }
        self.particles.push(particle);
        id
    }

    /// Knock-on electron kicked off a photon.
    fn knock_on<R: Rng + ?Sized>(&mut self, parent: ParticleId, position: Vec3, velocity: Vec3, rng: &mut R) -> ParticleId {
        let id = self.allocate_id();
        let c = &self.constants;
        let j = c.knock_on_jitter;
        let kick = Vec3::new(
            (rng.gen::<f32>() - 0.5) * 2.0 * j,
            (rng.gen::<f32>() - 0.5) * 2.0 * j,
            (rng.gen::<f32>() - 0.5) * 2.0 * j,
        );
        let mut electron = Particle::new(
            id,
            ParticleKind::Beta,
            position,
            velocity * c.knock_on_speed_fraction + kick,
            c.knock_on_life,
            c.knock_on_intensity,
        )
        .with_trail(c.trail_length);
        electron.parent = Some(parent);
        self.particles.push(electron);
        id
    }

    /// Synthetic Lorentz-like deflection `(v x B) * gain * energy_scale`.
    fn deflection(&self, velocity: Vec3, config: &SimulationConfig) -> Vec3 {
        let c = &self.constants;
        let field = Vec3::new(0.0, config.magnetic_field_strength * c.field_scale, 0.0);
        velocity.cross(field) * c.deflection_gain * c.energy_scale(config.energy)
    }

    /// Runs one transport frame.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        config: &SimulationConfig,
        geometry: &LabGeometry,
        attenuation: &dyn AttenuationModel,
        scorer: &mut Scorer,
        rng: &mut R,
    ) -> TransportStep {
        let mut report = TransportStep::default();

        // 1. Spawn
        if rng.gen::<f32>() < config.intensity * self.constants.emission_rate {
            report.emitted.push(self.emit(config, &geometry.source, rng));
        }

        let decrement = self.constants.life_decrement(config.medium);
        let knock_on_chance = self.constants.knock_on_rate * self.constants.energy_scale(config.energy);
        let mut knock_ons: Vec<(ParticleId, Vec3, Vec3)> = Vec::new();

        for i in 0..self.particles.len() {
            // 2. Kinematics
            if config.cloud_mode && self.particles[i].kind == ParticleKind::Beta {
                let dv = self.deflection(self.particles[i].velocity, config);
                self.particles[i].velocity += dv;
            }

            let p = &mut self.particles[i];
            p.previous_position = p.position;
            p.position += p.velocity;
            p.remaining_life -= decrement;

            if config.cloud_mode {
                if let Some(trail) = p.trail.as_mut() {
                    trail.push(p.position);
                }
            }

            // 3. Attenuation across the segment travelled this frame
            let result = attenuation.attenuate(
                p.kind,
                p.intensity,
                p.previous_position,
                p.position,
                &geometry.shields,
            );
            p.remaining_intensity = result.remaining;

            // 4. Scoring
            if result.absorbed {
                p.expire(RetireReason::Absorbed);
            } else {
                let outcome = scorer.score(p, result.remaining, config.intensity, &geometry.detector, rng);
                if let Some(event) = outcome.event {
                    report.detections.push(event);
                }
                if outcome.consumed {
                    p.expire(RetireReason::Detected);
                }
            }

            if config.cloud_mode && p.kind.is_photon() && rng.gen::<f32>() < knock_on_chance {
                knock_ons.push((p.id, p.position, p.velocity));
            }
        }

        // 5. Retirement
        let retired = &mut report.retired;
        self.particles.retain(|p| {
            if p.is_alive() {
                return true;
            }
            let reason = p.fate.unwrap_or(RetireReason::Expired);
            tracing::trace!(id = p.id.0, ?reason, "particle retired");
            retired.push(RetiredParticle {
                id: p.id,
                kind: p.kind,
                reason,
                had_trail: p.trail.is_some(),
            });
            false
        });

        for (parent, position, velocity) in knock_ons {
            let id = self.knock_on(parent, position, velocity, rng);
            report.secondaries.push((id, parent));
        }

        report
    }

    /// Removes every particle, reporting each as expired.
    pub fn clear(&mut self) -> Vec<RetiredParticle> {
        self.particles
            .drain(..)
            .map(|p| RetiredParticle {
                id: p.id,
                kind: p.kind,
                reason: RetireReason::Expired,
                had_trail: p.trail.is_some(),
            })
            .collect()
    }
}
