//! Simulation engine.
//!
//! Owns all lab state and exposes the operations a renderer or UI needs:
//! `tick`, read accessors, configuration and projector commands, shield
//! placement, and hooks for detection cues and telemetry sinks.
//!
//! Tick order:
//!
//! ```text
//! clock → spawn → kinematics → attenuation → scoring → retirement
//!       → projector transients → due ionizations → dose rate → flush
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use radlab_io::{validate_setup, LabSetup};
use radlab_math::Vec3;
use radlab_projector::{AtomCluster, DecayStateMachine, Ionization, Nucleus, Pose, Transient};
use radlab_shielding::{AttenuationModel, DetectorVolume, Shield, ShieldDatabase, ShieldRegistry};
use radlab_telemetry::{EventBus, EventKind, EventSink, SimulationEvent};
use radlab_transport::{
    ConfigPatch, DetectionEvent, EmissionSource, LabGeometry, Particle, ParticlePool,
    RetiredParticle, ScoreState, Scorer, SimulationConfig, TransportConstants,
};
use radlab_types::constants::DEFAULT_FRAME_DT;
use radlab_types::{DecayKind, ParticleId, RadlabResult, ShieldId, TransientId};

use crate::clock::SimulationClock;

/// Callback invoked exactly once per scored detection (the Geiger click).
pub trait DetectionCue: Send {
    fn on_detection(&mut self, event: &DetectionEvent);
}

impl<F> DetectionCue for F
where
    F: FnMut(&DetectionEvent) + Send,
{
    fn on_detection(&mut self, event: &DetectionEvent) {
        self(event)
    }
}

/// What one tick did, for HUDs and renderers.
#[derive(Debug, Clone, Default)]
pub struct TickSummary {
    pub tick: u64,
    /// Clock time after the tick (seconds).
    pub time: f64,
    pub dt: f64,
    pub emitted: Vec<ParticleId>,
    /// Knock-on electrons as `(electron, parent photon)`.
    pub secondaries: Vec<(ParticleId, ParticleId)>,
    pub detections: Vec<DetectionEvent>,
    /// Renderers drop meshes and trail lines for these ids.
    pub retired: Vec<RetiredParticle>,
    pub completed_transients: Vec<TransientId>,
    pub ionizations: Vec<Ionization>,
    pub live_particles: usize,
    pub counts: u64,
    pub accumulated_dose: f64,
    /// Dose rate over the window since the previous tick, per hour.
    pub dose_rate: f64,
}

/// One radiation lab: transport bench plus decay projector.
pub struct Simulation {
    config: SimulationConfig,
    geometry: LabGeometry,
    materials: ShieldDatabase,
    pool: ParticlePool,
    attenuation: Box<dyn AttenuationModel>,
    scorer: Scorer,
    projector: DecayStateMachine,
    clock: SimulationClock,
    rng: StdRng,
    bus: EventBus,
    cues: Vec<Box<dyn DetectionCue>>,
    dose_rate: f64,
}

impl Simulation {
    /// Validates `setup` and builds a lab from it.
    pub fn from_setup(setup: &LabSetup) -> RadlabResult<Self> {
        let materials = ShieldDatabase::with_defaults();
        validate_setup(setup, &materials)?;

        let mut shields = ShieldRegistry::new();
        for placement in &setup.shields {
            shields.place(materials.require(&placement.material)?, placement.position);
        }
        let geometry = LabGeometry::new(
            EmissionSource::new(setup.source.position, setup.source.axis),
            shields,
            DetectorVolume::from_center_size(setup.detector.center, setup.detector.size),
        );

        let mut rng = StdRng::seed_from_u64(setup.seed);
        let projector = DecayStateMachine::new(setup.projector.clone(), &mut rng);

        tracing::debug!(
            seed = setup.seed,
            shields = geometry.shields.len(),
            particle = %setup.config.particle_type,
            "simulation built"
        );

        Ok(Self {
            config: setup.config.sanitized(),
            geometry,
            materials,
            pool: ParticlePool::new(setup.transport.clone()),
            attenuation: Box::new(setup.attenuation.clone()),
            scorer: Scorer::new(setup.scoring.clone()),
            projector,
            clock: SimulationClock::new(DEFAULT_FRAME_DT),
            rng,
            bus: EventBus::new(),
            cues: Vec::new(),
            dose_rate: 0.0,
        })
    }

    /// Replaces the attenuation model.
    pub fn with_attenuation(mut self, model: Box<dyn AttenuationModel>) -> Self {
        self.attenuation = model;
        self
    }

    // ─── Tick ─────────────────────────────────────────────────

    /// Advances transport and projector by one logical step.
    ///
    /// `None` advances the clock by one default frame.
    pub fn tick(&mut self, dt: Option<f64>) -> TickSummary {
        let reading = self.clock.tick(dt);
        let tick = reading.frame;
        self.emit(tick, EventKind::TickBegin { sim_time: reading.now });

        let step = self.pool.step(
            &self.config,
            &self.geometry,
            self.attenuation.as_ref(),
            &mut self.scorer,
            &mut self.rng,
        );

        for &id in &step.emitted {
            self.emit(
                tick,
                EventKind::ParticleEmitted {
                    id,
                    particle: self.config.particle_type,
                },
            );
        }

        let first_count = self.scorer.state.counts - step.detections.len() as u64;
        for (i, event) in step.detections.iter().enumerate() {
            for cue in &mut self.cues {
                cue.on_detection(event);
            }
            self.emit(
                tick,
                EventKind::Detection {
                    id: event.particle,
                    particle: event.kind,
                    dose: event.dose,
                    counts: first_count + i as u64 + 1,
                },
            );
        }

        for r in &step.retired {
            self.emit(
                tick,
                EventKind::ParticleRetired {
                    id: r.id,
                    reason: r.reason,
                    had_trail: r.had_trail,
                },
            );
        }
        for &(id, parent) in &step.secondaries {
            self.emit(tick, EventKind::SecondarySpawned { id, parent });
        }

        let advance = self.projector.advance(reading.dt as f32, reading.now, &mut self.rng);
        for &id in &advance.completed {
            self.emit(tick, EventKind::TransientCompleted { id });
        }
        for ionization in &advance.ionizations {
            self.emit(
                tick,
                EventKind::Ionization {
                    atom: ionization.atom,
                    electrons_left: ionization.electrons_left,
                },
            );
        }

        self.dose_rate = self.scorer.state.sample_dose_rate(reading.now);

        self.emit(
            tick,
            EventKind::TickEnd {
                live_particles: self.pool.len() as u32,
                transients: self.projector.transients().len() as u32,
            },
        );
        self.bus.flush();

        TickSummary {
            tick,
            time: reading.now,
            dt: reading.dt,
            emitted: step.emitted,
            secondaries: step.secondaries,
            detections: step.detections,
            retired: step.retired,
            completed_transients: advance.completed,
            ionizations: advance.ionizations,
            live_particles: self.pool.len(),
            counts: self.scorer.state.counts,
            accumulated_dose: self.scorer.state.accumulated_dose,
            dose_rate: self.dose_rate,
        }
    }

    /// Runs `ticks` default frames and returns the last summary.
    pub fn run(&mut self, ticks: u64) -> Option<TickSummary> {
        (0..ticks).map(|_| self.tick(None)).last()
    }

    // ─── Read accessors ───────────────────────────────────────

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        self.pool.particles()
    }

    pub fn transport_constants(&self) -> &TransportConstants {
        self.pool.constants()
    }

    pub fn counts(&self) -> u64 {
        self.scorer.state.counts
    }

    pub fn accumulated_dose(&self) -> f64 {
        self.scorer.state.accumulated_dose
    }

    /// Dose rate sampled by the last tick.
    pub fn dose_rate(&self) -> f64 {
        self.dose_rate
    }

    pub fn score(&self) -> &ScoreState {
        &self.scorer.state
    }

    pub fn geometry(&self) -> &LabGeometry {
        &self.geometry
    }

    pub fn shields(&self) -> &ShieldRegistry {
        &self.geometry.shields
    }

    pub fn detector(&self) -> &DetectorVolume {
        &self.geometry.detector
    }

    pub fn materials(&self) -> &ShieldDatabase {
        &self.materials
    }

    pub fn projector(&self) -> &DecayStateMachine {
        &self.projector
    }

    pub fn nucleus(&self) -> &Nucleus {
        self.projector.nucleus()
    }

    pub fn atoms(&self) -> &AtomCluster {
        self.projector.atoms()
    }

    pub fn transients(&self) -> &[Transient] {
        self.projector.transients()
    }

    pub fn transient_poses(&self) -> Vec<(TransientId, Pose)> {
        self.projector.transient_poses()
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn attenuation_model(&self) -> &str {
        self.attenuation.name()
    }

    // ─── Transport commands ───────────────────────────────────

    /// Applies a partial configuration update, clamped at the boundary.
    pub fn set_config(&mut self, patch: &ConfigPatch) {
        self.config.apply(patch);
        tracing::debug!(config = ?self.config, "configuration updated");
    }

    /// Clears counts and dose; the next dose-rate window starts now.
    pub fn reset_score(&mut self) {
        self.scorer.state.reset(self.clock.now());
        self.dose_rate = 0.0;
        self.emit_now(EventKind::ScoreReset);
    }

    /// Moves the source. Particles already in flight are unaffected.
    pub fn set_source_position(&mut self, position: Vec3) {
        self.geometry.source.position = position;
    }

    /// Retires every live particle.
    pub fn clear_particles(&mut self) -> Vec<RetiredParticle> {
        let retired = self.pool.clear();
        let tick = self.clock.frames();
        for r in &retired {
            self.emit(
                tick,
                EventKind::ParticleRetired {
                    id: r.id,
                    reason: r.reason,
                    had_trail: r.had_trail,
                },
            );
        }
        self.bus.flush();
        retired
    }

    /// Places a shield of the named material centred at `position`.
    pub fn place_shield(&mut self, material: &str, position: Vec3) -> RadlabResult<ShieldId> {
        let material = self.materials.require(material)?;
        Ok(self.geometry.shields.place(material, position))
    }

    /// Drags a shield to a new position.
    pub fn move_shield(&mut self, id: ShieldId, position: Vec3) -> RadlabResult<()> {
        self.geometry.shields.move_to(id, position)
    }

    pub fn remove_shield(&mut self, id: ShieldId) -> RadlabResult<Shield> {
        self.geometry.shields.remove(id)
    }

    // ─── Projector commands ───────────────────────────────────

    /// Starts `kind`, cancelling any run in flight. Returns whether step 0 applied.
    pub fn start_decay(&mut self, kind: DecayKind) -> bool {
        let applied = self.projector.start(kind, self.clock.now(), &mut self.rng);
        self.emit_now(EventKind::DecayStarted { decay: kind });
        self.emit_now(EventKind::DecayStep {
            decay: kind,
            step: 0,
            applied,
        });
        applied
    }

    pub fn pause_decay(&mut self) {
        self.projector.pause();
    }

    pub fn resume_decay(&mut self) {
        self.projector.resume();
    }

    /// Runs the next step of the selected kind once.
    pub fn step_decay(&mut self) -> bool {
        let step = self.projector.step_index();
        let applied = self.projector.step(self.clock.now(), &mut self.rng);
        self.emit_now(EventKind::DecayStep {
            decay: self.projector.kind(),
            step,
            applied,
        });
        applied
    }

    /// Cancels everything in flight and rebuilds nucleus and atoms.
    pub fn reset_projector(&mut self) {
        self.projector.reset(&mut self.rng);
        self.emit_now(EventKind::ProjectorReset);
    }

    pub fn select_decay(&mut self, kind: DecayKind) {
        self.projector.select(kind);
    }

    pub fn set_decay_speed(&mut self, multiplier: f32) {
        self.projector.set_speed(multiplier);
    }

    // ─── Hooks ────────────────────────────────────────────────

    pub fn add_detection_cue(&mut self, cue: Box<dyn DetectionCue>) {
        self.cues.push(cue);
    }

    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.bus.add_sink(sink);
    }

    pub fn set_telemetry_enabled(&mut self, enabled: bool) {
        self.bus.set_enabled(enabled);
    }

    /// Flushes and finalizes every telemetry sink.
    pub fn finalize(&mut self) {
        self.bus.finalize();
    }

    fn emit(&self, tick: u64, kind: EventKind) {
        self.bus.emit(SimulationEvent::new(tick, kind));
    }

    /// Emits a command event tagged with the next tick and flushes it.
    fn emit_now(&mut self, kind: EventKind) {
        self.emit(self.clock.frames(), kind);
        self.bus.flush();
    }
}

