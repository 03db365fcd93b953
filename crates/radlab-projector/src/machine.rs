//! Decay state machine.
//!
//! ```text
//!            start(kind)             pause()
//!   Idle ───────────────► Playing ───────────► Paused
//!    ▲                      ▲  ◄──────────────   │
//!    │        reset()       │     resume()       │
//!    └──────────────────────┴────────────────────┘
//! ```
//!
//! `step()` runs the next step of the current kind without playing.
//! Only step 0 is defined for each kind; later steps are no-ops.
//! Precondition misses (too few nucleons, no electrons left) are silent
//! and only logged at debug level.

use rand::Rng;
use radlab_math::Vec3;
use radlab_types::constants::MIN_DECAY_SPEED;
use radlab_types::{AtomId, DecayKind, TransientId};
use serde::{Deserialize, Serialize};

use crate::atoms::AtomCluster;
use crate::nucleus::Nucleus;
use crate::schedule::{IonizationQueue, IonizationTarget};
use crate::settings::ProjectorSettings;
use crate::transient::{Pose, Transient, TransientKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineState {
    Idle,
    Playing,
    Paused,
}

/// One electron knocked off a nearby atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ionization {
    pub atom: AtomId,
    pub electrons_left: u32,
    /// Clock time the ionization was scheduled for.
    pub scheduled_at: f64,
}

/// What happened to the projector during one tick.
#[derive(Debug, Clone, Default)]
pub struct ProjectorAdvance {
    /// Transients that reached fraction 1 this tick, already removed.
    pub completed: Vec<TransientId>,
    pub ionizations: Vec<Ionization>,
}

/// Nucleus, atoms and in-flight decay of the projector view.
pub struct DecayStateMachine {
    settings: ProjectorSettings,
    kind: DecayKind,
    speed: f32,
    state: MachineState,
    step_index: u32,
    nucleus: Nucleus,
    atoms: AtomCluster,
    transients: Vec<Transient>,
    queue: IonizationQueue,
    next_transient: u64,
}

impl DecayStateMachine {
    /// Builds a fresh nucleus and atom cluster. The selected kind is alpha.
    pub fn new<R: Rng + ?Sized>(settings: ProjectorSettings, rng: &mut R) -> Self {
        let nucleus = Nucleus::build(&settings.nucleus, rng);
        let atoms = AtomCluster::build(&settings.atoms);
        Self {
            settings,
            kind: DecayKind::Alpha,
            speed: 1.0,
            state: MachineState::Idle,
            step_index: 0,
            nucleus,
            atoms,
            transients: Vec::new(),
            queue: IonizationQueue::new(),
            next_transient: 0,
        }
    }

    // ─── Accessors ────────────────────────────────────────────

    pub fn settings(&self) -> &ProjectorSettings {
        &self.settings
    }

    pub fn kind(&self) -> DecayKind {
        self.kind
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == MachineState::Playing
    }

    /// Index of the next step `step()` would run.
    pub fn step_index(&self) -> u32 {
        self.step_index
    }

    pub fn nucleus(&self) -> &Nucleus {
        &self.nucleus
    }

    pub fn atoms(&self) -> &AtomCluster {
        &self.atoms
    }

    pub fn transients(&self) -> &[Transient] {
        &self.transients
    }

    /// Current interpolated pose of every transient.
    pub fn transient_poses(&self) -> Vec<(TransientId, Pose)> {
        self.transients
            .iter()
            .map(|t| (t.id, t.pose(self.speed)))
            .collect()
    }

    pub fn pending_ionizations(&self) -> usize {
        self.queue.len()
    }

    pub fn queue(&self) -> &IonizationQueue {
        &self.queue
    }

    // ─── Commands ─────────────────────────────────────────────

    /// Selects the kind `step()` will run. Switching kinds abandons the
    /// current run: transients and pending ionizations are cancelled.
    pub fn select(&mut self, kind: DecayKind) {
        if kind == self.kind {
            return;
        }
        self.cancel_run();
        self.kind = kind;
        self.step_index = 0;
        self.state = MachineState::Idle;
    }

    /// Sets the speed multiplier. Non-finite values are ignored.
    pub fn set_speed(&mut self, multiplier: f32) {
        if multiplier.is_finite() {
            self.speed = multiplier.max(MIN_DECAY_SPEED);
        }
    }

    /// Cancels the previous run, starts `kind` and runs its step 0.
    ///
    /// The step index stays at 0, so a following `step()` runs step 0 again.
    /// Returns whether step 0 changed anything.
    pub fn start<R: Rng + ?Sized>(&mut self, kind: DecayKind, now: f64, rng: &mut R) -> bool {
        self.cancel_run();
        self.kind = kind;
        self.step_index = 0;
        self.state = MachineState::Playing;
        self.execute(0, now, rng)
    }

    /// Freezes every transient. Pending ionizations keep their times.
    pub fn pause(&mut self) {
        self.state = MachineState::Paused;
        for t in &mut self.transients {
            t.paused = true;
        }
    }

    /// Unfreezes every transient.
    pub fn resume(&mut self) {
        self.state = MachineState::Playing;
        for t in &mut self.transients {
            t.paused = false;
        }
    }

    /// Runs the next step of the current kind once, without playing.
    pub fn step<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) -> bool {
        if self.state == MachineState::Playing {
            self.state = MachineState::Idle;
        }
        let index = self.step_index;
        self.step_index += 1;
        self.execute(index, now, rng)
    }

    /// Cancels everything in flight and rebuilds nucleus and atoms.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cancel_run();
        self.nucleus = Nucleus::build(&self.settings.nucleus, rng);
        self.atoms = AtomCluster::build(&self.settings.atoms);
        self.step_index = 0;
        self.state = MachineState::Idle;
    }

    /// Replaces the nucleus, keeping everything else.
    pub fn set_nucleus(&mut self, nucleus: Nucleus) {
        self.nucleus = nucleus;
    }

    /// Advances transients by `dt` and fires ionizations due at `now`.
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f32, now: f64, rng: &mut R) -> ProjectorAdvance {
        let mut report = ProjectorAdvance::default();
        let speed = self.speed;

        for t in &mut self.transients {
            t.advance(dt);
        }
        self.transients.retain(|t| {
            if t.is_complete(speed) {
                report.completed.push(t.id);
                false
            } else {
                true
            }
        });

        for pending in self.queue.pop_due(now) {
            if let Some(ionization) = self.ionize(pending.target, pending.fire_at, rng) {
                report.ionizations.push(ionization);
            }
        }
        report
    }

    // ─── Procedures ───────────────────────────────────────────

    fn cancel_run(&mut self) {
        let cancelled = self.queue.cancel_all();
        if cancelled > 0 || !self.transients.is_empty() {
            tracing::debug!(
                transients = self.transients.len(),
                ionizations = cancelled,
                "decay run cancelled"
            );
        }
        self.transients.clear();
    }

    fn execute<R: Rng + ?Sized>(&mut self, index: u32, now: f64, rng: &mut R) -> bool {
        if index != 0 {
            tracing::debug!(kind = %self.kind, step = index, "no such decay step");
            return false;
        }
        match self.kind {
            DecayKind::Alpha => self.alpha_step(now),
            DecayKind::Beta => self.beta_step(now, rng),
            DecayKind::Gamma => self.gamma_step(now),
        }
    }

    fn alpha_step(&mut self, now: f64) -> bool {
        let Some(nucleons) = self.nucleus.emit_alpha() else {
            tracing::debug!(
                protons = self.nucleus.proton_count(),
                neutrons = self.nucleus.neutron_count(),
                "alpha decay needs two protons and two neutrons"
            );
            return false;
        };
        let p = self.settings.alpha.clone();
        self.spawn(
            TransientKind::AlphaEjecta { nucleons },
            Pose::new(self.nucleus.origin, 1.0),
            Pose::new(p.target, 1.0),
            p.duration,
        );
        self.schedule_ionization(now, p.ionization_delay, IonizationTarget::First);
        true
    }

    fn beta_step<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) -> bool {
        let Some(proton) = self.nucleus.convert_neutron() else {
            tracing::debug!("beta decay needs a neutron");
            return false;
        };
        let p = self.settings.beta.clone();
        let direction = Vec3::new(
            rng.gen::<f32>() - 0.5,
            rng.gen::<f32>() - 0.2,
            rng.gen::<f32>() - 0.5,
        )
        .try_normalize()
        .unwrap_or(Vec3::Y);
        let start = self.nucleus.origin + proton.position;
        self.spawn(
            TransientKind::Electron,
            Pose::new(start, p.electron_scale),
            Pose::new(start + direction * p.range, p.electron_scale),
            p.duration,
        );
        self.schedule_ionization(now, p.ionization_delay, IonizationTarget::Random);
        true
    }

    fn gamma_step(&mut self, now: f64) -> bool {
        let p = self.settings.gamma.clone();
        let origin = self.nucleus.origin;
        self.spawn(
            TransientKind::Photon,
            Pose::new(origin, p.start_scale),
            Pose::new(origin, p.end_scale),
            p.duration,
        );
        self.schedule_ionization(now, p.ionization_delay, IonizationTarget::Random);
        true
    }

    fn spawn(&mut self, kind: TransientKind, start: Pose, end: Pose, duration: f32) -> TransientId {
        let id = TransientId(self.next_transient);
        self.next_transient += 1;
        self.transients.push(Transient::new(id, kind, start, end, duration));
        id
    }

    fn schedule_ionization(&mut self, now: f64, delay: f32, target: IonizationTarget) {
        let fire_at = now + (delay / self.speed) as f64;
        self.queue.schedule(fire_at, target);
    }

    fn ionize<R: Rng + ?Sized>(&mut self, target: IonizationTarget, scheduled_at: f64, rng: &mut R) -> Option<Ionization> {
        let chosen = match target {
            IonizationTarget::First => self.atoms.first_with_electrons(),
            IonizationTarget::Random => self.atoms.random_with_electrons(rng),
        };
        let Some(id) = chosen else {
            tracing::debug!("no electrons left to ionize");
            return None;
        };
        let atom = self.atoms.get_mut(id)?;
        atom.ionize()?;
        Some(Ionization {
            atom: id,
            electrons_left: atom.electron_count() as u32,
            scheduled_at,
        })
    }
}
