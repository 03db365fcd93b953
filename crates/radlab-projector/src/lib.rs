//! # radlab-projector
//!
//! The projector view: a small nucleus, a ring of nearby atoms and the
//! decay procedures that mutate them.
//!
//! Data mutation is atomic and happens when a step executes. What moves
//! afterwards is purely presentational: [`Transient`]s interpolate a pose
//! over time, and delayed ionizations wait in a cancellable
//! [`IonizationQueue`] keyed by absolute clock time.
//!
//! ## Key Types
//!
//! - [`Nucleus`]: protons and neutrons, rebuilt on reset
//! - [`AtomCluster`]: nearby atoms with electron shells
//! - [`DecayStateMachine`]: `Idle` / `Playing` / `Paused` with start, pause, resume, step, reset
//! - [`ProjectorSettings`]: layout and timing of every procedure

pub mod atoms;
pub mod machine;
pub mod nucleus;
pub mod schedule;
pub mod settings;
pub mod transient;

pub use atoms::{AtomCluster, NearbyAtom};
pub use machine::{DecayStateMachine, Ionization, MachineState, ProjectorAdvance};
pub use nucleus::{Nucleon, Nucleus};
pub use schedule::{IonizationQueue, IonizationTarget, PendingIonization};
pub use settings::{
    AlphaProcedure, AtomLayout, BetaProcedure, GammaProcedure, NucleusLayout, ProjectorSettings,
    ShellLayout,
};
pub use transient::{Pose, Transient, TransientKind};
