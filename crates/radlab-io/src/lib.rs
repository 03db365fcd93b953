//! # radlab-io
//!
//! The lab setup contract and its validation.
//!
//! Defines the boundary type that external callers (CLI, tests, an
//! embedding UI) use to describe a lab to the simulation core.

pub mod contract;
pub mod validator;

pub use contract::{DetectorPlacement, LabSetup, ShieldPlacement, SourcePlacement};
pub use validator::validate_setup;
