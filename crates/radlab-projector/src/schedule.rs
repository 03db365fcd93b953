//! Delayed ionizations.
//!
//! Each entry fires at an absolute time on the simulation clock. The
//! queue is polled once per tick and cleared wholesale on reset or on a
//! new decay start, so a cancelled ionization can never fire.

use serde::{Deserialize, Serialize};

/// Which atom a pending ionization will hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IonizationTarget {
    /// First atom in layout order that still has electrons.
    First,
    /// Uniform choice among atoms that still have electrons.
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingIonization {
    /// Absolute clock time (seconds).
    pub fire_at: f64,
    pub target: IonizationTarget,
    /// Insertion order, breaks ties on `fire_at`.
    pub sequence: u64,
}

/// Cancellable queue of pending ionizations ordered by trigger time.
#[derive(Debug, Clone, Default)]
pub struct IonizationQueue {
    pending: Vec<PendingIonization>,
    next_sequence: u64,
}

impl IonizationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules an ionization at absolute time `fire_at`.
    pub fn schedule(&mut self, fire_at: f64, target: IonizationTarget) {
        let entry = PendingIonization {
            fire_at,
            target,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        let index = self
            .pending
            .partition_point(|p| p.fire_at.total_cmp(&fire_at).is_le());
        self.pending.insert(index, entry);
    }

    /// Removes and returns every entry due at or before `now`, earliest first.
    pub fn pop_due(&mut self, now: f64) -> Vec<PendingIonization> {
        let due = self.pending.partition_point(|p| p.fire_at <= now);
        self.pending.drain(..due).collect()
    }

    /// Drops every pending entry. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    /// Earliest trigger time, if any.
    pub fn next_due(&self) -> Option<f64> {
        self.pending.first().map(|p| p.fire_at)
    }

    pub fn pending(&self) -> &[PendingIonization] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
