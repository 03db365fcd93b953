//! Simulation defaults shared by several crates.

/// Default wall-clock length of one logical frame (seconds). 1/60th of a second.
pub const DEFAULT_FRAME_DT: f64 = 1.0 / 60.0;

/// Lowest source energy accepted at the configuration boundary.
pub const MIN_ENERGY: f32 = 0.1;

/// Lowest projector speed multiplier accepted.
pub const MIN_DECAY_SPEED: f32 = 0.05;

/// Shortest window used when deriving a dose rate (seconds).
pub const MIN_DOSE_WINDOW: f64 = 0.001;

/// Seconds per hour, for dose-rate display.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;
