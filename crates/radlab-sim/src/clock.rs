//! Shared, monotonic simulation clock.

use radlab_types::constants::DEFAULT_FRAME_DT;

/// The clock as seen by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockReading {
    /// Seconds since the clock started, after this tick's advance.
    pub now: f64,
    /// Seconds added by this tick.
    pub dt: f64,
    /// Tick index, starting at 0.
    pub frame: u64,
}

/// Advances by a caller-supplied delta or by one default frame.
#[derive(Debug, Clone)]
pub struct SimulationClock {
    now: f64,
    frames: u64,
    frame_dt: f64,
}

impl SimulationClock {
    /// Creates a clock at time zero. A non-positive `frame_dt` falls back to 1/60 s.
    pub fn new(frame_dt: f64) -> Self {
        let frame_dt = if frame_dt.is_finite() && frame_dt > 0.0 {
            frame_dt
        } else {
            DEFAULT_FRAME_DT
        };
        Self {
            now: 0.0,
            frames: 0,
            frame_dt,
        }
    }

    /// Current time (seconds).
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Ticks taken so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn frame_dt(&self) -> f64 {
        self.frame_dt
    }

    /// Takes one reading. `None` advances by the default frame; negative or
    /// non-finite deltas advance by zero so time never runs backwards.
    pub fn tick(&mut self, dt: Option<f64>) -> ClockReading {
        let dt = match dt {
            None => self.frame_dt,
            Some(d) if d.is_finite() && d > 0.0 => d,
            Some(_) => 0.0,
        };
        self.now += dt;
        let frame = self.frames;
        self.frames += 1;
        ClockReading {
            now: self.now,
            dt,
            frame,
        }
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_DT)
    }
}
