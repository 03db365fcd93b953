//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    pub ticks: u64,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per tick (seconds).
    pub avg_tick_time: f64,
    pub max_tick_time: f64,
    pub emitted: u64,
    /// Knock-on electrons spawned.
    pub secondaries: u64,
    pub counts: u64,
    pub absorbed: u64,
    pub accumulated_dose: f64,
    /// Largest number of particles alive after a tick.
    pub peak_live_particles: usize,
}

impl BenchmarkMetrics {
    /// Counts per emitted particle.
    pub fn detection_efficiency(&self) -> f64 {
        if self.emitted == 0 {
            0.0
        } else {
            self.counts as f64 / self.emitted as f64
        }
    }

    /// CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,ticks,total_wall_time_s,avg_tick_ms,max_tick_ms,emitted,secondaries,counts,absorbed,accumulated_dose,peak_live,efficiency".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{:.6},{:.4},{:.4},{},{},{},{},{:.6},{},{:.4}",
            self.scenario,
            self.ticks,
            self.total_wall_time,
            self.avg_tick_time * 1000.0,
            self.max_tick_time * 1000.0,
            self.emitted,
            self.secondaries,
            self.counts,
            self.absorbed,
            self.accumulated_dose,
            self.peak_live_particles,
            self.detection_efficiency(),
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
