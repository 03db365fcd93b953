//! Benchmark runner: executes scenarios and collects metrics.

use std::time::Instant;

use radlab_sim::Simulation;
use radlab_telemetry::RetireReason;
use radlab_types::RadlabResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario.
    pub fn run(scenario: &Scenario) -> RadlabResult<BenchmarkMetrics> {
        let mut sim = Simulation::from_setup(&scenario.setup)?;

        let mut tick_times: Vec<f64> = Vec::with_capacity(scenario.ticks as usize);
        let mut emitted = 0u64;
        let mut secondaries = 0u64;
        let mut absorbed = 0u64;
        let mut peak_live = 0usize;

        let total_start = Instant::now();
        for _ in 0..scenario.ticks {
            let start = Instant::now();
            let summary = sim.tick(None);
            tick_times.push(start.elapsed().as_secs_f64());

            emitted += summary.emitted.len() as u64;
            secondaries += summary.secondaries.len() as u64;
            absorbed += summary
                .retired
                .iter()
                .filter(|r| r.reason == RetireReason::Absorbed)
                .count() as u64;
            peak_live = peak_live.max(summary.live_particles);
        }
        let total_wall_time = total_start.elapsed().as_secs_f64();

        let avg_tick = if tick_times.is_empty() {
            0.0
        } else {
            tick_times.iter().sum::<f64>() / tick_times.len() as f64
        };
        let max_tick = tick_times.iter().copied().fold(0.0, f64::max);

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            ticks: scenario.ticks,
            total_wall_time,
            avg_tick_time: avg_tick,
            max_tick_time: max_tick,
            emitted,
            secondaries,
            counts: sim.counts(),
            absorbed,
            accumulated_dose: sim.accumulated_dose(),
            peak_live_particles: peak_live,
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> RadlabResult<Vec<BenchmarkMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)))
            .collect()
    }
}
