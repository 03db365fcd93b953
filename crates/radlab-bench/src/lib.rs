//! # radlab-bench
//!
//! Benchmark suite for the radlab engine.
//!
//! Provides 3 canonical lab scenarios, metric collection,
//! and CSV export for regression tracking.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
