//! CLI command implementations.

use radlab_bench::{BenchmarkMetrics, BenchmarkRunner, Scenario, ScenarioKind};
use radlab_io::{validate_setup, LabSetup};
use radlab_shielding::ShieldDatabase;
use radlab_sim::Simulation;
use radlab_telemetry::{RetireReason, TracingSink};
use radlab_transport::ConfigPatch;
use radlab_types::{DecayKind, ParticleKind};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Run the transport bench from a setup file.
pub fn simulate(
    config_path: Option<&str>,
    ticks: u64,
    seed: Option<u64>,
    particle: Option<&str>,
    cloud: bool,
) -> CommandResult {
    println!("radlab Simulation");
    println!("─────────────────");

    let mut setup = match config_path {
        Some(path) => {
            println!("Config:    {path}");
            LabSetup::load(path)?
        }
        None => {
            println!("Config:    built-in lab");
            LabSetup::default()
        }
    };
    if let Some(seed) = seed {
        setup.seed = seed;
    }

    let mut sim = Simulation::from_setup(&setup)?;
    sim.add_sink(Box::new(TracingSink::new()));
    tracing::info!(seed = setup.seed, ticks, "simulation started");

    let particle_type = match particle {
        Some(name) => Some(ParticleKind::from_name(name).ok_or_else(|| {
            format!("Unknown particle type: '{name}'. Available: alpha, beta, gamma")
        })?),
        None => None,
    };
    sim.set_config(&ConfigPatch {
        particle_type,
        cloud_mode: cloud.then_some(true),
        ..ConfigPatch::default()
    });

    let c = sim.config();
    println!(
        "Source:    {} @ energy {:.1}, intensity {:.1}, {} medium{}",
        c.particle_type,
        c.energy,
        c.intensity,
        c.medium.name(),
        if c.cloud_mode { ", cloud chamber" } else { "" }
    );
    println!("Shields:   {}", sim.shields().len());
    println!("Ticks:     {ticks}");
    println!();

    let mut emitted = 0usize;
    let mut absorbed = 0usize;
    let mut secondaries = 0usize;
    let mut last = None;
    for _ in 0..ticks {
        let summary = sim.tick(None);
        emitted += summary.emitted.len();
        secondaries += summary.secondaries.len();
        absorbed += summary
            .retired
            .iter()
            .filter(|r| r.reason == RetireReason::Absorbed)
            .count();
        last = Some(summary);
    }
    sim.finalize();

    println!("Emitted:       {emitted}");
    println!("Knock-ons:     {secondaries}");
    println!("Absorbed:      {absorbed}");
    println!("Counts:        {}", sim.counts());
    println!("Dose:          {:.4}", sim.accumulated_dose());
    if let Some(summary) = last {
        println!("Dose rate:     {:.2} /h", summary.dose_rate);
        println!("Live at end:   {}", summary.live_particles);
        println!("Sim time:      {:.2}s", summary.time);
    }
    Ok(())
}

/// Play one decay on the projector.
pub fn decay(kind_name: &str, ticks: u64, speed: f32) -> CommandResult {
    println!("radlab Decay Projector");
    println!("──────────────────────");

    let kind = DecayKind::from_name(kind_name)
        .ok_or_else(|| format!("Unknown decay kind: '{kind_name}'. Available: alpha, beta, gamma"))?;

    let mut setup = LabSetup::empty_bench();
    setup.config.intensity = 0.0;
    let mut sim = Simulation::from_setup(&setup)?;
    sim.add_sink(Box::new(TracingSink::new()));
    sim.set_decay_speed(speed);

    let before = (sim.nucleus().proton_count(), sim.nucleus().neutron_count());
    let applied = sim.start_decay(kind);
    println!("Decay:     {kind} (speed x{:.2})", sim.projector().speed());
    println!(
        "Nucleus:   {}p {}n -> {}p {}n{}",
        before.0,
        before.1,
        sim.nucleus().proton_count(),
        sim.nucleus().neutron_count(),
        if applied { "" } else { " (precondition not met)" }
    );

    let mut completed = 0usize;
    for _ in 0..ticks {
        let summary = sim.tick(None);
        completed += summary.completed_transients.len();
        for ionization in &summary.ionizations {
            println!(
                "  t={:.2}s  ionized atom {} ({} electrons left)",
                summary.time, ionization.atom.0, ionization.electrons_left
            );
        }
    }
    sim.finalize();

    println!("Transients completed: {completed}");
    println!("Transients in flight: {}", sim.transients().len());
    println!("Electrons remaining:  {}", sim.atoms().total_electrons());
    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(scenario_name: &str, output_path: Option<&str>) -> CommandResult {
    println!("radlab Benchmark Suite");
    println!("══════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                eprintln!("Unknown scenario: {scenario_name}");
                eprintln!("Available: {}, all", available.join(", "));
                return Err("Unknown scenario".into());
            }
        }
    };

    let mut all_metrics = Vec::new();
    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);
        println!(
            "Running: {} ({}, {} ticks)",
            kind.name(),
            scenario.setup.config.particle_type,
            scenario.ticks
        );

        let metrics = BenchmarkRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:   {:.3}s", metrics.total_wall_time);
        println!("  Avg tick:    {:.3}ms", metrics.avg_tick_time * 1000.0);
        println!("  Emitted:     {}", metrics.emitted);
        println!("  Counts:      {}", metrics.counts);
        println!("  Dose:        {:.4}", metrics.accumulated_dose);
        println!();

        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        let csv = BenchmarkMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        tracing::info!(path, rows = all_metrics.len(), "benchmark csv written");
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Validate a lab setup file.
pub fn validate(path: &str) -> CommandResult {
    println!("radlab Validator");
    println!("────────────────");
    println!();

    let setup = LabSetup::load(path)?;
    match validate_setup(&setup, &ShieldDatabase::with_defaults()) {
        Ok(()) => println!(
            "✅ Setup is valid ({} shields, seed {}).",
            setup.shields.len(),
            setup.seed
        ),
        Err(e) => {
            println!("❌ Setup validation failed: {e}");
            return Err(e.into());
        }
    }
    Ok(())
}
