//! radlab CLI: lab simulation, decay projector, benchmarking and validation.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "radlab")]
#[command(version, about = "radlab: radioactive decay and shielding lab")]
struct Cli {
    /// Log filter (error, warn, info, debug, trace or a full directive).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the transport bench from a setup file.
    Simulate {
        /// Path to a lab setup (TOML or JSON). Defaults to the built-in lab.
        #[arg(short, long)]
        config: Option<String>,

        /// Number of ticks to run.
        #[arg(short, long, default_value_t = 600)]
        ticks: u64,

        /// Override the RNG seed of the setup.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Override the particle type (alpha, beta, gamma).
        #[arg(short, long)]
        particle: Option<String>,

        /// Enable cloud chamber mode.
        #[arg(long)]
        cloud: bool,
    },

    /// Play a decay on the projector and report what happened.
    Decay {
        /// Decay kind (alpha, beta, gamma).
        #[arg(short, long, default_value = "alpha")]
        kind: String,

        /// Number of ticks to run after starting.
        #[arg(short, long, default_value_t = 180)]
        ticks: u64,

        /// Projector speed multiplier.
        #[arg(long, default_value_t = 1.0)]
        speed: f32,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (alpha_bench, beta_cloud, gamma_lead, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a lab setup file.
    Validate {
        /// Path to setup file (.toml or .json).
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Simulate {
            config,
            ticks,
            seed,
            particle,
            cloud,
        } => commands::simulate(config.as_deref(), ticks, seed, particle.as_deref(), cloud),
        Commands::Decay { kind, ticks, speed } => commands::decay(&kind, ticks, speed),
        Commands::Benchmark { scenario, output } => commands::benchmark(&scenario, output.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
