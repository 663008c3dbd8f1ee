use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use bridge_crossing::config::AppConfig;
use bridge_crossing::io::{ConsoleSink, ConsoleSource};
use bridge_crossing::runner::GameRunner;

/// Cross a randomly generated bridge lane by lane.
#[derive(Parser)]
#[command(name = "bridge-crossing", about = "Cross a randomly generated bridge lane by lane")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Seed the bridge generator for a reproducible layout
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut runner = GameRunner::new(config.bridge, ConsoleSource, ConsoleSink);
    runner.run(move || rng.random_range(0..=1))?;
    Ok(())
}
