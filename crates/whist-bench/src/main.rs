use std::path::PathBuf;

use clap::Parser;

use whist_bench::config::{SimulationConfig, TrumpMode};
use whist_bench::logging::init_logging;
use whist_bench::sim::TrickRunner;

/// Single-trick simulation harness for Whist bots.
#[derive(Debug, Parser)]
#[command(
    name = "whist-bench",
    author,
    version,
    about = "Deterministic single-trick simulation harness"
)]
struct Cli {
    /// Path to a YAML configuration file (optional; flags override it).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the run identifier.
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of tricks to play.
    #[arg(long, value_name = "TRICKS")]
    tricks: Option<usize>,

    /// Override the RNG seed for deal generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Override the trump mode (none, rotate, or a suit name).
    #[arg(long, value_name = "MODE")]
    trumps: Option<TrumpMode>,

    /// Exit after validating the configuration (no tricks are played).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_path(path)?,
        None => SimulationConfig::default(),
    };

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(tricks) = cli.tricks {
        config.tricks = tricks;
    }

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    if let Some(trumps) = cli.trumps {
        config.trumps = trumps;
    }

    config.validate()?;

    if cli.validate_only {
        println!(
            "Configuration '{}' is valid ({} tricks)",
            config.run_id, config.tricks
        );
        return Ok(());
    }

    let guard = init_logging(&config.logging, &config.run_id)?;
    if let Some(guard) = &guard {
        println!("Telemetry: {}", guard.telemetry_path.display());
    }

    let report = TrickRunner::new(config).run();
    print!("{}", report.summary());

    Ok(())
}
