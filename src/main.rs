//! Valkyrie Arena - Entry Point
//!
//! Runs either a single matchup or the full round robin and prints the
//! win rates as text or JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use valkyrie_arena::core::config::{load_config, ArenaConfig};
use valkyrie_arena::core::error::Result;
use valkyrie_arena::roster::CharacterId;
use valkyrie_arena::trials::{run_matchup, run_round_robin};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Valkyrie Arena - Monte Carlo duel win rates
#[derive(Parser, Debug)]
#[command(name = "valkyrie-arena")]
#[command(about = "Simulate valkyrie duels and report win probabilities")]
struct Args {
    /// TOML config file (trials, max_rounds, seed)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Duels per matchup
    #[arg(long)]
    trials: Option<u32>,

    /// Rounds before an undecided duel counts as a draw
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Base seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// First fighter of a single matchup (requires --p1)
    #[arg(long, requires = "p1")]
    p0: Option<String>,

    /// Second fighter of a single matchup (requires --p0)
    #[arg(long, requires = "p0")]
    p1: Option<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("valkyrie_arena=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ArenaConfig::default(),
    };
    if let Some(trials) = args.trials {
        config.trials = trials;
    }
    if let Some(max_rounds) = args.max_rounds {
        config.max_rounds = max_rounds;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    let seed = config.seed.unwrap_or_else(|| rand::random());
    tracing::info!(
        trials = config.trials,
        max_rounds = config.max_rounds,
        seed,
        "starting simulation"
    );

    if let (Some(p0), Some(p1)) = (&args.p0, &args.p1) {
        let p0: CharacterId = p0.parse()?;
        let p1: CharacterId = p1.parse()?;
        let stats = run_matchup(p0, p1, config.trials, config.max_rounds, seed);
        match args.format {
            OutputFormat::Text => println!("{}", stats.summary()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        }
        return Ok(());
    }

    let report = run_round_robin(&config, seed);
    match args.format {
        OutputFormat::Text => println!("{}", report.summary()),
        OutputFormat::Json => println!("{}", report.to_json()),
    }
    tracing::info!(matchups = report.matchups.len(), "simulation complete");
    Ok(())
}
