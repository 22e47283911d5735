//! Command-line driver for the occupancy simulation.
//!
//! ```text
//! bazaar-sim [--config town.json] [--rounds N] [--json]
//! ```
//!
//! Without `--config` the built-in default town is used. Logging is
//! controlled with `RUST_LOG`.

use std::path::PathBuf;

use bazaar_sim::{SimulationConfig, TickSummary, World};
use bazaar_types::constants::{ENGINE_NAME, VERSION};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bazaar-sim", version, about = "Run the occupancy matchmaking simulation")]
struct Cli {
    /// JSON simulation config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of rounds to run
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Print one JSON tick summary per line instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bazaar_sim=info,bazaar_broker=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_path(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(rounds) = cli.rounds {
        config.rounds = rounds;
    }

    info!(
        engine = ENGINE_NAME,
        version = VERSION,
        houses = config.houses.len(),
        walkers = config.walkers.len(),
        spawners = config.spawners.len(),
        rounds = config.rounds,
        "Simulation starting"
    );

    let mut world = World::from_config(&config);
    for _ in 0..config.rounds {
        let summary = world.tick()?;
        if cli.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            print_summary(&summary, &world);
        }
    }

    info!(
        population = world.population(),
        vacancies = world.vacancies(),
        walkers = world.walkers().count(),
        "Simulation finished"
    );
    Ok(())
}

fn print_summary(summary: &TickSummary, world: &World) {
    let report = &summary.report;
    println!(
        "{:>10}  matched {}/{} (quality {})  spawned {}  housed {}  turned away {}  population {}  root {}",
        report.round.to_string(),
        report.matched(),
        report.requests_posted,
        report.total_quality,
        summary.spawned,
        summary.housed,
        summary.turned_away,
        world.population(),
        &hex::encode(report.matching_root)[..16],
    );
}
