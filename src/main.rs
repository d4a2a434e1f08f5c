use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use flotilla::{engine::EngineBuilder, scenario::ScenarioLoader};

#[derive(Debug, Parser)]
#[command(author, version, about = "Fleet journey simulator")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/regatta.yaml")]
    scenario: PathBuf,

    /// Override the scenario's random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks even if vessels are still under way
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Print the final fleet report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;
    let mut fleet = scenario.build_fleet();
    let settings = scenario.engine_settings(cli.seed, cli.max_ticks);

    let mut engine = EngineBuilder::new(settings).build();
    let summary = match engine.run(&mut fleet) {
        Ok(summary) => summary,
        Err(err) => {
            log::error!("simulation aborted: {err}");
            eprintln!("{err}");
            return Ok(());
        }
    };

    let report = fleet.report(&scenario.name, summary.ticks, summary.halted);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Scenario '{}' finished after {} ticks: {} completed, {} capsized{}",
        report.scenario,
        report.ticks,
        report.completed,
        report.capsized,
        if report.halted { " (tick limit reached)" } else { "" }
    );
    for vessel in &report.vessels {
        println!(
            "  {:<16} {:<9} {:<10} at ({}, {}) after {} ticks",
            vessel.name,
            format!("{:?}", vessel.kind),
            format!("{:?}", vessel.state),
            vessel.position.lat,
            vessel.position.lng,
            vessel.time_elapsed
        );
    }
    Ok(())
}
