//! Tournament CLI
//!
//! Simulate a mock trial tournament and print its final standings.

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tournament::{Simulation, SimulationConfig, StandingsReport};

fn print_usage() {
    println!("Mock Trial Tournament Simulator");
    println!();
    println!("Usage:");
    println!("  tournament simulate [--teams N] [--seed S] [--config FILE] [--json] [--out FILE]");
    println!("  tournament help");
    println!();
    println!("Options:");
    println!("  --teams N      - Number of teams, even (default 20)");
    println!("  --seed S       - Seed for a reproducible run");
    println!("  --config FILE  - TOML run configuration");
    println!("  --json         - Print standings as JSON");
    println!("  --out FILE     - Also save the standings report as JSON");
    println!();
    println!("Examples:");
    println!("  tournament simulate --teams 24 --seed 7");
    println!("  RUST_LOG=debug tournament simulate --config regional.toml");
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn value_of<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    match args.get(i + 1) {
        Some(value) => Ok(value.as_str()),
        None => bail!("{flag} requires a value"),
    }
}

fn run_simulation(args: &[String]) -> Result<()> {
    let mut config_path: Option<PathBuf> = None;
    let mut teams: Option<u32> = None;
    let mut seed: Option<u64> = None;
    let mut json = false;
    let mut out_path: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--teams" | "-t" => {
                let value = value_of(args, i, "--teams")?;
                teams = Some(value.parse().with_context(|| format!("Invalid team count: {value}"))?);
                i += 1;
            }
            "--seed" | "-s" => {
                let value = value_of(args, i, "--seed")?;
                seed = Some(value.parse().with_context(|| format!("Invalid seed: {value}"))?);
                i += 1;
            }
            "--config" | "-c" => {
                config_path = Some(PathBuf::from(value_of(args, i, "--config")?));
                i += 1;
            }
            "--json" => json = true,
            "--out" | "-o" => {
                out_path = Some(PathBuf::from(value_of(args, i, "--out")?));
                i += 1;
            }
            other => bail!("Unknown option: {other}"),
        }
        i += 1;
    }

    // Command line flags override the config file
    let mut config = match &config_path {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(teams) = teams {
        config.teams = teams;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    let outcome = Simulation::new(config.clone())?.run()?;
    let name = format!("Simulated {} teams", config.teams);
    let report = StandingsReport::new(&name, &outcome);
    if let Some(path) = &out_path {
        report.save(path)?;
        info!(path = %path.display(), "saved standings report");
    }

    if json {
        println!("{}", report.to_json()?);
    } else {
        report.print_report();
    }
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "simulate" | "sim" => run_simulation(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            Ok(())
        }
    }
}
