//! Page replacement simulator CLI.
//!
//! This binary is a thin driver over `pagesim-core`. It performs:
//! 1. **Run:** Build a configuration from flags and/or a JSON file, then single-step or run to completion.
//! 2. **Compare:** Run the same configuration under every policy and print fault counts side by side.
//!
//! Logging goes to stderr through `tracing`; set `RUST_LOG=debug` to see every step.

use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use pagesim_core::config::parse_reference_string;
use pagesim_core::{Policy, SimStats, Simulation, SimulationConfig, StateSnapshot, StepEvent};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Page replacement simulator (LRU and Optimal)",
    long_about = "Drive a fixed set of physical frames through a page reference string and report \
                  every hit and fault.\n\nExamples:\n  pagesim run --frames 3 --refs 7,0,1,2,0,3,0,4 --policy optimal\n  \
                  pagesim run --config trace.json --steps 4\n  pagesim compare --frames 4 --refs 1,2,3,4,1,2,5,1,2,3,4,5"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Inputs shared by every subcommand. Flags override values from `--config`.
#[derive(Args, Debug)]
struct ConfigArgs {
    /// JSON configuration file (`frame_capacity`, `reference_sequence`, `policy`).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of physical frames.
    #[arg(short, long)]
    frames: Option<usize>,

    /// Comma-separated page references, e.g. "7,0,1,2". Each token keeps its leading integer; tokens without one are skipped.
    #[arg(short, long, allow_hyphen_values = true)]
    refs: Option<String>,

    /// Replacement policy: `lru` or `optimal`.
    #[arg(short, long)]
    policy: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one simulation and print its event log.
    Run {
        #[command(flatten)]
        config: ConfigArgs,

        /// Process only this many references (single-step mode) instead of the whole string.
        #[arg(long)]
        steps: Option<usize>,

        /// Print the events, final state, and statistics as JSON.
        #[arg(long)]
        json: bool,

        /// Print a statistics report; optionally restrict to sections (`summary`, `faults`).
        #[arg(long, num_args = 0..)]
        stats: Option<Vec<String>>,
    },

    /// Run the same configuration under every policy and compare fault counts.
    Compare {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

/// Machine-readable result of `run --json`.
#[derive(Serialize)]
struct RunReport<'a> {
    config: &'a SimulationConfig,
    events: &'a [StepEvent],
    state: StateSnapshot,
    stats: &'a SimStats,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run {
            config,
            steps,
            json,
            stats,
        } => build_config(&config).and_then(|cfg| cmd_run(cfg, steps, json, stats.as_deref())),
        Commands::Compare { config } => build_config(&config).and_then(cmd_compare),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Loads `--config` (or the built-in textbook trace: 3 frames, LRU) and applies flag overrides.
fn build_config(args: &ConfigArgs) -> Result<SimulationConfig, Box<dyn Error>> {
    let base = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)?,
        None => SimulationConfig::default(),
    };
    merge_config(&base, args)
}

/// Overrides `base` with every flag that was given and validates the result.
fn merge_config(base: &SimulationConfig, args: &ConfigArgs) -> Result<SimulationConfig, Box<dyn Error>> {
    let frames = args.frames.unwrap_or_else(|| base.frame_capacity());
    let references = match &args.refs {
        Some(text) => parse_reference_string(text)?,
        None => base.reference_sequence().to_vec(),
    };
    let policy = match &args.policy {
        Some(selector) => selector.parse::<Policy>()?,
        None => base.policy(),
    };

    Ok(SimulationConfig::new(frames, references, policy)?)
}

/// Runs (or single-steps) one simulation and prints the log, frame row, and fault count.
fn cmd_run(
    config: SimulationConfig,
    steps: Option<usize>,
    json: bool,
    stats_sections: Option<&[String]>,
) -> Result<(), Box<dyn Error>> {
    let mut sim = Simulation::new(config);

    match steps {
        Some(n) => {
            for _ in 0..n.min(sim.remaining()) {
                let _ = sim.step()?;
            }
        }
        None => {
            let _ = sim.run_to_completion()?;
        }
    }

    if json {
        let report = RunReport {
            config: sim.config(),
            events: sim.events(),
            state: sim.snapshot(),
            stats: sim.stats(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let cfg = sim.config();
    println!(
        "Configuration: frames={} policy={} references={}",
        cfg.frame_capacity(),
        cfg.policy(),
        cfg.len()
    );
    println!();

    // Replay the log to show the frame row after each step.
    let mut replay = Simulation::new(cfg.clone());
    for event in sim.events() {
        let _ = replay.step()?;
        println!("{:<52} {}", event.to_string(), replay.snapshot());
    }

    println!();
    if sim.is_complete() {
        println!("Simulation complete!");
    } else {
        println!(
            "Paused after step {} of {} ({} remaining)",
            sim.state().cursor(),
            cfg.len(),
            sim.remaining()
        );
    }
    println!("Memory: {}", sim.snapshot());
    println!("Page Faults: {}", sim.fault_count());

    if let Some(sections) = stats_sections {
        println!();
        sim.stats().print_sections(sections);
    }
    Ok(())
}

/// Runs every policy over the same frames and references.
fn cmd_compare(config: SimulationConfig) -> Result<(), Box<dyn Error>> {
    println!(
        "Comparing policies: frames={} references={}",
        config.frame_capacity(),
        config.len()
    );
    println!();
    println!("{:<10} {:>8} {:>8} {:>12}", "policy", "faults", "hits", "hit_ratio");

    for policy in Policy::ALL {
        let mut sim = Simulation::new(config.with_policy(policy));
        let _ = sim.run_to_completion()?;
        let stats = sim.stats();
        println!(
            "{:<10} {:>8} {:>8} {:>11.2}%",
            policy.to_string(),
            stats.faults,
            stats.hits,
            stats.hit_ratio() * 100.0
        );
    }
    Ok(())
}
