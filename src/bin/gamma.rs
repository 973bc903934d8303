//! Gamma command-line driver.
//!
//! Without a subcommand, reads the batch protocol from standard input.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gamma::{GameConfig, Gamma, Playout, PlayoutConfig, Session};

/// Gamma - territory game engine
#[derive(Parser, Debug)]
#[command(name = "gamma")]
#[command(about = "Territory-claiming board game engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Run a batch script (standard input by default)
    Batch {
        /// Script to read instead of standard input
        script: Option<PathBuf>,
    },

    /// Play one random game and print the result
    Simulate {
        #[arg(long, default_value = "10")]
        width: u32,

        #[arg(long, default_value = "10")]
        height: u32,

        #[arg(long, default_value = "2")]
        players: u32,

        /// Maximum number of areas per player
        #[arg(long, default_value = "3")]
        areas: u32,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Chance of trying a golden move on each eligible turn
        #[arg(long, default_value = "0.05")]
        golden_probability: f64,

        /// Stop after this many turns
        #[arg(long, default_value = "10000")]
        max_turns: u32,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries protocol output only.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Batch { script: None }) {
        Command::Batch { script } => run_batch(script),
        Command::Simulate {
            width,
            height,
            players,
            areas,
            seed,
            golden_probability,
            max_turns,
        } => {
            let config = GameConfig::new(width, height, players, areas);
            let settings = PlayoutConfig::default()
                .with_golden_probability(golden_probability)
                .with_max_turns(max_turns);
            run_simulation(config, settings, seed)
        }
    }
}

fn run_batch(script: Option<PathBuf>) -> Result<()> {
    let mut session = Session::new();
    let stdout = io::stdout();
    let stderr = io::stderr();

    match script {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("cannot open {}", path.display()))?;
            session.run(BufReader::new(file), &mut stdout.lock(), &mut stderr.lock())?;
        }
        None => {
            session.run(io::stdin().lock(), &mut stdout.lock(), &mut stderr.lock())?;
        }
    }

    info!(lines = session.line(), "batch finished");
    Ok(())
}

fn run_simulation(config: GameConfig, settings: PlayoutConfig, seed: u64) -> Result<()> {
    let mut game = Gamma::new(config).context("invalid game parameters")?;
    let summary = Playout::new(settings, seed).play(&mut game);

    print!("{}", game.render());
    println!(
        "turns {} moves {} golden {} refused {}",
        summary.turns, summary.moves, summary.golden_moves, summary.rejected_golden
    );
    for player in 1..=game.player_count() {
        if let Some(stats) = game.stats(player) {
            println!(
                "player {player}: fields {} areas {} golden {}",
                stats.fields,
                stats.areas,
                u8::from(stats.golden_used)
            );
        }
    }

    Ok(())
}
