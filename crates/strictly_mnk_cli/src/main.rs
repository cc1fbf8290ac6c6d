//! Strictly m,n,k - command-line driver.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use strictly_mnk::{Axis, Game, GameConfig};
use strictly_mnk_cli::{BoardArgs, Cli, Command, parse_actions, resolve_config, run};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            board,
            json,
            actions,
        } => run_play(&board, json, &actions),
        Command::CheckConfig { path } => run_check_config(&path),
    }
}

/// Play a script and print the final view
#[instrument(skip(actions))]
fn run_play(board: &BoardArgs, json: bool, actions: &[String]) -> Result<()> {
    let config = resolve_config(board)?;
    let actions = parse_actions(actions)?;
    let mut game = Game::from_config(config)?;

    for skipped in run(&mut game, &actions) {
        eprintln!(
            "action {} ({}) ignored: {}",
            skipped.index + 1,
            skipped.request,
            skipped.reason
        );
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    } else {
        println!("{}", game);
        for winning in game.winning_runs() {
            println!("{} run: {} -> {}", winning.axis, winning.start, winning.end);
        }
    }
    Ok(())
}

/// Validate a config file
#[instrument]
fn run_check_config(path: &Path) -> Result<()> {
    let config = GameConfig::from_file(path)?;
    let requirements = config.validate()?;
    info!("Config is valid");

    let dims = config.dimensions();
    println!("board: {}x{}", dims.width(), dims.height());
    for axis in Axis::ALL {
        println!("{}: {}", axis, requirements.required(axis));
    }
    Ok(())
}
