//! Command-line interface for strictly_mnk.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Strictly m,n,k - N-in-a-row with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_mnk")]
#[command(about = "Replay and inspect configurable N-in-a-row games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a script of placements and jumps, then print the result
    Play {
        /// Board and win settings
        #[command(flatten)]
        board: BoardArgs,

        /// Print a JSON snapshot instead of the text board
        #[arg(long)]
        json: bool,

        /// Actions: a cell index (`4`), a `row,col` pair (`1,1`), or `jump=N`
        actions: Vec<String>,
    },

    /// Validate a TOML config file and print the normalized win lengths
    CheckConfig {
        /// Path to the config file
        path: PathBuf,
    },
}

/// Where the game configuration comes from.
///
/// Flags override values from `--config`; anything left unset falls back to
/// the default 5x7 board with three in a row.
#[derive(Args, Debug, Clone, Default)]
pub struct BoardArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board width
    #[arg(long)]
    pub width: Option<usize>,

    /// Board height
    #[arg(long)]
    pub height: Option<usize>,

    /// Required horizontal run
    #[arg(long)]
    pub horizontal: Option<usize>,

    /// Required vertical run
    #[arg(long)]
    pub vertical: Option<usize>,

    /// Required run along both diagonals
    #[arg(long)]
    pub diagonal: Option<usize>,
}
