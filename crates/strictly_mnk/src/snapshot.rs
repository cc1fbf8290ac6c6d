//! Serializable view of a game for presentation layers.

use crate::game::{Game, StepEntry};
use crate::rules::WinningRun;
use crate::types::{GameStatus, Player};
use derive_getters::Getters;
use serde::Serialize;
use tracing::instrument;

/// Everything a renderer needs at the active step.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameSnapshot {
    /// Columns.
    width: usize,
    /// Rows.
    height: usize,
    /// Board rows as strings of `X`, `O` and `.`.
    rows: Vec<String>,
    /// Status at the active step.
    status: GameStatus,
    /// Status line, e.g. `Next player: O`.
    message: String,
    /// Player to move at the active step.
    next_player: Player,
    /// Active step.
    active_step: usize,
    /// Recorded moves.
    move_count: usize,
    /// Runs completed by the viewed move.
    winning_runs: Vec<WinningRun>,
    /// Reachable steps.
    steps: Vec<StepEntry>,
}

impl Game {
    /// Captures the current view of the game.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> GameSnapshot {
        let dimensions = self.dimensions();
        GameSnapshot {
            width: *dimensions.width(),
            height: *dimensions.height(),
            rows: self.board().rows(),
            status: self.status(),
            message: self.status_message(),
            next_player: self.next_player(),
            active_step: self.active_step(),
            move_count: self.move_count(),
            winning_runs: self.winning_runs().to_vec(),
            steps: self.steps(),
        }
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        game.snapshot()
    }
}
