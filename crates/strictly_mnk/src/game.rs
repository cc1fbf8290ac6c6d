//! Game controller: the only thing a presentation layer talks to.
//!
//! Each request runs to completion (log mutation, board update, win check)
//! before the next one is accepted. The move log is the only durable record;
//! the board is a cache of its replay and the winning runs belong to the
//! latest recorded move.

use crate::action::{Rejection, Request, Response};
use crate::board::{Board, board_at};
use crate::config::{BoardDimensions, GameConfig, WinRequirements, WinSettings};
use crate::contracts::{Contract, PlacementContract};
use crate::error::ConfigError;
use crate::history::MoveLog;
use crate::position::Position;
use crate::rules::{WinningRun, WinningRuns, check_win, is_draw};
use crate::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One reachable point in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct StepEntry {
    /// Number of active moves at this point.
    pub step: usize,
    /// Cell filled by the move that reaches this step; `None` for the start.
    pub position: Option<Position>,
    /// Whether the cursor is here.
    pub selected: bool,
}

impl std::fmt::Display for StepEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.step {
            0 => write!(f, "Go to game start"),
            step => write!(f, "Go to move #{}", step),
        }
    }
}

/// A single game instance with time travel.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    requirements: WinRequirements,
    log: MoveLog,
    board: Board,
    winning_runs: WinningRuns,
}

impl Game {
    /// Creates a new game after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a win length cannot fit on the board.
    #[instrument]
    pub fn new(dimensions: BoardDimensions, settings: WinSettings) -> Result<Self, ConfigError> {
        Self::from_config(GameConfig::new(dimensions, settings))
    }

    /// Creates a new game from a loaded configuration.
    #[instrument]
    pub fn from_config(config: GameConfig) -> Result<Self, ConfigError> {
        let requirements = config.validate()?;
        let dimensions = *config.dimensions();
        info!(
            width = *dimensions.width(),
            height = *dimensions.height(),
            "Created new game"
        );
        Ok(Self {
            config,
            requirements,
            log: MoveLog::new(),
            board: Board::new(dimensions),
            winning_runs: WinningRuns::new(),
        })
    }

    /// Discards all moves and starts over with the same configuration.
    #[instrument(skip(self))]
    pub fn restart(&self) -> Self {
        info!(discarded = self.log.len(), "Starting new game");
        Self {
            config: self.config,
            requirements: self.requirements,
            log: MoveLog::new(),
            board: Board::new(self.dimensions()),
            winning_runs: WinningRuns::new(),
        }
    }

    /// Applies any request.
    #[instrument(skip(self))]
    pub fn apply(&mut self, request: Request) -> Response {
        match request {
            Request::Place(pos) => self.place(pos),
            Request::JumpTo(step) => self.jump_to(step),
        }
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Rejected, with the state untouched, when the active step shows a
    /// finished game, `pos` is off the board, or `pos` is occupied in the
    /// active prefix. If the cursor is behind the latest move, the moves past
    /// it are discarded before appending.
    #[instrument(skip(self), fields(step = self.log.step(), player = %self.next_player()))]
    pub fn place(&mut self, pos: Position) -> Response {
        if let Err(reason) = PlacementContract::pre(self, &pos) {
            debug!(%reason, "Placement rejected");
            return Response::Rejected(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let from = self.log.step();
        if let Err(reason) = self.log.push(pos) {
            debug!(%reason, "Placement rejected by move log");
            return Response::Rejected(reason);
        }
        self.board.seek(self.log.moves(), from, from + 1);
        self.winning_runs = check_win(pos, &self.board, &self.requirements);

        match self.status() {
            GameStatus::Won(winner) => {
                info!(%pos, %winner, runs = self.winning_runs.len(), "Game won")
            }
            GameStatus::Draw => info!(%pos, "Game drawn"),
            GameStatus::InProgress => info!(%pos, "Move placed"),
        }

        #[cfg(debug_assertions)]
        crate::contracts::assert_invariants(&before, self);

        Response::Accepted
    }

    /// Places at a row-major index.
    #[instrument(skip(self))]
    pub fn place_index(&mut self, index: usize) -> Response {
        let dimensions = self.dimensions();
        match Position::from_index(index, dimensions) {
            Some(pos) => self.place(pos),
            None => {
                let width = *dimensions.width();
                let pos = Position::new(index / width, index % width);
                debug!(index, "Placement index off the board");
                Response::Rejected(Rejection::OutOfBounds(pos))
            }
        }
    }

    /// Moves the cursor to `step` (0 is the empty board).
    ///
    /// Rejected if `step` is past the recorded history. Never changes the
    /// recorded moves; jumping to the current step changes nothing.
    #[instrument(skip(self), fields(from = self.log.step(), len = self.log.len()))]
    pub fn jump_to(&mut self, step: usize) -> Response {
        let from = self.log.step();
        if let Err(reason) = self.log.jump_to(step) {
            debug!(%reason, "Jump rejected");
            return Response::Rejected(reason);
        }
        self.move_board(from, step);
        info!(to = step, status = ?self.status(), "Jumped");
        Response::Accepted
    }

    /// Consuming form of [`Game::place`]; rejected requests return `self` unchanged.
    pub fn placed(mut self, pos: Position) -> Self {
        self.place(pos);
        self
    }

    /// Consuming form of [`Game::jump_to`]; rejected requests return `self` unchanged.
    pub fn jumped(mut self, step: usize) -> Self {
        self.jump_to(step);
        self
    }

    /// Brings the cached board from step `from` to step `to`.
    ///
    /// Replays from empty when that touches fewer cells than the delta.
    fn move_board(&mut self, from: usize, to: usize) {
        if from.abs_diff(to) > to {
            self.board = board_at(self.log.moves(), to, self.dimensions());
        } else {
            self.board.seek(self.log.moves(), from, to);
        }
    }

    /// Status at the active step.
    ///
    /// A win only counts while the cursor is on the move that made it; a
    /// draw needs every cell filled at the live tip.
    pub fn status(&self) -> GameStatus {
        if !self.log.at_tip() {
            return GameStatus::InProgress;
        }
        if !self.winning_runs.is_empty() {
            return GameStatus::Won(Player::at(self.log.step() - 1));
        }
        if is_draw(&self.board, &self.winning_runs) {
            return GameStatus::Draw;
        }
        GameStatus::InProgress
    }

    /// Human-readable status line.
    pub fn status_message(&self) -> String {
        match self.status() {
            GameStatus::Won(winner) => format!("Winner: {}", winner),
            GameStatus::Draw => "It's a draw".to_string(),
            GameStatus::InProgress => format!("Next player: {}", self.next_player()),
        }
    }

    /// Player who would move at the active step.
    pub fn next_player(&self) -> Player {
        Player::at(self.log.step())
    }

    /// Runs completed by the move at the active step.
    ///
    /// Empty unless the cursor is on the latest recorded move.
    pub fn winning_runs(&self) -> &[WinningRun] {
        if self.log.at_tip() {
            &self.winning_runs
        } else {
            &[]
        }
    }

    /// The board at the active step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of recorded moves, including those past the cursor.
    pub fn move_count(&self) -> usize {
        self.log.len()
    }

    /// Number of active moves.
    pub fn active_step(&self) -> usize {
        self.log.step()
    }

    /// The move log.
    pub fn log(&self) -> &MoveLog {
        &self.log
    }

    /// Board size.
    pub fn dimensions(&self) -> BoardDimensions {
        *self.config.dimensions()
    }

    /// Normalized run lengths.
    pub fn requirements(&self) -> &WinRequirements {
        &self.requirements
    }

    /// The configuration this game was created from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Every reachable step, from the game start to the latest move.
    pub fn steps(&self) -> Vec<StepEntry> {
        let active = self.log.step();
        std::iter::once(StepEntry::new(0, None, active == 0))
            .chain(
                self.log
                    .moves()
                    .iter()
                    .enumerate()
                    .map(|(i, pos)| StepEntry::new(i + 1, Some(*pos), active == i + 1)),
            )
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn corrupt_board_for_test(&mut self, index: usize) {
        let mut moves = self.log.active().to_vec();
        let pos = Position::from_index(index, self.dimensions()).expect("index on board");
        moves.push(pos);
        // Marks `pos` without recording it in the log.
        self.board.seek(&moves, moves.len() - 1, moves.len());
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{}", self.status_message())
    }
}
