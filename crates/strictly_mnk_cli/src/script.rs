//! Parsing and running action scripts against a game.

use crate::cli::BoardArgs;
use derive_more::{Display, Error};
use strictly_mnk::{
    BoardDimensions, ConfigError, Game, GameConfig, Position, Rejection, Request, Response,
    WinSettings,
};
use tracing::{debug, info, instrument, warn};

/// One scripted step, before it is tied to a board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Row-major cell index.
    Index(usize),
    /// Explicit row and column.
    Cell(usize, usize),
    /// Cursor target.
    Jump(usize),
}

/// An action string that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("invalid action '{}': expected N, ROW,COL or jump=N", input)]
pub struct ActionParseError {
    /// The offending text.
    #[error(not(source))]
    pub input: String,
}

impl std::str::FromStr for Action {
    type Err = ActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ActionParseError {
            input: s.to_string(),
        };

        if let Some(step) = s.strip_prefix("jump=") {
            return step.parse().map(Action::Jump).map_err(|_| err());
        }
        if let Some((row, col)) = s.split_once(',') {
            let row = row.trim().parse().map_err(|_| err())?;
            let col = col.trim().parse().map_err(|_| err())?;
            return Ok(Action::Cell(row, col));
        }
        s.parse().map(Action::Index).map_err(|_| err())
    }
}

impl Action {
    /// Converts to an engine request for a board of the given size.
    ///
    /// Indices past the board map to an off-board position so the engine
    /// rejects them like any other bad placement.
    pub fn to_request(self, dimensions: BoardDimensions) -> Request {
        match self {
            Action::Index(index) => {
                let width = *dimensions.width();
                let pos = Position::from_index(index, dimensions)
                    .unwrap_or_else(|| Position::new(index / width, index % width));
                Request::Place(pos)
            }
            Action::Cell(row, col) => Request::Place(Position::new(row, col)),
            Action::Jump(step) => Request::JumpTo(step),
        }
    }
}

/// Parses every action, failing on the first bad one.
#[instrument]
pub fn parse_actions(inputs: &[String]) -> Result<Vec<Action>, ActionParseError> {
    inputs.iter().map(|s| s.parse()).collect()
}

/// Builds the game configuration from a file and flag overrides.
#[instrument]
pub fn resolve_config(args: &BoardArgs) -> Result<GameConfig, ConfigError> {
    let base = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    let dims = base.dimensions();
    let win = base.win();
    let dimensions = BoardDimensions::new(
        args.width.unwrap_or(*dims.width()),
        args.height.unwrap_or(*dims.height()),
    );
    let mut settings = WinSettings::new(
        args.horizontal.unwrap_or(*win.horizontal()),
        args.vertical.unwrap_or(*win.vertical()),
        args.diagonal.unwrap_or(*win.diagonal()),
    );
    if let Some(anti) = *win.anti_diagonal() {
        settings = settings.with_anti_diagonal(anti);
    }

    debug!(?dimensions, ?settings, "Resolved configuration");
    Ok(GameConfig::new(dimensions, settings))
}

/// A rejected scripted step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    /// Position of the action in the script (0-based).
    pub index: usize,
    /// The request that was ignored.
    pub request: Request,
    /// Why.
    pub reason: Rejection,
}

/// Applies actions in order. Rejected actions are collected and skipped.
#[instrument(skip(game, actions), fields(count = actions.len()))]
pub fn run(game: &mut Game, actions: &[Action]) -> Vec<Skipped> {
    let dimensions = game.dimensions();
    let mut skipped = Vec::new();

    for (index, action) in actions.iter().enumerate() {
        let request = action.to_request(dimensions);
        match game.apply(request) {
            Response::Accepted => debug!(index, %request, "Applied"),
            Response::Rejected(reason) => {
                warn!(index, %request, %reason, "Skipped");
                skipped.push(Skipped {
                    index,
                    request,
                    reason,
                });
            }
        }
    }

    info!(
        skipped = skipped.len(),
        status = ?game.status(),
        "Script finished"
    );
    skipped
}
