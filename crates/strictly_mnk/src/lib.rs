//! Strictly m,n,k - configurable N-in-a-row with time travel.
//!
//! Players alternate placing marks on a `width x height` grid. A move wins
//! when it completes a run of exactly the configured length along a
//! horizontal, vertical or diagonal axis. Every game keeps its full move log
//! and a cursor, so a caller can jump back to any earlier step and branch
//! from there.
//!
//! # Architecture
//!
//! - **Config**: dimensions and run lengths, validated and normalized
//!   before a game exists
//! - **History**: append-only move log plus the time-travel cursor
//! - **Board**: occupancy derived from a log prefix, by full replay or by
//!   incremental seek
//! - **Rules**: win and draw detection over a board snapshot
//! - **Game**: the controller that sequences all of the above
//!
//! # Example
//!
//! ```
//! use strictly_mnk::{BoardDimensions, Game, GameStatus, Player, WinSettings};
//!
//! let mut game = Game::new(BoardDimensions::new(3, 3), WinSettings::uniform(3))?;
//! for index in [0, 1, 3, 4, 6] {
//!     game.place_index(index);
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! game.jump_to(4);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! # Ok::<(), strictly_mnk::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod error;
mod game;
mod history;
mod position;
mod snapshot;
mod table;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Rejection, Request, Response};
pub use board::{Board, board_at};
pub use config::{BoardDimensions, GameConfig, WinRequirements, WinSettings, validate};
pub use error::{ConfigError, ConfigErrorKind};
pub use game::{Game, StepEntry};
pub use history::MoveLog;
pub use position::Position;
pub use rules::{WinningRun, WinningRuns, check_win};
pub use snapshot::GameSnapshot;
pub use table::{GameId, GameTable, TableError};
pub use types::{Axis, GameStatus, Player, Square};
