//! Win detection along the four axes.
//!
//! Only the player who just moved is measured, and only runs passing
//! through their last move count. A run wins when its length is exactly the
//! required length for its axis; a longer run does not win.

use crate::board::Board;
use crate::config::WinRequirements;
use crate::position::Position;
use crate::types::{Axis, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A completed run through the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct WinningRun {
    /// Axis the run lies on.
    pub axis: Axis,
    /// Furthest cell reached walking against the axis direction.
    pub start: Position,
    /// Furthest cell reached walking along the axis direction.
    pub end: Position,
    /// Number of cells in the run, endpoints included.
    pub length: usize,
}

/// Runs completed by one move, in axis order. Empty when nothing completed.
pub type WinningRuns = Vec<WinningRun>;

/// Measures the run of `player` through `origin` along `axis`.
///
/// Walks outward in both directions while the next cell is on the board and
/// held by `player`. Returns `(start, end, length)`.
#[instrument(skip(board))]
pub fn measure_run(
    board: &Board,
    origin: Position,
    player: Player,
    axis: Axis,
) -> (Position, Position, usize) {
    let dimensions = board.dimensions();
    let delta = axis.delta();
    let mut length = 1;
    let mut ends = [origin, origin];

    for (end, multiplier) in ends.iter_mut().zip([-1, 1]) {
        let mut reach = 1;
        while let Some(next) = origin.offset(delta, multiplier * reach, dimensions) {
            if board.occupant(next) != Some(player) {
                break;
            }
            *end = next;
            length += 1;
            reach += 1;
        }
    }

    (ends[0], ends[1], length)
}

/// Checks whether the move at `last_move` completed a run on any axis.
///
/// Every axis is evaluated independently, so one move can win on several
/// axes at once. Returns an empty list if `last_move` is empty or no axis
/// matches its required length exactly.
#[instrument(skip(board, requirements))]
pub fn check_win(
    last_move: Position,
    board: &Board,
    requirements: &WinRequirements,
) -> WinningRuns {
    let Some(player) = board.occupant(last_move) else {
        return WinningRuns::new();
    };

    let runs: WinningRuns = Axis::ALL
        .into_iter()
        .filter_map(|axis| {
            let (start, end, length) = measure_run(board, last_move, player, axis);
            (length == requirements.required(axis))
                .then(|| WinningRun::new(axis, start, end, length))
        })
        .collect();

    if !runs.is_empty() {
        debug!(?player, count = runs.len(), "Move completed winning run");
    }
    runs
}
