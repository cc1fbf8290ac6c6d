//! Occupancy grid derived from the move log.
//!
//! A [`Board`] is never ground truth. It is either a full replay of a log
//! prefix ([`board_at`]) or a cached replay moved between steps with
//! [`Board::seek`]; both must agree for every input.

use crate::config::BoardDimensions;
use crate::position::Position;
use crate::types::{Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Grid of cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    dimensions: BoardDimensions,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(dimensions: BoardDimensions) -> Self {
        Self {
            dimensions,
            squares: vec![Square::Empty; dimensions.cell_count()],
        }
    }

    /// Board size.
    pub fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    /// Gets the cell at `pos`, or `None` off the board.
    pub fn get(&self, pos: Position) -> Option<Square> {
        if !pos.is_within(self.dimensions) {
            return None;
        }
        self.squares
            .get(pos.to_index(*self.dimensions.width()))
            .copied()
    }

    /// Returns the occupant of `pos`, if any.
    pub fn occupant(&self, pos: Position) -> Option<Player> {
        self.get(pos).and_then(Square::player)
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// All cells, row-major.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Rows rendered as strings of `X`, `O` and `.`.
    pub fn rows(&self) -> Vec<String> {
        self.squares
            .chunks(*self.dimensions.width())
            .map(|row| row.iter().map(|s| s.symbol()).collect())
            .collect()
    }

    /// Writes `square` at `pos`. Positions off the board are ignored.
    fn set(&mut self, pos: Position, square: Square) {
        if !pos.is_within(self.dimensions) {
            trace!(%pos, "Skipping off-board position");
            return;
        }
        let index = pos.to_index(*self.dimensions.width());
        if let Some(cell) = self.squares.get_mut(index) {
            *cell = square;
        }
    }

    /// Moves this board from the replay of `moves[..from]` to the replay of
    /// `moves[..to]` by touching only the cells in between.
    ///
    /// Forward: marks `moves[from..to]` by index parity. Backward: clears
    /// `moves[to..from]`. The caller guarantees the board currently equals
    /// `board_at(moves, from, ..)`. Positions off the board are skipped.
    #[instrument(skip(self, moves))]
    pub fn seek(&mut self, moves: &[Position], from: usize, to: usize) {
        if to >= from {
            for (i, pos) in moves.iter().enumerate().take(to).skip(from) {
                self.set(*pos, Square::Occupied(Player::at(i)));
            }
        } else {
            for pos in moves.iter().take(from).skip(to) {
                self.set(*pos, Square::Empty);
            }
        }
        trace!(from, to, "Board seeked");
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self.rows();
        for (i, row) in rows.iter().enumerate() {
            let line: Vec<String> = row.chars().map(String::from).collect();
            write!(f, "{}", line.join(" "))?;
            if i + 1 < rows.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Replays `moves[..step]` onto an empty board.
///
/// Cell `moves[i]` gets X for even `i` and O for odd `i`. `step` is clamped
/// to the log length.
#[instrument(skip(moves))]
pub fn board_at(moves: &[Position], step: usize, dimensions: BoardDimensions) -> Board {
    let mut board = Board::new(dimensions);
    board.seek(moves, 0, step.min(moves.len()));
    board
}
