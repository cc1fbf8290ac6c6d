//! Cell addresses on a variable-size board.

use crate::config::BoardDimensions;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board, addressed by row and column.
///
/// The linear form used by the move log is `row * width + col`; the
/// conversion is lossless given the board width.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    derive_new::new,
)]
pub struct Position {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position from a row-major index.
    ///
    /// Returns `None` if the index lies outside the board.
    #[instrument]
    pub fn from_index(index: usize, dimensions: BoardDimensions) -> Option<Self> {
        if index >= dimensions.cell_count() {
            return None;
        }
        let width = *dimensions.width();
        Some(Self {
            row: index / width,
            col: index % width,
        })
    }

    /// Converts to a row-major index for a board of the given width.
    pub fn to_index(self, width: usize) -> usize {
        self.row * width + self.col
    }

    /// Returns true if the position lies on the board.
    pub fn is_within(self, dimensions: BoardDimensions) -> bool {
        self.row < *dimensions.height() && self.col < *dimensions.width()
    }

    /// Steps `multiplier` times along `(dx, dy)` (column delta, row delta).
    ///
    /// Returns `None` when the result falls off the board.
    pub fn offset(
        self,
        (dx, dy): (isize, isize),
        multiplier: isize,
        dimensions: BoardDimensions,
    ) -> Option<Self> {
        let col = self.col.checked_add_signed(dx * multiplier)?;
        let row = self.row.checked_add_signed(dy * multiplier)?;
        let next = Self { row, col };
        next.is_within(dimensions).then_some(next)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
