//! Move log and time-travel cursor.

use crate::action::Rejection;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Ordered half-moves plus the number of them currently active.
///
/// `step` is always within `0..=moves.len()`. Positions are only appended at
/// the live tip; placing after a backward jump truncates everything past the
/// cursor first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    moves: Vec<Position>,
    step: usize,
}

impl MoveLog {
    /// Creates an empty log at step 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded move, including those past the cursor.
    pub fn moves(&self) -> &[Position] {
        &self.moves
    }

    /// Moves `0..step`, i.e. what is currently on the board.
    pub fn active(&self) -> &[Position] {
        &self.moves[..self.step]
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Checks if nothing has been played.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The cursor.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Checks if the cursor sits on the latest move.
    pub fn at_tip(&self) -> bool {
        self.step == self.moves.len()
    }

    /// Most recent active move.
    pub fn last_active(&self) -> Option<Position> {
        self.active().last().copied()
    }

    /// Checks if `pos` was played within the active prefix.
    pub fn is_active(&self, pos: Position) -> bool {
        self.active().contains(&pos)
    }

    /// Appends `pos` at the cursor.
    ///
    /// Any moves past the cursor are discarded first; redo history does not
    /// survive a new branch.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::CellOccupied`] if `pos` is already in the active
    /// prefix. The log is left unchanged.
    #[instrument(skip(self), fields(step = self.step, len = self.moves.len()))]
    pub fn push(&mut self, pos: Position) -> Result<(), Rejection> {
        if self.is_active(pos) {
            debug!(%pos, "Position already played in active prefix");
            return Err(Rejection::CellOccupied(pos));
        }

        if !self.at_tip() {
            let discarded = self.moves.len() - self.step;
            self.moves.truncate(self.step);
            info!(discarded, "Truncated redo history");
        }

        self.moves.push(pos);
        self.step += 1;
        Ok(())
    }

    /// Moves the cursor to `step` without touching recorded moves.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::StepOutOfRange`] if `step > len()`.
    #[instrument(skip(self), fields(len = self.moves.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), Rejection> {
        if step > self.moves.len() {
            return Err(Rejection::StepOutOfRange {
                requested: step,
                move_count: self.moves.len(),
            });
        }
        self.step = step;
        Ok(())
    }
}
