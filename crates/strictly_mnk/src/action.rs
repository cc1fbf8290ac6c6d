//! Requests a presentation layer can send to a game, and their results.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A single user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Request {
    /// Put the next mark at a position.
    Place(Position),
    /// Move the time-travel cursor.
    JumpTo(usize),
}

impl std::fmt::Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Request::Place(pos) => write!(f, "place {}", pos),
            Request::JumpTo(0) => write!(f, "go to game start"),
            Request::JumpTo(step) => write!(f, "go to move #{}", step),
        }
    }
}

/// Why a request was ignored.
///
/// Rejections are ordinary results, not faults: the game state is exactly
/// what it was before the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The active step shows a finished game.
    #[display("game is already over")]
    GameOver,

    /// The cell is taken within the active prefix.
    #[display("cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The position is not on the board.
    #[display("cell {} is off the board", _0)]
    OutOfBounds(Position),

    /// The jump target is past the recorded history.
    #[display("step {requested} is outside 0..={move_count}")]
    StepOutOfRange {
        /// Step that was asked for.
        requested: usize,
        /// Number of recorded moves.
        move_count: usize,
    },
}

impl std::error::Error for Rejection {}

/// Result of applying a [`Request`].
///
/// Deliberately not `#[must_use]`: ignoring it gives the silent no-op
/// behavior, inspecting it tells the caller why nothing happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    /// The request changed the game.
    Accepted,
    /// The request was ignored.
    Rejected(Rejection),
}

impl Response {
    /// Checks if the request took effect.
    pub fn is_accepted(self) -> bool {
        matches!(self, Response::Accepted)
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(self) -> Option<Rejection> {
        match self {
            Response::Accepted => None,
            Response::Rejected(reason) => Some(reason),
        }
    }
}

impl From<Result<(), Rejection>> for Response {
    fn from(result: Result<(), Rejection>) -> Self {
        match result {
            Ok(()) => Response::Accepted,
            Err(reason) => Response::Rejected(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_labels() {
        assert_eq!(Request::JumpTo(0).to_string(), "go to game start");
        assert_eq!(Request::JumpTo(3).to_string(), "go to move #3");
        assert_eq!(Request::Place(Position::new(1, 2)).to_string(), "place (1, 2)");
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::StepOutOfRange {
                requested: 9,
                move_count: 4
            }
            .to_string(),
            "step 9 is outside 0..=4"
        );
        assert_eq!(
            Rejection::CellOccupied(Position::new(0, 0)).to_string(),
            "cell (0, 0) is already occupied"
        );
    }

    #[test]
    fn test_response_from_result() {
        assert!(Response::from(Ok(())).is_accepted());
        let rejected = Response::from(Err(Rejection::GameOver));
        assert_eq!(rejected.rejection(), Some(Rejection::GameOver));
    }
}
