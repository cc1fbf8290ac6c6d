//! Contract-based validation for placements.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} place {Q}`. Preconditions decide whether a placement is rejected;
//! postconditions re-check the engine invariants in debug builds.

use crate::action::Rejection;
use crate::game::Game;
use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use crate::position::Position;
use tracing::{error, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvariantViolation>;
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the active step must not show a finished game.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`Rejection::GameOver`] when the viewed step is won or drawn.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), Rejection> {
        if game.status().is_ended() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the position must be on the board.
pub struct CellOnBoard;

impl CellOnBoard {
    /// Rejects with [`Rejection::OutOfBounds`].
    #[instrument(skip(game))]
    pub fn check(pos: &Position, game: &Game) -> Result<(), Rejection> {
        if pos.is_within(game.dimensions()) {
            Ok(())
        } else {
            Err(Rejection::OutOfBounds(*pos))
        }
    }
}

/// Precondition: the cell must be empty in the active prefix.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects with [`Rejection::CellOccupied`].
    #[instrument(skip(game))]
    pub fn check(pos: &Position, game: &Game) -> Result<(), Rejection> {
        if game.board().is_empty(*pos) {
            Ok(())
        } else {
            Err(Rejection::CellOccupied(*pos))
        }
    }
}

/// Composite precondition, checked in the order a user would care about.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions for a placement.
    #[instrument(skip(game))]
    pub fn check(pos: &Position, game: &Game) -> Result<(), Rejection> {
        GameNotOver::check(game)?;
        CellOnBoard::check(pos, game)?;
        CellIsEmpty::check(pos, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placements.
///
/// Preconditions:
/// - Game not over at the active step
/// - Cell on the board
/// - Cell empty
///
/// Postconditions:
/// - Log is the old active prefix plus exactly one move, with the cursor at its end
/// - Cursor within the log
/// - No duplicate in the active prefix
/// - Board equals the replay of the active prefix
pub struct PlacementContract;

impl Contract<Game, Position> for PlacementContract {
    fn pre(game: &Game, action: &Position) -> Result<(), Rejection> {
        LegalPlacement::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), InvariantViolation> {
        let kept = before.log().active();
        let moves = after.log().moves();
        if moves.len() != kept.len() + 1 || !moves.starts_with(kept) || !after.log().at_tip() {
            return Err(InvariantViolation::new(format!(
                "Postcondition failed: placement from step {} left {} moves with cursor at {}",
                kept.len(),
                moves.len(),
                after.active_step()
            )));
        }

        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvariantViolation::new(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Asserts that all engine invariants hold (panics on violation in debug builds).
#[instrument(skip(before, after))]
pub fn assert_invariants(before: &Game, after: &Game) {
    let result = PlacementContract::post(before, after);
    if let Err(violation) = &result {
        error!(%violation, "Engine invariant violated");
    }
    debug_assert!(result.is_ok(), "{:?}", result);
}
