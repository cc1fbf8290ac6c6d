//! Uniqueness invariant: a cell is filled at most once in the active prefix.

use super::Invariant;
use crate::Game;
use std::collections::HashSet;

/// Invariant: no position appears twice within the active prefix.
///
/// The log holds a single branch, since a placement truncates everything
/// past the cursor first; checking the active prefix is what the board
/// depends on.
pub struct UniqueActiveMovesInvariant;

impl Invariant<Game> for UniqueActiveMovesInvariant {
    fn holds(game: &Game) -> bool {
        let active = game.log().active();
        let distinct: HashSet<_> = active.iter().collect();
        distinct.len() == active.len()
    }

    fn description() -> &'static str {
        "No position is played twice in the active prefix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardDimensions, WinSettings};

    #[test]
    fn test_holds_after_rejected_duplicate() {
        let mut game =
            Game::new(BoardDimensions::new(3, 3), WinSettings::uniform(3)).expect("valid config");
        game.place_index(4);
        game.place_index(4);
        assert!(UniqueActiveMovesInvariant::holds(&game));
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn test_branching_never_leaves_a_repeat_past_the_cursor() {
        let mut game =
            Game::new(BoardDimensions::new(3, 3), WinSettings::uniform(3)).expect("valid config");
        for index in [4, 0, 8] {
            game.place_index(index);
        }
        game.jump_to(1);
        game.place_index(8);
        assert_eq!(game.move_count(), 2);
        let moves = game.log().moves();
        let distinct: HashSet<_> = moves.iter().collect();
        assert_eq!(distinct.len(), moves.len());
    }
}
