//! Derivation invariant: the cached board is exactly a replay of the log.

use super::Invariant;
use crate::Game;
use crate::board::board_at;

/// Invariant: the board equals the full replay of the active prefix.
///
/// The controller moves its board incrementally; this re-derives it from
/// scratch and compares.
pub struct BoardMatchesReplayInvariant;

impl Invariant<Game> for BoardMatchesReplayInvariant {
    fn holds(game: &Game) -> bool {
        let replayed = board_at(
            game.log().moves(),
            game.active_step(),
            game.dimensions(),
        );
        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Board equals the replay of the active prefix"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardDimensions, WinSettings};

    #[test]
    fn test_holds_while_jumping_around() {
        let mut game =
            Game::new(BoardDimensions::new(3, 3), WinSettings::uniform(3)).expect("valid config");
        for index in [4, 0, 8, 2] {
            game.place_index(index);
        }
        for step in [3, 0, 4, 2, 2, 1] {
            game.jump_to(step);
            assert!(BoardMatchesReplayInvariant::holds(&game), "step {step}");
        }
    }

    #[test]
    fn test_detects_corrupted_cache() {
        let mut game =
            Game::new(BoardDimensions::new(3, 3), WinSettings::uniform(3)).expect("valid config");
        game.place_index(4);
        game.corrupt_board_for_test(0);
        assert!(!BoardMatchesReplayInvariant::holds(&game));
    }
}
