//! Cursor invariant: the active step never passes the recorded history.

use super::Invariant;
use crate::Game;

/// Invariant: `0 <= step <= len(log)`.
pub struct CursorInBoundsInvariant;

impl Invariant<Game> for CursorInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.active_step() <= game.move_count()
    }

    fn description() -> &'static str {
        "Active step lies within 0..=move count"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardDimensions, WinSettings};

    #[test]
    fn test_holds_after_rejected_jump() {
        let mut game =
            Game::new(BoardDimensions::new(3, 3), WinSettings::uniform(3)).expect("valid config");
        game.place_index(4);
        game.jump_to(7);
        assert!(CursorInBoundsInvariant::holds(&game));
        assert_eq!(game.active_step(), 1);
    }
}
