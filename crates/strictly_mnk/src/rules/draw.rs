//! Draw detection logic.

use super::win::WinningRun;
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board whose last move completed nothing is a draw.
#[instrument(skip(board, runs))]
pub fn is_draw(board: &Board, runs: &[WinningRun]) -> bool {
    runs.is_empty() && is_full(board)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_win;
    use super::*;
    use crate::board::board_at;
    use crate::config::{BoardDimensions, WinSettings, validate};
    use crate::position::Position;

    fn replay(indices: &[usize]) -> (Board, Position) {
        let d = BoardDimensions::new(3, 3);
        let moves: Vec<Position> = indices
            .iter()
            .map(|i| Position::from_index(*i, d).expect("on board"))
            .collect();
        (board_at(&moves, moves.len(), d), moves[moves.len() - 1])
    }

    #[test]
    fn test_partial_board_not_full() {
        let (board, _) = replay(&[4]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let (board, last) = replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        let req = validate(board.dimensions(), &WinSettings::uniform(3)).unwrap();
        let runs = check_win(last, &board, &req);
        assert!(is_draw(&board, &runs));
    }

    #[test]
    fn test_not_draw_if_last_move_wins() {
        // X completes the left column on the ninth move.
        let (board, last) = replay(&[3, 1, 0, 2, 4, 5, 7, 8, 6]);
        let req = validate(board.dimensions(), &WinSettings::uniform(3)).unwrap();
        let runs = check_win(last, &board, &req);
        assert!(!runs.is_empty());
        assert!(!is_draw(&board, &runs));
    }
}
