//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Side};

/// The eight winning lines, in scan order: rows, columns, diagonals.
pub const WINNING_COMBINATIONS: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first combination entirely held by `side`.
pub fn winning_combination(board: &Board, side: Side) -> Option<[usize; 3]> {
    WINNING_COMBINATIONS.iter().copied().find(|line| {
        line.iter()
            .all(|&i| board.get(i).is_some_and(|sq| sq.is(side)))
    })
}

/// Checks if `side` holds three in a row anywhere.
pub fn has_won(board: &Board, side: Side) -> bool {
    winning_combination(board, side).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Side::Player));
        assert!(!has_won(&board, Side::Computer));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        for pos in [0, 1, 2] {
            board.set(pos, Square::Occupied(Side::Player)).unwrap();
        }
        assert_eq!(winning_combination(&board, Side::Player), Some([0, 1, 2]));
        assert!(!has_won(&board, Side::Computer));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        for pos in [0, 4, 8] {
            board.set(pos, Square::Occupied(Side::Computer)).unwrap();
        }
        assert!(has_won(&board, Side::Computer));
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.set(0, Square::Occupied(Side::Player)).unwrap();
        board.set(1, Square::Occupied(Side::Player)).unwrap();
        board.set(2, Square::Occupied(Side::Computer)).unwrap();
        assert!(!has_won(&board, Side::Player));
    }

    #[test]
    fn test_every_cell_is_on_some_line() {
        for cell in 0..Board::CELLS {
            assert!(WINNING_COMBINATIONS.iter().any(|line| line.contains(&cell)));
        }
    }
}
