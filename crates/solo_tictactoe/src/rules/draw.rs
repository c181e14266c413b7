//! Draw detection logic for tic-tac-toe.

use super::super::types::{Board, Side, Square};
use super::win::has_won;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board on which neither side completed a line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_won(board, Side::Player) && !has_won(board, Side::Computer)
}
