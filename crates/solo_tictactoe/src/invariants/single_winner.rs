//! Single winner invariant: play stops at the first completed line.

use super::super::rules::has_won;
use super::super::types::{Board, Side};
use super::Invariant;

/// Invariant: at most one side holds a winning line.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(has_won(board, Side::Player) && has_won(board, Side::Computer))
    }

    fn description() -> &'static str {
        "At most one side holds a winning line"
    }
}
