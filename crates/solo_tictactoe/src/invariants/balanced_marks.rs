//! Balanced marks invariant: sides alternate, so counts stay within one.

use super::super::types::{Board, Side};
use super::Invariant;

/// Invariant: player and computer mark counts differ by at most one.
pub struct BalancedMarksInvariant;

impl Invariant<Board> for BalancedMarksInvariant {
    fn holds(board: &Board) -> bool {
        board.count(Side::Player).abs_diff(board.count(Side::Computer)) <= 1
    }

    fn description() -> &'static str {
        "Player and computer mark counts differ by at most one"
    }
}
