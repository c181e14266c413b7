//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine layers scoring and session
//! bookkeeping on top; nothing here mutates state.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_COMBINATIONS, has_won, winning_combination};

use super::types::{Board, RoundOutcome, Side};
use tracing::instrument;

/// Evaluates the board into a round outcome.
///
/// All eight combinations are checked for both sides before deciding, and
/// a fixed precedence resolves boards where more than one result holds:
/// player win, then computer win, then draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> RoundOutcome {
    let player = has_won(board, Side::Player);
    let computer = has_won(board, Side::Computer);

    if player {
        RoundOutcome::PlayerWin
    } else if computer {
        RoundOutcome::ComputerWin
    } else if is_draw(board) {
        RoundOutcome::Draw
    } else {
        RoundOutcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    fn board(cells: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (sq, c) in squares.iter_mut().zip(cells.chars()) {
            *sq = match c {
                'P' => Square::Occupied(Side::Player),
                'C' => Square::Occupied(Side::Computer),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), RoundOutcome::InProgress);
    }

    #[test]
    fn test_player_column() {
        assert_eq!(evaluate(&board("PC_PC_P__")), RoundOutcome::PlayerWin);
    }

    #[test]
    fn test_computer_anti_diagonal() {
        assert_eq!(evaluate(&board("PPC_C_CP_")), RoundOutcome::ComputerWin);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board("PCPPCCCPP")), RoundOutcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        assert_eq!(evaluate(&board("PPPCCPCPC")), RoundOutcome::PlayerWin);
    }

    #[test]
    fn test_player_precedence_when_both_complete() {
        // Unreachable in play, but the result must not depend on scan order.
        assert_eq!(evaluate(&board("CCCPPP___")), RoundOutcome::PlayerWin);
    }
}
