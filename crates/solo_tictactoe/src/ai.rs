//! Computer move selection.
//!
//! A fixed priority heuristic, not a search: take a winning square, else
//! block the player's winning square, else take the center, else pick an
//! empty square at random.

use super::position::Position;
use super::rng::GameRng;
use super::rules::WINNING_COMBINATIONS;
use super::types::{Board, Side, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule of the heuristic chose the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveReason {
    /// Completes a computer line.
    #[display("win")]
    Win,
    /// Occupies the square that would complete a player line.
    #[display("block")]
    Block,
    /// Takes the open center.
    #[display("center")]
    Center,
    /// Uniform pick among empty squares.
    #[display("random")]
    Random,
}

/// First combination, in table order, where `side` holds two squares and
/// the third is empty. Returns that empty square.
fn completing_square(board: &Board, side: Side) -> Option<usize> {
    WINNING_COMBINATIONS.iter().find_map(|line| {
        let held = line
            .iter()
            .filter(|&&i| board.get(i).is_some_and(|sq| sq.is(side)))
            .count();
        let empty = line.iter().copied().find(|&i| board.is_empty(i));
        match (held, empty) {
            (2, Some(i)) => Some(i),
            _ => None,
        }
    })
}

/// Picks the computer's next square.
///
/// Returns `None` only when the board has no empty square. The random
/// source is consulted only when the first three rules all fail, and then
/// exactly once.
#[instrument(skip(board, rng))]
pub fn choose_move(board: &Board, rng: &mut GameRng) -> Option<(Position, MoveReason)> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        debug!("No empty squares left");
        return None;
    }

    let (index, reason) = if let Some(i) = completing_square(board, Side::Computer) {
        (i, MoveReason::Win)
    } else if let Some(i) = completing_square(board, Side::Player) {
        (i, MoveReason::Block)
    } else if board.get(Board::CENTER) == Some(Square::Empty) {
        (Board::CENTER, MoveReason::Center)
    } else {
        // `empty` is non-empty, checked above
        let &i = rng.choose(&empty)?;
        (i, MoveReason::Random)
    };

    let position = Position::from_index(index)?;
    debug!(position = %position, reason = %reason, "Computer chose square");
    Some((position, reason))
}
