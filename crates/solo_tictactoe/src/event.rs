//! Change notifications emitted by the engine.

use super::ai::MoveReason;
use super::marks::MarkAssignment;
use super::position::Position;
use super::types::{RoundOutcome, Side};
use serde::{Deserialize, Serialize};

/// Something the presentation layer may want to react to.
///
/// Events accumulate inside [`crate::Game`] until drained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new round began with the given glyph assignment.
    RoundStarted {
        /// Glyphs held this round.
        marks: MarkAssignment,
    },
    /// A mark was written to the board.
    MovePlaced {
        /// Who placed it.
        side: Side,
        /// Where it went.
        position: Position,
        /// Heuristic rule, for computer moves.
        reason: Option<MoveReason>,
    },
    /// The round reached a terminal outcome.
    RoundEnded {
        /// How it ended.
        outcome: RoundOutcome,
    },
    /// The player abandoned a round in progress.
    Conceded,
    /// The session reached its round limit. Emitted once per session.
    SessionComplete {
        /// Final score.
        score: i32,
        /// Rounds played.
        games_played: u32,
    },
    /// Score and round count were cleared.
    SessionRestarted,
}
