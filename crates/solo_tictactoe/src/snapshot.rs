//! Read-only view of the engine for presentation.

use super::marks::MarkAssignment;
use super::types::{Board, RoundOutcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Immutable copy of everything a front-end renders.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board contents.
    board: Board,
    /// Current round outcome.
    outcome: RoundOutcome,
    /// Glyphs held this round.
    marks: MarkAssignment,
    /// Running score.
    score: i32,
    /// Score as shown between rounds.
    displayed_score: i32,
    /// Completed rounds.
    games_played: u32,
    /// Rounds per session.
    session_limit: u32,
    /// True once the session limit is reached.
    session_complete: bool,
}

impl Snapshot {
    pub(crate) fn new(
        board: Board,
        outcome: RoundOutcome,
        marks: MarkAssignment,
        session: &super::session::Session,
    ) -> Self {
        Self {
            board,
            outcome,
            marks,
            score: *session.score(),
            displayed_score: *session.displayed_score(),
            games_played: *session.games_played(),
            session_limit: *session.limit(),
            session_complete: session.is_complete(),
        }
    }

    /// Headline text for the current outcome.
    pub fn title(&self) -> &'static str {
        self.outcome.title()
    }

    /// Score delta annotation for the current outcome.
    pub fn points_text(&self) -> &'static str {
        self.outcome.points_text()
    }
}
