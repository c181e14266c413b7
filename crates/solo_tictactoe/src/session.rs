//! Session scoring across a fixed number of rounds.

use super::types::RoundOutcome;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Number of rounds in a session.
pub const SESSION_LIMIT: u32 = 10;

/// Cumulative score and round count for one session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Session {
    /// Running score: +1 win, -1 loss or concession, 0 draw.
    score: i32,
    /// Score as shown between rounds, refreshed on every reset.
    displayed_score: i32,
    /// Completed rounds. Concessions are not counted.
    games_played: u32,
    /// Rounds after which the session is complete.
    limit: u32,
    /// Set once the completion signal has been raised.
    completion_signaled: bool,
}

impl Session {
    /// Creates a fresh session of `limit` rounds.
    #[instrument]
    pub fn new(limit: u32) -> Self {
        Self {
            score: 0,
            displayed_score: 0,
            games_played: 0,
            limit,
            completion_signaled: false,
        }
    }

    /// Records a completed round.
    ///
    /// Returns true when this round brings the session to its limit for the
    /// first time; later rounds never return true again until [`Session::reset`].
    #[instrument(skip(self), fields(score = self.score, games_played = self.games_played))]
    pub fn record(&mut self, outcome: RoundOutcome) -> bool {
        if !outcome.is_terminal() {
            debug!("Ignoring non-terminal outcome");
            return false;
        }

        self.games_played += 1;
        self.score += outcome.points();
        info!(
            ?outcome,
            score = self.score,
            games_played = self.games_played,
            "Round recorded"
        );

        if self.games_played >= self.limit && !self.completion_signaled {
            self.completion_signaled = true;
            info!(score = self.score, "Session complete");
            return true;
        }
        false
    }

    /// Applies the penalty for abandoning a round before it ended.
    #[instrument(skip(self), fields(score = self.score))]
    pub fn concede(&mut self) {
        self.score -= 1;
        info!(score = self.score, "Round conceded");
    }

    /// Refreshes the between-rounds score display.
    pub fn sync_display(&mut self) {
        self.displayed_score = self.score;
    }

    /// Returns true once `games_played` has reached the limit.
    pub fn is_complete(&self) -> bool {
        self.games_played >= self.limit
    }

    /// Zeroes score and round count.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new(self.limit);
    }

    /// End-of-session message.
    pub fn summary(&self) -> String {
        format!(
            "You scored {} point{} out of {} games!",
            self.score,
            if self.score == 1 { "" } else { "s" },
            self.limit
        )
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SESSION_LIMIT)
    }
}
