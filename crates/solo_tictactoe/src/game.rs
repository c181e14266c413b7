//! The game engine: one player against the computer over a scored session.
//!
//! [`Game`] owns the board, the session and the random source. Every
//! operation runs to completion synchronously; the computer replies inside
//! the same call that placed the player's mark.

use super::ai::{self, MoveReason};
use super::config::EngineConfig;
use super::event::GameEvent;
use super::invariants::{BoardInvariants, InvariantSet};
use super::marks::MarkAssignment;
use super::position::Position;
use super::rng::GameRng;
use super::rules;
use super::session::Session;
use super::snapshot::Snapshot;
use super::types::{Board, Glyph, RoundOutcome, Side, Square};
use tracing::{debug, info, instrument, warn};

/// Why a player move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredMove {
    /// The index is not 0-8.
    #[display("position {} is off the board", _0)]
    OutOfRange(usize),
    /// The square already holds a mark.
    #[display("position {} is occupied", _0)]
    Occupied(usize),
    /// The round already ended.
    #[display("round is over")]
    RoundOver,
}

/// Tic-tac-toe engine for a single player against the computer.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    outcome: RoundOutcome,
    marks: MarkAssignment,
    session: Session,
    rng: GameRng,
    events: Vec<GameEvent>,
}

impl Game {
    /// Starts a session with the given configuration.
    ///
    /// The first round begins immediately; if the computer draws O it has
    /// already opened by the time this returns. A session limit of zero is
    /// raised to one round.
    #[instrument(skip(config), fields(session_limit = *config.session_limit(), seed = ?config.seed()))]
    pub fn new(config: &EngineConfig) -> Self {
        if let Err(e) = config.validate() {
            warn!(error = %e, "Invalid engine config, playing one-round sessions");
        }
        let rng = match config.seed() {
            Some(seed) => GameRng::new(*seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(Session::new((*config.session_limit()).max(1)), rng)
    }

    /// Starts a default ten-round session with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&EngineConfig::default().with_seed(Some(seed)))
    }

    fn with_rng(session: Session, rng: GameRng) -> Self {
        info!(seed = ?rng.seed(), "Starting new session");
        let mut game = Self {
            board: Board::new(),
            outcome: RoundOutcome::InProgress,
            marks: MarkAssignment::default(),
            session,
            rng,
            events: Vec::new(),
        };
        game.start_round();
        game
    }

    // ─────────────────────────────────────────────────────────────
    //  Operations
    // ─────────────────────────────────────────────────────────────

    /// Places the player's mark at `index` (0-8), then lets the computer reply.
    ///
    /// Ignored without error when the round is over, the index is off the
    /// board, or the square is taken.
    #[instrument(skip(self), fields(outcome = ?self.outcome))]
    pub fn place_move(&mut self, index: usize) -> Snapshot {
        let position = match self.check_player_move(index) {
            Ok(position) => position,
            Err(reason) => {
                debug!(index, %reason, "Ignoring player move");
                return self.snapshot();
            }
        };

        self.write(position, Side::Player, None);
        if !self.evaluate_round().is_terminal() {
            self.select_computer_move();
        }
        self.snapshot()
    }

    /// Places the computer's mark using the priority heuristic.
    ///
    /// With no empty square left the round is declared a draw instead.
    /// Does nothing once the round is over.
    #[instrument(skip(self))]
    pub fn select_computer_move(&mut self) -> Snapshot {
        if self.outcome.is_terminal() {
            debug!(outcome = ?self.outcome, "Round over, computer does not move");
            return self.snapshot();
        }

        match ai::choose_move(&self.board, &mut self.rng) {
            Some((position, reason)) => {
                self.write(position, Side::Computer, Some(reason));
                self.evaluate_round();
            }
            None => {
                info!("Computer has no square to take, cat's game");
                self.finish_round(RoundOutcome::Draw);
            }
        }
        self.snapshot()
    }

    /// Checks the board for a win or draw and applies scoring on the
    /// transition out of [`RoundOutcome::InProgress`].
    ///
    /// Once the round is terminal this only reports the stored outcome, so
    /// calling it again cannot count a round twice.
    #[instrument(skip(self))]
    pub fn evaluate_round(&mut self) -> RoundOutcome {
        if self.outcome.is_terminal() {
            return self.outcome;
        }

        let outcome = rules::evaluate(&self.board);
        if outcome.is_terminal() {
            self.finish_round(outcome);
        }
        outcome
    }

    /// Starts the next round.
    ///
    /// Resetting a round still in progress is a concession and costs one
    /// point. The glyphs are re-rolled and the computer opens if it draws O.
    #[instrument(skip(self), fields(outcome = ?self.outcome))]
    pub fn reset_round(&mut self) -> Snapshot {
        if !self.outcome.is_terminal() {
            self.session.concede();
            self.events.push(GameEvent::Conceded);
        }
        self.start_round();
        self.snapshot()
    }

    /// Clears score and round count, then starts a fresh round.
    #[instrument(skip(self))]
    pub fn restart_session(&mut self) -> Snapshot {
        info!(
            score = *self.session.score(),
            games_played = *self.session.games_played(),
            "Restarting session"
        );
        self.session.reset();
        self.events.push(GameEvent::SessionRestarted);
        self.start_round();
        self.snapshot()
    }

    // ─────────────────────────────────────────────────────────────
    //  Observers
    // ─────────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current round outcome.
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Returns this round's glyph assignment.
    pub fn marks(&self) -> MarkAssignment {
        self.marks
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Headline text for the current outcome.
    pub fn title(&self) -> &'static str {
        self.outcome.title()
    }

    /// Score delta annotation for the current outcome.
    pub fn points_text(&self) -> &'static str {
        self.outcome.points_text()
    }

    /// Running score.
    pub fn score(&self) -> i32 {
        *self.session.score()
    }

    /// Score as shown between rounds.
    pub fn displayed_score(&self) -> i32 {
        *self.session.displayed_score()
    }

    /// Completed rounds this session.
    pub fn games_played(&self) -> u32 {
        *self.session.games_played()
    }

    /// Rounds per session.
    pub fn session_limit(&self) -> u32 {
        *self.session.limit()
    }

    /// True once the session limit is reached.
    pub fn is_session_complete(&self) -> bool {
        self.session.is_complete()
    }

    /// End-of-session message.
    pub fn summary(&self) -> String {
        self.session.summary()
    }

    /// Glyph shown for a side this round.
    pub fn glyph(&self, side: Side) -> Glyph {
        self.marks.glyph(side)
    }

    /// Immutable copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board.clone(), self.outcome, self.marks, &self.session)
    }

    /// Takes all events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    fn check_player_move(&self, index: usize) -> Result<Position, IgnoredMove> {
        if self.outcome.is_terminal() {
            return Err(IgnoredMove::RoundOver);
        }
        let position = Position::from_index(index).ok_or(IgnoredMove::OutOfRange(index))?;
        if !self.board.is_empty(index) {
            return Err(IgnoredMove::Occupied(index));
        }
        Ok(position)
    }

    fn write(&mut self, position: Position, side: Side, reason: Option<MoveReason>) {
        if let Err(e) = self.board.set(position.to_index(), Square::Occupied(side)) {
            warn!(%position, error = e, "Mark not placed");
            return;
        }
        debug!(%side, %position, ?reason, "Mark placed");
        self.events.push(GameEvent::MovePlaced {
            side,
            position,
            reason,
        });
        self.check_invariants();
    }

    fn finish_round(&mut self, outcome: RoundOutcome) {
        self.outcome = outcome;
        info!(?outcome, title = outcome.title(), "Round over");
        self.events.push(GameEvent::RoundEnded { outcome });

        if self.session.record(outcome) {
            self.events.push(GameEvent::SessionComplete {
                score: *self.session.score(),
                games_played: *self.session.games_played(),
            });
        }
    }

    fn start_round(&mut self) {
        self.session.sync_display();
        self.board.clear();
        self.outcome = RoundOutcome::InProgress;
        self.marks = MarkAssignment::roll(&mut self.rng);
        info!(
            player = %self.marks.player(),
            computer = %self.marks.computer(),
            "Round started"
        );
        self.events.push(GameEvent::RoundStarted { marks: self.marks });

        if self.marks.first_mover() == Side::Computer {
            self.select_computer_move();
        }
    }

    /// Logs board invariant violations. Out-of-turn calls to
    /// [`Game::select_computer_move`] can produce them; play continues.
    fn check_invariants(&self) {
        if let Err(violations) = BoardInvariants::check_all(&self.board) {
            for violation in &violations {
                warn!(%violation, "Board invariant violated");
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with_board(cells: &str, player: Glyph) -> Game {
        let mut game = Game::with_seed(11);
        let mut squares = [Square::Empty; 9];
        for (sq, c) in squares.iter_mut().zip(cells.chars()) {
            *sq = match c {
                'P' => Square::Occupied(Side::Player),
                'C' => Square::Occupied(Side::Computer),
                _ => Square::Empty,
            };
        }
        game.board = Board::from_squares(squares);
        game.outcome = RoundOutcome::InProgress;
        game.marks = MarkAssignment::with_player(player);
        game.drain_events();
        game
    }

    #[test]
    fn test_evaluate_twice_counts_once() {
        let mut game = game_with_board("PPP_CC_C_", Glyph::X);
        assert_eq!(game.evaluate_round(), RoundOutcome::PlayerWin);
        assert_eq!(game.evaluate_round(), RoundOutcome::PlayerWin);
        assert_eq!(game.score(), 1);
        assert_eq!(game.games_played(), 1);
    }

    #[test]
    fn test_computer_win_scores_minus_one() {
        let mut game = game_with_board("CC_PP_P__", Glyph::O);
        let snap = game.select_computer_move();
        assert_eq!(*snap.outcome(), RoundOutcome::ComputerWin);
        assert_eq!(snap.board().get(2), Some(Square::Occupied(Side::Computer)));
        assert_eq!(game.score(), -1);
        assert_eq!(game.title(), "You lose...");
        assert_eq!(game.points_text(), "(-1)");
    }

    #[test]
    fn test_full_board_computer_move_is_draw() {
        // Full board left in progress only by direct manipulation.
        let mut game = game_with_board("PCPPCCCPP", Glyph::X);
        let before = game.board.clone();
        let snap = game.select_computer_move();
        assert_eq!(*snap.outcome(), RoundOutcome::Draw);
        assert_eq!(snap.board(), &before);
        assert_eq!(game.games_played(), 1);
        assert_eq!(game.score(), 0);
        assert_eq!(game.title(), "Cat's game.");
    }

    #[test]
    fn test_player_move_then_computer_blocks() {
        let mut game = game_with_board("P___C____", Glyph::X);
        // Player takes 1, threatening 2; computer must block there.
        let snap = game.place_move(1);
        assert_eq!(snap.board().get(2), Some(Square::Occupied(Side::Computer)));
        let events = game.drain_events();
        assert!(events.contains(&GameEvent::MovePlaced {
            side: Side::Computer,
            position: Position::TopRight,
            reason: Some(MoveReason::Block),
        }));
    }

    #[test]
    fn test_winning_player_move_skips_computer_reply() {
        let mut game = game_with_board("PP_CC____", Glyph::X);
        let snap = game.place_move(2);
        assert_eq!(*snap.outcome(), RoundOutcome::PlayerWin);
        assert_eq!(snap.board().count(Side::Computer), 2);
        assert_eq!(snap.points_text(), "(+1)");
    }

    #[test]
    fn test_last_square_draw_by_player() {
        // P C P / P C C / C P _ : player fills 8, no line.
        let mut game = game_with_board("PCPPCCCP_", Glyph::X);
        let snap = game.place_move(8);
        assert_eq!(*snap.outcome(), RoundOutcome::Draw);
        assert_eq!(game.games_played(), 1);
    }

    #[test]
    fn test_repeated_computer_moves_mid_round_keep_playing() {
        let mut game = game_with_board("_________", Glyph::FIRST_MOVER);
        game.select_computer_move();
        let snap = game.select_computer_move();
        assert_eq!(snap.board().count(Side::Computer), 2);
        assert_eq!(snap.board().get(4), Some(Square::Occupied(Side::Computer)));
        assert_eq!(*snap.outcome(), RoundOutcome::InProgress);

        // The player can still move afterwards.
        let open = game.board().empty_positions()[0];
        let snap = game.place_move(open);
        assert_eq!(snap.board().get(open), Some(Square::Occupied(Side::Player)));
    }

    #[test]
    fn test_zero_session_limit_raised_to_one() {
        let mut game = Game::new(&EngineConfig::new(0, Some(3)));
        assert_eq!(game.session_limit(), 1);
        assert!(!game.is_session_complete());

        while game.outcome() == RoundOutcome::InProgress {
            let open = game.board().empty_positions()[0];
            game.place_move(open);
        }
        assert!(game.is_session_complete());
        let completions = game
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::SessionComplete { .. }))
            .count();
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_concession_after_win_is_free() {
        let mut game = game_with_board("PP_CC____", Glyph::X);
        game.place_move(2);
        game.reset_round();
        assert_eq!(game.score(), 1);
        assert_eq!(game.displayed_score(), 1);
        assert!(!game.drain_events().contains(&GameEvent::Conceded));
    }
}
