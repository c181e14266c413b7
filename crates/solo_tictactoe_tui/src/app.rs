//! Application state and key handling.

use crate::input::move_cursor;
use crossterm::event::KeyCode;
use solo_tictactoe::{Game, GameEvent, Position, RoundOutcome};
use tracing::{debug, info};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
    show_summary: bool,
    status_message: String,
}

impl App {
    /// Creates a new application around a started game.
    pub fn new(mut game: Game) -> Self {
        let events = game.drain_events();
        let mut app = Self {
            game,
            cursor: Position::Center,
            show_summary: false,
            status_message: String::new(),
        };
        app.absorb(events);
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True while the end-of-session summary is on screen.
    pub fn show_summary(&self) -> bool {
        self.show_summary
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        if key == KeyCode::Char('q') || key == KeyCode::Esc {
            return Control::Quit;
        }

        if self.show_summary {
            if matches!(key, KeyCode::Char('r') | KeyCode::Enter) {
                info!("Restarting session from summary");
                self.show_summary = false;
                self.game.restart_session();
                self.sync();
            }
            return Control::Continue;
        }

        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(pos) = Position::parse(&c.to_string()) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            KeyCode::Char('c') => {
                self.game.reset_round();
                self.sync();
            }
            _ => {}
        }
        Control::Continue
    }

    /// Label for the concede / play-again control.
    pub fn reset_label(&self) -> &'static str {
        if self.game.outcome() == RoundOutcome::InProgress {
            "Concede!"
        } else {
            "Play again!"
        }
    }

    fn place(&mut self, pos: Position) {
        debug!(position = %pos, "Player selected square");
        self.game.place_move(pos.to_index());
        self.sync();
    }

    fn sync(&mut self) {
        let events = self.game.drain_events();
        self.absorb(events);
    }

    fn absorb(&mut self, events: Vec<GameEvent>) {
        for event in events {
            debug!(?event, "Handling game event");
            match event {
                GameEvent::RoundStarted { marks } => {
                    self.status_message = format!("You are {}.", marks.player());
                }
                GameEvent::MovePlaced {
                    side, position, ..
                } => {
                    self.status_message = format!("{} played {}", side, position.label());
                }
                GameEvent::RoundEnded { .. } => {
                    self.status_message = "Round over. Press 'c' to play again.".to_string();
                }
                GameEvent::Conceded => {
                    self.status_message = "Conceded (-1).".to_string();
                }
                GameEvent::SessionComplete { .. } => {
                    self.show_summary = true;
                }
                GameEvent::SessionRestarted => {
                    self.status_message = "New session.".to_string();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solo_tictactoe::EngineConfig;

    fn app(limit: u32) -> App {
        let config = EngineConfig::default()
            .with_seed(Some(5))
            .with_session_limit(limit);
        App::new(Game::new(&config))
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(10);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Control::Quit);
    }

    #[test]
    fn test_status_set_on_start() {
        let app = app(10);
        assert!(!app.status_message().is_empty());
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_concede_key_costs_a_point() {
        let mut app = app(10);
        assert_eq!(app.reset_label(), "Concede!");
        app.handle_key(KeyCode::Char('c'));
        assert_eq!(app.game().score(), -1);
        assert_eq!(app.game().displayed_score(), -1);
    }

    #[test]
    fn test_digit_places_on_matching_square() {
        let mut app = app(10);
        let open = app.game().board().empty_positions()[0];
        let digit = char::from_digit(open as u32 + 1, 10).unwrap();
        app.handle_key(KeyCode::Char(digit));
        assert_eq!(app.cursor().to_index(), open);
        assert_eq!(
            app.game().board().get(open),
            Some(solo_tictactoe::Square::Occupied(solo_tictactoe::Side::Player))
        );
    }

    #[test]
    fn test_summary_shown_and_restart() {
        let mut app = app(1);
        while app.game().outcome() == RoundOutcome::InProgress {
            let open = app.game().board().empty_positions()[0];
            let digit = char::from_digit(open as u32 + 1, 10).unwrap();
            app.handle_key(KeyCode::Char(digit));
        }
        assert!(app.show_summary());

        // Board keys are inert while the summary is up.
        app.handle_key(KeyCode::Char('c'));
        assert_eq!(app.game().games_played(), 1);

        app.handle_key(KeyCode::Char('r'));
        assert!(!app.show_summary());
        assert_eq!(app.game().games_played(), 0);
        assert_eq!(app.game().score(), 0);
    }
}
