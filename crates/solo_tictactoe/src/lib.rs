//! Solo Tic Tac Toe - one player against a heuristic computer opponent
//!
//! The engine is a synchronous state machine. A front-end holds a [`Game`],
//! forwards cell selections to [`Game::place_move`], wires its
//! concede/play-again control to [`Game::reset_round`], and renders the
//! [`Snapshot`] each operation returns.
//!
//! # Example
//!
//! ```
//! use solo_tictactoe::{Game, RoundOutcome};
//!
//! let mut game = Game::with_seed(7);
//! while game.outcome() == RoundOutcome::InProgress {
//!     let open = game.board().empty_positions()[0];
//!     game.place_move(open);
//! }
//! assert_eq!(game.games_played(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod event;
mod game;
mod marks;
mod position;
mod rng;
mod session;
mod snapshot;
mod types;

pub mod ai;
pub mod invariants;
pub mod rules;

// Crate-level exports - Engine
pub use game::{Game, IgnoredMove};
pub use event::GameEvent;
pub use snapshot::Snapshot;

// Crate-level exports - Domain types
pub use marks::MarkAssignment;
pub use position::Position;
pub use rng::GameRng;
pub use session::{SESSION_LIMIT, Session};
pub use types::{Board, Glyph, RoundOutcome, Side, Square};

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};
