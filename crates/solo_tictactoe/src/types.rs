//! Core domain types for solo tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Which side placed a mark.
///
/// Cells record the side, not the glyph: glyphs are reassigned every round
/// while the heuristic and scoring only care about who owns a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Side {
    /// The human player.
    #[display("Player")]
    Player,
    /// The computer opponent.
    #[display("Computer")]
    Computer,
}

/// Display glyph assigned to a side for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Glyph {
    /// Crosses.
    #[display("X")]
    X,
    /// Noughts. Whoever holds O moves first.
    #[display("O")]
    O,
}

impl Glyph {
    /// The glyph that conventionally opens a game.
    pub const FIRST_MOVER: Glyph = Glyph::O;

    /// Returns the other glyph.
    pub fn other(self) -> Self {
        match self {
            Glyph::X => Glyph::O,
            Glyph::O => Glyph::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a side.
    Occupied(Side),
}

impl Square {
    /// Returns true if the square holds the given side's mark.
    pub fn is(self, side: Side) -> bool {
        self == Square::Occupied(side)
    }
}

/// 3x3 board in row-major order (indices 0-8).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const CELLS: usize = 9;

    /// Index of the center cell.
    pub const CENTER: usize = 4;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from explicit squares.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: usize, square: Square) -> Result<(), &'static str> {
        let slot = self.squares.get_mut(pos).ok_or("Position out of bounds")?;
        *slot = square;
        Ok(())
    }

    /// Checks if a square is empty. Out of range positions are never empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Indices of all empty squares, ascending.
    pub fn empty_positions(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, sq)| **sq == Square::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of squares holding the given side's mark.
    pub fn count(&self, side: Side) -> usize {
        self.squares.iter().filter(|sq| sq.is(side)).count()
    }

    /// Clears every square.
    pub fn clear(&mut self) {
        self.squares = [Square::Empty; 9];
    }
}

/// Outcome of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Round is ongoing.
    #[default]
    InProgress,
    /// The player completed a line.
    PlayerWin,
    /// The computer completed a line.
    ComputerWin,
    /// Board filled with no line completed.
    Draw,
}

impl RoundOutcome {
    /// Returns true once the round has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }

    /// Score change applied when the round ends with this outcome.
    pub fn points(self) -> i32 {
        match self {
            RoundOutcome::PlayerWin => 1,
            RoundOutcome::ComputerWin => -1,
            RoundOutcome::Draw | RoundOutcome::InProgress => 0,
        }
    }

    /// Headline shown for this outcome.
    pub fn title(self) -> &'static str {
        match self {
            RoundOutcome::InProgress => "Tic Tac Toe",
            RoundOutcome::PlayerWin => "You win!",
            RoundOutcome::ComputerWin => "You lose...",
            RoundOutcome::Draw => "Cat's game.",
        }
    }

    /// Score delta annotation shown next to the score.
    pub fn points_text(self) -> &'static str {
        match self {
            RoundOutcome::InProgress => "",
            RoundOutcome::PlayerWin => "(+1)",
            RoundOutcome::ComputerWin => "(-1)",
            RoundOutcome::Draw => "(+0)",
        }
    }
}
