//! Per-round glyph assignment.

use super::rng::GameRng;
use super::types::{Glyph, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which glyph each side holds for the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkAssignment {
    player: Glyph,
}

impl MarkAssignment {
    /// Assignment where the player holds `player` and the computer the other glyph.
    pub fn with_player(player: Glyph) -> Self {
        Self { player }
    }

    /// Rolls a fresh assignment: 50/50 which glyph the player gets.
    ///
    /// Draws exactly one coin flip from `rng`.
    #[instrument(skip(rng))]
    pub fn roll(rng: &mut GameRng) -> Self {
        let player = if rng.coin_flip() { Glyph::X } else { Glyph::O };
        Self { player }
    }

    /// Glyph held by the given side.
    pub fn glyph(&self, side: Side) -> Glyph {
        match side {
            Side::Player => self.player,
            Side::Computer => self.player.other(),
        }
    }

    /// Glyph held by the player.
    pub fn player(&self) -> Glyph {
        self.glyph(Side::Player)
    }

    /// Glyph held by the computer.
    pub fn computer(&self) -> Glyph {
        self.glyph(Side::Computer)
    }

    /// Side that opens the round: whoever holds the first-mover glyph.
    pub fn first_mover(&self) -> Side {
        if self.player == Glyph::FIRST_MOVER {
            Side::Player
        } else {
            Side::Computer
        }
    }
}

impl Default for MarkAssignment {
    fn default() -> Self {
        Self::with_player(Glyph::FIRST_MOVER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_hold_distinct_glyphs() {
        for player in [Glyph::X, Glyph::O] {
            let marks = MarkAssignment::with_player(player);
            assert_ne!(marks.player(), marks.computer());
        }
    }

    #[test]
    fn test_o_holder_moves_first() {
        assert_eq!(MarkAssignment::with_player(Glyph::O).first_mover(), Side::Player);
        assert_eq!(MarkAssignment::with_player(Glyph::X).first_mover(), Side::Computer);
    }

    #[test]
    fn test_default_lets_player_open() {
        let marks = MarkAssignment::default();
        assert_eq!(marks.player(), Glyph::O);
        assert_eq!(marks.first_mover(), Side::Player);
    }

    #[test]
    fn test_roll_produces_both_assignments() {
        let mut rng = GameRng::new(3);
        let rolls: Vec<Glyph> = (0..64).map(|_| MarkAssignment::roll(&mut rng).player()).collect();
        assert!(rolls.contains(&Glyph::X));
        assert!(rolls.contains(&Glyph::O));
    }
}
