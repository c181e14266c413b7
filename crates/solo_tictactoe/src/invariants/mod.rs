//! Board invariants.
//!
//! Logical properties that hold after every engine operation under correct
//! turn-taking. The engine checks them after every mark and logs any
//! violation.

pub mod balanced_marks;
pub mod single_winner;

pub use balanced_marks::BalancedMarksInvariant;
pub use single_winner::SingleWinnerInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All board invariants as a composable set.
pub type BoardInvariants = (BalancedMarksInvariant, SingleWinnerInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Side, Square};

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(BoardInvariants::check_all(&Board::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Computer holds the top row and player the middle row.
        let c = Square::Occupied(Side::Computer);
        let p = Square::Occupied(Side::Player);
        let e = Square::Empty;
        let board = Board::from_squares([c, c, c, p, p, p, c, e, e]);

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].to_string().contains("winning line"));

        let lopsided = Board::from_squares([c, c, c, p, p, p, c, c, e]);
        let violations = BoardInvariants::check_all(&lopsided).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
