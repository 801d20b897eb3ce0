//! First-class invariants over board state.
//!
//! Invariants are logical properties that hold on every board reachable
//! through the move interface. Each one is testable on its own, and the
//! board asserts the composed [`BoardInvariants`] set after every
//! successful move in debug builds.

use crate::board::Board;
use crate::types::Player;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
///
/// Implementations are provided for tuples, so related invariants
/// compose into a single verification step.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !A::holds(state) {
            violations.push(InvariantViolation::new(A::description()));
        }
        if !B::holds(state) {
            violations.push(InvariantViolation::new(B::description()));
        }
        if !C::holds(state) {
            violations.push(InvariantViolation::new(C::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !A::holds(state) {
            violations.push(InvariantViolation::new(A::description()));
        }
        if !B::holds(state) {
            violations.push(InvariantViolation::new(B::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod mark_balance;
pub mod terminal_flag;

pub use alternating_turn::AlternatingTurnInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use terminal_flag::TerminalFlagInvariant;

/// Every board invariant as a composable set.
pub type BoardInvariants = (
    MarkBalanceInvariant,
    AlternatingTurnInvariant,
    TerminalFlagInvariant,
);

/// Counts the X and O marks on the board, in that order.
pub(crate) fn mark_counts(board: &Board) -> (usize, usize) {
    let mut x_count = 0;
    let mut o_count = 0;
    for square in board.squares() {
        match square.mark() {
            Some(Player::X) => x_count += 1,
            Some(Player::O) => o_count += 1,
            None => {}
        }
    }
    (x_count, o_count)
}

#[cfg(test)]
mod tests {
    use super::{
        AlternatingTurnInvariant, BoardInvariants, InvariantSet, MarkBalanceInvariant,
        TerminalFlagInvariant,
    };
    use crate::board::Board;
    use crate::cell::Cell;
    use crate::types::{Player, Square};

    #[test]
    fn test_fresh_board_satisfies_all_invariants() {
        let board = Board::new();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_played_board_satisfies_all_invariants() {
        let mut board = Board::new();
        board.apply_move(Player::X, 5).expect("legal move");
        board.apply_move(Player::O, 1).expect("legal move");
        board.apply_move(Player::X, 9).expect("legal move");
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_corrupted_board_reports_violations() {
        let mut board = Board::new();
        // An extra O with no matching X breaks both the balance and the
        // turn parity.
        board.set_square_unchecked(Cell::TopLeft, Square::Occupied(Player::O));
        let violations = BoardInvariants::check_all(&board).expect_err("corrupt board");
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_subsets_compose_as_pairs() {
        type Subset = (MarkBalanceInvariant, TerminalFlagInvariant);
        let mut board = Board::new();
        board.apply_move(Player::X, 1).expect("legal move");
        assert!(Subset::check_all(&board).is_ok());
    }

    #[test]
    fn test_pair_subset_sees_only_its_own_violations() {
        type Subset = (MarkBalanceInvariant, AlternatingTurnInvariant);
        let mut board = Board::new();
        // A stray flag violates the terminal invariant but neither
        // member of this subset.
        board.set_game_over_unchecked(true);
        assert!(Subset::check_all(&board).is_ok());
        assert!(BoardInvariants::check_all(&board).is_err());
    }
}
