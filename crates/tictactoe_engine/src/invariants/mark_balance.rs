//! Mark balance: X never trails and never leads by more than one.

use super::{Invariant, mark_counts};
use crate::board::Board;
use tracing::warn;

/// Invariant: X opens and marks are never removed, so the X count equals
/// the O count or exceeds it by exactly one.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let (x_count, o_count) = mark_counts(board);
        let valid = x_count >= o_count && x_count - o_count <= 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "the X count equals the O count or exceeds it by exactly one"
    }
}

#[cfg(test)]
mod tests {
    use super::MarkBalanceInvariant;
    use crate::board::Board;
    use crate::cell::Cell;
    use crate::invariants::Invariant;
    use crate::types::{Player, Square};

    #[test]
    fn test_holds_on_fresh_board() {
        assert!(MarkBalanceInvariant::holds(&Board::new()));
    }

    #[test]
    fn test_holds_while_alternating() {
        let mut board = Board::new();
        board.apply_move(Player::X, 5).expect("legal move");
        assert!(MarkBalanceInvariant::holds(&board));
        board.apply_move(Player::O, 1).expect("legal move");
        assert!(MarkBalanceInvariant::holds(&board));
    }

    #[test]
    fn test_rejects_an_o_lead() {
        let mut board = Board::new();
        board.set_square_unchecked(Cell::Center, Square::Occupied(Player::O));
        assert!(!MarkBalanceInvariant::holds(&board));
    }

    #[test]
    fn test_rejects_a_double_x_lead() {
        let mut board = Board::new();
        board.set_square_unchecked(Cell::TopLeft, Square::Occupied(Player::X));
        board.set_square_unchecked(Cell::TopRight, Square::Occupied(Player::X));
        assert!(!MarkBalanceInvariant::holds(&board));
    }
}
