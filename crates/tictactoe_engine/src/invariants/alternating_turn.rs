//! Turn parity: the turn always matches the mark counts.

use super::{Invariant, mark_counts};
use crate::board::Board;
use crate::types::Player;

/// Invariant: X opens and the turn flips after every applied move, so X
/// is due whenever the counts are equal and O is due whenever X leads by
/// one.
pub struct AlternatingTurnInvariant;

impl Invariant<Board> for AlternatingTurnInvariant {
    fn holds(board: &Board) -> bool {
        let (x_count, o_count) = mark_counts(board);
        match board.turn() {
            Player::X => x_count == o_count,
            Player::O => x_count == o_count + 1,
        }
    }

    fn description() -> &'static str {
        "the turn matches mark parity: equal counts put X on move, an X lead puts O on move"
    }
}
