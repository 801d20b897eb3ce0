//! Terminal flag: the game-over flag never outruns the position.

use super::Invariant;
use crate::board::Board;
use crate::rules;

/// Invariant: the game-over flag is set only on decided positions, a
/// complete winning line or a full board. The converse is not required,
/// since deferred-evaluation callers may hold a decided position whose
/// flag has not been raised yet.
pub struct TerminalFlagInvariant;

impl Invariant<Board> for TerminalFlagInvariant {
    fn holds(board: &Board) -> bool {
        !board.is_game_over() || rules::winning_mark(board).is_some() || rules::is_full(board)
    }

    fn description() -> &'static str {
        "a set game-over flag implies a winning line or a full board"
    }
}
