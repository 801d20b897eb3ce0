//! Board-full detection backing tie verdicts.

use crate::board::Board;
use tracing::instrument;

/// Returns true when every square holds a mark.
///
/// A full board with no complete line is a tie. Fullness alone says
/// nothing about winning: the caller checks lines first.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|square| !square.is_empty())
}
