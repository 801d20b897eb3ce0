//! Win detection over the eight standard lines.

use crate::board::Board;
use crate::types::{Player, Square};
use tracing::instrument;

/// The eight winning lines as row-major square indices.
///
/// The order of this table is the evaluation priority: rows top to
/// bottom, then columns left to right, then the main diagonal, then the
/// anti-diagonal. When a board holds more than one complete line, the
/// earliest entry decides which mark is reported.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // center column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Returns the mark holding a complete line, if any.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first complete
/// one wins, so the result is deterministic even on boards that hold
/// several complete lines.
#[instrument]
pub fn winning_mark(board: &Board) -> Option<Player> {
    let squares = board.squares();
    for line in &WINNING_LINES {
        let first = squares[line[0]];
        if first != Square::Empty && first == squares[line[1]] && first == squares[line[2]] {
            return first.mark();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::winning_mark;
    use crate::board::Board;
    use crate::types::Player;

    /// Replays moves without terminal evaluation so test positions can
    /// run past a completed line.
    fn replay(moves: &[(Player, u8)]) -> Board {
        let mut board = Board::new();
        for &(player, cell) in moves {
            board
                .apply_move_deferred(player, cell)
                .expect("scripted move should be legal");
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(winning_mark(&board), None);
    }

    #[test]
    fn test_detects_row_win() {
        let board = replay(&[
            (Player::X, 1),
            (Player::O, 4),
            (Player::X, 2),
            (Player::O, 5),
            (Player::X, 3),
        ]);
        assert_eq!(winning_mark(&board), Some(Player::X));
    }

    #[test]
    fn test_detects_column_win() {
        let board = replay(&[
            (Player::X, 5),
            (Player::O, 1),
            (Player::X, 6),
            (Player::O, 4),
            (Player::X, 9),
            (Player::O, 7),
        ]);
        assert_eq!(winning_mark(&board), Some(Player::O));
    }

    #[test]
    fn test_detects_main_diagonal_win() {
        let board = replay(&[
            (Player::X, 1),
            (Player::O, 2),
            (Player::X, 5),
            (Player::O, 3),
            (Player::X, 9),
        ]);
        assert_eq!(winning_mark(&board), Some(Player::X));
    }

    #[test]
    fn test_detects_anti_diagonal_win() {
        let board = replay(&[
            (Player::X, 1),
            (Player::O, 3),
            (Player::X, 2),
            (Player::O, 5),
            (Player::X, 4),
            (Player::O, 7),
        ]);
        assert_eq!(winning_mark(&board), Some(Player::O));
    }

    #[test]
    fn test_incomplete_lines_do_not_win() {
        let board = replay(&[(Player::X, 1), (Player::O, 4), (Player::X, 2)]);
        assert_eq!(winning_mark(&board), None);
    }

    #[test]
    fn test_earliest_line_wins_when_two_are_complete() {
        // Top row belongs to X, middle row to O. The table scans the top
        // row first, so X is reported.
        let board = replay(&[
            (Player::X, 1),
            (Player::O, 4),
            (Player::X, 2),
            (Player::O, 5),
            (Player::X, 3),
            (Player::O, 6),
        ]);
        assert_eq!(winning_mark(&board), Some(Player::X));
    }
}
