//! The board entity: grid state, turn state, and the game-over flag.
//!
//! [`Board`] owns the whole state of one game and is mutated exclusively
//! through move application. Once a terminal state has been detected the
//! game-over flag stays set, further moves are rejected, and only read
//! access remains.
//!
//! The board carries no internal synchronization. Callers sharing one
//! game across threads must serialize access externally, one lock per
//! game, since interleaved moves would race on the turn and the flag.

use crate::cell::Cell;
use crate::rules;
use crate::types::{Player, Square, Verdict};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Rejection of an invalid move attempt.
///
/// Validation runs in a fixed order, so the reported error is always the
/// first failing condition: game over, then player validity, then cell
/// validity, then turn, then occupancy. A rejected move leaves the board
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already reached a terminal state.
    #[display("Game is already over")]
    GameOver,
    /// The numeric player value is neither 0 (O) nor 1 (X).
    #[display("Player value {} is neither 0 (O) nor 1 (X)", _0)]
    InvalidPlayer(u8),
    /// The cell number falls outside 1 through 9.
    #[display("Invalid cell {}; cells are numbered from 1 to 9", _0)]
    InvalidCell(u8),
    /// The move came from the player not currently due to move.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Player),
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Cell),
}

impl std::error::Error for MoveError {}

/// The rules-engine entity for one game of tic-tac-toe.
///
/// A fresh board is empty with X to move. State advances only through
/// [`Board::apply_move`] and its variants; everything else is read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order, indexed by [`Cell::index`].
    squares: [Square; 9],
    /// The player currently permitted to move.
    turn: Player,
    /// Set permanently once a win or tie has been detected.
    game_over: bool,
}

impl Board {
    /// Creates an empty board with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
            turn: Player::X,
            game_over: false,
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Read access
    // ────────────────────────────────────────────────────────────────────────

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the square at the given cell.
    pub fn square(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Returns the player currently permitted to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns true once a terminal state has been detected.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the cells still empty, in numbering order.
    #[instrument(skip(self))]
    pub fn vacant_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .into_iter()
            .filter(|cell| self.square(*cell).is_empty())
            .collect()
    }

    // ────────────────────────────────────────────────────────────────────────
    // Move application
    // ────────────────────────────────────────────────────────────────────────

    /// Applies a move, then evaluates the board for a terminal state.
    ///
    /// On success the cell receives the player's mark, the turn passes to
    /// the opponent, and [`Board::evaluate`] runs, setting the game-over
    /// flag if the move ended the game. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// The first failing condition, in this order: [`MoveError::GameOver`],
    /// [`MoveError::InvalidCell`], [`MoveError::WrongTurn`],
    /// [`MoveError::CellOccupied`].
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, player: Player, cell: u8) -> Result<(), MoveError> {
        self.place(player, cell, true)
    }

    /// Applies a move without terminal-state evaluation.
    ///
    /// Validation and mutation match [`Board::apply_move`], but the
    /// game-over flag is left alone even when the move completes a line.
    /// The caller takes over responsibility for running
    /// [`Board::evaluate`] at the end of the turn; until then further
    /// moves keep being accepted.
    ///
    /// # Errors
    ///
    /// Same conditions and order as [`Board::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move_deferred(&mut self, player: Player, cell: u8) -> Result<(), MoveError> {
        self.place(player, cell, false)
    }

    /// Applies a move given in the numeric convention (0 for O, 1 for X).
    ///
    /// This is the untyped entry point for callers working with raw
    /// numbers rather than [`Player`] values. Terminal-state evaluation
    /// runs as in [`Board::apply_move`].
    ///
    /// # Errors
    ///
    /// The first failing condition, in this order: [`MoveError::GameOver`],
    /// [`MoveError::InvalidPlayer`], [`MoveError::InvalidCell`],
    /// [`MoveError::WrongTurn`], [`MoveError::CellOccupied`].
    #[instrument(skip(self))]
    pub fn apply_numeric(&mut self, player: u8, cell: u8) -> Result<(), MoveError> {
        // Game over outranks player validity in the reported error.
        if self.game_over {
            warn!(player, cell, "Move rejected: game is already over");
            return Err(MoveError::GameOver);
        }
        let player = Player::from_value(player).ok_or(MoveError::InvalidPlayer(player))?;
        self.place(player, cell, true)
    }

    /// Validates and applies one move. The checks run in a fixed order so
    /// the reported error is deterministic.
    fn place(&mut self, player: Player, cell: u8, auto_check: bool) -> Result<(), MoveError> {
        if self.game_over {
            warn!(%player, cell, "Move rejected: game is already over");
            return Err(MoveError::GameOver);
        }
        let cell = Cell::from_number(cell).ok_or(MoveError::InvalidCell(cell))?;
        if player != self.turn {
            warn!(%player, %cell, "Move rejected: out of turn");
            return Err(MoveError::WrongTurn(player));
        }
        if !self.square(cell).is_empty() {
            warn!(%player, %cell, "Move rejected: cell occupied");
            return Err(MoveError::CellOccupied(cell));
        }

        self.squares[cell.index()] = Square::Occupied(player);
        self.turn = player.opponent();
        debug!(%player, %cell, "Mark placed");

        if auto_check {
            self.evaluate();
        }
        self.assert_invariants();
        Ok(())
    }

    // ────────────────────────────────────────────────────────────────────────
    // Terminal-state evaluation
    // ────────────────────────────────────────────────────────────────────────

    /// Evaluates the board for a terminal state.
    ///
    /// The eight lines are tested in a fixed priority order, rows top to
    /// bottom, then columns left to right, then the main diagonal, then
    /// the anti-diagonal, and the first complete line decides the
    /// verdict. A full board with no complete line is a [`Verdict::Tie`].
    ///
    /// A decided verdict sets the game-over flag as a side effect and is
    /// stable: repeated calls on an unchanged board return the same
    /// verdict.
    #[instrument(skip(self))]
    pub fn evaluate(&mut self) -> Verdict {
        let verdict = if let Some(mark) = rules::winning_mark(self) {
            Verdict::Winner(mark)
        } else if rules::is_full(self) {
            Verdict::Tie
        } else {
            Verdict::Undecided
        };

        if verdict.is_decided() {
            debug!(%verdict, "Game over");
            self.game_over = true;
        }
        verdict
    }

    /// Asserts the composed board invariants. Active in debug builds only.
    fn assert_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            use crate::invariants::{BoardInvariants, InvariantSet};
            if let Err(violations) = BoardInvariants::check_all(self) {
                let summary = violations
                    .iter()
                    .map(|violation| violation.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                panic!("board invariant violated: {summary}");
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Board {
    /// Writes a square directly, bypassing validation. Used by invariant
    /// tests to construct states the move interface cannot reach.
    pub(crate) fn set_square_unchecked(&mut self, cell: Cell, square: Square) {
        self.squares[cell.index()] = square;
    }

    /// Overwrites the turn, bypassing alternation.
    pub(crate) fn set_turn_unchecked(&mut self, player: Player) {
        self.turn = player;
    }

    /// Overwrites the game-over flag, bypassing evaluation.
    pub(crate) fn set_game_over_unchecked(&mut self, value: bool) {
        self.game_over = value;
    }
}
