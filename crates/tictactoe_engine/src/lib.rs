//! Tic-tac-toe rules engine.
//!
//! This library implements the rules of a single 3x3 tic-tac-toe game:
//! move validation, turn alternation, and end-of-game detection. There is
//! no surrounding system here, no rendering, no matchmaking, no
//! persistence. Callers construct a [`Board`], apply moves to it, and
//! read the resulting state back out.
//!
//! Cells are addressed 1 through 9 in row-major order:
//!
//! ```text
//!  1 | 2 | 3
//! ---+---+---
//!  4 | 5 | 6
//! ---+---+---
//!  7 | 8 | 9
//! ```
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Board, Player};
//!
//! let mut board = Board::new();
//! board.apply_move(Player::X, 5)?;
//! board.apply_move(Player::O, 1)?;
//! assert_eq!(board.turn(), Player::X);
//! assert!(!board.is_game_over());
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod cell;
mod invariants;
mod rules;
mod types;

// Crate-level exports - Board entity
pub use board::{Board, MoveError};

// Crate-level exports - Cell addressing
pub use cell::Cell;

// Crate-level exports - Invariant checking
pub use invariants::{
    AlternatingTurnInvariant, BoardInvariants, Invariant, InvariantSet, InvariantViolation,
    MarkBalanceInvariant, TerminalFlagInvariant,
};

// Crate-level exports - Rules predicates
pub use rules::{WINNING_LINES, is_full, winning_mark};

// Crate-level exports - Domain types
pub use types::{Player, Square, Verdict};
