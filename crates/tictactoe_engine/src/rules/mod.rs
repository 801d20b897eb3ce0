//! Rules predicates for tic-tac-toe.
//!
//! Pure queries over board state, kept separate from move application so
//! they can be tested and reused on their own. [`winning_mark`] scans the
//! eight lines in a fixed priority order; [`is_full`] backs tie
//! detection.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, winning_mark};
