//! Core domain types shared across the engine.

use serde::{Deserialize, Serialize};

/// A player in the game.
///
/// The untyped move interface maps players to numbers, 0 for O and 1 for
/// X. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player O, numeric value 0.
    O,
    /// Player X, numeric value 1. X opens the game.
    X,
}

impl Player {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// Returns the numeric value of the player (0 for O, 1 for X).
    pub fn value(self) -> u8 {
        match self {
            Player::O => 0,
            Player::X => 1,
        }
    }

    /// Parses the numeric player convention (0 for O, 1 for X).
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Player::O),
            1 => Some(Player::X),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::O => write!(f, "O"),
            Player::X => write!(f, "X"),
        }
    }
}

/// A single square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No mark has been placed here.
    Empty,
    /// A player's mark occupies this square.
    Occupied(Player),
}

impl Square {
    /// Returns the mark occupying this square, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// The result of evaluating a board for a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// The named player holds a complete line.
    Winner(Player),
    /// Every square is occupied and no line is complete.
    Tie,
    /// The game continues.
    Undecided,
}

impl Verdict {
    /// Returns the winning player, if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Verdict::Winner(player) => Some(*player),
            Verdict::Tie | Verdict::Undecided => None,
        }
    }

    /// Returns true if the game has ended, by win or by tie.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Verdict::Undecided)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Winner(player) => write!(f, "Player {player} wins"),
            Verdict::Tie => write!(f, "Tie"),
            Verdict::Undecided => write!(f, "Undecided"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Player, Verdict};

    #[test]
    fn test_numeric_values_round_trip() {
        for player in [Player::O, Player::X] {
            assert_eq!(Player::from_value(player.value()), Some(player));
        }
        assert_eq!(Player::O.value(), 0);
        assert_eq!(Player::X.value(), 1);
    }

    #[test]
    fn test_from_value_rejects_other_numbers() {
        assert_eq!(Player::from_value(2), None);
        assert_eq!(Player::from_value(255), None);
    }

    #[test]
    fn test_winner_is_reported_only_for_wins() {
        assert_eq!(Verdict::Winner(Player::X).winner(), Some(Player::X));
        assert_eq!(Verdict::Tie.winner(), None);
        assert_eq!(Verdict::Undecided.winner(), None);
    }
}
