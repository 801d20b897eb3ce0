//! Numbered cell addressing for the 3x3 grid.
//!
//! The public move interface addresses cells by the numbers 1 through 9
//! in row-major order, while the grid itself is laid out by (row, column)
//! pairs in 0..3. [`Cell`] carries both views and the bijection between
//! them: row = (number - 1) / 3 and column = (number - 1) % 3.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board, numbered 1 through 9 in row-major order.
///
/// Cell 1 is the top-left corner, cell 5 the center, cell 9 the
/// bottom-right corner. The [`Display`](std::fmt::Display) impl renders
/// the public number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Cell {
    /// Cell 1, top row, left column.
    TopLeft,
    /// Cell 2, top row, center column.
    TopCenter,
    /// Cell 3, top row, right column.
    TopRight,
    /// Cell 4, middle row, left column.
    MiddleLeft,
    /// Cell 5, the center of the board.
    Center,
    /// Cell 6, middle row, right column.
    MiddleRight,
    /// Cell 7, bottom row, left column.
    BottomLeft,
    /// Cell 8, bottom row, center column.
    BottomCenter,
    /// Cell 9, bottom row, right column.
    BottomRight,
}

impl Cell {
    /// All nine cells in numbering order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Parses a cell from the public 1 through 9 numbering.
    ///
    /// Returns `None` for anything outside that range.
    #[instrument]
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Cell::TopLeft),
            2 => Some(Cell::TopCenter),
            3 => Some(Cell::TopRight),
            4 => Some(Cell::MiddleLeft),
            5 => Some(Cell::Center),
            6 => Some(Cell::MiddleRight),
            7 => Some(Cell::BottomLeft),
            8 => Some(Cell::BottomCenter),
            9 => Some(Cell::BottomRight),
            _ => None,
        }
    }

    /// Returns the public cell number (1 through 9).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Returns the row-major index into the grid (0 through 8).
    pub fn index(self) -> usize {
        match self {
            Cell::TopLeft => 0,
            Cell::TopCenter => 1,
            Cell::TopRight => 2,
            Cell::MiddleLeft => 3,
            Cell::Center => 4,
            Cell::MiddleRight => 5,
            Cell::BottomLeft => 6,
            Cell::BottomCenter => 7,
            Cell::BottomRight => 8,
        }
    }

    /// Returns the grid row (0 through 2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Returns the grid column (0 through 2).
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Returns a human-readable label for this cell.
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "top-left",
            Cell::TopCenter => "top-center",
            Cell::TopRight => "top-right",
            Cell::MiddleLeft => "middle-left",
            Cell::Center => "center",
            Cell::MiddleRight => "middle-right",
            Cell::BottomLeft => "bottom-left",
            Cell::BottomCenter => "bottom-center",
            Cell::BottomRight => "bottom-right",
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}
