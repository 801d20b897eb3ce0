//! Scripted demonstration driver for the rules engine.
//!
//! Replays a fixed game using the numeric player convention (0 for O,
//! 1 for X) and prints the evaluation verdict and the rendered grid
//! after every move. Rendering lives here because the engine itself
//! draws nothing.

#![warn(missing_docs)]

use anyhow::Result;
use tictactoe_engine::{Board, Cell, Square};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// The scripted game as (player value, cell number) pairs. X opens on
/// cell 1 and wins by completing the left column with the final move.
const SCRIPT: [(u8, u8); 9] = [
    (1, 1),
    (0, 5),
    (1, 9),
    (0, 6),
    (1, 2),
    (0, 3),
    (1, 7),
    (0, 8),
    (1, 4),
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Starting scripted tic-tac-toe replay");

    let mut board = Board::new();
    for (player, number) in SCRIPT {
        board.apply_numeric(player, number)?;
        if let Some(cell) = Cell::from_number(number) {
            info!(player, cell = cell.label(), "Applied scripted move");
        }
        println!("{}", board.evaluate());
        println!("{}", render(&board));
    }

    Ok(())
}

/// Renders the grid one row per line, `| X |   | O |` style.
fn render(board: &Board) -> String {
    let mut output = String::new();
    for row in 0..3 {
        output.push('|');
        for column in 0..3 {
            match board.squares()[row * 3 + column] {
                Square::Empty => output.push_str("   |"),
                Square::Occupied(player) => {
                    output.push_str(&format!(" {player} |"));
                }
            }
        }
        output.push('\n');
    }
    output
}
