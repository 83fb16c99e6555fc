//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// A winning triple of cells.
pub type Line = [Position; 3];

/// The 8 winning lines in evaluation priority order:
/// rows top-to-bottom, columns left-to-right, then the two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the winning mark together with the completed line, or
/// `None` if no line is uniformly marked. Lines are evaluated in
/// the fixed order of [`LINES`]; at most one line can newly match
/// after a single move on a previously not-won board.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Mark, Line)> {
    for line in LINES {
        let [a, b, c] = line;
        if let Square::Occupied(mark) = board.get(a)
            && board.get(b) == Square::Occupied(mark)
            && board.get(c) == Square::Occupied(mark)
        {
            return Some((mark, line));
        }
    }

    None
}
