//! Game outcome types.

use crate::rules::Line;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Current outcome of the game on the board.
///
/// A won game ALWAYS carries its winner and the completed line;
/// the winning triple is never an optional side-field that could
/// disagree with the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won {
        /// The winning mark.
        winner: Mark,
        /// The uniformly marked line.
        line: Line,
    },
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns true once the board accepts no further moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns the conclusion of a finished game, `None` while in progress.
    pub fn conclusion(&self) -> Option<Conclusion> {
        match self {
            Outcome::InProgress => None,
            Outcome::Won { winner, .. } => Some(Conclusion::Winner(*winner)),
            Outcome::Draw => Some(Conclusion::Draw),
        }
    }
}

/// Result of a finished game, as recorded in scores and history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conclusion {
    /// The mark won the game.
    Winner(Mark),
    /// Game ended in a draw.
    Draw,
}

impl Conclusion {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Conclusion::Winner(mark) => Some(*mark),
            Conclusion::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Conclusion::Draw)
    }
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conclusion::Winner(mark) => write!(f, "Player {} won", mark),
            Conclusion::Draw => write!(f, "Draw"),
        }
    }
}
