//! Immutable caller-facing view of engine state.

use crate::outcome::Outcome;
use crate::position::Position;
use crate::score::{GameRecord, ScoreBoard};
use crate::types::{Board, Mark};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Why a move was not applied.
///
/// Rejections are harmless: the engine treats them as no-ops and
/// reports the reason on the returned snapshot instead of failing.
/// The type still implements [`std::error::Error`] so callers can
/// log or display it like any other error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The cell index is not in 0-8.
    #[display("Cell index {} is out of bounds (expected 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has already concluded.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveRejection {}

/// An owned copy of the engine's observable state.
///
/// Snapshots are copies, not aliases: mutating one never affects
/// the engine. Two snapshots taken without an intervening mutation
/// compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
pub struct Snapshot {
    /// The board.
    board: Board,
    /// The mark that plays next.
    to_move: Mark,
    /// Current game outcome.
    outcome: Outcome,
    /// Session scores.
    scores: ScoreBoard,
    /// Session match history, oldest first.
    history: Vec<GameRecord>,
    /// Why the triggering move was rejected, if it was.
    rejection: Option<MoveRejection>,
}

impl Snapshot {
    /// Renders the status message a UI shows above the board.
    pub fn status_line(&self) -> String {
        match &self.outcome {
            Outcome::Won { winner, .. } => format!("Player {} wins!", winner),
            Outcome::Draw => "Game ended in a draw!".to_string(),
            Outcome::InProgress => format!("Player {}'s turn", self.to_move),
        }
    }
}
