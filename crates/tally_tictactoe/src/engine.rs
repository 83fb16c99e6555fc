//! Session engine: board transitions, scoring, and history.

use crate::outcome::{Conclusion, Outcome};
use crate::position::Position;
use crate::rules;
use crate::score::{GameRecord, ScoreBoard};
use crate::snapshot::{MoveRejection, Snapshot};
use crate::types::{Board, Mark, Square};
use chrono::Local;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe session engine.
///
/// Owns all session state: the board, the mark to move, the current
/// outcome, the scoreboard, and the match history. Callers mutate
/// it only through [`apply_move`](GameEngine::apply_move),
/// [`reset_board`](GameEngine::reset_board), and
/// [`reset_session`](GameEngine::reset_session); every operation
/// runs synchronously and returns an owned [`Snapshot`].
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    to_move: Mark,
    outcome: Outcome,
    scores: ScoreBoard,
    history: Vec<GameRecord>,
}

impl GameEngine {
    /// Creates a fresh session: empty board, X to open, zero scores.
    #[instrument]
    pub fn new() -> Self {
        info!("Starting new session");
        Self {
            board: Board::new(),
            to_move: Mark::X,
            outcome: Outcome::InProgress,
            scores: ScoreBoard::new(),
            history: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Mutation operations
    // ─────────────────────────────────────────────────────────────

    /// Applies the current mark to the given cell (0-8).
    ///
    /// Illegal moves are no-ops: the game being over, an out-of-range
    /// index, or an occupied square leave all state untouched, and the
    /// returned snapshot carries the rejection reason. An accepted move
    /// places the mark, advances the turn, and concludes the game when
    /// a line completes or the board fills.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn apply_move(&mut self, cell: usize) -> Snapshot {
        if self.outcome.is_over() {
            warn!(cell, "Move rejected: game is already over");
            return self.snapshot_with(Some(MoveRejection::GameOver));
        }

        let pos = match Position::from_index(cell) {
            Some(pos) => pos,
            None => {
                warn!(cell, "Move rejected: cell index out of bounds");
                return self.snapshot_with(Some(MoveRejection::OutOfBounds(cell)));
            }
        };

        if !self.board.is_empty(pos) {
            warn!(cell, "Move rejected: square is already occupied");
            return self.snapshot_with(Some(MoveRejection::SquareOccupied(pos)));
        }

        let mark = self.to_move;
        self.board.set(pos, Square::Occupied(mark));
        // The turn advances on every accepted move, including the one
        // that concludes the game, so the opener alternates across games.
        self.to_move = mark.opponent();

        if let Some((winner, line)) = rules::check_winner(&self.board) {
            self.outcome = Outcome::Won { winner, line };
            self.conclude(Conclusion::Winner(winner));
        } else if rules::is_full(&self.board) {
            self.outcome = Outcome::Draw;
            self.conclude(Conclusion::Draw);
        } else {
            debug!(cell, placed = %mark, next = %self.to_move, "Move applied");
        }

        self.assert_consistent();
        self.snapshot_with(None)
    }

    /// Starts a new game with the same scores and history.
    ///
    /// The turn keeps its current value, so the mark that did not
    /// make the last move of the previous game opens the next one.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) -> Snapshot {
        self.board = Board::new();
        self.outcome = Outcome::InProgress;
        info!(opener = %self.to_move, "Board reset for a new game");
        self.snapshot_with(None)
    }

    /// Resets the whole session: board, scores, history, and turn.
    ///
    /// After this call the engine is indistinguishable from a freshly
    /// constructed one, with X to open.
    #[instrument(skip(self))]
    pub fn reset_session(&mut self) -> Snapshot {
        self.board = Board::new();
        self.outcome = Outcome::InProgress;
        self.scores.reset();
        self.history.clear();
        self.to_move = Mark::X;
        info!("Session reset");
        self.snapshot_with(None)
    }

    // ─────────────────────────────────────────────────────────────
    //  Read operations
    // ─────────────────────────────────────────────────────────────

    /// Returns the current state as an owned snapshot. No side effects.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_with(None)
    }

    /// Returns the currently legal cells.
    ///
    /// Empty once the game has concluded; rendering surfaces use this
    /// to grey out dead cells.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome.is_over() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    /// Records a concluded game into scores and history.
    fn conclude(&mut self, conclusion: Conclusion) {
        self.scores.record(conclusion);
        self.history.push(GameRecord::new(conclusion, Local::now()));
        info!(
            %conclusion,
            games = self.scores.total_games(),
            "Game concluded"
        );
    }

    fn snapshot_with(&self, rejection: Option<MoveRejection>) -> Snapshot {
        Snapshot::new(
            self.board.clone(),
            self.to_move,
            self.outcome,
            self.scores,
            self.history.clone(),
            rejection,
        )
    }

    /// Debug-build consistency checks after a state transition.
    fn assert_consistent(&self) {
        debug_assert!(
            self.marks_balanced(),
            "mark counts diverged by more than one"
        );
        debug_assert_eq!(
            self.scores.total_games() as usize,
            self.history.len(),
            "scoreboard and history disagree on concluded games"
        );
    }

    /// Mark counts on the board may differ by at most one.
    fn marks_balanced(&self) -> bool {
        let x_count = self
            .board
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Mark::X)))
            .count();
        let o_count = self
            .board
            .squares()
            .iter()
            .filter(|s| matches!(s, Square::Occupied(Mark::O)))
            .count();
        x_count.abs_diff(o_count) <= 1
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
