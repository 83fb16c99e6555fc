//! Tally tic-tac-toe - pure game and session logic
//!
//! This library is the in-memory model behind an interactive
//! tic-tac-toe UI for a pair of players sharing one machine.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the board, turn, outcome,
//!   scoreboard, and match history for one session
//! - **Rules**: pure win/draw evaluation over a board
//! - **Snapshot**: owned copies of observable state handed to the
//!   rendering surface, which never mutates engine state directly
//!
//! # Example
//!
//! ```
//! use tally_tictactoe::{GameEngine, Mark, Outcome};
//!
//! let mut engine = GameEngine::new();
//! // X opens in the center, O answers top-left.
//! engine.apply_move(4);
//! let snapshot = engine.apply_move(0);
//! assert_eq!(*snapshot.to_move(), Mark::X);
//! assert_eq!(*snapshot.outcome(), Outcome::InProgress);
//! assert_eq!(snapshot.status_line(), "Player X's turn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod outcome;
mod position;
mod rules;
mod score;
mod snapshot;
mod types;

// Crate-level exports - Session engine
pub use engine::GameEngine;

// Crate-level exports - Outcome types
pub use outcome::{Conclusion, Outcome};

// Crate-level exports - Board addressing
pub use position::Position;

// Crate-level exports - Pure rule evaluation
pub use rules::{LINES, Line, check_winner, is_draw, is_full};

// Crate-level exports - Scores and history
pub use score::{CHAMPION_POINTS, GameRecord, ScoreBoard};

// Crate-level exports - Caller-facing views
pub use snapshot::{MoveRejection, Snapshot};

// Crate-level exports - Core domain types
pub use types::{Board, Mark, Square};
