//! Session score aggregation and match history.

use crate::outcome::Conclusion;
use crate::types::Mark;
use chrono::{DateTime, Local};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Won games needed to take the session championship.
pub const CHAMPION_POINTS: u32 = 5;

/// Per-session win/draw counters.
///
/// Counters only move forward: one increment per concluded game,
/// zeroed only by a full session reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ScoreBoard {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Games ended in a draw.
    draws: u32,
}

impl ScoreBoard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one concluded game.
    #[instrument(skip(self))]
    pub fn record(&mut self, conclusion: Conclusion) {
        match conclusion {
            Conclusion::Winner(Mark::X) => self.x_wins += 1,
            Conclusion::Winner(Mark::O) => self.o_wins += 1,
            Conclusion::Draw => self.draws += 1,
        }
    }

    /// Returns the number of games won by the given mark.
    pub fn wins_for(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Total games concluded this session.
    pub fn total_games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Returns the session champion: the mark with at least
    /// [`CHAMPION_POINTS`] won games. If play continued until both
    /// marks passed the threshold, the higher count takes it; a tie
    /// leaves the championship open.
    pub fn champion(&self) -> Option<Mark> {
        match (
            self.x_wins >= CHAMPION_POINTS,
            self.o_wins >= CHAMPION_POINTS,
        ) {
            (true, false) => Some(Mark::X),
            (false, true) => Some(Mark::O),
            (true, true) if self.x_wins > self.o_wins => Some(Mark::X),
            (true, true) if self.o_wins > self.x_wins => Some(Mark::O),
            _ => None,
        }
    }

    /// Zeroes all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One entry in the session's match history.
///
/// Entries are appended in chronological order when a game
/// concludes and are never reordered or pruned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, new)]
pub struct GameRecord {
    /// How the game ended.
    conclusion: Conclusion,
    /// Wall-clock time at which the game concluded.
    finished_at: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_increments_once() {
        let mut scores = ScoreBoard::new();
        scores.record(Conclusion::Winner(Mark::X));
        scores.record(Conclusion::Winner(Mark::O));
        scores.record(Conclusion::Draw);
        scores.record(Conclusion::Winner(Mark::X));

        assert_eq!(*scores.x_wins(), 2);
        assert_eq!(*scores.o_wins(), 1);
        assert_eq!(*scores.draws(), 1);
        assert_eq!(scores.total_games(), 4);
    }

    #[test]
    fn test_champion_threshold() {
        let mut scores = ScoreBoard::new();
        for _ in 0..CHAMPION_POINTS - 1 {
            scores.record(Conclusion::Winner(Mark::O));
        }
        assert_eq!(scores.champion(), None);

        scores.record(Conclusion::Winner(Mark::O));
        assert_eq!(scores.champion(), Some(Mark::O));
    }

    #[test]
    fn test_draws_do_not_count_toward_championship() {
        let mut scores = ScoreBoard::new();
        for _ in 0..CHAMPION_POINTS {
            scores.record(Conclusion::Draw);
        }
        assert_eq!(scores.champion(), None);
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let mut scores = ScoreBoard::new();
        scores.record(Conclusion::Winner(Mark::X));
        scores.reset();
        assert_eq!(scores, ScoreBoard::new());
    }
}
