//! Batch results.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};
use crate::rules::GameStatus;

use super::runner::MatchRecord;

/// Win/draw tallies and score totals over a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Finished games.
    pub games: usize,

    /// Wins per seat.
    pub wins: PlayerMap<usize>,

    /// Drawn games.
    pub draws: usize,

    /// Sum of final scores per seat.
    pub total_scores: PlayerMap<i64>,
}

impl BatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally every record.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a MatchRecord>) -> Self {
        let mut stats = Self::new();
        for record in records {
            stats.record(record);
        }
        stats
    }

    /// Add one finished game.
    pub fn record(&mut self, record: &MatchRecord) {
        self.games += 1;
        match record.status {
            GameStatus::PlayerOneWin => self.wins[PlayerId::ONE] += 1,
            GameStatus::PlayerTwoWin => self.wins[PlayerId::TWO] += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => debug_assert!(false, "recorded an unfinished game"),
        }
        for player in PlayerId::all() {
            self.total_scores[player] += i64::from(record.scores[player]);
        }
    }

    /// Combine with another partial tally.
    pub fn merge(&mut self, other: &BatchStats) {
        self.games += other.games;
        self.draws += other.draws;
        for player in PlayerId::all() {
            self.wins[player] += other.wins[player];
            self.total_scores[player] += other.total_scores[player];
        }
    }

    /// Mean final score for a seat.
    #[must_use]
    pub fn average_score(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_scores[player] as f64 / self.games as f64
        }
    }

    /// Fraction of games won by a seat.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins[player] as f64 / self.games as f64
        }
    }
}

impl std::fmt::Display for BatchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "results {} - {} - {} (p1 wins, p2 wins, draws) over {} games",
            self.wins[PlayerId::ONE],
            self.wins[PlayerId::TWO],
            self.draws,
            self.games
        )?;
        write!(
            f,
            "avg scores {:.2} - {:.2}",
            self.average_score(PlayerId::ONE),
            self.average_score(PlayerId::TWO)
        )
    }
}
