use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{DifficultyLevel, GameStats, WinLoss};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("player name must not be blank")]
pub struct BlankName;

/// Returns true when `name` can key a player record.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

/// Persistent statistics for one named player.
///
/// Field names on the wire are `Name`, `Score`, `CombinedScore` and `GameStats`
/// so records written by earlier versions of the game still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Score")]
    session_score: u64,
    #[serde(rename = "CombinedScore")]
    lifetime_score: u64,
    #[serde(rename = "GameStats")]
    stats: GameStats,
}

impl PlayerRecord {
    /// A zeroed record for `name`.
    pub fn new(name: impl Into<String>) -> Result<Self, BlankName> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(BlankName);
        }
        Ok(Self {
            name,
            session_score: 0,
            lifetime_score: 0,
            stats: GameStats::default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn session_score(&self) -> u64 {
        self.session_score
    }

    pub fn lifetime_score(&self) -> u64 {
        self.lifetime_score
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn stats_for(&self, level: DifficultyLevel) -> WinLoss {
        self.stats.get(level)
    }

    /// Adds a row score to both the session and the lifetime totals.
    pub fn award(&mut self, points: u32) {
        self.session_score = self.session_score.saturating_add(u64::from(points));
        self.lifetime_score = self.lifetime_score.saturating_add(u64::from(points));
    }

    pub fn reset_session_score(&mut self) {
        self.session_score = 0;
    }

    pub fn record_win(&mut self, level: DifficultyLevel) {
        let tally = self.stats.get_mut(level);
        tally.wins = tally.wins.saturating_add(1);
    }

    pub fn record_loss(&mut self, level: DifficultyLevel) {
        let tally = self.stats.get_mut(level);
        tally.losses = tally.losses.saturating_add(1);
    }
}
