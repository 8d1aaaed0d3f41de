use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of rows a round is made of. Every initial speed is a multiple of this.
pub const ROWS_PER_ROUND: u32 = 8;

/// Columns of the board grid drawn behind the track.
pub const TRACK_COLUMNS: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Easy,
    Normal,
    Hard,
    Impossible,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 4] = [
        DifficultyLevel::Easy,
        DifficultyLevel::Normal,
        DifficultyLevel::Hard,
        DifficultyLevel::Impossible,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Normal => "Normal",
            DifficultyLevel::Hard => "Hard",
            DifficultyLevel::Impossible => "Impossible",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown difficulty level: {0:?} (expected easy, normal, hard or impossible)")]
pub struct ParseLevelError(pub String);

impl FromStr for DifficultyLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DifficultyLevel::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// Win/loss tally for one difficulty. Stored as a `[wins, losses]` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 2]", into = "[u32; 2]")]
pub struct WinLoss {
    pub wins: u32,
    pub losses: u32,
}

impl From<[u32; 2]> for WinLoss {
    fn from([wins, losses]: [u32; 2]) -> Self {
        Self { wins, losses }
    }
}

impl From<WinLoss> for [u32; 2] {
    fn from(value: WinLoss) -> Self {
        [value.wins, value.losses]
    }
}

/// One tally per difficulty level. All four keys are required when deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    #[serde(rename = "Easy")]
    pub easy: WinLoss,
    #[serde(rename = "Normal")]
    pub normal: WinLoss,
    #[serde(rename = "Hard")]
    pub hard: WinLoss,
    #[serde(rename = "Impossible")]
    pub impossible: WinLoss,
}

impl GameStats {
    pub fn get(&self, level: DifficultyLevel) -> WinLoss {
        match level {
            DifficultyLevel::Easy => self.easy,
            DifficultyLevel::Normal => self.normal,
            DifficultyLevel::Hard => self.hard,
            DifficultyLevel::Impossible => self.impossible,
        }
    }

    pub fn get_mut(&mut self, level: DifficultyLevel) -> &mut WinLoss {
        match level {
            DifficultyLevel::Easy => &mut self.easy,
            DifficultyLevel::Normal => &mut self.normal,
            DifficultyLevel::Hard => &mut self.hard,
            DifficultyLevel::Impossible => &mut self.impossible,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (DifficultyLevel, WinLoss)> + '_ {
        DifficultyLevel::ALL.into_iter().map(|level| (level, self.get(level)))
    }
}
