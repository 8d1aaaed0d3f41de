use std::fmt;

use serde::Serialize;
use stacker_data::{DifficultyLevel, PlayerRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelStatsView {
    pub level: DifficultyLevel,
    pub wins: u32,
    pub losses: u32,
}

/// Display-ready snapshot of a player record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsView {
    pub name: String,
    pub session_score: u64,
    pub lifetime_score: u64,
    pub per_level: Vec<LevelStatsView>,
}

pub struct StatsProjector;

impl StatsProjector {
    pub fn project(record: &PlayerRecord) -> StatsView {
        StatsView {
            name: record.name().to_string(),
            session_score: record.session_score(),
            lifetime_score: record.lifetime_score(),
            per_level: record
                .stats()
                .iter()
                .map(|(level, tally)| LevelStatsView {
                    level,
                    wins: tally.wins,
                    losses: tally.losses,
                })
                .collect(),
        }
    }
}

impl fmt::Display for StatsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}'s Stats", self.name)?;
        writeln!(f, "Game Score: {}", self.session_score)?;
        writeln!(f, "Total Score: {}", self.lifetime_score)?;
        write!(f, "Difficulty Stats:")?;
        for row in &self.per_level {
            write!(
                f,
                "\n{:<10}  Wins: {}  Losses: {}",
                row.level.name(),
                row.wins,
                row.losses
            )?;
        }
        Ok(())
    }
}
