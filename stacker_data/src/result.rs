use serde::{Deserialize, Serialize};

use crate::model::DifficultyLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    RowAdvanced,
    Won,
    Lost,
}

impl RoundOutcome {
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundOutcome::Won | RoundOutcome::Lost)
    }
}

/// Emitted by the round engine for every accepted stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEvent {
    pub outcome: RoundOutcome,
    /// Index of the row that was just stopped.
    pub row_index: usize,
    /// Where the marker of that row came to rest.
    pub position: i32,
    /// Speed after decay, i.e. the sweep duration of the next row. Zero once won.
    pub speed_ms: u32,
    pub level: DifficultyLevel,
    /// Points earned by this stop. Zero on a loss.
    pub awarded: u32,
    /// Animation offset for the next row's marker; only non-zero on `RowAdvanced`.
    pub start_offset_ms: i64,
}
