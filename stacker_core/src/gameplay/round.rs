use stacker_data::{DifficultyLevel, RoundEvent, RoundOutcome};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::difficulty::DifficultyTable;
use crate::error::{GameError, GameResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    AwaitingFirstStop,
    InProgress,
    Won,
    Lost,
}

impl RoundPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundPhase::Won | RoundPhase::Lost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    /// Sweep duration the marker of this row was animated with.
    pub duration_ms: u32,
    pub stopped_at: Option<i32>,
}

/// Exclusive bounds a stop must fall strictly between to land on the previous row.
/// Held as `i64` so windows around extreme positions cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentWindow {
    pub low: i64,
    pub high: i64,
}

impl AlignmentWindow {
    pub fn around(previous: i32, marker_width: i32) -> Self {
        let previous = i64::from(previous);
        let marker_width = i64::from(marker_width);
        Self {
            low: previous - marker_width - 1,
            high: previous + marker_width - 1,
        }
    }

    pub fn contains(&self, position: i32) -> bool {
        let position = i64::from(position);
        position > self.low && position < self.high
    }
}

pub fn row_score(score_factor: u32, speed_ms: u32) -> u32 {
    if speed_ms == 0 {
        return 0;
    }
    score_factor / speed_ms
}

/// One play session: a stack of rows, each stopped once, scored against the row below.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    level: DifficultyLevel,
    decay_ms: u32,
    score_factor: u32,
    marker_width: i32,
    track_midpoint: i32,

    current_row_index: usize,
    current_speed_ms: u32,
    rows: Vec<Row>,
    phase: RoundPhase,
}

impl RoundEngine {
    pub fn new(level: DifficultyLevel) -> Self {
        Self::with_config(level, &GameConfig::default())
    }

    pub fn with_config(level: DifficultyLevel, config: &GameConfig) -> Self {
        let entry = DifficultyTable::entry(level);
        Self {
            level,
            decay_ms: entry.decay_ms(),
            score_factor: config.score_factor,
            marker_width: config.marker_width,
            track_midpoint: config.track_midpoint,
            current_row_index: 0,
            current_speed_ms: entry.initial_speed_ms,
            rows: vec![Row {
                duration_ms: entry.initial_speed_ms,
                stopped_at: None,
            }],
            phase: RoundPhase::AwaitingFirstStop,
        }
    }

    pub fn level(&self) -> DifficultyLevel {
        self.level
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn current_row_index(&self) -> usize {
        self.current_row_index
    }

    pub fn current_speed_ms(&self) -> u32 {
        self.current_speed_ms
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Window the current row must be stopped in, or `None` on the first row.
    pub fn alignment_window(&self) -> Option<AlignmentWindow> {
        self.previous_stop()
            .map(|previous| AlignmentWindow::around(previous, self.marker_width))
    }

    /// Stops the marker of the current row at `position` and scores it.
    pub fn stop_current_row(&mut self, position: i32) -> GameResult<RoundEvent> {
        if self.phase.is_terminal() {
            return Err(GameError::InvalidState { phase: self.phase });
        }

        let row_index = self.current_row_index;
        self.rows[row_index].stopped_at = Some(position);

        // Scored at the speed the row was swept with, before decay.
        let awarded = row_score(self.score_factor, self.current_speed_ms);
        self.current_speed_ms = self.current_speed_ms.saturating_sub(self.decay_ms);

        let Some(window) = self.alignment_window() else {
            self.phase = RoundPhase::InProgress;
            return Ok(self.advance(position, awarded));
        };

        if !window.contains(position) {
            self.phase = RoundPhase::Lost;
            info!(level = %self.level, row = row_index, position, ?window, "round lost");
            return Ok(self.event(RoundOutcome::Lost, position, 0, 0));
        }

        if self.current_speed_ms == 0 {
            self.phase = RoundPhase::Won;
            info!(level = %self.level, row = row_index, "round won");
            return Ok(self.event(RoundOutcome::Won, position, awarded, 0));
        }

        Ok(self.advance(position, awarded))
    }

    fn previous_stop(&self) -> Option<i32> {
        let previous = self.current_row_index.checked_sub(1)?;
        self.rows[previous].stopped_at
    }

    fn advance(&mut self, position: i32, awarded: u32) -> RoundEvent {
        let start_offset_ms = if position < self.track_midpoint {
            -i64::from(self.current_speed_ms / 2)
        } else {
            0
        };
        let event = self.event(RoundOutcome::RowAdvanced, position, awarded, start_offset_ms);

        self.rows.push(Row {
            duration_ms: self.current_speed_ms,
            stopped_at: None,
        });
        self.current_row_index += 1;

        debug!(
            level = %self.level,
            row = event.row_index,
            position,
            awarded,
            next_speed_ms = self.current_speed_ms,
            "row stacked"
        );
        event
    }

    fn event(
        &self,
        outcome: RoundOutcome,
        position: i32,
        awarded: u32,
        start_offset_ms: i64,
    ) -> RoundEvent {
        RoundEvent {
            outcome,
            row_index: self.current_row_index,
            position,
            speed_ms: self.current_speed_ms,
            level: self.level,
            awarded,
            start_offset_ms,
        }
    }
}
