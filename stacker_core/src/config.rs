use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Numerator of the per-row score. A row swept in `speed_ms` is worth `SCORE_FACTOR / speed_ms`.
pub const DEFAULT_SCORE_FACTOR: u32 = 240_000;

/// Width of the sliding marker in track units.
pub const DEFAULT_MARKER_WIDTH: i32 = 40;

/// Width of the track the marker sweeps across.
pub const TRACK_WIDTH: i32 = 360;

/// Tunables for a round. The difficulty table itself is fixed and not part of this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub score_factor: u32,
    pub marker_width: i32,
    /// Stops left of this point start the next marker half a sweep in.
    pub track_midpoint: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            score_factor: DEFAULT_SCORE_FACTOR,
            marker_width: DEFAULT_MARKER_WIDTH,
            track_midpoint: TRACK_WIDTH / 2,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> GameResult<()> {
        if self.score_factor == 0 {
            return Err(GameError::InvalidConfig("score_factor must be positive".into()));
        }
        if self.marker_width <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "marker_width must be positive, got {}",
                self.marker_width
            )));
        }
        if self.track_midpoint < 0 {
            return Err(GameError::InvalidConfig(format!(
                "track_midpoint must not be negative, got {}",
                self.track_midpoint
            )));
        }
        Ok(())
    }
}

pub fn load_config_from_path(path: impl AsRef<Path>) -> anyhow::Result<GameConfig> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    load_config_from_str(&json).with_context(|| format!("bad config: {}", path.display()))
}

pub fn load_config_from_str(json: &str) -> anyhow::Result<GameConfig> {
    let config: GameConfig = serde_json::from_str(json).context("failed to parse config json")?;
    config.validate()?;
    Ok(config)
}
