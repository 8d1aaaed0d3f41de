pub mod backend;

pub use backend::{JsonFileBackend, KvBackend, MemoryBackend};

use stacker_data::{is_valid_name, PlayerRecord};
use tracing::{debug, warn};

use crate::error::{GameError, GameResult};

/// Loads and saves player records as JSON strings keyed by player name.
#[derive(Debug)]
pub struct PlayerStore<B> {
    backend: B,
}

impl<B: KvBackend> PlayerStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Unreadable or mismatched records report `NotFound`, never a parse error.
    pub fn load(&self, name: &str) -> GameResult<PlayerRecord> {
        if !is_valid_name(name) {
            return Err(GameError::InvalidIdentity);
        }

        let not_found = || GameError::NotFound {
            name: name.to_string(),
        };

        let Some(raw) = self.backend.get(name).map_err(GameError::storage)? else {
            debug!(player = name, "no stored record");
            return Err(not_found());
        };

        let record: PlayerRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(e) => {
                warn!(player = name, error = %e, "discarding malformed player record");
                return Err(not_found());
            }
        };

        if record.name() != name {
            warn!(
                player = name,
                stored_name = record.name(),
                "discarding player record stored under another name"
            );
            return Err(not_found());
        }

        debug!(player = name, "loaded player record");
        Ok(record)
    }

    /// Overwrites whatever is stored under the record's name.
    pub fn save(&self, record: &PlayerRecord) -> GameResult<()> {
        if !is_valid_name(record.name()) {
            return Err(GameError::InvalidIdentity);
        }

        let json = serde_json::to_string(record)
            .map_err(|e| GameError::Storage(format!("failed to serialize player record: {e}")))?;
        self.backend
            .set(record.name(), &json)
            .map_err(GameError::storage)?;

        debug!(player = record.name(), "saved player record");
        Ok(())
    }

    /// A zeroed record. Nothing is written until `save`.
    pub fn create_fresh(&self, name: &str) -> GameResult<PlayerRecord> {
        Ok(PlayerRecord::new(name)?)
    }
}
