use stacker_data::{is_valid_name, DifficultyLevel, PlayerRecord, RoundEvent, RoundOutcome};
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::gameplay::RoundEngine;
use crate::input::events::Intent;
use crate::input::IntentQueue;
use crate::stats::{StatsProjector, StatsView};
use crate::store::{KvBackend, PlayerStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    PlayerResolved { name: String, returning: bool },
    RoundStarted { level: DifficultyLevel, speed_ms: u32 },
    Round(RoundEvent),
}

/// What the presentation layer should show after an intent was applied.
/// An all-`None` update means the intent was ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionUpdate {
    pub event: Option<SessionEvent>,
    /// Refreshed view whenever the player record changed.
    pub stats: Option<StatsView>,
    /// Set when persisting the record failed; play carries on in memory.
    pub warning: Option<String>,
}

impl SessionUpdate {
    pub fn is_ignored(&self) -> bool {
        self.event.is_none()
    }
}

/// Owns the current player and round, and applies intents to them one at a time.
pub struct SessionController<B> {
    store: PlayerStore<B>,
    config: GameConfig,
    player: Option<PlayerRecord>,
    round: Option<RoundEngine>,
    /// Set when the stored record could not be read; saves are skipped until
    /// the player is resolved again so the stored record is never clobbered.
    unverified: bool,
    /// Cleared by a blank identity submission; difficulty selection needs it set.
    identity_ok: bool,
}

impl<B: KvBackend> SessionController<B> {
    pub fn new(store: PlayerStore<B>, config: GameConfig) -> Self {
        Self {
            store,
            config,
            player: None,
            round: None,
            unverified: false,
            identity_ok: false,
        }
    }

    pub fn store(&self) -> &PlayerStore<B> {
        &self.store
    }

    pub fn player(&self) -> Option<&PlayerRecord> {
        self.player.as_ref()
    }

    pub fn round(&self) -> Option<&RoundEngine> {
        self.round.as_ref()
    }

    pub fn stats(&self) -> Option<StatsView> {
        self.player.as_ref().map(StatsProjector::project)
    }

    pub fn handle(&mut self, intent: Intent) -> GameResult<SessionUpdate> {
        match intent {
            Intent::SubmitIdentity(name) => self.submit_identity(&name),
            Intent::ChooseDifficulty(level) => self.choose_difficulty(level),
            Intent::Stop { position } => Ok(self.submit_stop(position)),
        }
    }

    /// Applies every queued intent in arrival order.
    pub fn drain(&mut self, queue: &IntentQueue) -> Vec<GameResult<SessionUpdate>> {
        let mut results = Vec::new();
        while let Some(intent) = queue.pop() {
            results.push(self.handle(intent));
        }
        results
    }

    /// Loads the named player, or creates and saves a fresh record for a new name.
    /// Any round in progress is discarded.
    pub fn submit_identity(&mut self, name: &str) -> GameResult<SessionUpdate> {
        if !is_valid_name(name) {
            debug!("rejected blank player name");
            self.identity_ok = false;
            return Err(GameError::InvalidIdentity);
        }

        let mut warning = None;
        let (record, returning, unverified) = match self.store.load(name) {
            Ok(record) => (record, true, false),
            Err(GameError::NotFound { .. }) => {
                let record = self.store.create_fresh(name)?;
                warning = self.store.save(&record).err().map(|e| {
                    warn!(player = name, error = %e, "failed to save player record");
                    e.to_string()
                });
                (record, false, false)
            }
            Err(GameError::Storage(message)) => {
                // A record may exist that we failed to read: nothing is saved for this player
                // until it is resolved again.
                warn!(player = name, %message, "could not read player record, playing unsaved");
                warning = Some(message);
                (self.store.create_fresh(name)?, false, true)
            }
            Err(e) => return Err(e),
        };

        info!(player = name, returning, "player resolved");
        if self.round.take().is_some() {
            debug!("discarded round of previous player");
        }
        let stats = StatsProjector::project(&record);
        self.player = Some(record);
        self.unverified = unverified;
        self.identity_ok = true;

        Ok(SessionUpdate {
            event: Some(SessionEvent::PlayerResolved {
                name: name.to_string(),
                returning,
            }),
            stats: Some(stats),
            warning,
        })
    }

    /// Starts a new round, replacing any round in progress.
    pub fn choose_difficulty(&mut self, level: DifficultyLevel) -> GameResult<SessionUpdate> {
        let player = match self.player.as_mut() {
            Some(player) if self.identity_ok => player,
            _ => {
                debug!(%level, "difficulty chosen without a resolved player name");
                return Err(GameError::InvalidIdentity);
            }
        };

        player.reset_session_score();
        let round = RoundEngine::with_config(level, &self.config);
        let speed_ms = round.current_speed_ms();
        if self.round.replace(round).is_some() {
            debug!("discarded unfinished round");
        }
        info!(player = player.name(), %level, speed_ms, "round started");

        Ok(self.updated(SessionEvent::RoundStarted { level, speed_ms }))
    }

    /// Stops the current row. Stops with no live round are ignored.
    pub fn submit_stop(&mut self, position: i32) -> SessionUpdate {
        let (Some(round), Some(player)) = (self.round.as_mut(), self.player.as_mut()) else {
            debug!(position, "stop ignored: no round in progress");
            return SessionUpdate::default();
        };

        let event = match round.stop_current_row(position) {
            Ok(event) => event,
            Err(e) => {
                debug!(position, error = %e, "stop ignored");
                return SessionUpdate::default();
            }
        };

        match event.outcome {
            RoundOutcome::RowAdvanced => player.award(event.awarded),
            RoundOutcome::Won => {
                player.award(event.awarded);
                player.record_win(event.level);
            }
            RoundOutcome::Lost => player.record_loss(event.level),
        }

        if event.outcome.is_terminal() {
            self.round = None;
        }

        self.updated(SessionEvent::Round(event))
    }

    fn updated(&self, event: SessionEvent) -> SessionUpdate {
        let (stats, warning) = match self.player.as_ref() {
            Some(player) => (
                Some(StatsProjector::project(player)),
                self.persist_record(player),
            ),
            None => (None, None),
        };
        SessionUpdate {
            event: Some(event),
            stats,
            warning,
        }
    }

    fn persist_record(&self, record: &PlayerRecord) -> Option<String> {
        if self.unverified {
            debug!(player = record.name(), "save skipped: stored record was never read");
            return Some(format!(
                "progress for {:?} is not being saved: the stored record could not be read",
                record.name()
            ));
        }
        match self.store.save(record) {
            Ok(()) => None,
            Err(e) => {
                warn!(player = record.name(), error = %e, "failed to save player record");
                Some(e.to_string())
            }
        }
    }
}
