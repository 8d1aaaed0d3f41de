//! Round logic and player bookkeeping for a stacking reflex game.
//!
//! A marker sweeps across the track once per row; the player stops it, and each
//! stop must land on top of the previous one. Eight stacked rows win the round,
//! a miss loses it. Everything here is synchronous and free of rendering:
//!
//! - [`gameplay::RoundEngine`] runs one round and emits immutable [`RoundEvent`]s.
//! - [`store::PlayerStore`] persists [`PlayerRecord`]s through a [`store::KvBackend`].
//! - [`session::SessionController`] turns decoded intents into engine calls and
//!   record updates, saving after every change.
//!
//! ```
//! use stacker_core::{DifficultyLevel, GameConfig, MemoryBackend, PlayerStore, SessionController};
//!
//! let mut session = SessionController::new(PlayerStore::new(MemoryBackend::new()), GameConfig::default());
//! session.submit_identity("Ada").unwrap();
//! session.choose_difficulty(DifficultyLevel::Easy).unwrap();
//! session.submit_stop(120);
//!
//! assert_eq!(session.player().unwrap().session_score(), 50);
//! ```

pub mod config;
pub mod difficulty;
pub mod error;
pub mod gameplay;
pub mod input;
pub mod session;
pub mod stats;
pub mod store;

pub use stacker_data::{DifficultyLevel, PlayerRecord, RoundEvent, RoundOutcome, WinLoss};

pub use config::GameConfig;
pub use difficulty::DifficultyTable;
pub use error::{GameError, GameErrorKind, GameResult};
pub use gameplay::{RoundEngine, RoundPhase};
pub use input::{events::Intent, IntentQueue};
pub use session::{SessionController, SessionEvent, SessionUpdate};
pub use stats::{StatsProjector, StatsView};
pub use store::{JsonFileBackend, KvBackend, MemoryBackend, PlayerStore};
