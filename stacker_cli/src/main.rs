mod play;

use std::{io, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use stacker_core::config::load_config_from_path;
use stacker_core::{
    DifficultyLevel, GameConfig, GameError, JsonFileBackend, PlayerStore, SessionController,
    StatsProjector,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_STORE: &str = "stacker_players.json";

#[derive(Debug, Parser)]
#[command(name = "stacker")]
#[command(about = "Stack the sliding marker eight rows high", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play one round, stopping each row at the given positions
    Play {
        #[arg(short, long)]
        name: String,
        #[arg(short, long, default_value = "easy")]
        difficulty: DifficultyLevel,
        #[arg(long, default_value = DEFAULT_STORE)]
        store: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(required = true, allow_negative_numbers = true)]
        positions: Vec<i32>,
    },
    /// Show a player's stats
    Stats {
        #[arg(short, long)]
        name: String,
        #[arg(long, default_value = DEFAULT_STORE)]
        store: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            name,
            difficulty,
            store,
            config,
            positions,
        } => {
            let config = match config {
                Some(path) => load_config_from_path(&path)?,
                None => GameConfig::default(),
            };
            debug!(store = %store.display(), ?config, "starting play");
            let store = PlayerStore::new(JsonFileBackend::new(store));
            let mut session = SessionController::new(store, config);
            play::run_round(
                &mut session,
                &name,
                difficulty,
                &positions,
                &mut io::stdout().lock(),
            )?;
        }
        Command::Stats { name, store, json } => {
            debug!(store = %store.display(), "reading stats");
            let store = PlayerStore::new(JsonFileBackend::new(store));
            let record = match store.load(&name) {
                Ok(record) => record,
                Err(GameError::NotFound { .. }) => store.create_fresh(&name)?,
                Err(e) => return Err(e).with_context(|| format!("cannot load player {name:?}")),
            };

            let view = StatsProjector::project(&record);
            if json {
                let json = serde_json::to_string_pretty(&view).context("failed to serialize stats")?;
                println!("{json}");
            } else {
                println!("{view}");
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .try_init();
}
