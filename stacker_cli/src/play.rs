use std::io::Write;

use anyhow::Context;
use stacker_core::{
    DifficultyLevel, KvBackend, RoundEvent, RoundOutcome, SessionController, SessionEvent,
    SessionUpdate,
};

/// Resolves the player, starts a round and feeds `positions` as stops until it ends.
pub fn run_round<B: KvBackend>(
    session: &mut SessionController<B>,
    name: &str,
    level: DifficultyLevel,
    positions: &[i32],
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let update = session
        .submit_identity(name)
        .context("cannot resolve player")?;
    report(&update, out)?;

    let update = session
        .choose_difficulty(level)
        .context("cannot start a round")?;
    report(&update, out)?;

    let mut ignored = 0;
    for &position in positions {
        let update = session.submit_stop(position);
        if update.is_ignored() {
            ignored += 1;
            continue;
        }
        report(&update, out)?;
    }

    if ignored > 0 {
        writeln!(out, "ignored {ignored} stops after the round ended")?;
    }
    if let Some(round) = session.round() {
        writeln!(out, "round unfinished at row {}", round.current_row_index())?;
    }

    if let Some(stats) = session.stats() {
        writeln!(out)?;
        writeln!(out, "{stats}")?;
    }
    Ok(())
}

fn report(update: &SessionUpdate, out: &mut impl Write) -> anyhow::Result<()> {
    if let Some(warning) = &update.warning {
        eprintln!("warning: {warning}");
    }

    match &update.event {
        Some(SessionEvent::PlayerResolved { name, returning }) => {
            let kind = if *returning { "returning" } else { "new" };
            writeln!(out, "player {name} ({kind})")?;
        }
        Some(SessionEvent::RoundStarted { level, speed_ms }) => {
            writeln!(out, "round {level} started at {speed_ms}ms")?;
        }
        Some(SessionEvent::Round(event)) => writeln!(out, "{}", describe(event))?,
        None => {}
    }
    Ok(())
}

fn describe(event: &RoundEvent) -> String {
    match event.outcome {
        RoundOutcome::RowAdvanced => format!(
            "row {} stopped at {}: +{} (next speed {}ms)",
            event.row_index, event.position, event.awarded, event.speed_ms
        ),
        RoundOutcome::Won => format!("won {} (+{})", event.level, event.awarded),
        RoundOutcome::Lost => format!("lost {} at row {}", event.level, event.row_index),
    }
}
