//! Game loop between the engine and the console.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};
use variant_tictactoe::{GameEngine, Outcome, Player, TurnAction, Variant};

use crate::console::SharedConsole;

/// Plays `engine` to the end, printing every turn to the console.
///
/// Human seats read their moves from the same console.
#[instrument(skip(engine, console), fields(variant = %engine.variant()))]
pub fn run_game<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    console: &SharedConsole<R, W>,
) -> Result<Outcome> {
    info!("Starting game loop");
    writeln!(console.borrow_mut(), "\nLet's play! ({})", engine.variant().label())?;

    while !engine.is_over() {
        let player = engine.current_player();
        writeln!(console.borrow_mut(), "\nCurrent player: {}", seat_label(engine, player))?;

        let report = engine
            .play_turn()
            .with_context(|| format!("Turn of player {} failed", player))?;
        debug!(?report, "Turn finished");

        let mut out = console.borrow_mut();
        for rejection in report.rejected() {
            writeln!(out, "Invalid move: {}", rejection.error)?;
        }
        match report.action() {
            TurnAction::Forfeited { error } => {
                writeln!(out, "Invalid move: {}. {} has lost the turn.", error, seat_label(engine, player))?;
            }
            TurnAction::Placed { mv, erased } => {
                if engine.variant() != Variant::Blind {
                    writeln!(out, "{} played {}", seat_label(engine, player), mv.cell)?;
                }
                if let Some(erased) = erased {
                    writeln!(out, "Cell {} ({}) fades from memory", erased.cell, erased.player)?;
                }
            }
        }
        writeln!(out, "{}", engine.visible_board())?;
    }

    let outcome = engine.outcome().context("Game loop ended without an outcome")?;
    let mut out = console.borrow_mut();
    writeln!(out)?;
    match outcome {
        Outcome::Winner(player) => writeln!(out, "{} Well played, {}.", outcome, engine.seat(player).name())?,
        Outcome::Tie => writeln!(out, "{}", outcome)?,
    }
    if let Some(reveal) = engine.reveal() {
        writeln!(out, "\nWhat you saw:\n{}", reveal.visible)?;
        writeln!(out, "\nWhat was played:\n{}", reveal.actual)?;
    }
    info!(%outcome, turns = engine.turns_played(), "Game finished");
    Ok(outcome)
}

fn seat_label(engine: &GameEngine, player: Player) -> String {
    format!("{} ({})", engine.seat(player).name(), player)
}
