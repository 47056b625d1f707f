//! Hot-seat terminal front end.
//!
//! Each input line holds whitespace separated tokens. Key names are routed
//! to the player that binds them; `fire`, `end` and `quit` drive the turn.

#![cfg(feature = "std")]

pub mod interface;

pub use interface::*;

use std::io::{BufRead, Write};

use crate::{FireReport, Game, GameStatus, Key, ShotOutcome};

/// Command recognised by the hot-seat loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Key(Key),
    Fire,
    EndTurn,
    Quit,
}

/// Parse one token. Returns `None` for anything unrecognised.
pub fn parse_command(token: &str) -> Option<Command> {
    match token.to_ascii_lowercase().as_str() {
        "fire" => Some(Command::Fire),
        "end" => Some(Command::EndTurn),
        "quit" | "exit" => Some(Command::Quit),
        _ => token.parse().ok().map(Command::Key),
    }
}

fn describe(report: &FireReport) -> String {
    match report.outcome {
        ShotOutcome::NoShotsLeft => "No shots left this turn.".to_string(),
        ShotOutcome::SquareUnusable => format!("Square {} cannot be fired upon.", report.target),
        ShotOutcome::Fired => match (report.hit, report.sunk) {
            (Some(id), true) => format!("Hit and sunk ship {} at {}!", id, report.target),
            (Some(id), false) => format!("Hit ship {} at {}.", id, report.target),
            (None, _) => format!("Miss at {}.", report.target),
        },
    }
}

/// Play until a side wins, `quit` is entered or `input` runs dry.
pub fn run_hotseat<R: BufRead, W: Write>(
    game: &mut Game,
    input: R,
    out: &mut W,
) -> anyhow::Result<GameStatus> {
    write_grid(out, game)?;
    write_status(out, game)?;
    for line in input.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            match parse_command(token) {
                Some(Command::Key(key)) => {
                    if game.handle_key(key).is_none() {
                        log::debug!("key {} is not bound", key);
                    }
                }
                Some(Command::Fire) => {
                    let report = game.fire();
                    writeln!(out, "{}", describe(&report))?;
                }
                Some(Command::EndTurn) => game.end_turn(),
                Some(Command::Quit) => return Ok(game.status()),
                None => writeln!(out, "Unrecognised input '{}'", token)?,
            }
            if let GameStatus::Won(kind) = game.status() {
                writeln!(out, "{} wins!", kind)?;
                return Ok(game.status());
            }
        }
        write_grid(out, game)?;
        write_status(out, game)?;
    }
    Ok(game.status())
}
