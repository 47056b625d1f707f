#![cfg(feature = "std")]

//! Text rendering of the shared grid and player status.

use std::io::{self, Write};

use crate::{Board, Coord, Game, PlayerKind, Ship};

fn cell_char(game: &Game, at: Coord) -> char {
    for kind in [PlayerKind::PlayerOne, PlayerKind::PlayerTwo] {
        if game.player(kind).position() == at && game.current_kind() == kind {
            return match kind {
                PlayerKind::PlayerOne => '1',
                PlayerKind::PlayerTwo => '2',
            };
        }
    }
    let shooter = game.current_kind();
    let target_here = game.opponent().fleet().iter().any(|s| s.occupies(at));
    let ship_here = [PlayerKind::PlayerOne, PlayerKind::PlayerTwo]
        .iter()
        .flat_map(|&k| game.player(k).fleet().iter())
        .find(|s| s.occupies(at));
    match (game.fired_by(shooter).is_fired(at), target_here, ship_here) {
        (true, true, _) => 'X',
        (true, false, _) => 'o',
        (false, _, Some(s)) if s.is_visible() => '#',
        _ => '.',
    }
}

/// Write the board as the current player sees it: its own shots, its cursor
/// and every visible ship.
pub fn write_grid<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    let grid = game.fired_by(game.current_kind());
    write!(out, "    ")?;
    for c in 0..grid.columns() {
        write!(out, " {}", (b'A' + (c % 26) as u8) as char)?;
    }
    writeln!(out)?;
    for r in 0..grid.rows() {
        write!(out, "  {:2}", r + 1)?;
        for c in 0..grid.columns() {
            write!(out, " {}", cell_char(game, Coord::new(c, r)))?;
        }
        writeln!(out)?;
    }
    writeln!(out, "    Legend: #=Ship  X=Hit  o=Miss  .=Water  1/2=Cursor")
}

/// Write one status line per player.
pub fn write_status<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    writeln!(out, "Turn {}: {} to move", game.turn(), game.current_kind())?;
    for kind in [PlayerKind::PlayerOne, PlayerKind::PlayerTwo] {
        let p = game.player(kind);
        let selected = p.selected_ship().map(|s| s.name()).unwrap_or("-");
        writeln!(
            out,
            "  {}: ships {}/{}  shots {}  selected {}  {}",
            kind,
            p.num_ships_left(),
            p.fleet().len(),
            p.shots_left(),
            selected,
            if p.is_hidden() { "hidden" } else { "shown" },
        )?;
    }
    Ok(())
}
