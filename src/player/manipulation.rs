//! Collaborators that move a player's cursor and pick its ships.

use crate::common::{Coord, Direction, ShipId};
use crate::input::PlayerKind;
use crate::player::Player;
use crate::ship::Ship;

/// Moves a player's cursor over the board.
pub trait BoardManipulation<S: Ship> {
    /// Move the cursor one square in `direction`.
    fn step(&mut self, player: &mut Player<S>, direction: Direction);

    /// Move the cursor straight to `at`.
    fn move_to(&mut self, player: &mut Player<S>, at: Coord);
}

/// Reacts to a player confirming a selection.
pub trait ShipManipulation<S: Ship> {
    fn confirm(&mut self, player: &mut Player<S>);
}

/// Cursor mover that keeps every cursor on a `columns`×`rows` board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorMover {
    columns: usize,
    rows: usize,
    last_move: Option<(PlayerKind, Coord)>,
}

impl CursorMover {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            last_move: None,
        }
    }

    /// Most recent cursor placement and whose cursor it was.
    pub fn last_move(&self) -> Option<(PlayerKind, Coord)> {
        self.last_move
    }

    fn clamp(&self, at: Coord) -> Coord {
        Coord::new(
            at.x.min(self.columns.saturating_sub(1)),
            at.y.min(self.rows.saturating_sub(1)),
        )
    }

    fn place<S: Ship>(&mut self, player: &mut Player<S>, at: Coord) {
        player.set_position(at);
        self.last_move = Some((player.kind(), at));
    }
}

impl<S: Ship> BoardManipulation<S> for CursorMover {
    fn step(&mut self, player: &mut Player<S>, direction: Direction) {
        let next = player.position().step(direction, self.columns, self.rows);
        self.place(player, next);
    }

    fn move_to(&mut self, player: &mut Player<S>, at: Coord) {
        let at = self.clamp(at);
        self.place(player, at);
    }
}

/// Confirm cycles the selection through the player's living ships.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCycler {
    confirmations: usize,
}

impl SelectionCycler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirmations(&self) -> usize {
        self.confirmations
    }
}

impl<S: Ship> ShipManipulation<S> for SelectionCycler {
    fn confirm(&mut self, player: &mut Player<S>) {
        self.confirmations += 1;
        let len = player.fleet().len();
        let from = player.selected_ship_id().map(|id| id.0 + 1).unwrap_or(0);
        let next = (0..len)
            .map(|i| (from + i) % len)
            .find(|&i| !player.fleet()[i].is_destroyed());
        match next {
            Some(i) => {
                if player.set_selected_ship(ShipId(i)).is_ok() {
                    log::debug!("{} selected ship {}", player.kind(), ShipId(i));
                }
            }
            None => player.clear_selected_ship(),
        }
    }
}
