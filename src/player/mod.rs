//! Per-side player state and the action handlers that mutate it.
//!
//! A `Player` tracks its cursor, fleet, shot budget, ship selection and
//! hidden flag. Geometry is delegated to the manipulation collaborators in
//! [`manipulation`]; damage is left to the ships themselves.

use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::board::{Board, Square};
use crate::common::{Coord, Direction, PlayerError, ShipId};
use crate::config::SessionConfig;
use crate::input::{Action, Key, KeyBindings, PlayerKind};
use crate::ship::Ship;

pub mod manipulation;
pub use manipulation::{BoardManipulation, CursorMover, SelectionCycler, ShipManipulation};

/// Corner of the board a player starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum StartSide {
    TopLeft,
    BottomRight,
}

impl StartSide {
    /// Start coordinate on a `columns`×`rows` board.
    pub fn start_coord(&self, columns: usize, rows: usize) -> Result<Coord, PlayerError> {
        if columns == 0 || rows == 0 {
            return Err(PlayerError::EmptyBoard { columns, rows });
        }
        Ok(match self {
            StartSide::TopLeft => Coord::new(0, 0),
            StartSide::BottomRight => Coord::new(columns - 1, rows - 1),
        })
    }
}

impl FromStr for StartSide {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: alloc::string::String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "topleft" => Ok(StartSide::TopLeft),
            "bottomright" => Ok(StartSide::BottomRight),
            _ => Err(PlayerError::UnknownStartSide(s.to_string())),
        }
    }
}

impl fmt::Display for StartSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartSide::TopLeft => f.write_str("top-left"),
            StartSide::BottomRight => f.write_str("bottom-right"),
        }
    }
}

/// Result of a shot attempt. Only `Fired` consumes a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    Fired,
    NoShotsLeft,
    SquareUnusable,
}

/// Snapshot of a player's state for display or hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub kind: PlayerKind,
    pub side: StartSide,
    pub position: Coord,
    pub start: Coord,
    pub shots_remaining: u32,
    pub shots_left: u32,
    pub ships: usize,
    pub ships_left: usize,
    pub selected: Option<ShipId>,
    pub hidden: bool,
}

/// One side of the game.
pub struct Player<S: Ship> {
    kind: PlayerKind,
    side: StartSide,
    bindings: KeyBindings,
    position: Coord,
    start: Coord,
    fleet: Vec<S>,
    selected: Option<ShipId>,
    shots_per_turn: u32,
    shots_remaining: u32,
    damage: u32,
    hidden: bool,
}

impl<S: Ship> Player<S> {
    /// Create a player starting from `side` of `board`.
    ///
    /// Fails only when the board has no squares to start from.
    pub fn new<B: Board>(
        kind: PlayerKind,
        side: StartSide,
        board: &B,
        config: &SessionConfig,
    ) -> Result<Self, PlayerError> {
        let start = side.start_coord(board.columns(), board.rows())?;
        log::debug!("{} starts {} at {}", kind, side, start);
        Ok(Self {
            kind,
            side,
            bindings: kind.bindings(),
            position: start,
            start,
            fleet: Vec::new(),
            selected: None,
            shots_per_turn: config.shots_per_turn,
            shots_remaining: config.shots_per_turn,
            damage: config.damage_per_hit,
            hidden: false,
        })
    }

    /// Like [`Player::new`], with the start side given as configuration text.
    pub fn from_side_name<B: Board>(
        kind: PlayerKind,
        side: &str,
        board: &B,
        config: &SessionConfig,
    ) -> Result<Self, PlayerError> {
        Self::new(kind, side.parse()?, board, config)
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn side(&self) -> StartSide {
        self.side
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn rebind(&mut self, action: Action, key: Key) {
        self.bindings.rebind(action, key);
    }

    pub fn keys_used(&self) -> impl Iterator<Item = Key> + '_ {
        self.bindings.keys_used()
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    /// Move the cursor. Called by the board manipulation collaborator.
    pub fn set_position(&mut self, at: Coord) {
        self.position = at;
    }

    pub fn start_position(&self) -> Coord {
        self.start
    }

    /// Square under the start position.
    pub fn start_square<B: Board>(&self, board: &B) -> Option<B::Square> {
        board.square(self.start)
    }

    /// Put the cursor back on the start position and tell the board about it.
    pub fn reset_position<M: BoardManipulation<S>>(&mut self, board: &mut M) {
        self.position = self.start;
        let start = self.start;
        board.move_to(self, start);
    }

    /// Append `ship` to the fleet. No duplicate check.
    pub fn add_ship(&mut self, ship: S) -> ShipId {
        self.fleet.push(ship);
        ShipId(self.fleet.len() - 1)
    }

    /// Copy of the fleet in insertion order.
    pub fn ships(&self) -> Vec<S>
    where
        S: Clone,
    {
        self.fleet.clone()
    }

    pub fn fleet(&self) -> &[S] {
        &self.fleet
    }

    pub fn ship(&self, id: ShipId) -> Option<&S> {
        self.fleet.get(id.0)
    }

    pub fn ship_mut(&mut self, id: ShipId) -> Option<&mut S> {
        self.fleet.get_mut(id.0)
    }

    /// Number of ships not yet destroyed. Walks the whole fleet each call.
    pub fn num_ships_left(&self) -> usize {
        self.fleet.iter().filter(|s| !s.is_destroyed()).count()
    }

    /// Check both shot guards and consume a shot if they pass.
    pub fn try_shoot<Q: Square>(&mut self, target: &Q) -> ShotOutcome {
        if self.shots_left() == 0 {
            log::debug!("{} shot blocked: no shots left", self.kind);
            return ShotOutcome::NoShotsLeft;
        }
        if !target.is_usable() {
            log::debug!("{} shot blocked: square unusable", self.kind);
            return ShotOutcome::SquareUnusable;
        }
        self.shots_remaining -= 1;
        log::debug!("{} fired, {} shots remaining", self.kind, self.shots_remaining);
        ShotOutcome::Fired
    }

    /// Shoot at `target`. Silently does nothing if the player has no shots
    /// left or the square is not usable.
    pub fn shoot<Q: Square>(&mut self, target: &Q) {
        let _ = self.try_shoot(target);
    }

    /// Shots available this turn; zero once every ship is destroyed.
    pub fn shots_left(&self) -> u32 {
        if self.num_ships_left() > 0 {
            self.shots_remaining
        } else {
            0
        }
    }

    /// Stored shot count, ignoring fleet state.
    pub fn shots_remaining(&self) -> u32 {
        self.shots_remaining
    }

    pub fn shots_per_turn(&self) -> u32 {
        self.shots_per_turn
    }

    pub fn reset_shots(&mut self) {
        self.shots_remaining = self.shots_per_turn;
        log::info!("{} has {} shots", self.kind, self.shots_remaining);
    }

    /// Damage this player's hits deal.
    pub fn damage(&self) -> u32 {
        self.damage
    }

    /// Currently selected ship. A stale id reads as no selection.
    pub fn selected_ship(&self) -> Option<&S> {
        self.selected.and_then(|id| self.fleet.get(id.0))
    }

    pub fn selected_ship_id(&self) -> Option<ShipId> {
        self.selected.filter(|id| id.0 < self.fleet.len())
    }

    /// Select a ship from this player's fleet.
    pub fn set_selected_ship(&mut self, id: ShipId) -> Result<(), PlayerError> {
        if id.0 >= self.fleet.len() {
            return Err(PlayerError::ShipNotInFleet(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selected_ship(&mut self) {
        self.selected = None;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Flip the hidden flag.
    pub fn toggle_hide(&mut self) {
        self.set_hidden(!self.hidden);
    }

    /// Hide or show the fleet. Every ship's visibility is written on every
    /// call, even when `hide` matches the current flag.
    pub fn set_hidden(&mut self, hide: bool) {
        if self.hidden != hide {
            self.hidden = hide;
            log::debug!("{} fleet hidden: {}", self.kind, hide);
        }
        let visible = !self.hidden;
        for ship in self.fleet.iter_mut() {
            ship.set_visible(visible);
        }
    }

    /// Carry out a logical action.
    pub fn handle<BM, SM>(&mut self, action: Action, board: &mut BM, ships: &mut SM)
    where
        BM: BoardManipulation<S>,
        SM: ShipManipulation<S>,
    {
        log::trace!("{} action {}", self.kind, action);
        match action {
            Action::Up => board.step(self, Direction::Up),
            Action::Down => board.step(self, Direction::Down),
            Action::Left => board.step(self, Direction::Left),
            Action::Right => board.step(self, Direction::Right),
            Action::Enter => ships.confirm(self),
            Action::ToggleHide => self.toggle_hide(),
        }
    }

    /// Map `key` through this player's bindings and handle it.
    /// Returns the action taken, or `None` for keys this player ignores.
    pub fn handle_key<BM, SM>(&mut self, key: Key, board: &mut BM, ships: &mut SM) -> Option<Action>
    where
        BM: BoardManipulation<S>,
        SM: ShipManipulation<S>,
    {
        let action = self.bindings.action_for(key)?;
        self.handle(action, board, ships);
        Some(action)
    }

    pub fn state(&self) -> PlayerState {
        PlayerState {
            kind: self.kind,
            side: self.side,
            position: self.position,
            start: self.start,
            shots_remaining: self.shots_remaining,
            shots_left: self.shots_left(),
            ships: self.fleet.len(),
            ships_left: self.num_ships_left(),
            selected: self.selected_ship_id(),
            hidden: self.hidden,
        }
    }
}

impl<S: Ship> fmt::Debug for Player<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player {{ kind: {:?}, position: {}, ships_left: {}/{}, shots: {}, hidden: {} }}",
            self.kind,
            self.position,
            self.num_ships_left(),
            self.fleet.len(),
            self.shots_remaining,
            self.hidden,
        )
    }
}
