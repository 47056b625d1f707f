use alloc::vec::Vec;
use rand::Rng;

use crate::{
    board::{Board, Grid, GridSquare},
    common::{Coord, PlayerError, ShipId},
    config::SessionConfig,
    input::{Action, Key, PlayerKind},
    player::{CursorMover, Player, SelectionCycler, ShotOutcome},
    setup::place_random_fleet,
    ship::{Ship, ShipClass, Warship},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won(PlayerKind),
}

/// What happened when the current player fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FireReport {
    pub outcome: ShotOutcome,
    pub target: Coord,
    /// Opponent ship struck, if any.
    pub hit: Option<ShipId>,
    pub sunk: bool,
}

/// Two players sharing one board, taking turns. Each player keeps its own
/// record of the squares it has fired upon.
pub struct Game {
    config: SessionConfig,
    fired: [Grid; 2],
    players: [Player<Warship>; 2],
    current: PlayerKind,
    turn: u32,
    cursor: CursorMover,
    selector: SelectionCycler,
}

fn slot(kind: PlayerKind) -> usize {
    match kind {
        PlayerKind::PlayerOne => 0,
        PlayerKind::PlayerTwo => 1,
    }
}

impl Game {
    /// Create a game with empty fleets, Player One to move.
    pub fn new(config: SessionConfig) -> Result<Self, PlayerError> {
        let grid = Grid::new(config.columns, config.rows);
        let one = PlayerKind::PlayerOne;
        let two = PlayerKind::PlayerTwo;
        let players = [
            Player::new(one, one.default_side(), &grid, &config)?,
            Player::new(two, two.default_side(), &grid, &config)?,
        ];
        let mut game = Self {
            config,
            cursor: CursorMover::new(grid.columns(), grid.rows()),
            fired: [grid.clone(), grid],
            players,
            current: one,
            turn: 1,
            selector: SelectionCycler::new(),
        };
        let Self { players, cursor, .. } = &mut game;
        for p in players.iter_mut() {
            p.reset_position(cursor);
        }
        Ok(game)
    }

    /// Lay out a random fleet of `classes` for each player in its own half
    /// of the board.
    pub fn place_fleets<R: Rng>(&mut self, rng: &mut R, classes: &[ShipClass]) -> Result<(), PlayerError> {
        let columns = self.config.columns;
        let rows = self.config.rows;
        let damage = self.config.damage_per_hit;
        let half = rows / 2;
        let mut occupied: Vec<Coord> = self
            .players
            .iter()
            .flat_map(|p| p.fleet().iter().flat_map(|s| s.cells().iter().copied()))
            .collect();
        for player in self.players.iter_mut() {
            let region = match player.kind() {
                PlayerKind::PlayerOne => 0..half,
                PlayerKind::PlayerTwo => half..rows,
            };
            for ship in place_random_fleet(rng, classes, columns, region, damage, &mut occupied)? {
                player.add_ship(ship);
            }
        }
        Ok(())
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Squares `shooter` has fired upon.
    pub fn fired_by(&self, shooter: PlayerKind) -> &Grid {
        &self.fired[slot(shooter)]
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn current_kind(&self) -> PlayerKind {
        self.current
    }

    pub fn player(&self, kind: PlayerKind) -> &Player<Warship> {
        &self.players[slot(kind)]
    }

    pub fn player_mut(&mut self, kind: PlayerKind) -> &mut Player<Warship> {
        &mut self.players[slot(kind)]
    }

    pub fn current_player(&self) -> &Player<Warship> {
        self.player(self.current)
    }

    pub fn opponent(&self) -> &Player<Warship> {
        self.player(self.current.other())
    }

    pub fn cursor(&self) -> &CursorMover {
        &self.cursor
    }

    /// Give the current player a fresh shot budget.
    pub fn begin_turn(&mut self) {
        let current = self.current;
        self.player_mut(current).reset_shots();
    }

    /// Hand the turn to the other player.
    pub fn end_turn(&mut self) {
        self.current = self.current.other();
        self.turn += 1;
        log::info!("turn {}: {} to move", self.turn, self.current);
        self.begin_turn();
    }

    /// Route `key` to whichever player binds it.
    pub fn handle_key(&mut self, key: Key) -> Option<(PlayerKind, Action)> {
        let Self {
            players,
            cursor,
            selector,
            ..
        } = self;
        players.iter_mut().find_map(|p| {
            let kind = p.kind();
            p.handle_key(key, cursor, selector).map(|a| (kind, a))
        })
    }

    /// The current player shoots at its cursor square.
    pub fn fire(&mut self) -> FireReport {
        let current = self.current;
        let damage = self.player(current).damage();
        let target = self.player(current).position();
        let square = self.fired[slot(current)].square(target).unwrap_or(GridSquare {
            coord: target,
            fired_upon: true,
        });
        let outcome = self.player_mut(current).try_shoot(&square);
        let mut report = FireReport {
            outcome,
            target,
            hit: None,
            sunk: false,
        };
        if outcome != ShotOutcome::Fired {
            return report;
        }

        self.fired[slot(current)].mark_fired(target);
        let opponent = self.player_mut(current.other());
        let struck = opponent
            .fleet()
            .iter()
            .position(|s| s.occupies(target) && !s.is_destroyed());
        if let Some(i) = struck {
            let id = ShipId(i);
            if let Some(ship) = opponent.ship_mut(id) {
                ship.apply_damage(damage);
                report.sunk = ship.is_destroyed();
            }
            report.hit = Some(id);
            log::info!("{} hit {} at {}", current, id, target);
        }
        report
    }

    /// A player wins once every ship of a non-empty opposing fleet is destroyed.
    pub fn status(&self) -> GameStatus {
        for kind in [self.current, self.current.other()] {
            let other = self.player(kind.other());
            if !other.fleet().is_empty() && other.num_ships_left() == 0 {
                return GameStatus::Won(kind);
            }
        }
        GameStatus::InProgress
    }
}
