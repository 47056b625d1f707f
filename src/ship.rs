//! Ship definitions: the `Ship` seam the player talks to and a concrete `Warship`.

use alloc::vec::Vec;
use core::fmt;

use crate::common::{Coord, PlayerError};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Class of ship: name and length in squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Hit points of a fresh ship: one hit of `damage_per_hit` per square.
    /// A zero damage rule still gives one point per square.
    pub fn hit_points(&self, damage_per_hit: u32) -> u32 {
        self.length as u32 * damage_per_hit.max(1)
    }
}

/// What a player needs from the ships in its fleet.
///
/// Damage and destruction are owned by the ship; the player only reads
/// `is_destroyed` and drives visibility.
pub trait Ship {
    fn name(&self) -> &str;

    fn is_destroyed(&self) -> bool;

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);
}

/// A ship laid out on the grid with a hit-point pool.
#[derive(Clone, PartialEq, Eq)]
pub struct Warship {
    class: ShipClass,
    orientation: Orientation,
    cells: Vec<Coord>,
    hit_points: u32,
    visible: bool,
}

impl Warship {
    /// Lay out a ship of `class` from `origin` on a `columns`×`rows` board,
    /// sized to sink after one hit of `damage_per_hit` on each square.
    pub fn new(
        class: ShipClass,
        orientation: Orientation,
        origin: Coord,
        columns: usize,
        rows: usize,
        damage_per_hit: u32,
    ) -> Result<Self, PlayerError> {
        let len = class.length();
        let (end_x, end_y) = match orientation {
            Orientation::Horizontal => (origin.x + len, origin.y + 1),
            Orientation::Vertical => (origin.x + 1, origin.y + len),
        };
        if end_x > columns || end_y > rows {
            return Err(PlayerError::OutOfBounds(origin));
        }

        let cells = (0..len)
            .map(|i| match orientation {
                Orientation::Horizontal => Coord::new(origin.x + i, origin.y),
                Orientation::Vertical => Coord::new(origin.x, origin.y + i),
            })
            .collect();

        Ok(Warship {
            class,
            orientation,
            cells,
            hit_points: class.hit_points(damage_per_hit),
            visible: true,
        })
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Squares covered by the ship, from its origin outwards.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn occupies(&self, at: Coord) -> bool {
        self.cells.contains(&at)
    }

    pub fn hit_points(&self) -> u32 {
        self.hit_points
    }

    /// Subtract `amount` hit points, stopping at zero.
    pub fn apply_damage(&mut self, amount: u32) {
        self.hit_points = self.hit_points.saturating_sub(amount);
    }
}

impl Ship for Warship {
    fn name(&self) -> &str {
        self.class.name()
    }

    fn is_destroyed(&self) -> bool {
        self.hit_points == 0
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl fmt::Debug for Warship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Warship {{ name: \"{}\", cells: {:?}, orientation: {:?}, hp: {}, visible: {} }}",
            self.class.name(),
            self.cells,
            self.orientation,
            self.hit_points,
            self.visible,
        )
    }
}
