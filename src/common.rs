//! Common types for Broadside: coordinates, directions and player errors.

use alloc::string::String;
use core::fmt;

/// A column/row coordinate on the shared board, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Move one square in `direction`, staying inside a `columns`×`rows` board.
    pub fn step(self, direction: Direction, columns: usize, rows: usize) -> Self {
        let max_x = columns.saturating_sub(1);
        let max_y = rows.saturating_sub(1);
        let (x, y) = match direction {
            Direction::Up => (self.x, self.y.saturating_sub(1)),
            Direction::Down => (self.x, (self.y + 1).min(max_y)),
            Direction::Left => (self.x.saturating_sub(1), self.y),
            Direction::Right => ((self.x + 1).min(max_x), self.y),
        };
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Index of a ship inside its owner's fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub usize);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors returned by player construction, selection and board lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    /// Start side text did not name a known side.
    UnknownStartSide(String),
    /// Board has no squares, so no start coordinate exists.
    EmptyBoard { columns: usize, rows: usize },
    /// Selected ship is not part of this player's fleet.
    ShipNotInFleet(ShipId),
    /// Ship does not fit on the board at this origin.
    OutOfBounds(Coord),
    /// Random fleet placement ran out of attempts.
    UnableToPlaceFleet,
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::UnknownStartSide(s) => write!(f, "Unknown start side '{}'", s),
            PlayerError::EmptyBoard { columns, rows } => {
                write!(f, "Board of {}x{} has no start square", columns, rows)
            }
            PlayerError::ShipNotInFleet(id) => write!(f, "Ship {} is not in this fleet", id),
            PlayerError::OutOfBounds(c) => write!(f, "Ship does not fit on the board at {}", c),
            PlayerError::UnableToPlaceFleet => write!(f, "Unable to place fleet"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlayerError {}
