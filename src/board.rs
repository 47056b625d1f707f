//! The shared board: squares the players aim at and the grid that owns them.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::Coord;

/// A square a player may shoot at.
pub trait Square {
    fn is_usable(&self) -> bool;
}

/// Extent and square lookup of the board both players share.
pub trait Board {
    type Square: Square;

    fn columns(&self) -> usize;

    fn rows(&self) -> usize;

    /// Square at `at`, or `None` off the board.
    fn square(&self, at: Coord) -> Option<Self::Square>;
}

/// A square on a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSquare {
    pub coord: Coord,
    pub fired_upon: bool,
}

impl Square for GridSquare {
    fn is_usable(&self) -> bool {
        !self.fired_upon
    }
}

/// Rectangular board where each square can be fired upon once.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    fired: Vec<bool>,
}

impl Grid {
    pub fn new(columns: usize, rows: usize) -> Self {
        Grid {
            columns,
            rows,
            fired: vec![false; columns * rows],
        }
    }

    fn index(&self, at: Coord) -> Option<usize> {
        if at.x < self.columns && at.y < self.rows {
            Some(at.y * self.columns + at.x)
        } else {
            None
        }
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.index(at).is_some()
    }

    /// Record a shot at `at`. Returns `false` if off the board or already fired upon.
    pub fn mark_fired(&mut self, at: Coord) -> bool {
        match self.index(at) {
            Some(i) if !self.fired[i] => {
                self.fired[i] = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_fired(&self, at: Coord) -> bool {
        self.index(at).map(|i| self.fired[i]).unwrap_or(false)
    }
}

impl Board for Grid {
    type Square = GridSquare;

    fn columns(&self) -> usize {
        self.columns
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn square(&self, at: Coord) -> Option<GridSquare> {
        self.index(at).map(|i| GridSquare {
            coord: at,
            fired_upon: self.fired[i],
        })
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid {{ columns: {}, rows: {}, fired: {} }}",
            self.columns,
            self.rows,
            self.fired.iter().filter(|&&b| b).count()
        )
    }
}
