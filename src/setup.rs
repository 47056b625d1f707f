//! Random fleet layout for the placement phase.

use alloc::vec::Vec;
use core::ops::Range;
use rand::Rng;

use crate::common::{Coord, PlayerError};
use crate::ship::{Orientation, ShipClass, Warship};

const MAX_ATTEMPTS: usize = 100;

/// Lay out one ship per class inside rows `rows` of a board `columns` wide,
/// avoiding every square in `occupied`. Squares of the new ships are added
/// to `occupied`.
pub fn place_random_fleet<R: Rng>(
    rng: &mut R,
    classes: &[ShipClass],
    columns: usize,
    rows: Range<usize>,
    damage_per_hit: u32,
    occupied: &mut Vec<Coord>,
) -> Result<Vec<Warship>, PlayerError> {
    let mut fleet = Vec::with_capacity(classes.len());
    for &class in classes {
        let ship = random_placement(rng, class, columns, rows.clone(), damage_per_hit, occupied)?;
        occupied.extend_from_slice(ship.cells());
        fleet.push(ship);
    }
    Ok(fleet)
}

/// A non-overlapping ship of `class`, or `UnableToPlaceFleet` after
/// `MAX_ATTEMPTS` tries.
pub fn random_placement<R: Rng>(
    rng: &mut R,
    class: ShipClass,
    columns: usize,
    rows: Range<usize>,
    damage_per_hit: u32,
    occupied: &[Coord],
) -> Result<Warship, PlayerError> {
    let len = class.length();
    let height = rows.end.saturating_sub(rows.start);
    for _ in 0..MAX_ATTEMPTS {
        let orient = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (span_x, span_y) = match orient {
            Orientation::Horizontal => (len, 1),
            Orientation::Vertical => (1, len),
        };
        if span_x > columns || span_y > height {
            continue;
        }
        let x = rng.random_range(0..=columns - span_x);
        let y = rows.start + rng.random_range(0..=height - span_y);
        let ship = Warship::new(class, orient, Coord::new(x, y), columns, rows.end, damage_per_hit)?;
        if !ship.cells().iter().any(|c| occupied.contains(c)) {
            return Ok(ship);
        }
    }
    Err(PlayerError::UnableToPlaceFleet)
}
