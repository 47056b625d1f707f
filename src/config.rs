use crate::ship::ShipClass;

pub const BOARD_COLUMNS: usize = 10;
pub const BOARD_ROWS: usize = 10;
pub const SHOTS_PER_TURN: u32 = 4;
pub const DAMAGE_PER_HIT: u32 = 50;

pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];

/// Per-session rules handed to every player at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    pub columns: usize,
    pub rows: usize,
    pub shots_per_turn: u32,
    pub damage_per_hit: u32,
}

impl SessionConfig {
    pub const fn new() -> Self {
        Self {
            columns: BOARD_COLUMNS,
            rows: BOARD_ROWS,
            shots_per_turn: SHOTS_PER_TURN,
            damage_per_hit: DAMAGE_PER_HIT,
        }
    }

    pub const fn with_board(mut self, columns: usize, rows: usize) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    pub const fn with_shots_per_turn(mut self, shots: u32) -> Self {
        self.shots_per_turn = shots;
        self
    }

    pub const fn with_damage_per_hit(mut self, damage: u32) -> Self {
        self.damage_per_hit = damage;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
