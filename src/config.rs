use crate::ship::ShipCounts;

/// Field edge length.
pub const BOARD_SIZE: usize = 8;
/// Number of distinct ship shapes.
pub const NUM_SHIP_TYPES: usize = 4;
/// Full fleet inventory: one square, two triangles, three dominoes, one mine.
pub const FLEET: ShipCounts = ShipCounts::new(1, 2, 3, 1);
/// Cells occupied by the complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 17;
