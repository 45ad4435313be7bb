//! Ship shapes and per-type tallies for the irregular fleet.

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::config::NUM_SHIP_TYPES;

/// The four ship shapes of the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipType {
    /// A full 2×2 block.
    Square,
    /// A 2×2 block with one corner omitted.
    Triangle,
    /// Two cells adjacent horizontally or vertically.
    Domino,
    /// A single cell.
    Mine,
}

impl ShipType {
    /// All types, in shape-matching priority order.
    pub const ALL: [ShipType; NUM_SHIP_TYPES] = [
        ShipType::Square,
        ShipType::Triangle,
        ShipType::Domino,
        ShipType::Mine,
    ];

    /// Number of cells a ship of this type occupies.
    pub const fn cell_count(self) -> usize {
        match self {
            ShipType::Square => 4,
            ShipType::Triangle => 3,
            ShipType::Domino => 2,
            ShipType::Mine => 1,
        }
    }

    /// Ship's name.
    pub const fn name(self) -> &'static str {
        match self {
            ShipType::Square => "square",
            ShipType::Triangle => "triangle",
            ShipType::Domino => "domino",
            ShipType::Mine => "mine",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A per-type ship tally: the fleet inventory, matched sunk ships, or the
/// remaining counts, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipCounts([u8; NUM_SHIP_TYPES]);

impl ShipCounts {
    /// Tally with the given count per type.
    pub const fn new(square: u8, triangle: u8, domino: u8, mine: u8) -> Self {
        ShipCounts([square, triangle, domino, mine])
    }

    /// Tally with every count at zero.
    pub const fn zero() -> Self {
        ShipCounts([0; NUM_SHIP_TYPES])
    }

    /// Per-type subtraction, floored at zero.
    pub fn saturating_sub(&self, other: &ShipCounts) -> ShipCounts {
        let mut out = ShipCounts::zero();
        for ship_type in ShipType::ALL {
            out[ship_type] = self[ship_type].saturating_sub(other[ship_type]);
        }
        out
    }

    /// Total number of ships counted across all types.
    pub fn total(&self) -> usize {
        self.0.iter().map(|&n| n as usize).sum()
    }
}

impl Index<ShipType> for ShipCounts {
    type Output = u8;

    fn index(&self, ship_type: ShipType) -> &u8 {
        &self.0[ship_type.slot()]
    }
}

impl IndexMut<ShipType> for ShipCounts {
    fn index_mut(&mut self, ship_type: ShipType) -> &mut u8 {
        &mut self.0[ship_type.slot()]
    }
}

impl fmt::Display for ShipCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "square {}, triangles {}, domino {}, mine {}",
            self[ShipType::Square],
            self[ShipType::Triangle],
            self[ShipType::Domino],
            self[ShipType::Mine],
        )
    }
}
