//! Exhaustive placement catalog for every ship shape.
//!
//! Pure function of the fixed board geometry: built once, immutable
//! afterwards, freely shareable.

use alloc::vec::Vec;

use crate::config::BOARD_SIZE;
use crate::grid::CellMask;
use crate::ship::ShipType;

/// Every absolute position and orientation each ship shape can occupy on an
/// empty field.
pub struct ShapeCatalog {
    squares: Vec<CellMask>,
    triangles: Vec<CellMask>,
    dominoes: Vec<CellMask>,
    mines: Vec<CellMask>,
}

impl ShapeCatalog {
    /// Enumerate the full catalog.
    pub fn generate() -> Self {
        ShapeCatalog {
            squares: gen_squares(),
            triangles: gen_triangles(),
            dominoes: gen_dominoes(),
            mines: gen_mines(),
        }
    }

    /// Placements of `ship_type` anywhere on the empty field.
    pub fn placements(&self, ship_type: ShipType) -> &[CellMask] {
        match ship_type {
            ShipType::Square => &self.squares,
            ShipType::Triangle => &self.triangles,
            ShipType::Domino => &self.dominoes,
            ShipType::Mine => &self.mines,
        }
    }

    /// Classify a cluster by exact cell-set equality against the catalog.
    ///
    /// Types are tried in [`ShipType::ALL`] order; sizes alone disambiguate
    /// well-formed clusters, so the order only matters for malformed input.
    pub fn match_cluster(&self, cluster: CellMask) -> Option<ShipType> {
        ShipType::ALL
            .into_iter()
            .find(|&ship_type| self.placements(ship_type).contains(&cluster))
    }
}

fn gen_squares() -> Vec<CellMask> {
    let mut out = Vec::new();
    for r in 0..BOARD_SIZE - 1 {
        for c in 0..BOARD_SIZE - 1 {
            out.push(CellMask::from_cells([
                (r, c),
                (r, c + 1),
                (r + 1, c),
                (r + 1, c + 1),
            ]));
        }
    }
    out
}

fn gen_triangles() -> Vec<CellMask> {
    let mut out = Vec::new();
    for r in 0..BOARD_SIZE - 1 {
        for c in 0..BOARD_SIZE - 1 {
            let block = [(r, c), (r, c + 1), (r + 1, c), (r + 1, c + 1)];
            for omitted in 0..block.len() {
                out.push(CellMask::from_cells(
                    block
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != omitted)
                        .map(|(_, &cell)| cell),
                ));
            }
        }
    }
    out
}

fn gen_dominoes() -> Vec<CellMask> {
    let mut out = Vec::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if c + 1 < BOARD_SIZE {
                out.push(CellMask::from_cells([(r, c), (r, c + 1)]));
            }
            if r + 1 < BOARD_SIZE {
                out.push(CellMask::from_cells([(r, c), (r + 1, c)]));
            }
        }
    }
    out
}

fn gen_mines() -> Vec<CellMask> {
    let mut out = Vec::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            out.push(CellMask::from_cells([(r, c)]));
        }
    }
    out
}
