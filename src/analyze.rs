//! Field consistency analysis: placement admissibility, whole-field
//! validation, and remaining-inventory counting.

use log::debug;

use crate::ai::{calc_heatmap, Heatmap};
use crate::catalog::ShapeCatalog;
use crate::cluster::clusters;
use crate::config::FLEET;
use crate::grid::{CellMask, CellState, Grid};
use crate::ship::{ShipCounts, ShipType};

/// Per-state masks of a field, plus the combined mask a new placement must
/// avoid: every Miss cell and the Chebyshev-1 neighborhood of every Sunk
/// cell.
#[derive(Debug, Clone, Copy)]
pub struct BoardMasks {
    pub miss: CellMask,
    pub hit: CellMask,
    pub sunk: CellMask,
    blocked: CellMask,
}

impl BoardMasks {
    /// Scan a field into its per-state masks.
    pub fn scan(grid: &Grid) -> Self {
        let miss = grid.mask_of(CellState::Miss);
        let sunk = grid.mask_of(CellState::Sunk);
        BoardMasks {
            miss,
            hit: grid.mask_of(CellState::Hit),
            sunk,
            blocked: miss | sunk.dilated(),
        }
    }

    /// A placement is admissible when it overlaps no Miss or Sunk cell and
    /// does not touch a sunk ship, diagonals included.
    pub fn allows(&self, placement: CellMask) -> bool {
        !placement.intersects(self.blocked)
    }

    /// Admissible and covering every cell of `required`. Used to force a
    /// placement to explain a hit cluster.
    pub fn allows_covering(&self, placement: CellMask, required: CellMask) -> bool {
        self.allows(placement) && placement.contains_all(required)
    }
}

/// Outcome of a gated full analysis of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Assessment {
    /// No legal fleet arrangement can produce this marking.
    Impossible,
    /// The marking is achievable; the analysis products are attached.
    Possible {
        remaining: ShipCounts,
        heatmap: Heatmap,
    },
}

/// The analysis engine. Owns the immutable placement catalog; every
/// operation is a pure function of the supplied field snapshot.
pub struct Analyzer {
    catalog: ShapeCatalog,
}

impl Analyzer {
    pub fn new() -> Self {
        Analyzer {
            catalog: ShapeCatalog::generate(),
        }
    }

    /// The shared placement catalog.
    pub fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    /// Whether the marking is achievable by some legal arrangement of the
    /// fleet. Impossibility is reported through the return value only,
    /// never as an error.
    pub fn validate(&self, grid: &Grid) -> bool {
        let masks = BoardMasks::scan(grid);

        // Every sunk cluster must be a catalog shape, within inventory.
        let sunk_clusters = clusters(grid, CellState::Sunk);
        let mut used = ShipCounts::zero();
        for cluster in &sunk_clusters {
            let Some(ship_type) = self.catalog.match_cluster(*cluster) else {
                debug!(
                    "sunk cluster of {} cells matches no ship shape",
                    cluster.count_ones()
                );
                return false;
            };
            used[ship_type] += 1;
            if used[ship_type] > FLEET[ship_type] {
                debug!("sunk {} count exceeds the fleet inventory", ship_type);
                return false;
            }
        }

        // Distinct sunk ships may not touch, diagonals included.
        for (i, a) in sunk_clusters.iter().enumerate() {
            for b in &sunk_clusters[i + 1..] {
                if a.dilated().intersects(*b) {
                    debug!("two sunk ships touch");
                    return false;
                }
            }
        }

        // Every hit cluster must be explainable by a remaining ship.
        let remaining = FLEET.saturating_sub(&used);
        for cluster in clusters(grid, CellState::Hit) {
            let coverable = ShipType::ALL.into_iter().any(|ship_type| {
                remaining[ship_type] > 0
                    && self
                        .catalog
                        .placements(ship_type)
                        .iter()
                        .any(|&p| masks.allows_covering(p, cluster))
            });
            if !coverable {
                debug!(
                    "hit cluster of {} cells cannot belong to any remaining ship",
                    cluster.count_ones()
                );
                return false;
            }
        }

        // Every remaining ship must still fit somewhere.
        for ship_type in ShipType::ALL {
            if remaining[ship_type] > 0
                && !self
                    .catalog
                    .placements(ship_type)
                    .iter()
                    .any(|&p| masks.allows(p))
            {
                debug!("no admissible placement left for the {}", ship_type);
                return false;
            }
        }

        true
    }

    /// Fleet inventory minus matched sunk ships, floored at zero per type.
    ///
    /// A sunk cluster matching no shape is skipped here; `validate` rejects
    /// such a field, and callers must gate on it before trusting this
    /// count.
    pub fn remaining_ships(&self, grid: &Grid) -> ShipCounts {
        let mut used = ShipCounts::zero();
        for cluster in clusters(grid, CellState::Sunk) {
            if let Some(ship_type) = self.catalog.match_cluster(cluster) {
                used[ship_type] += 1;
            }
        }
        FLEET.saturating_sub(&used)
    }

    /// Likelihood heat-map for the current field (see [`calc_heatmap`]).
    pub fn heatmap(&self, grid: &Grid) -> Heatmap {
        calc_heatmap(&self.catalog, grid, &self.remaining_ships(grid))
    }

    /// Validation gate plus both result products in one call.
    pub fn assess(&self, grid: &Grid) -> Assessment {
        if !self.validate(grid) {
            return Assessment::Impossible;
        }
        let remaining = self.remaining_ships(grid);
        let heatmap = calc_heatmap(&self.catalog, grid, &remaining);
        Assessment::Possible { remaining, heatmap }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
