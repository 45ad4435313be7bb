//! Probability heat-map over still-unknown cells and guess selection.

use alloc::vec::Vec;

use rand::Rng;

use crate::analyze::BoardMasks;
use crate::catalog::ShapeCatalog;
use crate::cluster::clusters;
use crate::config::BOARD_SIZE;
use crate::grid::{CellMask, CellState, Grid};
use crate::ship::{ShipCounts, ShipType};

/// Normalized per-cell likelihood matrix.
pub type Heatmap = [[f64; BOARD_SIZE]; BOARD_SIZE];

/// Compute the likelihood that an unplaced ship occupies each cell, given
/// the field and the remaining inventory.
///
/// Each remaining type contributes its admissible placements; when hit
/// clusters exist, the scoring population narrows to placements explaining
/// at least one cluster. Types are scored independently and unioned; this
/// approximates the joint arrangement distribution rather than enumerating
/// it.
pub fn calc_heatmap(catalog: &ShapeCatalog, grid: &Grid, remaining: &ShipCounts) -> Heatmap {
    let masks = BoardMasks::scan(grid);

    let mut candidates: Vec<CellMask> = Vec::new();
    for ship_type in ShipType::ALL {
        if remaining[ship_type] == 0 {
            continue;
        }
        candidates.extend(
            catalog
                .placements(ship_type)
                .iter()
                .copied()
                .filter(|&p| masks.allows(p)),
        );
    }

    // Placements explaining at least one hit cluster, deduplicated: a
    // single placement can cover two diagonal one-cell clusters at once.
    let mut targets: Vec<CellMask> = Vec::new();
    for cluster in clusters(grid, CellState::Hit) {
        for &p in candidates.iter().filter(|&&p| p.contains_all(cluster)) {
            if !targets.contains(&p) {
                targets.push(p);
            }
        }
    }

    let population: &[CellMask] = if targets.is_empty() {
        &candidates
    } else {
        &targets
    };

    let mut heat = [[0.0f64; BOARD_SIZE]; BOARD_SIZE];
    for placement in population {
        for (r, c) in placement.iter_set_bits() {
            heat[r][c] += 1.0;
        }
    }
    normalize(&mut heat);

    // Admissible placements never overlap Miss or Sunk cells; pin those
    // entries to exact zero regardless of accumulated residue.
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if matches!(grid.get(r, c), CellState::Miss | CellState::Sunk) {
                heat[r][c] = 0.0;
            }
        }
    }
    heat
}

/// Divide by the grand total; an empty population stays all-zero.
fn normalize(heat: &mut Heatmap) {
    let total: f64 = heat.iter().flatten().sum();
    if total == 0.0 {
        return;
    }
    for row in heat.iter_mut() {
        for v in row.iter_mut() {
            *v /= total;
        }
    }
}

/// Still-unknown cells ranked by descending score.
pub fn ranked_cells(grid: &Grid, heat: &Heatmap) -> Vec<((usize, usize), f64)> {
    let mut out = Vec::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if grid.get(r, c) == CellState::Unknown {
                out.push(((r, c), heat[r][c]));
            }
        }
    }
    out.sort_by(|a, b| b.1.total_cmp(&a.1));
    out
}

/// Highest-scoring unknown cell, if any scores above zero.
pub fn best_guess(grid: &Grid, heat: &Heatmap) -> Option<(usize, usize)> {
    let mut best: Option<((usize, usize), f64)> = None;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if grid.get(r, c) != CellState::Unknown || heat[r][c] <= 0.0 {
                continue;
            }
            if best.map_or(true, |(_, score)| heat[r][c] > score) {
                best = Some(((r, c), heat[r][c]));
            }
        }
    }
    best.map(|(cell, _)| cell)
}

fn powf(base: f64, exp: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        base.powf(exp)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::pow(base, exp)
    }
}

/// Sample an unknown cell from the heat-map with a temperature parameter.
/// Lower temperatures concentrate the draw on the highest-scoring cells.
/// Returns `None` when no unknown cell carries any probability mass.
pub fn sample_heatmap<R: Rng + ?Sized>(
    grid: &Grid,
    heat: &Heatmap,
    temperature: f64,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let mut adjusted = [[0.0f64; BOARD_SIZE]; BOARD_SIZE];
    let mut total = 0.0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if grid.get(r, c) != CellState::Unknown || heat[r][c] <= 0.0 {
                continue;
            }
            let v = powf(heat[r][c], 1.0 / temperature);
            adjusted[r][c] = v;
            total += v;
        }
    }
    if total == 0.0 {
        return None;
    }
    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            cumulative += adjusted[r][c];
            if threshold < cumulative {
                return Some((r, c));
            }
        }
    }
    // rounding can leave the threshold marginally past the last bucket
    best_guess(grid, heat)
}
