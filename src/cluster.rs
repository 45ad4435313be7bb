//! Connected-component extraction over the field.

use alloc::vec::Vec;

use crate::config::BOARD_SIZE;
use crate::grid::{CellMask, CellState, Grid};

/// Maximal 4-connected groups of cells in `state`, as masks.
///
/// Diagonal contact does not join clusters; it only matters for the
/// no-touch rule, which is applied to whole masks elsewhere.
pub fn clusters(grid: &Grid, state: CellState) -> Vec<CellMask> {
    let mut visited = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut out = Vec::new();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            if grid.get(r, c) != state || visited[r][c] {
                continue;
            }
            let mut cells = Vec::new();
            let mut stack = Vec::new();
            stack.push((r, c));
            visited[r][c] = true;
            while let Some((y, x)) = stack.pop() {
                cells.push((y, x));
                for (dy, dx) in [(1i32, 0i32), (-1, 0), (0, 1), (0, -1)] {
                    let ny = y as i32 + dy;
                    let nx = x as i32 + dx;
                    if ny < 0 || ny >= BOARD_SIZE as i32 || nx < 0 || nx >= BOARD_SIZE as i32 {
                        continue;
                    }
                    let (ny, nx) = (ny as usize, nx as usize);
                    if !visited[ny][nx] && grid.get(ny, nx) == state {
                        visited[ny][nx] = true;
                        stack.push((ny, nx));
                    }
                }
            }
            out.push(CellMask::from_cells(cells));
        }
    }
    out
}
