use rand::rngs::SmallRng;
use rand::SeedableRng;
use seahelper::{best_guess, ranked_cells, sample_heatmap, Analyzer, CellState, Grid};

fn hit_corner_grid() -> Grid {
    let mut grid = Grid::new();
    for &(r, c) in &[(0, 0), (0, 1), (1, 0)] {
        grid.set(r, c, CellState::Hit);
    }
    grid
}

#[test]
fn best_guess_completes_the_hit_cluster() {
    let analyzer = Analyzer::new();
    let grid = hit_corner_grid();
    let heat = analyzer.heatmap(&grid);

    // (1, 1) is the only unknown cell any covering placement can reach
    assert_eq!(best_guess(&grid, &heat), Some((1, 1)));
}

#[test]
fn best_guess_needs_probability_mass() {
    let analyzer = Analyzer::new();
    let mut grid = Grid::new();
    for r in 0..8 {
        for c in 0..8 {
            grid.set(r, c, CellState::Miss);
        }
    }
    let heat = analyzer.heatmap(&grid);
    assert_eq!(best_guess(&grid, &heat), None);
}

#[test]
fn ranked_cells_skip_marked_cells_and_sort_descending() {
    let analyzer = Analyzer::new();
    let mut grid = hit_corner_grid();
    grid.set(7, 7, CellState::Miss);
    let heat = analyzer.heatmap(&grid);
    let ranked = ranked_cells(&grid, &heat);

    // 64 cells minus three hits and one miss
    assert_eq!(ranked.len(), 60);
    assert_eq!(ranked[0].0, (1, 1));
    assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
    assert!(ranked.iter().all(|&(cell, _)| cell != (7, 7)));
}

#[test]
fn seeded_sampling_is_reproducible() {
    let analyzer = Analyzer::new();
    let grid = hit_corner_grid();
    let heat = analyzer.heatmap(&grid);

    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    let a = sample_heatmap(&grid, &heat, 0.5, &mut rng1);
    let b = sample_heatmap(&grid, &heat, 0.5, &mut rng2);

    assert_eq!(a, b);
    let (r, c) = a.expect("the field has probability mass");
    assert_eq!(grid.get(r, c), CellState::Unknown);
    assert!(heat[r][c] > 0.0);
}

#[test]
fn sampling_yields_nothing_without_mass() {
    let analyzer = Analyzer::new();
    let mut grid = Grid::new();
    for r in 0..8 {
        for c in 0..8 {
            grid.set(r, c, CellState::Miss);
        }
    }
    let heat = analyzer.heatmap(&grid);
    let mut rng = SmallRng::seed_from_u64(7);

    assert_eq!(sample_heatmap(&grid, &heat, 0.5, &mut rng), None);
}
