use proptest::prelude::*;
use seahelper::{Analyzer, CellState, Grid, ShipType, BOARD_SIZE, FLEET};

fn arb_grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec(0u8..4, BOARD_SIZE * BOARD_SIZE).prop_map(|cells| {
        let mut grid = Grid::new();
        for (i, &v) in cells.iter().enumerate() {
            let state = match v {
                0 => CellState::Unknown,
                1 => CellState::Miss,
                2 => CellState::Hit,
                _ => CellState::Sunk,
            };
            grid.set(i / BOARD_SIZE, i % BOARD_SIZE, state);
        }
        grid
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every operation is a pure function of the snapshot.
    #[test]
    fn operations_are_deterministic(grid in arb_grid()) {
        let analyzer = Analyzer::new();
        prop_assert_eq!(analyzer.validate(&grid), analyzer.validate(&grid));
        prop_assert_eq!(analyzer.remaining_ships(&grid), analyzer.remaining_ships(&grid));
        prop_assert_eq!(analyzer.heatmap(&grid), analyzer.heatmap(&grid));
    }

    /// A heat-map either carries no information or is a distribution.
    #[test]
    fn heatmap_normalizes(grid in arb_grid()) {
        let analyzer = Analyzer::new();
        let heat = analyzer.heatmap(&grid);
        let total: f64 = heat.iter().flatten().sum();
        prop_assert!(total == 0.0 || (total - 1.0).abs() < 1e-9);
    }

    /// Miss and sunk cells never receive probability mass.
    #[test]
    fn marked_cells_score_zero(grid in arb_grid()) {
        let analyzer = Analyzer::new();
        let heat = analyzer.heatmap(&grid);
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if matches!(grid.get(r, c), CellState::Miss | CellState::Sunk) {
                    prop_assert_eq!(heat[r][c], 0.0);
                }
            }
        }
    }

    /// Remaining counts never exceed the fleet inventory.
    #[test]
    fn remaining_is_bounded_by_fleet(grid in arb_grid()) {
        let analyzer = Analyzer::new();
        let remaining = analyzer.remaining_ships(&grid);
        for ship_type in ShipType::ALL {
            prop_assert!(remaining[ship_type] <= FLEET[ship_type]);
        }
    }
}
