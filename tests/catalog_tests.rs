use seahelper::{CellMask, ShapeCatalog, ShipType, FLEET, TOTAL_SHIP_CELLS};

#[test]
fn catalog_sizes_are_exhaustive() {
    let catalog = ShapeCatalog::generate();
    assert_eq!(catalog.placements(ShipType::Square).len(), 49);
    assert_eq!(catalog.placements(ShipType::Triangle).len(), 196);
    assert_eq!(catalog.placements(ShipType::Domino).len(), 112);
    assert_eq!(catalog.placements(ShipType::Mine).len(), 64);
}

#[test]
fn placements_have_declared_cell_counts() {
    let catalog = ShapeCatalog::generate();
    for ship_type in ShipType::ALL {
        assert!(catalog
            .placements(ship_type)
            .iter()
            .all(|p| p.count_ones() == ship_type.cell_count()));
    }
}

#[test]
fn placements_are_distinct() {
    let catalog = ShapeCatalog::generate();
    for ship_type in ShipType::ALL {
        let placements = catalog.placements(ship_type);
        for (i, p) in placements.iter().enumerate() {
            assert!(!placements[i + 1..].contains(p));
        }
    }
}

#[test]
fn fleet_occupies_the_declared_cell_total() {
    let total: usize = ShipType::ALL
        .into_iter()
        .map(|t| t.cell_count() * FLEET[t] as usize)
        .sum();
    assert_eq!(total, TOTAL_SHIP_CELLS);
    assert_eq!(FLEET.total(), 7);
}

#[test]
fn clusters_match_their_shapes() {
    let catalog = ShapeCatalog::generate();

    let square = CellMask::from_cells([(2, 2), (2, 3), (3, 2), (3, 3)]);
    assert_eq!(catalog.match_cluster(square), Some(ShipType::Square));

    let triangle = CellMask::from_cells([(5, 1), (5, 2), (6, 2)]);
    assert_eq!(catalog.match_cluster(triangle), Some(ShipType::Triangle));

    let domino = CellMask::from_cells([(0, 6), (1, 6)]);
    assert_eq!(catalog.match_cluster(domino), Some(ShipType::Domino));

    let mine = CellMask::from_cells([(7, 0)]);
    assert_eq!(catalog.match_cluster(mine), Some(ShipType::Mine));
}

#[test]
fn malformed_clusters_match_nothing() {
    let catalog = ShapeCatalog::generate();

    let line = CellMask::from_cells([(0, 0), (0, 1), (0, 2)]);
    assert_eq!(catalog.match_cluster(line), None);

    let bent_tetromino = CellMask::from_cells([(0, 0), (1, 0), (2, 0), (2, 1)]);
    assert_eq!(catalog.match_cluster(bent_tetromino), None);

    assert_eq!(catalog.match_cluster(CellMask::new()), None);
}
