use std::ops::Range;

use conway::{Cell, Grid};
use proptest::prelude::*;

fn arbitrary_grid() -> impl Strategy<Value = Grid> {
    grid_with_sides(1..9)
}

fn grid_with_sides(sides: Range<usize>) -> impl Strategy<Value = Grid> {
    (sides.clone(), sides).prop_flat_map(|(rows, columns)| {
        prop::collection::vec(any::<bool>(), rows * columns).prop_map(move |alive| {
            let live = alive
                .iter()
                .enumerate()
                .filter(|(_, alive)| **alive)
                .map(|(i, _)| (i / columns, i % columns));
            Grid::from_live_cells(rows, columns, live).unwrap()
        })
    })
}

proptest! {
    #[test]
    fn step_only_depends_on_the_neighbourhood(
        grid in grid_with_sides(4..10),
        target in any::<(usize, usize)>(),
        far in any::<(usize, usize)>(),
    ) {
        let (i, j) = (target.0 % grid.rows(), target.1 % grid.columns());
        let (r, c) = (far.0 % grid.rows(), far.1 % grid.columns());
        prop_assume!(r.abs_diff(i) > 1 || c.abs_diff(j) > 1);

        let disturbed = grid.toggled(r, c).unwrap();
        prop_assert_eq!(grid.step().get(i, j), disturbed.step().get(i, j));
    }

    #[test]
    fn double_toggle_is_identity(grid in arbitrary_grid(), at in any::<(usize, usize)>()) {
        let (r, c) = (at.0 % grid.rows(), at.1 % grid.columns());
        let twice = grid.toggled(r, c).unwrap().toggled(r, c).unwrap();
        prop_assert_eq!(twice, grid);
    }

    #[test]
    fn step_is_deterministic_and_keeps_dimensions(grid in arbitrary_grid()) {
        let a = grid.step();
        let b = grid.step();
        prop_assert_eq!(a.rows(), grid.rows());
        prop_assert_eq!(a.columns(), grid.columns());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn every_cell_follows_the_rule(grid in arbitrary_grid()) {
        let next = grid.step();
        for row in 0..grid.rows() {
            for col in 0..grid.columns() {
                let n = grid.live_neighbors(row, col).unwrap();
                let expected = grid.get(row, col).unwrap().next(n);
                prop_assert_eq!(next.get(row, col).unwrap(), expected);
            }
        }
    }

    #[test]
    fn isolated_cell_dies(rows in 1usize..12, columns in 1usize..12, at in any::<(usize, usize)>()) {
        let (r, c) = (at.0 % rows, at.1 % columns);
        let grid = Grid::from_live_cells(rows, columns, [(r, c)]).unwrap();
        prop_assert_eq!(grid.step(), Grid::new(rows, columns, Cell::Dead));
    }

    #[test]
    fn out_of_range_is_reported(grid in arbitrary_grid(), extra in 0usize..5) {
        let row = grid.rows() + extra;
        prop_assert!(grid.get(row, 0).is_err());
        prop_assert!(grid.toggled(0, grid.columns() + extra).is_err());
    }
}
