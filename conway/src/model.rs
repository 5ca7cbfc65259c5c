// model.rs - The current generation, shared between the tick loop and the renderer

use std::sync::Arc;

use log::{debug, warn};
use parking_lot::RwLock;

use crate::error::{LifeError, Result};
use crate::grid::Grid;
use crate::patterns::Pattern;

#[derive(Debug, Clone)]
struct Snapshot {
    grid: Arc<Grid>,
    generation: u64,
}

/// Owns the current grid.
///
/// Readers get an `Arc<Grid>` that stays valid and unchanged however many
/// generations are published after it. Every write builds a new grid from the
/// current one and swaps it in under the lock, so no edit is lost between a
/// tick and a toggle.
#[derive(Debug)]
pub struct GridModel {
    rows: usize,
    columns: usize,
    current: RwLock<Snapshot>,
}

impl GridModel {
    pub fn new(grid: Grid) -> Self {
        Self {
            rows: grid.rows(),
            columns: grid.columns(),
            current: RwLock::new(Snapshot {
                grid: Arc::new(grid),
                generation: 0,
            }),
        }
    }

    pub fn empty(rows: usize, columns: usize) -> Self {
        Self::new(Grid::empty(rows, columns))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn snapshot(&self) -> Arc<Grid> {
        Arc::clone(&self.current.read().grid)
    }

    /// Number of generations stepped since the grid was last replaced.
    pub fn generation(&self) -> u64 {
        self.current.read().generation
    }

    pub fn toggle_cell(&self, row: usize, col: usize) -> Result<()> {
        let mut current = self.current.write();
        match current.grid.toggled(row, col) {
            Ok(next) => {
                current.grid = Arc::new(next);
                Ok(())
            }
            Err(err) => {
                warn!("rejected toggle: {err}");
                Err(err)
            }
        }
    }

    pub fn randomize(&self) {
        debug!("randomizing {}x{} grid", self.rows, self.columns);
        self.publish_fresh(Grid::random(self.rows, self.columns));
    }

    pub fn reset(&self) {
        debug!("resetting {}x{} grid", self.rows, self.columns);
        self.publish_fresh(Grid::empty(self.rows, self.columns));
    }

    /// Replaces the grid with `pattern` centred on an otherwise empty board.
    pub fn load_pattern(&self, pattern: &Pattern) -> Result<()> {
        let grid = pattern.place_centered(self.rows, self.columns)?;
        debug!("loaded pattern '{}'", pattern.name);
        self.publish_fresh(grid);
        Ok(())
    }

    /// Replaces the grid wholesale. The replacement must have the model's dimensions.
    pub fn replace(&self, grid: Grid) -> Result<()> {
        if grid.rows() != self.rows || grid.columns() != self.columns {
            return Err(LifeError::DimensionMismatch {
                rows: self.rows,
                columns: self.columns,
                found_rows: grid.rows(),
                found_columns: grid.columns(),
            });
        }
        self.publish_fresh(grid);
        Ok(())
    }

    /// Steps the current grid and publishes the result, returning the new generation number.
    pub fn advance(&self) -> u64 {
        let mut current = self.current.write();
        let next = current.grid.step();
        current.grid = Arc::new(next);
        current.generation += 1;
        current.generation
    }

    fn publish_fresh(&self, grid: Grid) {
        *self.current.write() = Snapshot {
            grid: Arc::new(grid),
            generation: 0,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;
    use crate::patterns::BLINKER;

    #[test]
    fn toggle_publishes_new_snapshot() {
        let model = GridModel::empty(3, 3);
        let before = model.snapshot();
        model.toggle_cell(1, 1).unwrap();

        assert_eq!(before.get(1, 1), Ok(Cell::Dead));
        assert_eq!(model.snapshot().get(1, 1), Ok(Cell::Alive));
        assert_eq!(model.generation(), 0);
    }

    #[test]
    fn toggle_out_of_range_keeps_grid() {
        let model = GridModel::empty(3, 3);
        let before = model.snapshot();
        assert!(matches!(model.toggle_cell(3, 0), Err(LifeError::OutOfRange { .. })));
        assert!(Arc::ptr_eq(&before, &model.snapshot()));
    }

    #[test]
    fn advance_counts_generations() {
        let model = GridModel::empty(5, 5);
        model.load_pattern(&BLINKER).unwrap();
        let start = model.snapshot();

        assert_eq!(model.advance(), 1);
        assert_ne!(*model.snapshot(), *start);
        assert_eq!(model.advance(), 2);
        assert_eq!(*model.snapshot(), *start);
    }

    #[test]
    fn reset_and_randomize_restart_generation_count() {
        let model = GridModel::empty(4, 6);
        model.advance();
        model.randomize();
        assert_eq!(model.generation(), 0);
        assert_eq!((model.snapshot().rows(), model.snapshot().columns()), (4, 6));

        model.advance();
        model.reset();
        assert_eq!(model.generation(), 0);
        assert_eq!(model.snapshot().population(), 0);
    }

    #[test]
    fn replace_checks_dimensions() {
        let model = GridModel::empty(3, 3);
        assert!(matches!(
            model.replace(Grid::empty(3, 4)),
            Err(LifeError::DimensionMismatch { found_columns: 4, .. })
        ));
        assert!(model.replace(Grid::new(3, 3, Cell::Alive)).is_ok());
        assert_eq!(model.snapshot().population(), 9);
    }
}
