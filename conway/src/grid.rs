// grid.rs - Grid types and the generation rule for Conway's Game of Life

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{LifeError, Result};

/// Moore neighbourhood as (row, col) deltas. Offsets that leave the grid are
/// discarded, so edge and corner cells have fewer neighbours (no wraparound).
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1), (0, -1),
    (0, 1),   (1, -1), (1, 0),  (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Alive,
    #[default]
    Dead,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Cell {
        match self {
            Cell::Alive => Cell::Dead,
            Cell::Dead => Cell::Alive,
        }
    }

    /// State of this cell in the next generation given its live neighbour count.
    pub fn next(self, live_neighbors: u8) -> Cell {
        match (self, live_neighbors) {
            (_, n) if !(2..=3).contains(&n) => Cell::Dead, // Under/overpopulation
            (Cell::Dead, 3)                 => Cell::Alive, // Birth
            (state, _)                      => state,       // Survival, or stays dead
        }
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// Fixed-size, row-major matrix of cells.
///
/// A `Grid` is never mutated once it has been handed out: [`Grid::toggled`]
/// and [`Grid::step`] return new grids and leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, columns: usize, fill: Cell) -> Self {
        Self {
            rows,
            columns,
            cells: vec![fill; rows * columns],
        }
    }

    pub fn empty(rows: usize, columns: usize) -> Self {
        Self::new(rows, columns, Cell::Dead)
    }

    /// Every cell independently alive with probability 0.5, from the thread RNG.
    pub fn random(rows: usize, columns: usize) -> Self {
        Self::random_with(rows, columns, &mut rand::thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rows: usize, columns: usize, rng: &mut R) -> Self {
        let cells = (0..rows * columns)
            .map(|_| Cell::from(rng.gen_bool(0.5)))
            .collect();
        Self { rows, columns, cells }
    }

    /// Builds a grid from explicit live coordinates; every coordinate must be in bounds.
    pub fn from_live_cells<I>(rows: usize, columns: usize, live: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::empty(rows, columns);
        for (row, col) in live {
            let index = grid.index(row, col)?;
            grid.cells[index] = Cell::Alive;
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.index(row, col).map(|index| self.cells[index])
    }

    /// Copy of this grid with the cell at (row, col) inverted.
    pub fn toggled(&self, row: usize, col: usize) -> Result<Grid> {
        let index = self.index(row, col)?;
        let mut next = self.clone();
        next.cells[index] = next.cells[index].toggled();
        Ok(next)
    }

    /// Computes the next generation.
    ///
    /// Every neighbour count is taken from `self`, never from the grid being
    /// built, so all cells advance simultaneously.
    pub fn step(&self) -> Grid {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.columns).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[row * self.columns + col];
                current.next(self.count_live_neighbors(row, col))
            })
            .collect();

        Grid {
            rows: self.rows,
            columns: self.columns,
            cells,
        }
    }

    pub fn live_neighbors(&self, row: usize, col: usize) -> Result<u8> {
        self.index(row, col)?;
        Ok(self.count_live_neighbors(row, col))
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns.max(1))
    }

    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(index, _)| (index / self.columns, index % self.columns))
    }

    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
                continue;
            };
            if self.contains(nr, nc) && self.cells[nr * self.columns + nc].is_alive() {
                count += 1;
            }
        }
        count
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if self.contains(row, col) {
            Ok(row * self.columns + col)
        } else {
            Err(LifeError::OutOfRange {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }
}

/// One line per row, `#` for alive and `.` for dead.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                f.write_str(if cell.is_alive() { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s.lines().map(str::trim).filter(|line| !line.is_empty()).collect();
        let Some(first) = lines.first() else {
            return Err(LifeError::parse("no rows"));
        };
        let columns = first.len();

        let mut cells = Vec::with_capacity(lines.len() * columns);
        for (row, line) in lines.iter().enumerate() {
            if line.len() != columns {
                return Err(LifeError::parse(format!(
                    "row {row} has {} columns, expected {columns}",
                    line.len()
                )));
            }
            for byte in line.bytes() {
                cells.push(match byte {
                    b'#' => Cell::Alive,
                    b'.' => Cell::Dead,
                    other => {
                        return Err(LifeError::parse(format!(
                            "unexpected character '{}' in row {row}",
                            other as char
                        )));
                    }
                });
            }
        }

        Ok(Grid {
            rows: lines.len(),
            columns,
            cells,
        })
    }
}
