// config.rs - Simulation configuration, fixed at construction

use std::time::Duration;

use crate::error::{LifeError, Result};

pub const DEFAULT_ROWS: usize = 30;
pub const DEFAULT_COLUMNS: usize = 50;
pub const TALL_ROWS: usize = 40;
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub columns: usize,
    /// Delay between the end of one generation and the start of the next.
    pub tick_interval: Duration,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl SimulationConfig {
    /// The 40x50 board.
    pub fn tall() -> Self {
        Self::default().with_dimensions(TALL_ROWS, DEFAULT_COLUMNS)
    }

    pub fn with_dimensions(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(LifeError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.tick_interval.is_zero() {
            return Err(LifeError::InvalidTickInterval);
        }
        Ok(())
    }
}
