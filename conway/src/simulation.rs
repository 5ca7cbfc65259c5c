// simulation.rs - What a renderer talks to

use std::sync::Arc;

use log::info;
use tokio::runtime::Handle;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::model::GridModel;
use crate::patterns::Pattern;
use crate::scheduler::{RunState, SimulationScheduler};

/// A grid model and the scheduler that animates it.
///
/// Cell edits, randomize and reset go straight to the model and are visible
/// on the next read whether or not the simulation is running.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    model: Arc<GridModel>,
    scheduler: SimulationScheduler,
}

impl Simulation {
    /// Starts with an all-dead grid. Ticks are spawned on `runtime`.
    pub fn new(config: SimulationConfig, runtime: Handle) -> Result<Self> {
        config.validate()?;
        let model = Arc::new(GridModel::empty(config.rows, config.columns));
        let scheduler = SimulationScheduler::new(Arc::clone(&model), config.tick_interval, runtime);
        info!(
            "created {}x{} simulation, tick interval {:?}",
            config.rows, config.columns, config.tick_interval
        );
        Ok(Self {
            config,
            model,
            scheduler,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn model(&self) -> &Arc<GridModel> {
        &self.model
    }

    pub fn grid(&self) -> Arc<Grid> {
        self.model.snapshot()
    }

    pub fn generation(&self) -> u64 {
        self.model.generation()
    }

    pub fn population(&self) -> usize {
        self.model.snapshot().population()
    }

    pub fn toggle_cell(&self, row: usize, col: usize) -> Result<()> {
        self.model.toggle_cell(row, col)
    }

    pub fn start(&self) {
        self.scheduler.start();
    }

    pub fn stop(&self) {
        self.scheduler.stop();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn state(&self) -> RunState {
        self.scheduler.state()
    }

    pub fn randomize(&self) {
        self.model.randomize();
    }

    pub fn reset(&self) {
        self.model.reset();
    }

    pub fn load_pattern(&self, pattern: &Pattern) -> Result<()> {
        self.model.load_pattern(pattern)
    }
}
