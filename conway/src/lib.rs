//! Simulation core for Conway's Game of Life.
//!
//! [`Grid`] holds one generation and computes the next; [`GridModel`] owns the
//! current generation; [`SimulationScheduler`] steps it on a tokio timer while
//! running. [`Simulation`] bundles the two for a renderer.

pub mod config;
pub mod error;
pub mod grid;
pub mod model;
pub mod patterns;
pub mod scheduler;
pub mod simulation;

pub use config::SimulationConfig;
pub use error::{LifeError, Result};
pub use grid::{Cell, Grid, NEIGHBOR_OFFSETS};
pub use model::GridModel;
pub use patterns::{PATTERNS, Pattern};
pub use scheduler::{RunState, SimulationScheduler};
pub use simulation::Simulation;
