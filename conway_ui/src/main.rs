// main.rs - Desktop front end for the Game of Life simulation core
// Pass --tall for the 40x50 board.

use conway::{Simulation, SimulationConfig};
use eframe::egui;

mod ui;

use ui::LifeApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = if std::env::args().skip(1).any(|arg| arg == "--tall") {
        SimulationConfig::tall()
    } else {
        SimulationConfig::default()
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let simulation = Simulation::new(config, runtime.handle().clone())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([840.0, 300.0 + config.rows as f32 * ui::CELL_PITCH]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(LifeApp::new(simulation, runtime))),
    )
    .map_err(|err| err.to_string())?;
    Ok(())
}
