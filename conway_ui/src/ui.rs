// ui.rs - Paints the current generation and forwards clicks and buttons to the simulation

use conway::{PATTERNS, Simulation};
use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use log::warn;
use tokio::runtime::Runtime;

const BOX_SIZE: f32 = 15.0;
const SPACING: f32 = 1.0;
pub const CELL_PITCH: f32 = BOX_SIZE + SPACING;

const RULES: [&str; 4] = [
    "Any live cell with fewer than two live neighbours dies, as if by underpopulation.",
    "Any live cell with two or three live neighbours lives on to the next generation.",
    "Any live cell with more than three live neighbours dies, as if by overpopulation.",
    "Any dead cell with exactly three live neighbours becomes a live cell, as if by reproduction.",
];

pub struct LifeApp {
    simulation: Simulation,
    // Tick loop runs here; dropped after `simulation` has stopped it.
    _runtime: Runtime,
    live_color: Color32,
    dead_color: Color32,
    selected_pattern: usize,
}

impl LifeApp {
    pub fn new(simulation: Simulation, runtime: Runtime) -> Self {
        Self {
            simulation,
            _runtime: runtime,
            live_color: Color32::WHITE,
            dead_color: Color32::from_rgb(123, 30, 10),
            selected_pattern: 0,
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let running = self.simulation.is_running();
            if ui.button(if running { "STOP" } else { "START" }).clicked() {
                if running {
                    self.simulation.stop();
                } else {
                    self.simulation.start();
                }
            }

            if ui.button("RANDOM").clicked() {
                self.simulation.randomize();
            }

            if ui.button("RESET GRID").clicked() {
                self.simulation.reset();
            }

            ui.separator();

            ui.label("Pattern:");
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply Pattern").clicked() {
                if let Err(err) = self.simulation.load_pattern(&PATTERNS[self.selected_pattern]) {
                    warn!("{err}");
                }
            }

            ui.separator();
            ui.label(format!("Generation: {}", self.simulation.generation()));
        });

        ui.horizontal(|ui| {
            ui.label("Live:");
            ui.color_edit_button_srgba(&mut self.live_color);
            ui.label("Dead:");
            ui.color_edit_button_srgba(&mut self.dead_color);
        });
    }

    fn board(&mut self, ui: &mut egui::Ui) {
        let grid = self.simulation.grid();
        let total_size = Vec2::new(
            CELL_PITCH * grid.columns() as f32 - SPACING,
            CELL_PITCH * grid.rows() as f32 - SPACING,
        );
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::BLACK);

        for (row, cells) in grid.iter_rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let rect = Rect::from_min_size(cell_min(origin, row, col), Vec2::splat(BOX_SIZE));
                let color = if cell.is_alive() { self.live_color } else { self.dead_color };
                painter.rect_filled(rect, 1.0, color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.5, Color32::from_gray(99)));
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - origin;
                let (row, col) = ((offset.y / CELL_PITCH) as usize, (offset.x / CELL_PITCH) as usize);
                if let Err(err) = self.simulation.toggle_cell(row, col) {
                    warn!("click outside board: {err}");
                }
            }
        }
    }

    fn statistics(&self, ui: &mut egui::Ui) {
        let grid = self.simulation.grid();
        let total = grid.rows() * grid.columns();
        let live = grid.population();
        ui.horizontal(|ui| {
            ui.label(format!("Live cells: {live}"));
            ui.label(format!("Dead cells: {}", total - live));
            ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
        });
    }
}

fn cell_min(origin: Pos2, row: usize, col: usize) -> Pos2 {
    origin + Vec2::new(col as f32 * CELL_PITCH, row as f32 * CELL_PITCH)
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway Game of Life");
            for rule in RULES {
                ui.label(format!("• {rule}"));
            }
            ui.label("Cells at the edge of the board have fewer neighbours; nothing wraps around.");

            ui.separator();
            self.controls(ui);
            ui.separator();
            self.board(ui);
            ui.separator();
            self.statistics(ui);
        });

        // Ticks land on the tokio runtime, so poll for new generations while running.
        if self.simulation.is_running() {
            ctx.request_repaint_after(self.simulation.config().tick_interval);
        }
    }
}
