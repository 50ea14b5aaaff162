use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints, Points};

use orbit_sim::dynamics::state::{SimConfig, State};
use orbit_sim::gnc::OrbitController;
use orbit_sim::sim::{self, linspace, SweepRow};
use orbit_sim::vehicle::{presets, ShipParameters};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("orbit_sim=warn"))
        .init();

    let ship = presets::harpy_ab();
    let config = SimConfig::default();
    let history = SimConfig { record_history: true, ..config.clone() };

    let radii = linspace(500.0, 5000.0, 10);
    let simulated = sim::sweep(&ship, &radii, &config).and_then(|rows| {
        sim::simulate_with(&ship, &history, &mut OrbitController::new())
            .map(|run| (rows, run.trajectory))
    });
    let (rows, trajectory) = match simulated {
        Ok(v) => v,
        Err(e) => {
            eprintln!("simulation failed: {e}");
            std::process::exit(1);
        }
    };

    let app = OrbitViz { ship, rows, trajectory };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native("Orbit Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

/// One marker per sweep row: (commanded radius, radius difference).
fn difference_points(rows: &[SweepRow]) -> Vec<[f64; 2]> {
    rows.iter().map(|r| [r.prescribed_radius, r.difference]).collect()
}

struct OrbitViz {
    ship: ShipParameters,
    rows: Vec<SweepRow>,
    trajectory: Vec<State>,
}

impl eframe::App for OrbitViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let step = (self.trajectory.len() / 2000).max(1);
        let sampled: Vec<&State> = self.trajectory.iter().step_by(step).collect();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Keep-at-range orbit");
            ui.label(format!(
                "Max speed: {:.0} m/s  |  Mass: {:.3} Mg  |  Agility: {:.3}  |  Track at {:.0} m ({} steps)",
                self.ship.max_speed,
                self.ship.mass,
                self.ship.agility,
                self.ship.commanded_radius,
                self.trajectory.len(),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Radius error vs commanded radius
                ui.vertical(|ui| {
                    ui.label("Actual - Prescribed Difference (m)");
                    let points = difference_points(&self.rows);
                    Plot::new("difference")
                        .width(half_w)
                        .height(available.y)
                        .x_axis_label("Prescribed Orbit Radius (m)")
                        .show(ui, |plot_ui| {
                            plot_ui.points(Points::new("Difference", points).radius(4.0));
                        });
                });

                // Ground track of one run
                ui.vertical(|ui| {
                    ui.label("Track (m)");
                    let points: PlotPoints = sampled.iter().map(|s| [s.pos.x, s.pos.y]).collect();
                    Plot::new("track")
                        .width(half_w)
                        .height(available.y)
                        .x_axis_label("x (m)")
                        .data_aspect(1.0)
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Track", points));
                        });
                });
            });
        });
    }
}
