use std::time::Instant;

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use submarine_sim::helm::ControlStation;
use submarine_sim::kinematics::state::{SimConfig, TICK_PERIOD};
use submarine_sim::sim::runner::Simulation;

fn main() -> eframe::Result {
    env_logger::init();

    let app = ControlRoom::new();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Submarine Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

struct ControlRoom {
    sim: Simulation,
    station: ControlStation,
    // Frame-local display logs; presentation state, not simulation state.
    track_log: Vec<[f64; 2]>,
    depth_log: Vec<[f64; 2]>,
    last_frame: Instant,
}

const DISPLAY_LOG_CAP: usize = 4000;

fn push_capped(log: &mut Vec<[f64; 2]>, point: [f64; 2]) {
    log.push(point);
    if log.len() > DISPLAY_LOG_CAP {
        let excess = log.len() - DISPLAY_LOG_CAP;
        log.drain(..excess);
    }
}

impl ControlRoom {
    fn new() -> Self {
        Self {
            sim: Simulation::new(SimConfig::default()),
            station: ControlStation::new(),
            track_log: Vec::new(),
            depth_log: Vec::new(),
            last_frame: Instant::now(),
        }
    }

    fn slider(ui: &mut egui::Ui, label: &str, value: f64, set: impl FnOnce(f64)) {
        let mut v = value;
        if ui
            .add(egui::Slider::new(&mut v, -5.0..=5.0).step_by(0.1).text(label))
            .changed()
        {
            set(v);
        }
    }
}

impl eframe::App for ControlRoom {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drive the fixed 50 ms tick schedule from real elapsed time.
        let now = Instant::now();
        let elapsed = now - self.last_frame;
        self.last_frame = now;

        let cmd = self.station.command();
        if self.sim.advance(elapsed, &cmd) > 0 {
            let s = self.sim.state();
            push_capped(&mut self.track_log, [s.pos.x, s.pos.z]);
            push_capped(&mut self.depth_log, [s.time, s.pos.y]);
        }

        let snap = self.sim.snapshot();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Submarine Simulator");
            ui.label(format!(
                "t = {:>7.1}  |  pos ({:>6.2}, {:>6.2}, {:>6.2})  |  trail {} pts  |  {}",
                snap.time,
                snap.position.x,
                snap.position.y,
                snap.position.z,
                snap.trail.len(),
                if self.sim.is_running() { "RUNNING" } else { "PAUSED" },
            ));
        });

        egui::SidePanel::right("console").min_width(280.0).show(ctx, |ui| {
            ui.heading("Helm");
            Self::slider(ui, "Thrust", self.station.thrust(), |v| {
                self.station.set_thrust(v)
            });
            Self::slider(ui, "Pitch rate", self.station.pitch_rate(), |v| {
                self.station.set_pitch_rate(v)
            });
            Self::slider(ui, "Yaw rate", self.station.yaw_rate(), |v| {
                self.station.set_yaw_rate(v)
            });
            Self::slider(ui, "Roll rate", self.station.roll_rate(), |v| {
                self.station.set_roll_rate(v)
            });

            ui.horizontal(|ui| {
                let run_label = if self.sim.is_running() { "⏸ Pause" } else { "▶ Start" };
                if ui.button(run_label).clicked() {
                    self.sim.toggle();
                }
                if ui.button("🔄 Reset").clicked() {
                    self.sim.reset();
                    self.station.reset();
                    self.track_log.clear();
                    self.depth_log.clear();
                }
            });

            ui.separator();
            ui.heading("Reactor");
            let mut power = self.station.reactor.power();
            if ui
                .add(egui::Slider::new(&mut power, 0.0..=100.0).step_by(1.0).text("Power (%)"))
                .changed()
            {
                self.station.reactor.set_power(power);
            }
            if self.station.display.show_reactor {
                let reactor = &self.station.reactor;
                ui.label(format!(
                    "{:.0}% — {:.0} °C — {}",
                    reactor.power(),
                    reactor.temperature_c(),
                    reactor.status().label(),
                ));
            }

            ui.separator();
            ui.heading("Readouts");
            ui.monospace(format!("x     {:>9.2}", snap.position.x));
            ui.monospace(format!("y     {:>9.2}", snap.position.y));
            ui.monospace(format!("z     {:>9.2}", snap.position.z));
            ui.monospace(format!(
                "pitch {:>9.3} rad  {:>7.1}°",
                snap.attitude.pitch,
                snap.attitude.pitch.to_degrees()
            ));
            ui.monospace(format!(
                "yaw   {:>9.3} rad  {:>7.1}°",
                snap.attitude.yaw,
                snap.attitude.yaw.to_degrees()
            ));
            ui.monospace(format!(
                "roll  {:>9.3} rad  {:>7.1}°",
                snap.attitude.roll,
                snap.attitude.roll.to_degrees()
            ));

            ui.separator();
            ui.heading("Display");
            ui.checkbox(&mut self.station.display.wireframe, "Wireframe hull");
            ui.checkbox(&mut self.station.display.show_vectors, "Heading vector");
            ui.checkbox(&mut self.station.display.show_grid, "Grid");
            ui.checkbox(&mut self.station.display.show_axes, "Axes");
            ui.checkbox(&mut self.station.display.show_reactor, "Reactor panel");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_h = available.y / 2.0 - 8.0;

            // Top-down track (X east, Z north-up on the plot)
            ui.label("Track (top-down)");
            let path: PlotPoints = self.track_log.iter().copied().collect();
            let trail: PlotPoints = snap.trail.iter().map(|p| [p.x, p.z]).collect();
            let display = self.station.display;
            Plot::new("track")
                .height(half_h)
                .x_axis_label("X")
                .y_axis_label("Z")
                .data_aspect(1.0)
                .show_grid(display.show_grid)
                .show_axes(display.show_axes)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Path", path));
                    plot_ui.line(Line::new("Trail (gated)", trail));
                    if display.show_vectors {
                        let fwd = snap.attitude.forward() * 5.0;
                        let heading = vec![
                            [snap.position.x, snap.position.z],
                            [snap.position.x + fwd.x, snap.position.z + fwd.z],
                        ];
                        plot_ui.line(Line::new("Heading", PlotPoints::from(heading)));
                    }
                });

            // Vertical profile
            ui.label("Vertical position (Y vs time)");
            let depth_points: PlotPoints = self.depth_log.iter().copied().collect();
            Plot::new("depth")
                .height(half_h)
                .x_axis_label("Time")
                .show_grid(display.show_grid)
                .show_axes(display.show_axes)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("Y", depth_points));
                });
        });

        // Wake up again at the tick period even without input events.
        ctx.request_repaint_after(TICK_PERIOD);
    }
}
