use crate::kinematics::state::{HelmCommand, State, CONTROL_LIMIT, CONTROL_STEP};
use crate::reactor::Reactor;
use super::controller::Helm;

// ---------------------------------------------------------------------------
// Display options (presentation flags, never read by the sim core)
// ---------------------------------------------------------------------------

/// Toggles consumed by the rendering side. Kept apart from the simulation
/// state on purpose: the integrator depends on none of these.
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    pub wireframe: bool,
    pub show_vectors: bool,
    pub show_grid: bool,
    pub show_axes: bool,
    pub show_reactor: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            wireframe: false,
            show_vectors: true,
            show_grid: true,
            show_axes: true,
            show_reactor: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Control station: the UI-owned input record
// ---------------------------------------------------------------------------

/// The operator's console. Owns the four helm scalars, the reactor panel and
/// the display toggles.
///
/// Range enforcement lives here, at the input boundary: every write is
/// clamped to [-5, 5] and quantized to 0.1 steps, so the integrator can
/// assume finite, bounded values without checking them itself.
#[derive(Debug, Clone, Default)]
pub struct ControlStation {
    thrust: f64,
    pitch_rate: f64,
    yaw_rate: f64,
    roll_rate: f64,
    pub reactor: Reactor,
    pub display: DisplayOptions,
}

fn snap(value: f64) -> f64 {
    let stepped = (value / CONTROL_STEP).round() * CONTROL_STEP;
    stepped.clamp(-CONTROL_LIMIT, CONTROL_LIMIT)
}

impl ControlStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn thrust(&self) -> f64 {
        self.thrust
    }

    pub fn pitch_rate(&self) -> f64 {
        self.pitch_rate
    }

    pub fn yaw_rate(&self) -> f64 {
        self.yaw_rate
    }

    pub fn roll_rate(&self) -> f64 {
        self.roll_rate
    }

    pub fn set_thrust(&mut self, value: f64) {
        self.thrust = snap(value);
    }

    pub fn set_pitch_rate(&mut self, value: f64) {
        self.pitch_rate = snap(value);
    }

    pub fn set_yaw_rate(&mut self, value: f64) {
        self.yaw_rate = snap(value);
    }

    pub fn set_roll_rate(&mut self, value: f64) {
        self.roll_rate = snap(value);
    }

    /// The command the current slider positions produce.
    pub fn command(&self) -> HelmCommand {
        HelmCommand {
            thrust: self.thrust,
            pitch_rate: self.pitch_rate,
            yaw_rate: self.yaw_rate,
            roll_rate: self.roll_rate,
        }
    }

    /// Zero all four scalars and put the reactor back at its default power.
    /// Display toggles are left as the operator set them.
    pub fn reset(&mut self) {
        self.thrust = 0.0;
        self.pitch_rate = 0.0;
        self.yaw_rate = 0.0;
        self.roll_rate = 0.0;
        self.reactor = Reactor::default();
    }
}

impl Helm for ControlStation {
    fn command(&mut self, _state: &State, _dt: f64) -> HelmCommand {
        ControlStation::command(self)
    }

    fn reset(&mut self) {
        ControlStation::reset(self);
    }

    fn name(&self) -> &str {
        "control station"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn writes_are_clamped() {
        let mut station = ControlStation::new();
        station.set_thrust(7.3);
        assert_relative_eq!(station.thrust(), 5.0);
        station.set_yaw_rate(-123.0);
        assert_relative_eq!(station.yaw_rate(), -5.0);
    }

    #[test]
    fn writes_snap_to_tenths() {
        let mut station = ControlStation::new();
        station.set_pitch_rate(2.34);
        assert_relative_eq!(station.pitch_rate(), 2.3, epsilon = 1e-9);
        station.set_roll_rate(-0.06);
        assert_relative_eq!(station.roll_rate(), -0.1, epsilon = 1e-9);
    }

    #[test]
    fn command_mirrors_sliders() {
        let mut station = ControlStation::new();
        station.set_thrust(1.0);
        station.set_yaw_rate(-2.5);
        let cmd = station.command();
        assert_relative_eq!(cmd.thrust, 1.0);
        assert_relative_eq!(cmd.yaw_rate, -2.5);
        assert_relative_eq!(cmd.pitch_rate, 0.0);
    }

    #[test]
    fn full_reset_restores_boat_and_console() {
        use std::time::Duration;
        use nalgebra::Vector3;
        use crate::kinematics::state::{Attitude, SimConfig};
        use crate::sim::runner::Simulation;

        let mut sim = Simulation::new(SimConfig::default());
        let mut station = ControlStation::new();
        station.set_thrust(4.0);
        station.set_yaw_rate(2.0);
        station.reactor.set_power(95.0);

        sim.start();
        sim.advance(Duration::from_secs(3), &station.command());
        assert!(sim.state().pos.norm() > 0.0);

        sim.reset();
        station.reset();
        assert_eq!(sim.state().pos, Vector3::zeros());
        assert_eq!(sim.state().att, Attitude::default());
        assert!(sim.trail().is_empty());
        assert_relative_eq!(station.thrust(), 0.0);
        assert_relative_eq!(station.pitch_rate(), 0.0);
        assert_relative_eq!(station.yaw_rate(), 0.0);
        assert_relative_eq!(station.roll_rate(), 0.0);
        assert_relative_eq!(station.reactor.power(), 75.0);
    }

    #[test]
    fn reset_zeroes_sliders_and_restores_reactor() {
        let mut station = ControlStation::new();
        station.set_thrust(4.0);
        station.set_pitch_rate(-1.0);
        station.reactor.set_power(20.0);
        station.display.show_grid = false;

        station.reset();
        assert_relative_eq!(station.thrust(), 0.0);
        assert_relative_eq!(station.pitch_rate(), 0.0);
        assert_relative_eq!(station.reactor.power(), 75.0);
        assert!(!station.display.show_grid, "display toggles survive a reset");
    }
}
