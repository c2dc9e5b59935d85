use crate::kinematics::state::{HelmCommand, State};

/// Trait for helm sources.
///
/// Implement this to create anything that produces per-tick control input
/// (an interactive console, a scripted program, an autopilot) and plug it
/// into the simulation loop.
pub trait Helm {
    /// Compute the helm command for the next tick from the current state.
    fn command(&mut self, state: &State, dt: f64) -> HelmCommand;

    /// Reset internal state (e.g., program cursors).
    fn reset(&mut self) {}

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}
