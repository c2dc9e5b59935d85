use crate::kinematics::state::{HelmCommand, State};
use super::controller::Helm;

// ---------------------------------------------------------------------------
// Helm program: scripted command sequence
// ---------------------------------------------------------------------------

/// One leg of a program: hold a command for a duration of mission time.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub duration: f64,
    pub command: HelmCommand,
}

/// An ordered sequence of helm legs, played back against mission time.
/// Past the final leg the program orders all-stop.
#[derive(Debug, Clone)]
pub struct HelmProgram {
    name: String,
    segments: Vec<Segment>,
}

impl HelmProgram {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), segments: vec![] }
    }

    /// Append a leg holding `command` for `duration` mission-time units.
    pub fn leg(mut self, duration: f64, command: HelmCommand) -> Self {
        self.segments.push(Segment { duration, command });
        self
    }

    /// Total programmed time across all legs.
    pub fn programmed_time(&self) -> f64 {
        self.segments.iter().map(|s| s.duration).sum()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The command in force at mission time `t`. Leg boundaries belong to
    /// the following leg.
    fn command_at(&self, t: f64) -> HelmCommand {
        let mut end = 0.0;
        for seg in &self.segments {
            end += seg.duration;
            if t < end {
                return seg.command;
            }
        }
        HelmCommand::all_stop()
    }
}

impl Helm for HelmProgram {
    fn command(&mut self, state: &State, _dt: f64) -> HelmCommand {
        self.command_at(state.time)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ---------------------------------------------------------------------------
// Preset programs
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// Shakedown cruise: get underway, dive, run deep, come about, sprint,
    /// level off. Exercises every control axis. The sprint leg orders more
    /// thrust than the console allows so the per-tick hop clears the trail
    /// gate; scripted programs are not bound by the console range.
    pub fn shakedown() -> HelmProgram {
        let ahead = HelmCommand { thrust: 3.0, ..Default::default() };
        let dive = HelmCommand { thrust: 3.0, pitch_rate: -1.0, ..Default::default() };
        let level = HelmCommand { thrust: 3.0, pitch_rate: 1.0, ..Default::default() };
        let turn = HelmCommand { thrust: 2.0, yaw_rate: 1.2, roll_rate: 1.0, ..Default::default() };
        let sprint = HelmCommand { thrust: 6.0, ..Default::default() };
        let rise = HelmCommand { thrust: 3.0, pitch_rate: 1.2, ..Default::default() };
        let trim = HelmCommand { thrust: 2.0, pitch_rate: -1.2, ..Default::default() };

        HelmProgram::new("Shakedown Cruise")
            .leg(10.0, ahead)
            .leg(5.0, dive)
            .leg(5.0, level)
            .leg(25.0, ahead)
            .leg(10.0, turn)
            .leg(20.0, sprint)
            .leg(5.0, rise)
            .leg(5.0, trim)
            .leg(15.0, ahead)
    }
}
