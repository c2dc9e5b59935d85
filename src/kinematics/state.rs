use std::time::Duration;

use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Simulation constants
// ---------------------------------------------------------------------------

/// Translation step per tick, simulation units. Distinct from the rotation
/// step below; the two are independent scale factors, not one timestep.
pub const TRANSLATION_STEP: f64 = 0.1;

/// Rotation accumulation step per tick, radians per unit of control rate.
pub const ROTATION_STEP: f64 = 0.01;

/// Real-time period of the tick schedule. The translation step above is a
/// fixed constant, not measured elapsed time.
pub const TICK_PERIOD: Duration = Duration::from_millis(50);

/// Helm control scalars are bounded to [-CONTROL_LIMIT, CONTROL_LIMIT].
pub const CONTROL_LIMIT: f64 = 5.0;

/// Helm sliders move in increments of this size.
pub const CONTROL_STEP: f64 = 0.1;

// ---------------------------------------------------------------------------
// Attitude: independently accumulated Euler angles
// ---------------------------------------------------------------------------

/// Boat attitude as three Euler angles in radians.
///
/// Each angle accumulates independently; this is deliberately not a unit
/// quaternion. No normalization and no wraparound are applied, so the angles
/// grow without bound under sustained rotational input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Attitude {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl Attitude {
    /// Unit forward vector in world frame. +Z is forward at zero yaw,
    /// +Y is up. Roll has no effect on the forward direction.
    pub fn forward(&self) -> Vector3<f64> {
        Vector3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
    }
}

// ---------------------------------------------------------------------------
// Kinematic state: mission time, position, attitude
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct State {
    pub time: f64,                 // mission time, simulation units
    pub pos: Vector3<f64>,         // world units, +Y up
    pub att: Attitude,             // rad
}

impl State {
    /// Initial state: surfaced at the origin, level, mission clock at zero.
    pub fn start() -> State {
        State {
            time: 0.0,
            pos: Vector3::zeros(),
            att: Attitude::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helm command
// ---------------------------------------------------------------------------

/// One tick's worth of control input: thrust plus three body rates.
/// The integrator takes these as given; range enforcement is the
/// control station's job, not the integrator's.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HelmCommand {
    pub thrust: f64,
    pub pitch_rate: f64,
    pub yaw_rate: f64,
    pub roll_rate: f64,
}

impl HelmCommand {
    /// All-stop: every scalar zeroed. A tick under this command is a no-op
    /// on position and attitude.
    pub fn all_stop() -> HelmCommand {
        HelmCommand::default()
    }
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,        // translation step per tick
    pub rot_step: f64,  // rotation step per tick
    pub max_time: f64,  // scripted-run horizon, simulation units
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: TRANSLATION_STEP,
            rot_step: ROTATION_STEP,
            max_time: 120.0,
        }
    }
}
