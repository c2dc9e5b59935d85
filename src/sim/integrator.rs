use crate::kinematics::state::{Attitude, HelmCommand, SimConfig, State};

// ---------------------------------------------------------------------------
// Kinematic tick: forward translation from yaw/pitch, Euler-rate accumulation
// ---------------------------------------------------------------------------

/// Advance the pose by one tick under a constant helm command.
///
/// Pure function of its inputs: no hidden state, no randomness. Translation
/// follows the attitude's forward vector scaled by thrust and `config.dt`;
/// the three angles each accumulate their rate scaled by `config.rot_step`.
/// Roll contributes nothing to translation.
///
/// Inputs are assumed finite. Out-of-range values integrate as given;
/// range enforcement belongs to the control station.
pub fn kinematic_step(state: &State, cmd: &HelmCommand, config: &SimConfig) -> State {
    let forward = state.att.forward() * cmd.thrust;

    State {
        time: state.time + config.dt,
        pos: state.pos + forward * config.dt,
        att: Attitude {
            pitch: state.att.pitch + cmd.pitch_rate * config.rot_step,
            yaw: state.att.yaw + cmd.yaw_rate * config.rot_step,
            roll: state.att.roll + cmd.roll_rate * config.rot_step,
        },
    }
}
