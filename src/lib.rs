pub mod kinematics;
pub mod sim;
pub mod helm;
pub mod reactor;
pub mod io;

// Convenience re-exports
pub mod types {
    pub use crate::kinematics::state::{
        Attitude, HelmCommand, SimConfig, State, CONTROL_LIMIT, CONTROL_STEP, ROTATION_STEP,
        TICK_PERIOD, TRANSLATION_STEP,
    };
    pub use crate::helm::{ControlStation, Helm, HelmProgram};
    pub use crate::reactor::{Reactor, ReactorStatus};
    pub use crate::sim::runner::{PatrolLog, Simulation, Snapshot};
    pub use crate::sim::trajectory::Trajectory;
}
