pub mod integrator;
pub mod trajectory;
pub mod runner;
pub mod event;

pub use runner::{simulate, simulate_with, PatrolLog, Simulation, Snapshot};
pub use integrator::kinematic_step;
pub use trajectory::Trajectory;
