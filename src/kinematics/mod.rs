pub mod state;

pub use state::{Attitude, HelmCommand, SimConfig, State};
