pub mod controller;
pub mod station;
pub mod program;

pub use controller::Helm;
pub use station::{ControlStation, DisplayOptions};
pub use program::{presets, HelmProgram, Segment};
