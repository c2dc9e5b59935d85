use submarine_sim::helm::Helm;
use submarine_sim::kinematics::state::{HelmCommand, SimConfig, State};
use submarine_sim::sim::simulate_with;

/// A proportional depth keeper: order a shallow approach pitch toward the
/// ordered depth and steer the pitch rate to track it, holding cruise thrust.
struct DepthKeeper {
    ordered_y: f64,
    cruise_thrust: f64,
}

impl Helm for DepthKeeper {
    fn command(&mut self, state: &State, _dt: f64) -> HelmCommand {
        let error = self.ordered_y - state.pos.y;
        let target_pitch = (0.05 * error).clamp(-0.35, 0.35);
        let pitch_rate = ((target_pitch - state.att.pitch) / 0.01).clamp(-2.0, 2.0);
        HelmCommand {
            thrust: self.cruise_thrust,
            pitch_rate,
            ..Default::default()
        }
    }

    fn name(&self) -> &str {
        "DepthKeeper"
    }
}

fn main() {
    let ordered_y = -12.0;
    let mut helm = DepthKeeper {
        ordered_y,
        cruise_thrust: 6.0,
    };

    let config = SimConfig { max_time: 120.0, ..Default::default() };

    println!("Simulating with {} helm...", helm.name());
    let log = simulate_with(&config, &mut helm);

    let last = log.states.last().unwrap();
    println!("Ordered y: {:.1}", ordered_y);
    println!("Final y:   {:.2}", last.pos.y);
    println!("Final pitch: {:.1}°", last.att.pitch.to_degrees());
    println!("Trail points: {}", log.trail.len());

    assert!(
        (last.pos.y - ordered_y).abs() < 2.0,
        "depth keeper should settle near the ordered depth"
    );
}
