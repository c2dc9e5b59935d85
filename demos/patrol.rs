use submarine_sim::helm::{Helm, HelmProgram};
use submarine_sim::io::PatrolSummary;
use submarine_sim::kinematics::state::{HelmCommand, SimConfig};
use submarine_sim::sim::simulate_with;

fn main() {
    // A box-shaped search pattern: four straight sprint legs with 90° turns
    // between them. A turn leg of 40 ticks (4.0 time units) at the rate
    // below sweeps exactly pi/2 of yaw. Sprint thrust exceeds the console
    // range so the legs lay down trail points.
    let turn_time = 4.0;
    let turn_rate = std::f64::consts::FRAC_PI_2 / (turn_time * 0.1);

    let ahead = HelmCommand { thrust: 6.0, ..Default::default() };
    let turn = HelmCommand { thrust: 1.0, yaw_rate: turn_rate, ..Default::default() };

    let mut program = HelmProgram::new("Box Search")
        .leg(15.0, ahead)
        .leg(turn_time, turn)
        .leg(15.0, ahead)
        .leg(turn_time, turn)
        .leg(15.0, ahead)
        .leg(turn_time, turn)
        .leg(15.0, ahead)
        .leg(turn_time, turn);

    let config = SimConfig {
        max_time: program.programmed_time(),
        ..Default::default()
    };

    println!("Simulating {} ...", program.name());
    let log = simulate_with(&config, &mut program);
    let summary = PatrolSummary::from_log(&log);

    let last = log.states.last().unwrap();
    println!("Distance run: {:.1}", summary.distance_run);
    println!(
        "Net displacement: {:.1} (a closed box comes back near the start)",
        summary.net_displacement
    );
    println!("Final heading: {:.1}°", summary.final_heading_deg);
    println!(
        "Final position: ({:.1}, {:.1}, {:.1})",
        last.pos.x, last.pos.y, last.pos.z
    );
    println!("Trail points: {}", summary.trail_points);
}
