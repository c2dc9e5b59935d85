use std::time::Duration;

use nalgebra::Vector3;

use crate::helm::Helm;
use crate::kinematics::state::{Attitude, HelmCommand, SimConfig, State, TICK_PERIOD};
use super::integrator::kinematic_step;
use super::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Snapshot: tear-free frame for a renderer
// ---------------------------------------------------------------------------

/// Copy-on-read view of the simulation for one rendered frame.
///
/// The renderer must never observe position and attitude from different
/// ticks; taking an owned snapshot once per frame guarantees that even when
/// the render pass runs on another thread than the tick driver.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub time: f64,
    pub position: Vector3<f64>,
    pub attitude: Attitude,
    pub trail: Vec<Vector3<f64>>,
}

// ---------------------------------------------------------------------------
// Interactive simulation: tick schedule, run state, reset
// ---------------------------------------------------------------------------

/// Owns the mutable simulation state: pose, trajectory, run flag.
///
/// Ticks are strictly sequential: each tick's output is the next tick's
/// input, and `&mut self` enforces that the integrator is never invoked
/// concurrently with itself.
#[derive(Debug)]
pub struct Simulation {
    config: SimConfig,
    state: State,
    trail: Trajectory,
    running: bool,
    accumulator: Duration,
}

impl Simulation {
    /// New simulation, paused, at the initial state.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            state: State::start(),
            trail: Trajectory::new(),
            running: false,
            accumulator: Duration::ZERO,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn trail(&self) -> &Trajectory {
        &self.trail
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Resume the tick schedule. Any wall time that elapsed while paused is
    /// discarded; the schedule starts fresh, it does not catch up.
    pub fn start(&mut self) {
        self.running = true;
        self.accumulator = Duration::ZERO;
        log::debug!("tick schedule started");
    }

    /// Suspend the tick schedule. No state mutates while paused and no
    /// partial tick is left in flight.
    pub fn pause(&mut self) {
        self.running = false;
        self.accumulator = Duration::ZERO;
        log::debug!("tick schedule paused");
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// One unconditional tick: integrate, then record the new position
    /// against the previous one. The tick body always completes.
    pub fn tick(&mut self, cmd: &HelmCommand) {
        let next = kinematic_step(&self.state, cmd, &self.config);
        self.trail.record(next.pos, self.state.pos);
        self.state = next;
    }

    /// Drive the fixed-period tick schedule from wall time.
    ///
    /// Issues one tick per whole `TICK_PERIOD` of accumulated elapsed time
    /// and returns how many ticks ran. A caller that falls behind gets a
    /// burst of ticks rather than a gap: ticks are never skipped, so a
    /// slow frame shows up as catch-up, not as lost simulation time.
    /// While paused nothing accumulates and nothing mutates.
    pub fn advance(&mut self, elapsed: Duration, cmd: &HelmCommand) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulator += elapsed;
        let mut ticks = 0;
        while self.accumulator >= TICK_PERIOD {
            self.accumulator -= TICK_PERIOD;
            self.tick(cmd);
            ticks += 1;
        }
        ticks
    }

    /// Restore the initial state: pose and mission clock to zero, trajectory
    /// emptied, pending schedule time dropped. The run flag is left alone,
    /// so resetting while underway keeps the boat underway from the origin.
    /// Atomic from the caller's perspective: no partial reset is observable.
    pub fn reset(&mut self) {
        self.state = State::start();
        self.trail.clear();
        self.accumulator = Duration::ZERO;
        log::debug!("simulation reset to initial state");
    }

    /// Owned copy of everything a renderer needs for one frame.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            time: self.state.time,
            position: self.state.pos,
            attitude: self.state.att,
            trail: self.trail.to_vec(),
        }
    }
}

// ---------------------------------------------------------------------------
// Scripted runs
// ---------------------------------------------------------------------------

/// Full log of a scripted run: every state, the command that produced it,
/// and the gated display trail.
#[derive(Debug, Clone)]
pub struct PatrolLog {
    pub states: Vec<State>,
    pub commands: Vec<HelmCommand>,
    pub trail: Trajectory,
}

/// Drive a helm implementation from t = 0 to `config.max_time`, one tick at
/// a time, logging every state. Entry 0 is the initial state paired with an
/// all-stop command.
pub fn simulate_with(config: &SimConfig, helm: &mut dyn Helm) -> PatrolLog {
    let mut state = State::start();

    let capacity = (config.max_time / config.dt) as usize + 1;
    let cap = capacity.min(200_000);
    let mut states = Vec::with_capacity(cap);
    let mut commands = Vec::with_capacity(cap);
    let mut trail = Trajectory::new();

    states.push(state);
    commands.push(HelmCommand::all_stop());

    while state.time < config.max_time {
        let cmd = helm.command(&state, config.dt);
        let next = kinematic_step(&state, &cmd, config);
        trail.record(next.pos, state.pos);
        state = next;
        states.push(state);
        commands.push(cmd);
    }

    PatrolLog { states, commands, trail }
}

/// Simulate the stock shakedown cruise (convenience wrapper).
pub fn simulate(config: &SimConfig) -> PatrolLog {
    let mut helm = crate::helm::presets::shakedown();
    simulate_with(config, &mut helm)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ahead_full() -> HelmCommand {
        HelmCommand { thrust: 5.0, ..Default::default() }
    }

    // Beyond the console range on purpose: a 0.7-unit hop per tick clears
    // the trail gate, which console-limited thrust (max 0.5 per tick) never
    // does.
    fn sprint() -> HelmCommand {
        HelmCommand { thrust: 7.0, ..Default::default() }
    }

    #[test]
    fn new_simulation_is_paused_at_origin() {
        let sim = Simulation::new(SimConfig::default());
        assert!(!sim.is_running());
        assert_eq!(sim.state().pos, Vector3::zeros());
        assert!(sim.trail().is_empty());
    }

    #[test]
    fn advance_while_paused_mutates_nothing() {
        let mut sim = Simulation::new(SimConfig::default());
        let ticks = sim.advance(Duration::from_secs(10), &ahead_full());
        assert_eq!(ticks, 0);
        assert_eq!(sim.state().pos, Vector3::zeros());
        assert_relative_eq!(sim.state().time, 0.0);
    }

    #[test]
    fn advance_issues_one_tick_per_period() {
        let mut sim = Simulation::new(SimConfig::default());
        sim.start();
        let ticks = sim.advance(Duration::from_millis(250), &ahead_full());
        assert_eq!(ticks, 5, "250 ms at a 50 ms period is five ticks");
        assert_relative_eq!(sim.state().time, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn advance_carries_remainder_between_calls() {
        let mut sim = Simulation::new(SimConfig::default());
        sim.start();
        assert_eq!(sim.advance(Duration::from_millis(30), &ahead_full()), 0);
        assert_eq!(sim.advance(Duration::from_millis(30), &ahead_full()), 1);
    }

    #[test]
    fn pause_discards_pending_schedule_time() {
        let mut sim = Simulation::new(SimConfig::default());
        sim.start();
        sim.advance(Duration::from_millis(49), &ahead_full());
        sim.pause();
        sim.start();
        let ticks = sim.advance(Duration::from_millis(49), &ahead_full());
        assert_eq!(ticks, 0, "remainder must not survive a pause");
    }

    #[test]
    fn trail_records_when_hops_clear_the_gate() {
        let mut sim = Simulation::new(SimConfig::default());
        sim.start();
        let ticks = sim.advance(Duration::from_millis(500), &sprint());
        assert_eq!(sim.trail().len(), ticks as usize, "every sprint tick lays a point");
    }

    #[test]
    fn console_limited_thrust_never_clears_the_gate() {
        // At the console limit a tick covers at most 0.5 units, which is
        // exactly the gate distance and therefore excluded.
        let mut sim = Simulation::new(SimConfig::default());
        sim.start();
        sim.advance(Duration::from_secs(5), &ahead_full());
        assert!(sim.trail().is_empty());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut sim = Simulation::new(SimConfig::default());
        sim.start();
        let cmd = HelmCommand { thrust: 7.0, yaw_rate: 3.0, ..Default::default() };
        sim.advance(Duration::from_secs(2), &cmd);
        assert!(!sim.trail().is_empty());

        sim.reset();
        assert_eq!(sim.state().pos, Vector3::zeros());
        assert_eq!(sim.state().att, Attitude::default());
        assert_relative_eq!(sim.state().time, 0.0);
        assert!(sim.trail().is_empty());
        assert!(sim.is_running(), "reset must not touch the run flag");
    }

    #[test]
    fn snapshot_is_isolated_from_later_ticks() {
        let mut sim = Simulation::new(SimConfig::default());
        sim.start();
        sim.advance(Duration::from_millis(200), &sprint());
        let snap = sim.snapshot();
        let frozen_pos = snap.position;
        let frozen_len = snap.trail.len();
        assert!(frozen_len > 0);

        sim.advance(Duration::from_millis(500), &sprint());
        assert_eq!(snap.position, frozen_pos);
        assert_eq!(snap.trail.len(), frozen_len);
        assert!(sim.state().pos.z > frozen_pos.z);
    }

    #[test]
    fn scripted_run_reaches_horizon() {
        let config = SimConfig { max_time: 10.0, ..Default::default() };
        let log = simulate(&config);
        let last = log.states.last().unwrap();
        assert!(last.time >= config.max_time);
        assert_eq!(log.states.len(), log.commands.len());
    }

    #[test]
    fn scripted_straight_run_covers_expected_distance() {
        struct AheadTwo;
        impl Helm for AheadTwo {
            fn command(&mut self, _state: &State, _dt: f64) -> HelmCommand {
                HelmCommand { thrust: 2.0, ..Default::default() }
            }
        }
        let config = SimConfig { max_time: 10.0, ..Default::default() };
        let log = simulate_with(&config, &mut AheadTwo);
        // Each tick of thrust 2.0 at dt 0.1 advances exactly 0.2 along +Z.
        let ticks = (log.states.len() - 1) as f64;
        let last = log.states.last().unwrap();
        assert_relative_eq!(last.pos.z, 0.2 * ticks, epsilon = 1e-9);
        assert_relative_eq!(last.pos.x, 0.0);
        assert!(ticks >= 100.0, "a 10-unit horizon at dt 0.1 is at least 100 ticks");
    }
}
