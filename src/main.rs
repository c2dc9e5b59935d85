use anyhow::Context;

use submarine_sim::helm::{presets, Helm};
use submarine_sim::io::csv;
use submarine_sim::io::json::{self, PatrolSummary};
use submarine_sim::kinematics::state::SimConfig;
use submarine_sim::sim::event::{DepthDetector, EventDetector, EventKind, SimEvent, UnderwayDetector};
use submarine_sim::sim::runner::simulate_with;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // -----------------------------------------------------------------------
    // Optional exports: --csv <path>, --json <path>
    // -----------------------------------------------------------------------
    let mut csv_path = None;
    let mut json_path = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--csv" => csv_path = Some(args.next().context("--csv needs a path")?),
            "--json" => json_path = Some(args.next().context("--json needs a path")?),
            other => anyhow::bail!("unknown argument: {other} (expected --csv/--json)"),
        }
    }

    // -----------------------------------------------------------------------
    // Run the scripted shakedown cruise
    // -----------------------------------------------------------------------
    let mut program = presets::shakedown();
    let config = SimConfig {
        max_time: program.programmed_time() + 10.0,
        ..Default::default()
    };
    let log = simulate_with(&config, &mut program);
    let summary = PatrolSummary::from_log(&log);

    // -----------------------------------------------------------------------
    // Scan the log for events
    // -----------------------------------------------------------------------
    let mut detectors: Vec<Box<dyn EventDetector>> = vec![
        Box::new(UnderwayDetector::new()),
        Box::new(DepthDetector::new(-5.0, true)),
        Box::new(DepthDetector::new(-5.0, false)),
    ];
    let mut events: Vec<SimEvent> = Vec::new();
    for pair in log.states.windows(2) {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&pair[0], &pair[1]) {
                events.push(SimEvent { time: pair[1].time, kind, state: pair[1] });
            }
        }
    }

    // -----------------------------------------------------------------------
    // Print report
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  SUBMARINE PATROL SIMULATION — {}", program.name());
    println!("====================================================================");
    println!();
    println!("  Helm Program");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Legs:          {:>8}       Programmed:   {:>8.1} units",
        program.segments().len(),
        program.programmed_time()
    );
    println!(
        "  Tick:          {:>8.2}       Turn step:    {:>8.3} rad",
        config.dt, config.rot_step
    );
    println!();

    println!("  Patrol Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for ev in &events {
        let label = match &ev.kind {
            EventKind::Underway => "UNDERWAY".to_string(),
            EventKind::Custom(text) => text.clone(),
        };
        println!(
            "  {:<28} t={:>6.1}   pos=({:>6.1}, {:>6.1}, {:>6.1})",
            label, ev.time, ev.state.pos.x, ev.state.pos.y, ev.state.pos.z
        );
    }
    if events.is_empty() {
        println!("  (none)");
    }
    println!();

    println!("  Patrol Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Distance run:  {:>8.1}       Net displacement: {:>8.1}",
        summary.distance_run, summary.net_displacement
    );
    println!(
        "  Deepest point: {:>8.1}       Highest point:    {:>8.1}",
        summary.deepest_y, summary.highest_y
    );
    println!(
        "  Final heading: {:>8.1}°      Final pitch:      {:>8.1}°",
        summary.final_heading_deg, summary.final_pitch_deg
    );
    println!(
        "  Patrol time:   {:>8.1}       Trail points:     {:>8}",
        summary.patrol_time, summary.trail_points
    );
    println!();

    // -----------------------------------------------------------------------
    // Track table (sampled)
    // -----------------------------------------------------------------------
    println!("  Track");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>8}  {:>8}  {:>8}  {:>8}  {:>8}  {:>7}",
        "t", "x", "y", "z", "yaw°", "pitch°", "order"
    );
    println!("  {}", "─".repeat(64));

    let sample_interval = (log.states.len() / 25).max(1);
    for (i, s) in log.states.iter().enumerate() {
        let print = i % sample_interval == 0 || i == log.states.len() - 1;
        if !print {
            continue;
        }

        let cmd = &log.commands[i];
        let order = if cmd.thrust > 0.0 {
            "AHEAD"
        } else if cmd.thrust < 0.0 {
            "ASTERN"
        } else {
            "HOLD"
        };

        println!(
            "  {:>7.1}  {:>8.2}  {:>8.2}  {:>8.2}  {:>8.1}  {:>8.1}  {:>7}",
            s.time,
            s.pos.x,
            s.pos.y,
            s.pos.z,
            s.att.yaw.to_degrees(),
            s.att.pitch.to_degrees(),
            order
        );
    }

    println!();
    println!("  Simulation: {} ticks, dt={} / rot {}", log.states.len() - 1, config.dt, config.rot_step);
    println!("====================================================================");
    println!();

    // -----------------------------------------------------------------------
    // Exports
    // -----------------------------------------------------------------------
    if let Some(path) = csv_path {
        csv::write_track_file(&path, &log.states)
            .with_context(|| format!("writing track CSV to {path}"))?;
        log::info!("track CSV written to {path}");
    }
    if let Some(path) = json_path {
        json::write_summary_file(&path, program.name(), &summary)
            .with_context(|| format!("writing summary JSON to {path}"))?;
        log::info!("summary JSON written to {path}");
    }

    Ok(())
}
