use std::io::{self, Write};

use crate::sim::runner::PatrolLog;

/// Summary statistics computed from a patrol log.
#[derive(Debug, Clone)]
pub struct PatrolSummary {
    pub patrol_time: f64,
    pub distance_run: f64,
    pub net_displacement: f64,
    pub deepest_y: f64,
    pub highest_y: f64,
    pub final_heading_deg: f64,
    pub final_pitch_deg: f64,
    pub trail_points: usize,
}

impl PatrolSummary {
    /// Compute summary from a patrol log.
    pub fn from_log(log: &PatrolLog) -> Self {
        let distance_run = log
            .states
            .windows(2)
            .map(|w| (w[1].pos - w[0].pos).norm())
            .sum();

        let deepest_y = log
            .states
            .iter()
            .map(|s| s.pos.y)
            .fold(f64::INFINITY, f64::min);

        let highest_y = log
            .states
            .iter()
            .map(|s| s.pos.y)
            .fold(f64::NEG_INFINITY, f64::max);

        let first = log.states.first().unwrap();
        let last = log.states.last().unwrap();

        PatrolSummary {
            patrol_time: last.time,
            distance_run,
            net_displacement: (last.pos - first.pos).norm(),
            deepest_y,
            highest_y,
            final_heading_deg: last.att.yaw.to_degrees(),
            final_pitch_deg: last.att.pitch.to_degrees(),
            trail_points: log.trail.len(),
        }
    }
}

/// Write a patrol summary as JSON to a writer.
pub fn write_summary<W: Write>(
    writer: &mut W,
    patrol_name: &str,
    summary: &PatrolSummary,
) -> io::Result<()> {
    writeln!(writer, "{{")?;
    writeln!(writer, "  \"patrol\": {{")?;
    writeln!(writer, "    \"name\": \"{}\"", patrol_name)?;
    writeln!(writer, "  }},")?;
    writeln!(writer, "  \"performance\": {{")?;
    writeln!(writer, "    \"patrol_time\": {:.2},", summary.patrol_time)?;
    writeln!(writer, "    \"distance_run\": {:.2},", summary.distance_run)?;
    writeln!(writer, "    \"net_displacement\": {:.2},", summary.net_displacement)?;
    writeln!(writer, "    \"deepest_y\": {:.2},", summary.deepest_y)?;
    writeln!(writer, "    \"highest_y\": {:.2},", summary.highest_y)?;
    writeln!(writer, "    \"final_heading_deg\": {:.2},", summary.final_heading_deg)?;
    writeln!(writer, "    \"final_pitch_deg\": {:.2},", summary.final_pitch_deg)?;
    writeln!(writer, "    \"trail_points\": {}", summary.trail_points)?;
    writeln!(writer, "  }}")?;
    writeln!(writer, "}}")?;
    Ok(())
}

/// Write a patrol summary JSON to a file.
pub fn write_summary_file(
    path: &str,
    patrol_name: &str,
    summary: &PatrolSummary,
) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_summary(&mut file, patrol_name, summary)
}
