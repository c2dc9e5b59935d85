use std::io::{self, Write};

use crate::kinematics::state::State;

/// Write a track log to CSV format.
///
/// Columns: time, pos_x, pos_y, pos_z,
///          pitch_rad, yaw_rad, roll_rad,
///          pitch_deg, yaw_deg, roll_deg
pub fn write_track<W: Write>(writer: &mut W, track: &[State]) -> io::Result<()> {
    writeln!(
        writer,
        "time,pos_x,pos_y,pos_z,\
         pitch_rad,yaw_rad,roll_rad,\
         pitch_deg,yaw_deg,roll_deg"
    )?;

    for s in track {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},\
             {:.6},{:.6},{:.6},\
             {:.2},{:.2},{:.2}",
            s.time,
            s.pos.x, s.pos.y, s.pos.z,
            s.att.pitch, s.att.yaw, s.att.roll,
            s.att.pitch.to_degrees(),
            s.att.yaw.to_degrees(),
            s.att.roll.to_degrees(),
        )?;
    }

    Ok(())
}

/// Write a track log to a CSV file at the given path.
pub fn write_track_file(path: &str, track: &[State]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_track(&mut file, track)
}
