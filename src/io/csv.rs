use std::io::{self, Write};
use std::path::Path;

use crate::dynamics::state::State;
use crate::sim::SweepRow;

/// Header of the sweep table. Labels are quoted, numbers are not.
pub const SWEEP_HEADER: [&str; 5] = [
    "Prescribed Orbit Radius (m)",
    "Actual Orbit Radius (m)",
    "Difference in Orbit Radii (m)",
    "Orbital Speed (m/s)",
    "Angular Velocity (rad/s)",
];

/// Write sweep results, one row per commanded radius.
///
/// Numbers use `Debug` formatting so whole values keep their `.0`.
pub fn write_sweep<W: Write>(writer: &mut W, rows: &[SweepRow]) -> io::Result<()> {
    let header: Vec<String> = SWEEP_HEADER.iter().map(|h| format!("\"{h}\"")).collect();
    writeln!(writer, "{}", header.join(","))?;

    for r in rows {
        writeln!(
            writer,
            "{:?},{:?},{:?},{:?},{:?}",
            r.prescribed_radius, r.actual_radius, r.difference, r.speed, r.angular_velocity
        )?;
    }

    Ok(())
}

pub fn write_sweep_file(path: impl AsRef<Path>, rows: &[SweepRow]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_sweep(&mut file, rows)
}

/// Write the per-step trajectory table.
///
/// Columns: i, t, r, x, y, v, vx, vy, a, ax, ay, f, fx, fy
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &[State]) -> io::Result<()> {
    writeln!(writer, "i,t,r,x,y,v,vx,vy,a,ax,ay,f,fx,fy")?;

    for s in trajectory {
        writeln!(
            writer,
            "{},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},\
             {:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
            s.iteration,
            s.time,
            s.radius(), s.pos.x, s.pos.y,
            s.speed(), s.vel.x, s.vel.y,
            s.accel_magnitude(), s.acc.x, s.acc.y,
            s.force_magnitude(), s.force.x, s.force.y,
        )?;
    }

    Ok(())
}

pub fn write_trajectory_file(path: impl AsRef<Path>, trajectory: &[State]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_trajectory(&mut file, trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn sweep_csv_header_and_rows() {
        let rows = vec![
            SweepRow {
                prescribed_radius: 1500.0,
                actual_radius: 2226.5,
                difference: 726.5,
                speed: 578.25,
                angular_velocity: 0.25,
            },
            SweepRow {
                prescribed_radius: 5000.0,
                actual_radius: 5680.0,
                difference: 680.0,
                speed: 740.0,
                angular_velocity: 0.125,
            },
        ];

        let mut buf = Vec::new();
        write_sweep(&mut buf, &rows).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("\"Prescribed Orbit Radius (m)\","));
        assert!(lines[0].ends_with("\"Angular Velocity (rad/s)\""));
        assert_eq!(lines[1], "1500.0,2226.5,726.5,578.25,0.25");
        assert_eq!(lines[2], "5000.0,5680.0,680.0,740.0,0.125");
    }

    #[test]
    fn trajectory_csv_has_fourteen_columns() {
        let mut s = State::at_rest(Vector2::new(3.0, 4.0));
        s.force = Vector2::new(1.0, 0.0);
        let traj = vec![s];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split(',').count(), 14);
        assert_eq!(lines[1].split(',').count(), 14);
        assert!(lines[1].starts_with("0,0.0000,5.0000,3.0000,4.0000,"));
    }

    #[test]
    fn trajectory_time_keeps_fine_steps() {
        // dt = 0.05 must not collapse neighbouring timestamps.
        let traj: Vec<State> = (0..3u64)
            .map(|i| {
                let mut s = State::at_rest(Vector2::new(3.0, 4.0));
                s.iteration = i;
                s.time = i as f64 * 0.05;
                s
            })
            .collect();

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let times: Vec<&str> = output
            .lines()
            .skip(1)
            .map(|l| l.split(',').nth(1).unwrap())
            .collect();

        assert_eq!(times, ["0.0000", "0.0500", "0.1000"]);
    }
}
