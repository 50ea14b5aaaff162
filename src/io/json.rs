use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::dynamics::state::SimConfig;
use crate::sim::{OrbitResult, SweepRow};
use crate::vehicle::ShipParameters;

/// Single-run report: inputs alongside the converged orbit.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub ship: &'a ShipParameters,
    pub config: &'a SimConfig,
    pub result: &'a OrbitResult,
}

/// Sweep report. `ship.commanded_radius` is not meaningful here; each row
/// carries its own.
#[derive(Debug, Serialize)]
pub struct SweepReport<'a> {
    pub ship: &'a ShipParameters,
    pub config: &'a SimConfig,
    pub rows: &'a [SweepRow],
}

pub fn write_report<W: Write, T: Serialize>(writer: &mut W, report: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)
}

pub fn write_report_file<T: Serialize>(path: impl AsRef<Path>, report: &T) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_report(&mut file, report)
}
