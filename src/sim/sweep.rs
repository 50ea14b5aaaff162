use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::runner::{simulate_orbit, OrbitResult};
use crate::dynamics::state::SimConfig;
use crate::error::SimError;
use crate::vehicle::ShipParameters;

// ---------------------------------------------------------------------------
// Commanded-radius sweep
// ---------------------------------------------------------------------------

/// One row of a sweep: commanded range against where the ship ended up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub prescribed_radius: f64,  // m
    pub actual_radius: f64,      // m
    pub difference: f64,         // m, actual - prescribed
    pub speed: f64,              // m/s
    pub angular_velocity: f64,   // rad/s
}

impl SweepRow {
    pub fn new(prescribed_radius: f64, result: &OrbitResult) -> Self {
        Self {
            prescribed_radius,
            actual_radius: result.stable_radius,
            difference: result.stable_radius - prescribed_radius,
            speed: result.stable_speed,
            angular_velocity: result.angular_velocity,
        }
    }
}

/// `count` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => vec![],
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Simulate `ship` at every radius in `radii`.
///
/// Runs are independent and execute on the rayon pool; rows come back in
/// the order of `radii`. The first failing run aborts the sweep.
pub fn sweep(
    ship: &ShipParameters,
    radii: &[f64],
    config: &SimConfig,
) -> Result<Vec<SweepRow>, SimError> {
    log::debug!("sweeping {} radii", radii.len());
    radii
        .par_iter()
        .map(|&radius| -> Result<SweepRow, SimError> {
            let result = simulate_orbit(&ship.with_radius(radius), config)?;
            Ok(SweepRow::new(radius, &result))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::presets;

    #[test]
    fn linspace_endpoints() {
        assert_eq!(linspace(500.0, 2500.0, 5), vec![500.0, 1000.0, 1500.0, 2000.0, 2500.0]);
        assert_eq!(linspace(7.0, 9.0, 1), vec![7.0]);
        assert!(linspace(7.0, 9.0, 0).is_empty());
        let v = linspace(0.1, 0.7, 7);
        assert_eq!(*v.last().unwrap(), 0.7);
    }

    #[test]
    fn sweep_preserves_order_and_matches_single_runs() {
        let ship = presets::harpy_ab();
        let config = SimConfig::default();
        let radii = [2500.0, 500.0, 1500.0];
        let rows = sweep(&ship, &radii, &config).unwrap();

        assert_eq!(rows.len(), 3);
        for (row, &radius) in rows.iter().zip(radii.iter()) {
            assert_eq!(row.prescribed_radius, radius);
            let single = simulate_orbit(&ship.with_radius(radius), &config).unwrap();
            assert_eq!(row.actual_radius, single.stable_radius);
            assert_eq!(row.difference, single.stable_radius - radius);
        }
    }

    #[test]
    fn sweep_propagates_invalid_radius() {
        let ship = presets::harpy_ab();
        let err = sweep(&ship, &[1000.0, 0.0], &SimConfig::default()).unwrap_err();
        assert!(matches!(err, SimError::InvalidParameter { name: "commanded_radius", .. }));
    }
}
