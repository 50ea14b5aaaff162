//! Keep-at-range orbit simulation.
//!
//! A ship told to orbit a fixed point at some range rarely ends up at that
//! range. Engine force is opposed by a linear drag term, so the ship swings
//! wide and settles on a larger circle at less than top speed. This crate
//! integrates that motion in 2D and reports where the orbit stabilises.
//!
//! ```no_run
//! use orbit_sim::{simulate_orbit, SimConfig, ShipParameters};
//!
//! let ship = ShipParameters::new(835.0, 1.655, 2.452, 1500.0);
//! let r = simulate_orbit(&ship, &SimConfig::default()).unwrap();
//! println!("{:.0} m at {:.0} m/s", r.stable_radius, r.stable_speed);
//! ```

pub mod dynamics;
pub mod error;
mod gnc_mod;
pub mod io;
pub mod sim;
pub mod vehicle;

// The gnc module: expose gnc_mod as `gnc` publicly
pub mod gnc {
    pub use crate::gnc_mod::*;
}

pub use dynamics::state::{SimConfig, State};
pub use error::SimError;
pub use sim::{simulate_orbit, simulate_with, sweep, OrbitResult, OrbitRun, SweepRow};
pub use vehicle::{presets, ShipParameters};

pub mod types {
    pub use crate::dynamics::state::{SimConfig, State};
    pub use crate::vehicle::{DerivedConstants, ShipParameters};
}
