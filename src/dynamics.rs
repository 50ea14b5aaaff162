//! Ship state, run configuration and the thrust/drag force model.

pub mod force;
pub mod state;

pub use force::{calc_force, net_force};
pub use state::{SimConfig, State};
