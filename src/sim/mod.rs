pub mod integrator;
pub mod runner;
pub mod stability;
pub mod sweep;

pub use integrator::{apply_thrust, euler_step};
pub use runner::{simulate_orbit, simulate_with, OrbitResult, OrbitRun};
pub use stability::StabilityDetector;
pub use sweep::{linspace, sweep, SweepRow};
