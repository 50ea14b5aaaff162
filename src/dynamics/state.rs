use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{require_positive, SimError};

// ---------------------------------------------------------------------------
// Per-step state: one row of the trajectory table
// ---------------------------------------------------------------------------

/// Ship state at iteration `i`. Force and acceleration are filled in when the
/// step is integrated; position and velocity come from the previous step.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub iteration: u64,
    pub time: f64,                // s, iteration * dt
    pub pos: Vector2<f64>,        // m, origin at the orbited object
    pub vel: Vector2<f64>,        // m/s
    pub acc: Vector2<f64>,        // m/s^2, force / mass
    pub force: Vector2<f64>,
}

impl State {
    /// Ship at rest at `pos`, iteration 0.
    pub fn at_rest(pos: Vector2<f64>) -> Self {
        Self {
            iteration: 0,
            time: 0.0,
            pos,
            vel: Vector2::zeros(),
            acc: Vector2::zeros(),
            force: Vector2::zeros(),
        }
    }

    pub fn radius(&self) -> f64 {
        self.pos.norm()
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    pub fn accel_magnitude(&self) -> f64 {
        self.acc.norm()
    }

    pub fn force_magnitude(&self) -> f64 {
        self.force.norm()
    }

    pub fn is_finite(&self) -> bool {
        self.pos.iter().chain(self.vel.iter()).all(|c| c.is_finite())
    }
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub dt: f64,                    // s, fixed Euler step
    pub rad_tol: f64,               // allowed radius wobble as a fraction of the commanded radius
    pub interval: u64,              // steps between stability samples
    pub stable_check_thresh: usize, // window length and success count needed
    pub result_window: usize,       // trailing samples averaged into the result
    pub max_iterations: u64,        // hard stop
    pub record_history: bool,       // keep every State in the returned run
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.1,
            rad_tol: 0.001,
            interval: 200,
            stable_check_thresh: 20,
            result_window: 100,
            max_iterations: 10_000_000,
            record_history: false,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        require_positive("dt", self.dt)?;
        require_positive("rad_tol", self.rad_tol)?;
        require_positive("interval", self.interval as f64)?;
        require_positive("stable_check_thresh", self.stable_check_thresh as f64)?;
        require_positive("result_window", self.result_window as f64)?;
        Ok(())
    }
}
