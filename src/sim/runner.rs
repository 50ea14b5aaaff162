use std::collections::VecDeque;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::integrator::{apply_thrust, euler_step};
use super::stability::StabilityDetector;
use crate::dynamics::state::{SimConfig, State};
use crate::error::SimError;
use crate::gnc::{Controller, OrbitController};
use crate::vehicle::ShipParameters;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Converged orbit, averaged over the trailing `result_window` states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitResult {
    pub stable_radius: f64,     // m
    pub stable_speed: f64,      // m/s
    pub angular_velocity: f64,  // rad/s, stable_speed / stable_radius
    pub iterations: u64,        // index of the last integrated state
}

/// A finished run. `trajectory` is empty unless `record_history` is set.
#[derive(Debug, Clone)]
pub struct OrbitRun {
    pub result: OrbitResult,
    pub trajectory: Vec<State>,
}

/// Trailing (radius, speed) samples for the result average.
struct Tail {
    len: usize,
    samples: VecDeque<(f64, f64)>,
}

impl Tail {
    fn new(len: usize) -> Self {
        Self { len, samples: VecDeque::with_capacity(len + 1) }
    }

    fn push(&mut self, state: &State) {
        self.samples.push_back((state.radius(), state.speed()));
        if self.samples.len() > self.len {
            self.samples.pop_front();
        }
    }

    fn means(&self) -> (f64, f64) {
        let n = self.samples.len() as f64;
        let (r, v) = self
            .samples
            .iter()
            .fold((0.0, 0.0), |(r, v), &(sr, sv)| (r + sr, v + sv));
        (r / n, v / n)
    }
}

// ---------------------------------------------------------------------------
// Orbit simulation
// ---------------------------------------------------------------------------

/// Simulate the orbit with a custom controller.
///
/// The ship spawns at rest on the +x axis, `max_speed' * 10` meters outside
/// the commanded radius, and flies until [`StabilityDetector`] reports a
/// stable orbit or `max_iterations` is reached.
pub fn simulate_with(
    ship: &ShipParameters,
    config: &SimConfig,
    controller: &mut dyn Controller,
) -> Result<OrbitRun, SimError> {
    ship.validate()?;
    config.validate()?;

    let derived = ship.derived();
    let mut detector =
        StabilityDetector::new(config, ship.commanded_radius, derived.max_speed)?;
    log::debug!(
        "orbit at {:.1} m with {}: max_force={:.4} max_speed={:.3} check_start={:.1}",
        ship.commanded_radius,
        controller.name(),
        derived.max_force,
        derived.max_speed,
        detector.check_start()
    );

    let mut state = State::at_rest(Vector2::new(
        ship.commanded_radius + derived.max_speed * 10.0,
        0.0,
    ));
    let mut heading = controller.initial_heading(&state, ship);
    let mut tail = Tail::new(config.result_window);
    let mut trajectory = Vec::new();

    let iterations = loop {
        if state.iteration > 0 {
            heading = controller.heading(&state, ship);
        }
        apply_thrust(&mut state, &heading, ship, &derived);

        let next = euler_step(&state, config.dt);
        if !next.is_finite() {
            return Err(SimError::NonFiniteState { iteration: next.iteration });
        }

        tail.push(&state);
        let iteration = state.iteration;
        let converged = detector.observe(iteration, state.radius());
        if config.record_history {
            trajectory.push(state);
        }

        // `next` is the trailing row past the end of the table; never recorded.
        if converged {
            break iteration;
        }
        if iteration >= config.max_iterations {
            log::warn!(
                "orbit at {:.1} m not stable after {} iterations",
                ship.commanded_radius,
                iteration
            );
            return Err(SimError::DidNotConverge { iterations: iteration });
        }
        state = next;
    };

    let (stable_radius, stable_speed) = tail.means();
    let result = OrbitResult {
        stable_radius,
        stable_speed,
        angular_velocity: stable_speed / stable_radius,
        iterations,
    };
    log::info!(
        "orbit at {:.1} m stable after {} iterations: r={:.3} m v={:.3} m/s w={:.6} rad/s",
        ship.commanded_radius,
        result.iterations,
        result.stable_radius,
        result.stable_speed,
        result.angular_velocity
    );

    Ok(OrbitRun { result, trajectory })
}

/// Simulate with the default keep-at-range controller.
pub fn simulate_orbit(ship: &ShipParameters, config: &SimConfig) -> Result<OrbitResult, SimError> {
    let mut controller = OrbitController::new();
    simulate_with(ship, config, &mut controller).map(|run| run.result)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
