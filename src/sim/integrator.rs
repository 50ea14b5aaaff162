use nalgebra::Vector2;

use crate::dynamics::force::net_force;
use crate::dynamics::state::State;
use crate::vehicle::{DerivedConstants, ShipParameters};

// ---------------------------------------------------------------------------
// Explicit (forward) Euler step
// ---------------------------------------------------------------------------

/// Fill in force and acceleration for `state` given a unit `heading`.
pub fn apply_thrust(
    state: &mut State,
    heading: &Vector2<f64>,
    ship: &ShipParameters,
    derived: &DerivedConstants,
) {
    state.force = net_force(&(heading * derived.max_force), &state.vel, ship.agility);
    state.acc = state.force / ship.mass;
}

/// Advance one step. Position moves with the velocity at step `i`, not the
/// updated one, so this is plain forward Euler rather than semi-implicit.
/// The returned state has no force applied yet.
pub fn euler_step(state: &State, dt: f64) -> State {
    let iteration = state.iteration + 1;
    State {
        iteration,
        time: iteration as f64 * dt,
        pos: state.pos + state.vel * dt,
        vel: state.vel + state.acc * dt,
        acc: Vector2::zeros(),
        force: Vector2::zeros(),
    }
}
