use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// Thrust model: engine force minus linear velocity drag
// ---------------------------------------------------------------------------

/// Net force along one axis.
///
/// `target_force` is the engine force projected on the axis, `velocity` the
/// velocity component on the same axis. Drag is `velocity / agility`, so a
/// sluggish ship (low agility) loses more force at a given speed.
/// `agility` must be non-zero.
pub fn calc_force(target_force: f64, velocity: f64, agility: f64) -> f64 {
    target_force - velocity / agility
}

/// Apply [`calc_force`] to each axis independently.
pub fn net_force(target: &Vector2<f64>, vel: &Vector2<f64>, agility: f64) -> Vector2<f64> {
    Vector2::new(
        calc_force(target.x, vel.x, agility),
        calc_force(target.y, vel.y, agility),
    )
}
