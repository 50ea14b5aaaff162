use nalgebra::{Matrix2, Vector2, Vector3};

// ---------------------------------------------------------------------------
// Guidance: desired thrust direction for keeping a commanded range
// ---------------------------------------------------------------------------

/// Which side of the commanded circle the ship is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingBranch {
    /// Farther than the commanded radius: curve onto an approach path.
    Outside,
    /// Exactly on the circle: fly tangent to it. Only reachable when the
    /// distance compares equal bit for bit.
    On,
    /// Closer than the commanded radius: thrust straight outward.
    Inside,
}

impl HeadingBranch {
    pub fn classify(dist: f64, radius: f64) -> Self {
        if radius < dist {
            HeadingBranch::Outside
        } else if radius == dist {
            HeadingBranch::On
        } else {
            HeadingBranch::Inside
        }
    }
}

/// Counter-clockwise rotation by `theta` (rad) in the x-y plane.
pub fn rotation_matrix(theta: f64) -> Matrix2<f64> {
    let (s, c) = theta.sin_cos();
    Matrix2::new(c, -s, s, c)
}

/// Heading from outside the circle toward the tangent point.
///
/// The inward unit vector is rotated clockwise by the angle the circle
/// subtends from the ship. Precision degrades as `dist` approaches `radius`
/// since the tangent length goes to zero.
pub fn approach_heading(pos: &Vector2<f64>, radius: f64) -> Vector2<f64> {
    let dist = pos.norm();
    let dist_to_orbit = (dist.powi(2) - radius.powi(2)).sqrt();
    let angle_to_orbit = (radius / dist_to_orbit).atan();
    rotation_matrix(-angle_to_orbit) * (-pos) / dist
}

/// Unit tangent to the circle through `pos`: inward radial crossed with +z.
pub fn tangent_heading(pos: &Vector2<f64>) -> Vector2<f64> {
    let inward = Vector3::new(-pos.x, -pos.y, 0.0);
    let tangent = inward.cross(&Vector3::z());
    let tangent = tangent / tangent.norm();
    Vector2::new(tangent.x, tangent.y)
}

/// Unit vector pointing away from the origin.
pub fn outward_heading(pos: &Vector2<f64>) -> Vector2<f64> {
    pos / pos.norm()
}

/// Heading policy, recomputed every step from the current position.
pub fn heading(pos: &Vector2<f64>, radius: f64) -> (HeadingBranch, Vector2<f64>) {
    let branch = HeadingBranch::classify(pos.norm(), radius);
    let dir = match branch {
        HeadingBranch::Outside => approach_heading(pos, radius),
        HeadingBranch::On => tangent_heading(pos),
        HeadingBranch::Inside => outward_heading(pos),
    };
    (branch, dir)
}
