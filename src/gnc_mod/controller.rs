use nalgebra::Vector2;

use super::guidance::{self, HeadingBranch};
use crate::dynamics::state::State;
use crate::vehicle::ShipParameters;

/// Trait for steering laws.
///
/// Implement this to plug a different heading policy into
/// [`crate::sim::simulate_with`]. Headings are expected to be unit vectors.
pub trait Controller {
    /// Heading for the current state.
    fn heading(&mut self, state: &State, ship: &ShipParameters) -> Vector2<f64>;

    /// Heading used for the very first step, before the loop starts.
    fn initial_heading(&mut self, state: &State, ship: &ShipParameters) -> Vector2<f64> {
        self.heading(state, ship)
    }

    /// Reset controller internal state.
    fn reset(&mut self) {}

    /// Human-readable name for logging/display.
    fn name(&self) -> &str {
        "unnamed"
    }
}

// ---------------------------------------------------------------------------
// Keep-at-range orbit controller
// ---------------------------------------------------------------------------

/// The in-game orbit command: approach the circle along a tangent line,
/// push outward when inside it.
#[derive(Debug, Clone, Default)]
pub struct OrbitController {
    last_branch: Option<HeadingBranch>,
    branch_hits: [u64; 3],
}

impl OrbitController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_branch(&self) -> Option<HeadingBranch> {
        self.last_branch
    }

    /// Number of steps that took a given branch.
    pub fn hits(&self, branch: HeadingBranch) -> u64 {
        self.branch_hits[branch as usize]
    }
}

impl Controller for OrbitController {
    fn heading(&mut self, state: &State, ship: &ShipParameters) -> Vector2<f64> {
        let (branch, dir) = guidance::heading(&state.pos, ship.commanded_radius);
        self.last_branch = Some(branch);
        self.branch_hits[branch as usize] += 1;
        dir
    }

    // The spawn point is always outside the circle, so the approach
    // geometry is used without classifying.
    fn initial_heading(&mut self, state: &State, ship: &ShipParameters) -> Vector2<f64> {
        guidance::approach_heading(&state.pos, ship.commanded_radius)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn name(&self) -> &str {
        "keep-at-range"
    }
}
