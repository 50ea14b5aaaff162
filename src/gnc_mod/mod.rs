pub mod controller;
pub mod guidance;

pub use controller::{Controller, OrbitController};
pub use guidance::{heading, rotation_matrix, HeadingBranch};
