pub mod ship;

pub use ship::{presets, DerivedConstants, ShipBuilder, ShipParameters};
