use serde::{Deserialize, Serialize};

use crate::error::{require_positive, SimError};

// ---------------------------------------------------------------------------
// Ship parameters (input to a single orbit run)
// ---------------------------------------------------------------------------

/// The four ship attributes plus throttle that drive one simulation.
///
/// Units are whatever the caller supplies, as long as they are consistent.
/// The presets use m/s, megagrams and meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipParameters {
    pub max_speed: f64,         // m/s, with modules/implants applied
    pub mass: f64,              // Mg (millions of kg)
    pub agility: f64,           // inertia modifier, dimensionless
    pub commanded_radius: f64,  // m, the orbit range the ship is told to keep
    pub throttle: f64,          // fraction of max force, (0, 1]
}

impl ShipParameters {
    pub fn new(max_speed: f64, mass: f64, agility: f64, commanded_radius: f64) -> Self {
        Self { max_speed, mass, agility, commanded_radius, throttle: 1.0 }
    }

    pub fn with_throttle(mut self, throttle: f64) -> Self {
        self.throttle = throttle;
        self
    }

    pub fn with_radius(mut self, commanded_radius: f64) -> Self {
        self.commanded_radius = commanded_radius;
        self
    }

    /// Check every field before the integrator sees it.
    pub fn validate(&self) -> Result<(), SimError> {
        require_positive("max_speed", self.max_speed)?;
        require_positive("mass", self.mass)?;
        require_positive("agility", self.agility)?;
        require_positive("commanded_radius", self.commanded_radius)?;
        if !(self.throttle > 0.0 && self.throttle <= 1.0) {
            return Err(SimError::InvalidParameter { name: "throttle", value: self.throttle });
        }
        Ok(())
    }

    pub fn derived(&self) -> DerivedConstants {
        DerivedConstants::from_ship(self)
    }
}

// ---------------------------------------------------------------------------
// Derived constants (computed once per run)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedConstants {
    pub inertia: f64,    // 1 / agility
    pub max_force: f64,  // max_speed * inertia * throttle
    pub max_speed: f64,  // throttle-adjusted top speed, max_force * agility
}

impl DerivedConstants {
    pub fn from_ship(ship: &ShipParameters) -> Self {
        let inertia = 1.0 / ship.agility;
        let max_force = ship.max_speed * inertia * ship.throttle;
        Self { inertia, max_force, max_speed: max_force * ship.agility }
    }
}

// ---------------------------------------------------------------------------
// Ship builder
// ---------------------------------------------------------------------------

pub struct ShipBuilder {
    max_speed: f64,
    mass: f64,
    agility: f64,
    commanded_radius: f64,
    throttle: f64,
}

impl ShipBuilder {
    pub fn new() -> Self {
        let base = presets::harpy_ab();
        Self {
            max_speed: base.max_speed,
            mass: base.mass,
            agility: base.agility,
            commanded_radius: base.commanded_radius,
            throttle: base.throttle,
        }
    }

    pub fn max_speed(mut self, v: f64) -> Self { self.max_speed = v; self }
    pub fn mass(mut self, v: f64) -> Self { self.mass = v; self }
    pub fn agility(mut self, v: f64) -> Self { self.agility = v; self }
    pub fn commanded_radius(mut self, v: f64) -> Self { self.commanded_radius = v; self }
    pub fn throttle(mut self, v: f64) -> Self { self.throttle = v; self }

    /// Build and validate.
    pub fn build(self) -> Result<ShipParameters, SimError> {
        let ship = ShipParameters {
            max_speed: self.max_speed,
            mass: self.mass,
            agility: self.agility,
            commanded_radius: self.commanded_radius,
            throttle: self.throttle,
        };
        ship.validate()?;
        Ok(ship)
    }
}

impl Default for ShipBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Preset ships
// ---------------------------------------------------------------------------

pub mod presets {
    use super::ShipParameters;

    /// Names accepted by [`by_name`].
    pub const NAMES: &[&str] = &["harpy_ab"];

    /// Harpy assault frigate with an afterburner running, orbiting at 1500 m.
    pub fn harpy_ab() -> ShipParameters {
        ShipParameters::new(835.0, 1.655, 2.452, 1500.0)
    }

    pub fn by_name(name: &str) -> Option<ShipParameters> {
        match name.to_ascii_lowercase().as_str() {
            "harpy_ab" | "harpy-ab" => Some(harpy_ab()),
            _ => None,
        }
    }
}
