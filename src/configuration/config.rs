//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 6.67430e-11          # gravitational constant
//!   dt: 1.0e5               # fixed step size, seconds
//!   num_steps: 1000         # iteration count
//!   eps2: 0.0               # softening epsilon^2 (optional, default 0)
//!   min_sep: 0.0            # minimum pair separation (optional, default 0)
//!
//! bodies:
//!   - x: [ 1.496e11, 0.0 ]
//!     v: [ 0.0, 29780.0 ]
//!     m: 5.972e24
//!   - x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.989e30
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation; full numeric validation of the initial state happens when
//! the driver is constructed.

use serde::Deserialize;

use crate::error::SimError;

/// Global numerical and physical parameters for a scenario
///
/// `num_steps` is signed here so a negative count in a scenario file is
/// rejected with a clear error instead of wrapping at the cast
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub G: f64,       // gravitational constant
    pub dt: f64,      // time step size, seconds
    pub num_steps: i64, // iteration count
    #[serde(default)]
    pub eps2: f64,    // softening - prevent singular forces at very small separations
    #[serde(default)]
    pub min_sep: f64, // hard minimum pair separation; at or below, the run aborts
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector, meters
    pub v: Vec<f64>, // Initial velocity vector, meters/second
    pub m: f64,      // Mass of the body, kilograms
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state of the system
}

impl ScenarioConfig {
    /// Structural checks that must hold before the config can be mapped
    /// into runtime types at all
    pub fn validate(&self) -> Result<(), SimError> {
        if self.parameters.num_steps < 0 {
            return Err(SimError::InvalidConfiguration(format!(
                "num_steps must be non-negative, got {}",
                self.parameters.num_steps
            )));
        }
        for (i, b) in self.bodies.iter().enumerate() {
            if b.x.len() != 2 || b.v.len() != 2 {
                return Err(SimError::InvalidConfiguration(format!(
                    "body {i}: position and velocity must each have 2 components"
                )));
            }
        }
        Ok(())
    }
}
