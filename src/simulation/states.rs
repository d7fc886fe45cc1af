//! Core state types for the N-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` holds mass and the current position/velocity as `NVec2`
//! - `System` holds the ordered list of bodies
//!
//! Body order is stable for the whole run: pairwise interaction and
//! trajectory output both index bodies by their position in `System::bodies`.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position, meters
    pub v: NVec2, // velocity, meters/second
    pub m: f64, // mass, kilograms
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies
}

impl System {
    /// Total linear momentum `sum(m_k * v_k)` over all bodies
    /// Gravity is the only force, so this stays constant up to
    /// integration error, which makes it a useful diagnostic
    pub fn momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |p, b| p + b.m * b.v)
    }
}
