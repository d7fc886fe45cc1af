//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size and step count,
//! - softening and gravitational constant (`eps2`, `G`),
//! - minimum-separation floor (`min_sep`)
//!
//! Immutable for the duration of a run.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub dt: f64, // step size, seconds
    pub num_steps: usize, // iteration count
    pub eps2: f64, // softening - prevent singular forces at very small separations
    pub min_sep: f64, // hard floor on pair separation; at or below this the run aborts
}
