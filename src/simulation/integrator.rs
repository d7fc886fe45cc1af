//! Fixed-step time integrator for the N-body system
//!
//! Provides a semi-implicit (symplectic) Euler step driven by
//! `AccelSet` and `Parameters`. One force evaluation per step.

use super::states::{System, NVec2};
use super::forces::{AccelSet, Singularity};
use super::params::Parameters;

/// Advance the system by one step using semi-implicit Euler
///
/// Update order per body:
///   v_n+1 = v_n + dt * a_n
///   x_n+1 = x_n + dt * v_n+1
///
/// The position update uses the *updated* velocity. Plain explicit Euler
/// (old velocity) has noticeably worse long-run energy behavior, so the
/// ordering here is load-bearing, not a style choice.
pub fn euler_integrator(
    sys: &mut System,
    forces: &AccelSet,
    params: &Parameters,
) -> Result<(), Singularity> {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return Ok(());
    }

    let dt = params.dt; // time step dt

    // Allocate a vector of accelerations, one per body, initialized to zero
    // acc[i] will hold a_n for body i at the current positions
    let mut acc = vec![NVec2::zeros(); n];

    // Ask the force set to accumulate accelerations into acc,
    // based on the current system state sys
    forces.accumulate_accels(&*sys, &mut acc)?;

    // Kick then drift, per body, with the fresh velocity feeding the
    // position update
    for (b, a) in sys.bodies.iter_mut().zip(acc.iter()) {
        b.v += dt * *a;
        b.x += dt * b.v;
    }

    Ok(())
}
