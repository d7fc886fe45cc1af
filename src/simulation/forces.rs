//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait and direct pairwise Newtonian gravity.
//! Force evaluation never mutates the system: accelerations are a pure
//! function of the current positions and masses.

use crate::simulation::states::{System, NVec2};

/// Raised by a force term when a pair of bodies falls at or below the
/// minimum allowed separation. The driver attaches the step index and
/// converts this into a [`crate::error::SimError::Singularity`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Singularity {
    pub i: usize, // first body of the offending pair
    pub j: usize, // second body of the offending pair
    pub dist: f64, // their raw (unsoftened) separation
}

/// Collection of acceleration terms (gravity today, drag etc. later)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
#[derive(Debug)]
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, sys: &System, out: &mut [NVec2]) -> Result<(), Singularity> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(sys, out)?;
        }
        Ok(())
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration: std::fmt::Debug {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]) -> Result<(), Singularity>;
}

/// Direct-sum Newtonian gravity with softening
///
/// The singularity policy is explicit rather than letting the division
/// blow up into NaN:
/// - a pair at or below `min_sep` raw separation fails with [`Singularity`]
/// - a coincident pair with zero softening also fails, since the raw
///   division would be singular
/// - otherwise `eps2` is added to the squared separation, so close
///   encounters above the floor stay finite and bounded
#[derive(Debug)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
    pub min_sep: f64, // minimum allowed raw separation
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, sys: &System, out: &mut [NVec2]) -> Result<(), Singularity> {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return Ok(());
        }

        let min_sep2 = self.min_sep * self.min_sep;

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            // bi: body i (left side of the pair)
            let bi = &sys.bodies[i];
            let xi = bi.x;      // position of body i
            let mi = bi.m;      // mass of body i

            for j in (i + 1)..n {
                // bj: body j (right side of the pair)
                let bj = &sys.bodies[j];
                let xj = bj.x;  // position of body j
                let mj = bj.m;  // mass of body j

                // r is the displacement vector from i to j
                // If r points from i to j, then i feels a pull along +r,
                // j feels a pull along -r
                let r = xj - xi;

                // Squared separation distance |r|^2 (no softening yet)
                let r2 = r.norm_squared();

                // Singularity floor on the raw separation. A coincident
                // pair with eps2 == 0 would divide by zero, so it is
                // rejected even when min_sep is disabled (zero)
                if (self.min_sep > 0.0 && r2 <= min_sep2) || (r2 == 0.0 && self.eps2 == 0.0) {
                    return Err(Singularity {
                        i,
                        j,
                        dist: r2.sqrt(),
                    });
                }

                // Total softened squared distance:
                // d2 = |r|^2 + eps^2
                let d2 = r2 + self.eps2;

                // 1 / |r_soft|
                let inv_r = d2.sqrt().recip();

                // 1 / |r_soft|^3
                // (this is what appears in the Newtonian acceleration formula:
                //   a = r / |r|^3
                //   => a = r * (1 / |r|^3) )
                let inv_r3 = inv_r * inv_r * inv_r;

                // Combine G and the distance factor:
                // coef = G / |r_soft|^3
                let coef = self.G * inv_r3;

                // -------------------------
                // Apply Newton's law:
                // a_i +=  G * m_j * r / |r_soft|^3
                // a_j += -G * m_i * r / |r_soft|^3
                // (equal and opposite)
                // -------------------------

                // Acceleration on body i due to body j:
                // direction: along +r (toward j)
                // magnitude scaled by mass of j
                out[i] += coef * mj * r;

                // Acceleration on body j due to body i:
                // direction: along -r (toward i)
                // magnitude scaled by mass of i
                out[j] -= coef * mi * r;
            }
        }
        Ok(())
    }
}
