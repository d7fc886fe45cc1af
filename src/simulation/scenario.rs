//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at their initial conditions)
//! - active force set (`AccelSet`)
//!
//! The bundle is handed to `SimulationDriver`, which performs the full
//! numeric validation of the initial state before stepping.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// A fully-initialized runtime scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// it contains the parameters, initial system state, and the set of active
/// force laws (accelerations)
#[derive(Debug)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        cfg.validate()?;

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body {
            x: NVec2::new(bc.x[0], bc.x[1]),
            v: NVec2::new(bc.v[0], bc.v[1]),
            m: bc.m,
        }).collect();

        // Initial system state
        let system = System { bodies };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            dt: p_cfg.dt,
            num_steps: p_cfg.num_steps as usize,
            eps2: p_cfg.eps2,
            min_sep: p_cfg.min_sep,
        };

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
            min_sep: parameters.min_sep,
        });

        Ok(Self {
            parameters,
            system,
            forces,
        })
    }
}
