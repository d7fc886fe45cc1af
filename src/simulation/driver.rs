//! The simulation loop
//!
//! `SimulationDriver` owns the system, parameters, and force set for the
//! duration of a run. It validates the initial state up front, then runs
//! exactly `num_steps` iterations of: integrate one step, finiteness-check
//! the new state, record positions, notify the observer.
//!
//! The loop is fully sequential and data-dependent only on the previous
//! step's state, so the same inputs always produce a bit-identical
//! trajectory. Termination is purely step-count driven.

use log::{debug, info};

use crate::error::SimError;
use crate::simulation::forces::AccelSet;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, System};
use crate::simulation::trajectory::TrajectoryLog;

/// Per-step progress hook, for logging/telemetry only
///
/// Receives the step index and the post-update positions (body order).
/// Observers must not block or feed anything back into the simulation;
/// the physics contract is unaffected by whether one is installed.
pub trait StepObserver {
    fn on_step(&mut self, step: usize, positions: &[NVec2]);
}

#[derive(Debug)]
pub struct SimulationDriver {
    system: System,
    parameters: Parameters,
    forces: AccelSet,
}

impl SimulationDriver {
    /// Build a driver, rejecting invalid initial state before any stepping
    pub fn new(
        system: System,
        parameters: Parameters,
        forces: AccelSet,
    ) -> Result<Self, SimError> {
        validate(&system, &parameters)?;
        Ok(Self {
            system,
            parameters,
            forces,
        })
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Run all steps and return the completed trajectory
    pub fn run(self) -> Result<TrajectoryLog, SimError> {
        self.run_observed(&mut NoopObserver)
    }

    /// Run all steps, notifying `observer` after each one
    ///
    /// On error the partial trajectory is discarded: callers get either a
    /// log covering every step or a [`SimError`] naming step and bodies
    pub fn run_observed(mut self, observer: &mut dyn StepObserver) -> Result<TrajectoryLog, SimError> {
        let n = self.system.bodies.len();
        let num_steps = self.parameters.num_steps;
        info!(
            "starting run: {} bodies, {} steps, dt = {:.3e} s",
            n, num_steps, self.parameters.dt
        );

        let mut log = TrajectoryLog::with_capacity(n, num_steps);
        let mut positions = vec![NVec2::zeros(); n];

        for step in 0..num_steps {
            euler_integrator(&mut self.system, &self.forces, &self.parameters).map_err(|s| {
                SimError::Singularity {
                    step,
                    i: s.i,
                    j: s.j,
                    dist: s.dist,
                }
            })?;

            check_finite(&self.system, step)?;

            log.record(&self.system);

            for (p, b) in positions.iter_mut().zip(self.system.bodies.iter()) {
                *p = b.x;
            }
            debug!("step {step}: positions {positions:?}");
            observer.on_step(step, &positions);
        }

        info!("run complete: {} steps recorded", log.steps_recorded());
        Ok(log)
    }
}

struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _step: usize, _positions: &[NVec2]) {}
}

/// Reject bad initial state and parameters before the loop starts
fn validate(system: &System, parameters: &Parameters) -> Result<(), SimError> {
    let invalid = |msg: String| Err(SimError::InvalidConfiguration(msg));

    if !(parameters.dt > 0.0) || !parameters.dt.is_finite() {
        return invalid(format!("dt must be positive and finite, got {}", parameters.dt));
    }
    if !parameters.G.is_finite() {
        return invalid(format!("G must be finite, got {}", parameters.G));
    }
    if !(parameters.eps2 >= 0.0) {
        return invalid(format!("eps2 must be non-negative, got {}", parameters.eps2));
    }
    if !(parameters.min_sep >= 0.0) {
        return invalid(format!("min_sep must be non-negative, got {}", parameters.min_sep));
    }

    for (i, b) in system.bodies.iter().enumerate() {
        if !(b.m > 0.0) || !b.m.is_finite() {
            return invalid(format!("body {i}: mass must be positive and finite, got {}", b.m));
        }
        if !b.x.iter().all(|c| c.is_finite()) {
            return invalid(format!("body {i}: non-finite initial position {:?}", b.x));
        }
        if !b.v.iter().all(|c| c.is_finite()) {
            return invalid(format!("body {i}: non-finite initial velocity {:?}", b.v));
        }
    }

    Ok(())
}

/// Fail fast when an update produced a non-finite component, instead of
/// letting a corrupted state keep stepping. A non-finite acceleration shows
/// up here too, since it flows straight into the velocity update.
fn check_finite(system: &System, step: usize) -> Result<(), SimError> {
    for (body, b) in system.bodies.iter().enumerate() {
        if !b.v.iter().all(|c| c.is_finite()) {
            return Err(SimError::NumericDivergence {
                step,
                body,
                quantity: "velocity",
            });
        }
        if !b.x.iter().all(|c| c.is_finite()) {
            return Err(SimError::NumericDivergence {
                step,
                body,
                quantity: "position",
            });
        }
    }
    Ok(())
}
