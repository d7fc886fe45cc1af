#![allow(non_snake_case)] // G is G

pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;
pub mod logger;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity, Singularity};
pub use simulation::integrator::euler_integrator;
pub use simulation::driver::{SimulationDriver, StepObserver};
pub use simulation::trajectory::TrajectoryLog;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig};

pub use error::SimError;

pub use benchmark::benchmark::{bench_gravity, bench_driver};
