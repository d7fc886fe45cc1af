//! Wall-clock micro-benchmarks for the force kernel and the full loop
//!
//! Reached via the binary's `--bench` flag. Bodies are placed with
//! deterministic trig expressions so no RNG is needed and runs are
//! comparable across machines.

use std::time::Instant;

use crate::simulation::driver::SimulationDriver;
use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

fn bench_params(num_steps: usize) -> Parameters {
    Parameters {
        G: 0.1,
        dt: 0.001,
        num_steps,
        eps2: 1e-4,
        min_sep: 0.0,
    }
}

fn bench_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);
    for i in 0..n {
        let i_f = i as f64;
        bodies.push(Body {
            x: NVec2::new((i_f * 0.37).sin() * 5.0, (i_f * 0.13).cos() * 5.0),
            v: NVec2::zeros(),
            m: 1.0,
        });
    }
    System { bodies }
}

/// Time one direct-sum force evaluation at a range of system sizes
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let params = bench_params(0);
        let sys = bench_system(n);
        let mut out = vec![NVec2::zeros(); n];

        let gravity = NewtonianGravity {
            G: params.G,
            eps2: params.eps2,
            min_sep: params.min_sep,
        };

        // Warm up
        let _ = gravity.acceleration(&sys, &mut out);

        let t0 = Instant::now();
        let _ = gravity.acceleration(&sys, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {dt_direct:8.6} s");
    }
}

/// Time the full driver loop (integration + recording) in steps/second
pub fn bench_driver() {
    let ns = [8, 64, 256, 1024];
    let num_steps = 1000;

    for n in ns {
        let params = bench_params(num_steps);
        let sys = bench_system(n);
        let forces = AccelSet::new().with(NewtonianGravity {
            G: params.G,
            eps2: params.eps2,
            min_sep: params.min_sep,
        });

        let driver = SimulationDriver::new(sys, params, forces)
            .expect("bench scenario should validate");

        let t0 = Instant::now();
        let log = driver.run().expect("bench scenario should not diverge");
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, {} steps in {elapsed:8.6} s ({:.0} steps/s)",
            log.steps_recorded(),
            num_steps as f64 / elapsed
        );
    }
}
