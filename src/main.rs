use nbsim::{Scenario, ScenarioConfig, SimulationDriver, StepObserver, NVec2};
use nbsim::logger::Logger;
use nbsim::{bench_gravity, bench_driver};

use clap::Parser;
use anyhow::Result;
use log::{info, LevelFilter};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "three_body.yaml")]
    file_name: String,

    /// Log positions every this many steps (0 disables)
    #[arg(long, default_value_t = 100)]
    log_every: usize,

    /// Run the micro-benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

/// Progress observer that logs positions every `every` steps
struct ConsoleObserver {
    every: usize,
}

impl StepObserver for ConsoleObserver {
    fn on_step(&mut self, step: usize, positions: &[NVec2]) {
        if self.every != 0 && step % self.every == 0 {
            let coords: Vec<String> = positions
                .iter()
                .map(|p| format!("({:.3e}, {:.3e})", p.x, p.y))
                .collect();
            info!("step {step}: {}", coords.join(" "));
        }
    }
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    Logger::init(LevelFilter::Info)?;

    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_driver();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    let driver = SimulationDriver::new(scenario.system, scenario.parameters, scenario.forces)?;
    let mut observer = ConsoleObserver { every: args.log_every };
    let trajectory = driver.run_observed(&mut observer)?;

    for i in 0..trajectory.num_bodies() {
        if let Some(end) = trajectory.body(i).last() {
            info!("body {i}: final position ({:.6e}, {:.6e}) m", end.x, end.y);
        }
    }

    Ok(())
}
